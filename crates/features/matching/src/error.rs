use std::borrow::Cow;

/// Error types specific to course matching.
#[edupath_derive::edupath_error]
pub enum MatchingError {
    #[error("Invalid grade{}: {message}", format_context(.context))]
    InvalidGrade { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown subject{}: {message}", format_context(.context))]
    UnknownSubject { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Fewer than seven graded subjects.
    #[error("Incomplete grade sheet{}: {message}", format_context(.context))]
    IncompleteSheet { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal matching error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
