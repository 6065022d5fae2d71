use edupath_matching::MatchingError;
use edupath_payment::PaymentError;
use std::borrow::Cow;

/// Startup failures, wrapping the slice that refused to initialize.
#[edupath_derive::edupath_error]
pub enum PlatformError {
    #[error("Payment slice failed{}: {source}", format_context(.context))]
    Payment { source: PaymentError, context: Option<Cow<'static, str>> },

    #[error("Matching slice failed{}: {source}", format_context(.context))]
    Matching { source: MatchingError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal platform error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
