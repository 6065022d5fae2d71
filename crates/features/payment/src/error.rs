use std::borrow::Cow;

/// Error types specific to the payment feature.
#[edupath_derive::edupath_error]
pub enum PaymentError {
    /// The number is not a Kenyan mobile number; raised before any simulated latency.
    #[error("Invalid Safaricom M-Pesa number{}: {message}", format_context(.context))]
    InvalidPhone { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A checkout session step was called out of order.
    #[error("Invalid payment transition{}: {message}", format_context(.context))]
    InvalidTransition { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown checkout request{}: {message}", format_context(.context))]
    UnknownCheckout { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal payment error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
