use edupath_derive::edupath_error;

#[edupath_error]
pub enum GatewayError {
    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected {
        message: std::borrow::Cow<'static, str>,
        context: Option<std::borrow::Cow<'static, str>>,
    },
}

fn main() {
    let err: Result<(), GatewayError> =
        Err(GatewayError::Rejected { message: "timeout".into(), context: None });
    let err = err.context("stk push").expect_err("rejection expected");
    assert_eq!(err.to_string(), "Rejected (stk push): timeout");
}
