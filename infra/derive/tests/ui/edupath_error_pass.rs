use edupath_derive::edupath_error;
use std::borrow::Cow;

#[edupath_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("disk")).context("reading grades")
}

fn main() {
    let err = read().expect_err("io error expected");
    assert_eq!(err.to_string(), "IO error (reading grades): disk");

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");

    let late: Result<(), DemoError> = Err(DemoError::from(String::from("late")));
    let err = late.context("resolving").expect_err("internal error expected");
    assert_eq!(err.to_string(), "Internal error (resolving): late");
}
