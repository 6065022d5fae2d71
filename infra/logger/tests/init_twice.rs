use edupath_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_init_reports_subscriber_error() {
    let _logger = Logger::builder()
        .name("integration-init-twice")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("integration-init-twice-again")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "expected subscriber error, got {err}");
}

#[test]
fn disabling_every_output_is_rejected() {
    let err = Logger::builder()
        .name("integration-no-output")
        .console(false)
        .init()
        .expect_err("a logger without outputs is useless");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
