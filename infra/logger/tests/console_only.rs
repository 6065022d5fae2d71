use edupath_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_file_output() {
    let logger = Logger::builder()
        .name("integration-console-only")
        .console(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(!logger.has_file_output(), "console-only logger should not own a file writer");
}
