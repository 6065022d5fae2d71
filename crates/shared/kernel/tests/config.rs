use edupath_domain::config::AppConfig;
use edupath_kernel::config::{ConfigError, load_config};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_toml_file_over_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("edupath.toml");
    fs::write(
        &path,
        r#"
[contact]
phone = "254799000111"

[payment]
latency_ms = 20
"#,
    )?;

    let cfg: AppConfig = load_config(Some(&path))?;
    assert_eq!(cfg.contact.phone, "254799000111");
    assert_eq!(cfg.contact.messaging_url, "https://wa.me");
    assert_eq!(cfg.payment.latency_ms, 20);
    assert_eq!(cfg.payment.checkout_prefix, "ws_CO_");
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");

    let err = load_config::<AppConfig>(Some(&missing)).expect_err("missing file must fail");
    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn malformed_values_fail_deserialization() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[payment]\nlatency_ms = \"soon\"\n")?;

    let err = load_config::<AppConfig>(Some(&path)).expect_err("string latency must fail");
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}

#[test]
fn loads_json_file_with_enabled_format() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("edupath.json");
    fs::write(&path, r#"{ "payment": { "report_fee": 300 }, "window": { "haptics": false } }"#)?;

    let cfg: AppConfig = load_config(Some(&path))?;
    assert_eq!(cfg.payment.report_fee, 300);
    assert!(!cfg.window.haptics);
    assert_eq!(cfg.payment.latency_ms, 1000);
    Ok(())
}
