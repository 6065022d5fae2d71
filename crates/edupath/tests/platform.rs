use edupath::domain::config::AppConfig;
use edupath::kernel::haptics::{Haptics, PulsePattern, RecordingHaptics};
use edupath::{PlatformError, features, init};

#[test]
fn default_config_boots_every_slice() {
    let platform = init(AppConfig::default(), Haptics::disabled()).unwrap();

    let names: Vec<_> = platform.slices().iter().map(|slice| slice.name()).collect();
    assert_eq!(names, ["Payments", "Matching"]);
    assert_eq!(platform.payments.report_fee, 250);
    assert!(!platform.matching.catalog.courses().is_empty());
}

#[test]
fn slices_share_the_selected_haptics() {
    let device = RecordingHaptics::new();
    let platform = init(AppConfig::default(), Haptics::select(device.clone())).unwrap();

    assert!(platform.haptics.is_enabled());
    platform.payments.gateway.trigger_vibration();
    assert_eq!(device.pulses(), [PulsePattern::MILESTONE]);
}

#[test]
fn failing_slice_is_named_in_the_error() {
    let mut config = AppConfig::default();
    config.payment.checkout_prefix = String::new();

    let err = init(config, Haptics::disabled()).unwrap_err();
    assert!(matches!(err, PlatformError::Payment { .. }));
    assert_eq!(
        err.to_string(),
        "Payment slice failed (payment): Internal payment error: Checkout prefix cannot be empty"
    );
}

#[test]
fn feature_registry_lists_the_slices() {
    assert!(features::is_enabled("payment"));
    assert!(features::is_enabled("matching"));
    assert!(!features::is_enabled("licensing"));
}
