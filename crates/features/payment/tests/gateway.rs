use edupath_domain::config::PaymentConfig;
use edupath_domain::constants::CHECKOUT_PREFIX;
use edupath_kernel::haptics::Haptics;
use edupath_payment::phone::PHONE_PATTERN;
use edupath_payment::{CheckoutGateway, OTP_RANGE, PaymentError};
use proptest::prelude::*;
use regex::Regex;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::Instant;

const LATENCY: Duration = Duration::from_millis(1000);

fn gateway() -> CheckoutGateway {
    CheckoutGateway::new(&PaymentConfig::default(), Haptics::disabled())
}

#[tokio::test(start_paused = true)]
async fn valid_numbers_resolve_after_the_simulated_latency() {
    let gateway = gateway();

    for phone in ["0712345678", "254712345678", "+254112345678", "0799999999"] {
        let started = Instant::now();
        let request = gateway.initiate_stk_push(phone, 250, "Achieng").unwrap().await;
        let elapsed = started.elapsed();

        assert!(request.checkout_request_id.starts_with(CHECKOUT_PREFIX), "{phone}");
        assert!(elapsed >= LATENCY, "{phone} resolved after {elapsed:?}");
        assert!(elapsed < LATENCY + Duration::from_millis(50), "{phone} resolved after {elapsed:?}");
    }
}

#[tokio::test(start_paused = true)]
async fn invalid_numbers_fail_before_any_delay() {
    let gateway = gateway();
    let started = Instant::now();

    let err = gateway.initiate_stk_push("12345", 250, "Achieng").unwrap_err();

    assert!(matches!(err, PaymentError::InvalidPhone { .. }));
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn latency_only_starts_when_awaited() {
    let gateway = gateway();
    let pending = gateway.initiate_stk_push("0712345678", 250, "Achieng").unwrap();

    tokio::time::advance(Duration::from_secs(5)).await;
    let started = Instant::now();
    pending.await;

    assert!(started.elapsed() >= LATENCY);
}

#[tokio::test(start_paused = true)]
async fn identical_requests_yield_distinct_checkout_ids() {
    let gateway = gateway();

    for _ in 0..100 {
        let first = gateway.initiate_stk_push("0712345678", 250, "Achieng").unwrap().await;
        let second = gateway.initiate_stk_push("0712345678", 250, "Achieng").unwrap().await;
        assert_ne!(first, second);
    }
}

#[tokio::test(start_paused = true)]
async fn checkout_ids_have_the_gateway_shape() {
    let request = gateway().initiate_stk_push("0712345678", 250, "Achieng").unwrap().await;
    let token = request.checkout_request_id.strip_prefix(CHECKOUT_PREFIX).unwrap();

    assert_eq!(token.len(), 10);
    assert!(token.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[tokio::test(start_paused = true)]
async fn configured_latency_and_prefix_are_honoured() {
    let config = PaymentConfig {
        latency_ms: 250,
        checkout_prefix: "test_".to_owned(),
        ..PaymentConfig::default()
    };
    let gateway = CheckoutGateway::new(&config, Haptics::disabled());
    let started = Instant::now();

    let request = gateway.initiate_stk_push("0112345678", 1, "").unwrap().await;

    assert!(request.checkout_request_id.starts_with("test_"));
    assert!(started.elapsed() >= Duration::from_millis(250));
    assert!(started.elapsed() < LATENCY);
}

#[test]
fn otp_stays_within_four_digits() {
    let gateway = gateway();
    let mut seen = HashSet::new();

    for _ in 0..1000 {
        let otp = gateway.generate_transaction_otp();
        assert_eq!(otp.len(), 4, "{otp}");
        let value: u16 = otp.parse().unwrap();
        assert!(OTP_RANGE.contains(&value), "{value}");
        seen.insert(value);
    }

    assert!(seen.len() > 1, "codes should vary");
}

proptest! {
    #[test]
    fn non_matching_strings_are_rejected(input in "[0-9+ -]{0,16}") {
        let pattern = Regex::new(PHONE_PATTERN).unwrap();
        prop_assume!(!pattern.is_match(&input));

        let err = gateway().initiate_stk_push(&input, 250, "Achieng").unwrap_err();
        prop_assert!(matches!(err, PaymentError::InvalidPhone { .. }), "{input}");
    }

    #[test]
    fn matching_numbers_normalize_to_international_form(
        prefix in prop_oneof![Just(""), Just("0"), Just("254"), Just("+254")],
        lead in prop_oneof![Just('7'), Just('1')],
        rest in "[0-9]{8}",
    ) {
        let input = format!("{prefix}{lead}{rest}");

        let pending = gateway().initiate_stk_push(&input, 250, "Achieng").unwrap();

        prop_assert_eq!(pending.msisdn().as_str(), format!("254{lead}{rest}"));
    }
}
