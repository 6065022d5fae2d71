use edupath_payment::phone::validate;
use edupath_payment::{CheckoutRequest, CheckoutSession, PaymentError, PaymentLedger, PaymentStatus};

fn request() -> CheckoutRequest {
    CheckoutRequest { checkout_request_id: "ws_CO_TEST000001".to_owned() }
}

fn at_verification(pin: &str) -> CheckoutSession {
    let mut session = CheckoutSession::new();
    session.begin().unwrap();
    session.sent_to_phone(request(), "4821").unwrap();
    session.enter_pin(pin).unwrap();
    session.verify().unwrap();
    session
}

#[test]
fn matching_pin_walks_every_status() {
    let mut session = CheckoutSession::new();
    assert_eq!(session.status(), PaymentStatus::Idle);

    session.begin().unwrap();
    assert_eq!(session.status(), PaymentStatus::Initiated);

    session.sent_to_phone(request(), "4821").unwrap();
    assert_eq!(session.status(), PaymentStatus::SentToPhone);
    assert_eq!(session.otp(), Some("4821"));
    assert_eq!(session.checkout(), Some(&request()));

    session.enter_pin(" 4821 ").unwrap();
    assert_eq!(session.status(), PaymentStatus::PinEntered);

    session.verify().unwrap();
    assert_eq!(session.status(), PaymentStatus::Verifying);

    assert_eq!(session.complete().unwrap(), PaymentStatus::Success);
    assert!(session.status().is_terminal());
}

#[test]
fn wrong_pin_fails_with_a_reason() {
    let mut session = at_verification("0000");

    assert_eq!(session.complete().unwrap(), PaymentStatus::Failed);
    assert!(session.failure().is_some());
}

#[test]
fn out_of_order_steps_are_rejected() {
    let mut session = CheckoutSession::new();

    let err = session.enter_pin("1234").unwrap_err();
    assert!(matches!(err, PaymentError::InvalidTransition { .. }));
    assert_eq!(err.to_string(), "Invalid payment transition: IDLE -> PIN_ENTERED");

    session.begin().unwrap();
    assert!(session.begin().is_err());
    assert!(session.verify().is_err());
    assert_eq!(session.status(), PaymentStatus::Initiated);
}

#[test]
fn settled_sessions_only_leave_through_reset() {
    let mut session = at_verification("4821");
    session.complete().unwrap();

    assert!(session.fail("late failure").is_err());
    assert!(session.begin().is_err());

    session.reset();
    assert_eq!(session, CheckoutSession::new());
    session.begin().unwrap();
}

#[test]
fn pending_sessions_can_fail_outright() {
    let mut session = CheckoutSession::new();
    assert!(session.fail("nothing to fail").is_err());

    session.begin().unwrap();
    session.fail("gateway unreachable").unwrap();

    assert_eq!(session.status(), PaymentStatus::Failed);
    assert_eq!(session.failure(), Some("gateway unreachable"));
}

fn ledger_with_request() -> PaymentLedger {
    let ledger = PaymentLedger::new();
    ledger.record(&request(), validate("0712345678").unwrap(), 250, "Otieno");
    ledger
}

#[test]
fn settling_a_matching_pin_marks_the_ledger_paid() {
    let ledger = ledger_with_request();
    let mut session = at_verification("4821");

    let record = session.settle(&ledger).unwrap().expect("successful payment yields a record");

    assert_eq!(record.status, PaymentStatus::Success);
    assert_eq!(record.checkout_request_id, "ws_CO_TEST000001");
    assert_eq!(session.status(), PaymentStatus::Success);
    assert_eq!(ledger.find("ws_CO_TEST000001").unwrap().status, PaymentStatus::Success);
    assert_eq!(ledger.summary().collected, 250);
}

#[test]
fn settling_a_wrong_pin_marks_the_ledger_failed() {
    let ledger = ledger_with_request();
    let mut session = at_verification("0000");

    assert_eq!(session.settle(&ledger).unwrap(), None);

    assert_eq!(session.status(), PaymentStatus::Failed);
    assert!(session.failure().is_some());
    assert_eq!(ledger.find("ws_CO_TEST000001").unwrap().status, PaymentStatus::Failed);
    assert_eq!(ledger.summary().collected, 0);
}

#[test]
fn settling_an_unrecorded_checkout_is_an_error() {
    let ledger = PaymentLedger::new();
    let mut session = at_verification("4821");

    let err = session.settle(&ledger).unwrap_err();

    assert!(matches!(err, PaymentError::UnknownCheckout { .. }));
    assert!(ledger.is_empty());
}

#[test]
fn settling_before_verification_is_rejected() {
    let ledger = ledger_with_request();
    let mut session = CheckoutSession::new();
    session.begin().unwrap();

    let err = session.settle(&ledger).unwrap_err();

    assert!(matches!(err, PaymentError::InvalidTransition { .. }));
    assert_eq!(ledger.find("ws_CO_TEST000001").unwrap().status, PaymentStatus::SentToPhone);
}
