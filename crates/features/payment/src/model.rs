use crate::phone::Msisdn;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Lifecycle of a push payment, as a gateway would report it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Idle,
    Initiated,
    SentToPhone,
    PinEntered,
    Verifying,
    Success,
    Failed,
}

impl PaymentStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }

    /// Whether a request is in flight: neither idle nor settled.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        !matches!(self, Self::Idle) && !self.is_terminal()
    }
}

/// Correlation handle returned by a successful push initiation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub checkout_request_id: String,
}

/// One payment attempt as kept by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub checkout_request_id: String,
    pub phone: Msisdn,
    /// KES.
    pub amount: u32,
    pub student_name: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_match_gateway_wire_names() {
        let labels: Vec<&'static str> = PaymentStatus::iter().map(Into::into).collect();
        assert_eq!(
            labels,
            ["IDLE", "INITIATED", "SENT_TO_PHONE", "PIN_ENTERED", "VERIFYING", "SUCCESS", "FAILED"]
        );
        assert_eq!(PaymentStatus::from_str("PIN_ENTERED").unwrap(), PaymentStatus::PinEntered);
        assert_eq!(serde_json::to_string(&PaymentStatus::SentToPhone).unwrap(), "\"SENT_TO_PHONE\"");
    }

    #[test]
    fn only_success_and_failure_settle() {
        let terminal: Vec<_> = PaymentStatus::iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, [PaymentStatus::Success, PaymentStatus::Failed]);
        assert!(!PaymentStatus::Idle.is_pending());
        assert!(PaymentStatus::Verifying.is_pending());
    }

    #[test]
    fn checkout_request_uses_gateway_field_name() {
        let request = CheckoutRequest { checkout_request_id: "ws_CO_ABC".to_owned() };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"checkoutRequestId":"ws_CO_ABC"}"#
        );
    }
}
