//! Kenyan mobile number validation.
//!
//! Accepted shapes: an optional `254`, `+254` or `0` prefix, then `7` or `1`, then eight
//! digits. Anything else is rejected; no trimming or reformatting is attempted.

use crate::error::PaymentError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub const PHONE_PATTERN: &str = r"^(?:254|\+254|0)?(7|1)[0-9]{8}$";

const COUNTRY_CODE: &str = "254";
const SUBSCRIBER_DIGITS: usize = 9;

static PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(PHONE_PATTERN));

fn pattern() -> Result<&'static Regex, PaymentError> {
    PATTERN.as_ref().map_err(|e| PaymentError::Internal {
        message: e.to_string().into(),
        context: Some("Phone pattern failed to compile".into()),
    })
}

/// A validated subscriber number in international form, `254XXXXXXXXX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Msisdn(String);

impl Msisdn {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number with the middle digits hidden, e.g. `2547****5678`.
    #[must_use]
    pub fn masked(&self) -> String {
        let (head, rest) = self.0.split_at(4);
        let tail = &rest[rest.len() - 4..];
        format!("{head}****{tail}")
    }
}

impl fmt::Display for Msisdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Msisdn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Msisdn {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)
    }
}

impl From<Msisdn> for String {
    fn from(value: Msisdn) -> Self {
        value.0
    }
}

/// Validates a Kenyan mobile number and normalizes it to `254XXXXXXXXX`.
///
/// # Errors
/// * [`PaymentError::InvalidPhone`] when `input` does not match [`PHONE_PATTERN`].
pub fn validate(input: &str) -> Result<Msisdn, PaymentError> {
    if !pattern()?.is_match(input) {
        return Err(PaymentError::InvalidPhone {
            message: format!("'{input}' is not a Kenyan mobile number").into(),
            context: None,
        });
    }

    // The pattern is anchored and ASCII only, so the subscriber part is the last nine bytes.
    let subscriber = &input[input.len() - SUBSCRIBER_DIGITS..];
    Ok(Msisdn(format!("{COUNTRY_CODE}{subscriber}")))
}

#[must_use]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}
