use crate::constants::{
    BRAND, CHECKOUT_PREFIX, CONTACT_PHONE, MESSAGING_BASE_URL, REPORT_FEE_KES,
    SIMULATED_LATENCY_MS,
};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub contact: ContactConfig,
    pub payment: PaymentConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into UI contexts and slices.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Support contact shown in the chrome and used for the messaging deep link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub phone: String,
    pub messaging_url: String,
}

impl ContactConfig {
    /// Deep link into the messaging service for the configured number.
    #[must_use]
    pub fn support_link(&self) -> String {
        format!("{}/{}", self.messaging_url.trim_end_matches('/'), self.phone)
    }
}

/// Knobs of the simulated mobile-money gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    pub latency_ms: u64,
    pub checkout_prefix: String,
    pub report_fee: u32,
}

impl PaymentConfig {
    #[must_use]
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Desktop window and device affordances.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub haptics: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directives, e.g. `info` or `info,edupath_payment=debug`.
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for ContactConfig {
    fn default() -> Self {
        Self { phone: CONTACT_PHONE.to_owned(), messaging_url: MESSAGING_BASE_URL.to_owned() }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            latency_ms: SIMULATED_LATENCY_MS,
            checkout_prefix: CHECKOUT_PREFIX.to_owned(),
            report_fee: REPORT_FEE_KES,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: BRAND.to_owned(), width: 1200.0, height: 800.0, haptics: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}
