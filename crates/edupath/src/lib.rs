//! Facade crate for EDU PATH features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `edupath` with the desired feature flags (`client` for the Dioxus UI).
//! - Call [`init`] once at startup and hand the resulting [`Platform`] to the UI or tools.

mod error;

#[cfg(feature = "client")]
pub mod client;

pub use crate::error::{PlatformError, PlatformErrorExt};
pub use edupath_domain as domain;
pub use edupath_kernel as kernel;

use edupath_domain::config::AppConfig;
use edupath_domain::registry::FeatureSlice;
use edupath_kernel::haptics::Haptics;
use edupath_matching::Matching;
use edupath_payment::Payments;

/// Feature registry for runtime introspection.
pub mod features {
    pub use edupath_matching as matching;
    pub use edupath_navigation as navigation;
    pub use edupath_payment as payment;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "navigation",
        "payment",
        "matching",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Everything the UI and the tools share after startup.
#[derive(Debug, Clone)]
pub struct Platform {
    pub config: AppConfig,
    pub haptics: Haptics,
    pub payments: Payments,
    pub matching: Matching,
}

impl Platform {
    /// Initialized slices, in startup order.
    #[must_use]
    pub fn slices(&self) -> [&dyn FeatureSlice; 2] {
        [&self.payments, &self.matching]
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns the first slice that fails to initialize.
pub fn init(config: AppConfig, haptics: Haptics) -> Result<Platform, PlatformError> {
    let payments = features::payment::init(&config.payment, haptics.clone()).context("payment")?;
    let matching = features::matching::init().context("matching")?;

    let platform = Platform { config, haptics, payments, matching };
    for slice in platform.slices() {
        tracing::debug!(slice = slice.name(), "Feature slice ready");
    }
    tracing::info!(haptics = platform.haptics.is_enabled(), "Platform initialized");

    Ok(platform)
}
