//! Simulated M-Pesa payments: the STK push gateway, the caller-side checkout flow and
//! the process-local ledger behind the admin dashboard.

mod error;
mod gateway;
mod ledger;
mod model;
mod session;

pub mod phone;

#[cfg(feature = "client")]
pub mod client;

pub use crate::error::{PaymentError, PaymentErrorExt};
pub use crate::gateway::{CheckoutGateway, OTP_RANGE, PendingCheckout};
pub use crate::ledger::{LedgerSummary, PaymentLedger};
pub use crate::model::{CheckoutRequest, PaymentRecord, PaymentStatus};
pub use crate::phone::Msisdn;
pub use crate::session::CheckoutSession;

use edupath_domain::config::PaymentConfig;
use edupath_kernel::haptics::Haptics;

/// Payments feature state
#[edupath_derive::feature_slice]
pub struct Payments {
    pub gateway: CheckoutGateway,
    pub ledger: PaymentLedger,
    /// Price of the full report, KES.
    pub report_fee: u32,
}

/// Initialize the payments feature.
///
/// # Errors
/// * [`PaymentError::Internal`] when the checkout prefix is empty or the report fee is zero.
pub fn init(config: &PaymentConfig, haptics: Haptics) -> Result<Payments, PaymentError> {
    if config.checkout_prefix.trim().is_empty() {
        return Err("Checkout prefix cannot be empty".into());
    }
    if config.report_fee == 0 {
        return Err(PaymentError::Internal {
            message: "Report fee must be positive".into(),
            context: Some("payment.report_fee".into()),
        });
    }

    let slice = Payments::new(PaymentsInner {
        gateway: CheckoutGateway::new(config, haptics),
        ledger: PaymentLedger::new(),
        report_fee: config.report_fee,
    });

    tracing::info!(latency_ms = config.latency_ms, fee = config.report_fee, "Payments slice initialized");
    Ok(slice)
}
