//! Simulated Safaricom Daraja STK push gateway.

use crate::error::PaymentError;
use crate::model::CheckoutRequest;
use crate::phone::{self, Msisdn};
use edupath_domain::config::PaymentConfig;
use edupath_kernel::haptics::Haptics;
use edupath_kernel::token_nanoid;
use rand::Rng;
use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::time::Duration;
use tracing::{debug, info};

pub const OTP_RANGE: std::ops::RangeInclusive<u16> = 1000..=9999;

const CHECKOUT_TOKEN_LEN: usize = 10;

/// Emulates the first leg of a mobile-money push payment.
///
/// Validation is synchronous; only awaiting the returned [`PendingCheckout`] costs the
/// simulated network latency. The simulation has no post-latency failure path.
#[derive(Debug, Clone)]
pub struct CheckoutGateway {
    latency: Duration,
    prefix: String,
    haptics: Haptics,
}

impl CheckoutGateway {
    #[must_use]
    pub fn new(config: &PaymentConfig, haptics: Haptics) -> Self {
        Self { latency: config.latency(), prefix: config.checkout_prefix.clone(), haptics }
    }

    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    /// Starts a push payment towards `phone`.
    ///
    /// `amount` (KES) and `student_name` are carried through for the caller; they are not
    /// validated. Every call yields an independent attempt with its own identifier.
    ///
    /// # Errors
    /// * [`PaymentError::InvalidPhone`] immediately, before any latency, for a malformed number.
    pub fn initiate_stk_push(
        &self,
        phone: &str,
        amount: u32,
        student_name: &str,
    ) -> Result<PendingCheckout, PaymentError> {
        let msisdn = phone::validate(phone)?;
        debug!(phone = %msisdn.masked(), amount, "STK push accepted");

        Ok(PendingCheckout {
            msisdn,
            amount,
            student_name: student_name.to_owned(),
            latency: self.latency,
            prefix: self.prefix.clone(),
        })
    }

    /// Four-digit one-time code, uniform over `1000..=9999`.
    #[must_use]
    pub fn generate_transaction_otp(&self) -> String {
        rand::rng().random_range(OTP_RANGE).to_string()
    }

    /// Milestone vibration; silently skipped when the device cannot vibrate.
    pub fn trigger_vibration(&self) {
        self.haptics.milestone();
    }
}

/// A validated push request; resolves to a [`CheckoutRequest`] once awaited.
pub struct PendingCheckout {
    msisdn: Msisdn,
    amount: u32,
    student_name: String,
    latency: Duration,
    prefix: String,
}

impl fmt::Debug for PendingCheckout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingCheckout")
            .field("msisdn", &self.msisdn.masked())
            .field("amount", &self.amount)
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl PendingCheckout {
    #[must_use]
    pub const fn msisdn(&self) -> &Msisdn {
        &self.msisdn
    }

    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    #[must_use]
    pub fn student_name(&self) -> &str {
        &self.student_name
    }
}

impl IntoFuture for PendingCheckout {
    type Output = CheckoutRequest;
    type IntoFuture = Pin<Box<dyn Future<Output = CheckoutRequest> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            tokio::time::sleep(self.latency).await;

            let checkout_request_id =
                format!("{}{}", self.prefix, token_nanoid!(CHECKOUT_TOKEN_LEN));
            info!(
                checkout = %checkout_request_id,
                phone = %self.msisdn.masked(),
                amount = self.amount,
                "STK push sent to phone"
            );

            CheckoutRequest { checkout_request_id }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edupath_kernel::haptics::{PulsePattern, RecordingHaptics};

    #[test]
    fn vibration_uses_the_milestone_pattern() {
        let device = RecordingHaptics::new();
        let gateway = CheckoutGateway::new(&PaymentConfig::default(), Haptics::select(device.clone()));

        gateway.trigger_vibration();

        assert_eq!(device.pulses(), vec![PulsePattern::MILESTONE]);
    }

    #[test]
    fn pending_checkout_carries_caller_context() {
        let gateway = CheckoutGateway::new(&PaymentConfig::default(), Haptics::disabled());

        let pending = gateway.initiate_stk_push("0712345678", 250, "Wanjiku").unwrap();

        assert_eq!(pending.msisdn().as_str(), "254712345678");
        assert_eq!(pending.amount(), 250);
        assert_eq!(pending.student_name(), "Wanjiku");
    }
}
