//! Caller-side checkout flow for the report unlock.
//!
//! ```text
//! Idle -> Initiated -> SentToPhone -> PinEntered -> Verifying -> Success
//!                                                            \-> Failed
//! ```
//!
//! Any pending step may also fail outright. Settled sessions only leave through
//! [`CheckoutSession::reset`].

use crate::error::PaymentError;
use crate::ledger::PaymentLedger;
use crate::model::{CheckoutRequest, PaymentRecord, PaymentStatus};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutSession {
    status: PaymentStatus,
    checkout: Option<CheckoutRequest>,
    otp: Option<String>,
    pin: Option<String>,
    failure: Option<String>,
}

impl CheckoutSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn status(&self) -> PaymentStatus {
        self.status
    }

    #[must_use]
    pub const fn checkout(&self) -> Option<&CheckoutRequest> {
        self.checkout.as_ref()
    }

    /// The code the simulated SMS delivered to the payer.
    #[must_use]
    pub fn otp(&self) -> Option<&str> {
        self.otp.as_deref()
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// `Idle -> Initiated`, called once the phone number passed validation.
    ///
    /// # Errors
    /// * [`PaymentError::InvalidTransition`] unless the session is idle.
    pub fn begin(&mut self) -> Result<(), PaymentError> {
        self.advance(PaymentStatus::Idle, PaymentStatus::Initiated)
    }

    /// `Initiated -> SentToPhone`, once the gateway answered with a checkout id.
    ///
    /// # Errors
    /// * [`PaymentError::InvalidTransition`] unless a push is in flight.
    pub fn sent_to_phone(
        &mut self,
        checkout: CheckoutRequest,
        otp: impl Into<String>,
    ) -> Result<(), PaymentError> {
        self.advance(PaymentStatus::Initiated, PaymentStatus::SentToPhone)?;
        self.checkout = Some(checkout);
        self.otp = Some(otp.into());
        Ok(())
    }

    /// `SentToPhone -> PinEntered`.
    ///
    /// # Errors
    /// * [`PaymentError::InvalidTransition`] unless the push reached the phone.
    pub fn enter_pin(&mut self, pin: &str) -> Result<(), PaymentError> {
        self.advance(PaymentStatus::SentToPhone, PaymentStatus::PinEntered)?;
        self.pin = Some(pin.trim().to_owned());
        Ok(())
    }

    /// `PinEntered -> Verifying`.
    ///
    /// # Errors
    /// * [`PaymentError::InvalidTransition`] unless a PIN was entered.
    pub fn verify(&mut self) -> Result<(), PaymentError> {
        self.advance(PaymentStatus::PinEntered, PaymentStatus::Verifying)
    }

    /// `Verifying -> Success | Failed`, comparing the entered PIN with the issued code.
    ///
    /// # Errors
    /// * [`PaymentError::InvalidTransition`] unless verification is under way.
    pub fn complete(&mut self) -> Result<PaymentStatus, PaymentError> {
        let matches = self.pin.is_some() && self.pin == self.otp;
        if matches {
            self.advance(PaymentStatus::Verifying, PaymentStatus::Success)?;
        } else {
            self.advance(PaymentStatus::Verifying, PaymentStatus::Failed)?;
            self.failure = Some("The code does not match the one sent to your phone".to_owned());
        }
        Ok(self.status)
    }

    /// Completes verification and writes the outcome to `ledger`.
    ///
    /// Returns the updated record only when the payment succeeded.
    ///
    /// # Errors
    /// * [`PaymentError::InvalidTransition`] when not verifying.
    /// * [`PaymentError::UnknownCheckout`] when `ledger` holds no record for this checkout.
    pub fn settle(
        &mut self,
        ledger: &PaymentLedger,
    ) -> Result<Option<PaymentRecord>, PaymentError> {
        let status = self.complete()?;
        let checkout = self
            .checkout
            .as_ref()
            .ok_or_else(|| PaymentError::from("Verified session has no checkout request"))?;
        let record = ledger.update_status(&checkout.checkout_request_id, status)?;
        Ok((status == PaymentStatus::Success).then_some(record))
    }

    /// Settles a pending session as failed.
    ///
    /// # Errors
    /// * [`PaymentError::InvalidTransition`] when idle or already settled.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), PaymentError> {
        if !self.status.is_pending() {
            return Err(self.invalid(PaymentStatus::Failed));
        }
        debug!(from = %self.status, "Checkout failed");
        self.status = PaymentStatus::Failed;
        self.failure = Some(reason.into());
        Ok(())
    }

    /// Back to `Idle`, discarding the attempt.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn advance(&mut self, from: PaymentStatus, to: PaymentStatus) -> Result<(), PaymentError> {
        if self.status != from {
            return Err(self.invalid(to));
        }
        debug!(%from, %to, "Checkout transition");
        self.status = to;
        Ok(())
    }

    fn invalid(&self, to: PaymentStatus) -> PaymentError {
        PaymentError::InvalidTransition {
            message: format!("{} -> {to}", self.status).into(),
            context: None,
        }
    }
}
