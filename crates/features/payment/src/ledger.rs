//! In-memory record of payment attempts for the admin dashboard. Never persisted.

use crate::error::PaymentError;
use crate::model::{CheckoutRequest, PaymentRecord, PaymentStatus};
use crate::phone::Msisdn;
use chrono::Utc;
use edupath_kernel::safe_nanoid;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

/// Aggregate view over the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub total: usize,
    pub by_status: BTreeMap<PaymentStatus, usize>,
    /// Sum of successful payments, KES.
    pub collected: u64,
}

impl LedgerSummary {
    #[must_use]
    pub fn count(&self, status: PaymentStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaymentLedger {
    records: Arc<RwLock<Vec<PaymentRecord>>>,
    revision: Arc<AtomicU64>,
}

impl PaymentLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a push that reached the phone.
    pub fn record(
        &self,
        request: &CheckoutRequest,
        phone: Msisdn,
        amount: u32,
        student_name: impl Into<String>,
    ) -> PaymentRecord {
        let now = Utc::now();
        let record = PaymentRecord {
            id: safe_nanoid!(),
            checkout_request_id: request.checkout_request_id.clone(),
            phone,
            amount,
            student_name: student_name.into(),
            status: PaymentStatus::SentToPhone,
            created_at: now,
            updated_at: now,
        };

        self.records.write().push(record.clone());
        self.revision.fetch_add(1, Ordering::Release);
        info!(id = %record.id, checkout = %record.checkout_request_id, "Payment recorded");
        record
    }

    /// # Errors
    /// * [`PaymentError::UnknownCheckout`] if no record carries `checkout_request_id`.
    pub fn update_status(
        &self,
        checkout_request_id: &str,
        status: PaymentStatus,
    ) -> Result<PaymentRecord, PaymentError> {
        let mut records = self.records.write();
        let Some(record) =
            records.iter_mut().find(|r| r.checkout_request_id == checkout_request_id)
        else {
            warn!(checkout = %checkout_request_id, %status, "Status update for unknown checkout");
            return Err(PaymentError::UnknownCheckout {
                message: checkout_request_id.to_owned().into(),
                context: None,
            });
        };

        record.status = status;
        record.updated_at = Utc::now();
        self.revision.fetch_add(1, Ordering::Release);
        info!(checkout = %checkout_request_id, %status, "Payment status updated");
        Ok(record.clone())
    }

    /// Bumped on every insert and status change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn find(&self, checkout_request_id: &str) -> Option<PaymentRecord> {
        self.records.read().iter().find(|r| r.checkout_request_id == checkout_request_id).cloned()
    }

    /// Every record, newest first.
    #[must_use]
    pub fn all(&self) -> Vec<PaymentRecord> {
        self.records.read().iter().rev().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> LedgerSummary {
        let records = self.records.read();
        let mut summary = LedgerSummary { total: records.len(), ..LedgerSummary::default() };

        for record in records.iter() {
            *summary.by_status.entry(record.status).or_default() += 1;
            if record.status == PaymentStatus::Success {
                summary.collected += u64::from(record.amount);
            }
        }
        summary
    }
}
