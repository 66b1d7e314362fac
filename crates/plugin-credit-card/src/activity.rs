//! In-memory payment activity feed for the credit card module.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Where a payment is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentState {
    /// Submitted by the user, not yet posted.
    Submitted,
    /// Posted to the account ledger.
    Posted,
}

/// One entry in the activity feed.
#[derive(Debug, Clone)]
pub struct PaymentActivity {
    /// The account the payment belongs to.
    pub account_id: Uuid,
    /// The payment amount in minor units (cents).
    pub amount_cents: i64,
    /// ISO 4217 currency code, when known.
    pub currency: Option<String>,
    /// Lifecycle state at the time of recording.
    pub state: PaymentState,
    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Append-only feed of payment activity, fed by bus events.
#[derive(Debug, Default)]
pub struct ActivityFeed {
    entries: Mutex<Vec<PaymentActivity>>,
}

impl ActivityFeed {
    /// Creates an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted payment.
    pub fn record_submitted(&self, account_id: Uuid, amount_cents: i64, currency: &str) {
        self.push(PaymentActivity {
            account_id,
            amount_cents,
            currency: Some(currency.to_string()),
            state: PaymentState::Submitted,
            recorded_at: Utc::now(),
        });
    }

    /// Records a posted payment.
    pub fn record_posted(&self, account_id: Uuid, amount_cents: i64) {
        self.push(PaymentActivity {
            account_id,
            amount_cents,
            currency: None,
            state: PaymentState::Posted,
            recorded_at: Utc::now(),
        });
    }

    /// Returns a snapshot of the feed, oldest first.
    pub fn entries(&self) -> Vec<PaymentActivity> {
        self.lock_entries().clone()
    }

    /// Returns the number of recorded entries.
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    /// Returns whether the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    fn push(&self, activity: PaymentActivity) {
        self.lock_entries().push(activity);
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, Vec<PaymentActivity>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
