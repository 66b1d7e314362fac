//! Account-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to account activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AccountEvent {
    /// A payment was submitted against an account.
    PaymentSubmitted {
        /// The account the payment was made against.
        account_id: Uuid,
        /// The payment amount in minor units (cents).
        amount_cents: i64,
        /// ISO 4217 currency code.
        currency: String,
    },
    /// A submitted payment posted to the account ledger.
    PaymentPosted {
        /// The account the payment posted to.
        account_id: Uuid,
        /// The posted amount in minor units (cents).
        amount_cents: i64,
    },
    /// The account balance changed.
    BalanceUpdated {
        /// The account whose balance changed.
        account_id: Uuid,
        /// The new balance in minor units (cents).
        balance_cents: i64,
    },
}
