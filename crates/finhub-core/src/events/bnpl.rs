//! Buy-now-pay-later domain events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to buy-now-pay-later plans.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BnplEvent {
    /// A new installment plan was created.
    PlanCreated {
        /// The plan ID.
        plan_id: Uuid,
        /// The financed principal in minor units (cents).
        principal_cents: i64,
        /// The number of installments.
        installments: u32,
    },
    /// An installment on an existing plan came due.
    InstallmentDue {
        /// The plan the installment belongs to.
        plan_id: Uuid,
        /// The 1-based installment number.
        installment: u32,
        /// The amount due in minor units (cents).
        amount_cents: i64,
        /// When the installment is due.
        due_date: DateTime<Utc>,
    },
}
