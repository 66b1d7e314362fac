//! Installment schedule book for the buy-now-pay-later module.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One installment that has come due on a plan.
#[derive(Debug, Clone)]
pub struct InstallmentRecord {
    /// The 1-based installment number.
    pub installment: u32,
    /// The amount due in minor units (cents).
    pub amount_cents: i64,
    /// When the installment is due.
    pub due_date: DateTime<Utc>,
}

/// The tracked state of one installment plan.
#[derive(Debug, Clone)]
pub struct PlanSchedule {
    /// The plan ID.
    pub plan_id: Uuid,
    /// The financed principal in minor units (cents).
    pub principal_cents: i64,
    /// The total number of installments on the plan.
    pub installments: u32,
    /// Installments that have come due so far, in arrival order.
    pub due: Vec<InstallmentRecord>,
}

/// Book of installment plans, fed by bus events.
#[derive(Debug, Default)]
pub struct ScheduleBook {
    plans: Mutex<HashMap<Uuid, PlanSchedule>>,
}

impl ScheduleBook {
    /// Creates an empty schedule book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a newly created plan.
    pub fn register_plan(&self, plan_id: Uuid, principal_cents: i64, installments: u32) {
        self.lock_plans().insert(
            plan_id,
            PlanSchedule {
                plan_id,
                principal_cents,
                installments,
                due: Vec::new(),
            },
        );
    }

    /// Records an installment coming due.
    ///
    /// Returns `false` when the plan is unknown (created before this book
    /// started listening); the caller decides whether that is noteworthy.
    pub fn record_due(
        &self,
        plan_id: Uuid,
        installment: u32,
        amount_cents: i64,
        due_date: DateTime<Utc>,
    ) -> bool {
        let mut plans = self.lock_plans();
        match plans.get_mut(&plan_id) {
            Some(plan) => {
                plan.due.push(InstallmentRecord {
                    installment,
                    amount_cents,
                    due_date,
                });
                true
            }
            None => false,
        }
    }

    /// Returns a snapshot of one plan's schedule.
    pub fn plan(&self, plan_id: Uuid) -> Option<PlanSchedule> {
        self.lock_plans().get(&plan_id).cloned()
    }

    /// Returns the number of tracked plans.
    pub fn plan_count(&self) -> usize {
        self.lock_plans().len()
    }

    fn lock_plans(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, PlanSchedule>> {
        self.plans.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
