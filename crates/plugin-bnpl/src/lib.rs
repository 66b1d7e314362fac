//! # plugin-bnpl
//!
//! Buy-now-pay-later product module for FinHub. Owns the `bnpl` category
//! slot and maintains the installment schedule book from bus events once
//! activated.

pub mod plugin;
pub mod schedule;

pub use plugin::BnplPlugin;
pub use schedule::{InstallmentRecord, PlanSchedule, ScheduleBook};
