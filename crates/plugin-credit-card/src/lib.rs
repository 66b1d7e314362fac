//! # plugin-credit-card
//!
//! Credit card product module for FinHub. Owns the `credit_card` category
//! slot, contributes the card routes and UI surfaces, and maintains a
//! payment activity feed from the event bus once activated.

pub mod activity;
pub mod plugin;

pub use activity::{ActivityFeed, PaymentActivity, PaymentState};
pub use plugin::CreditCardPlugin;
