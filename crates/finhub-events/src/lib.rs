//! # finhub-events
//!
//! Typed in-process publish/subscribe event bus for FinHub. Provides:
//!
//! - Subscription by exact event type or wildcard
//! - Synchronous dispatch: every publish notifies all current subscribers
//!   before returning
//! - Per-handler fault isolation: a failing handler is logged and never
//!   blocks the rest of the dispatch
//! - Idempotent cancellation handles
//!
//! The bus holds no event history: a handler subscribed after a publish
//! never sees that event.

pub mod bus;
pub mod subscription;

pub use bus::{EventBus, EventHandler};
pub use subscription::{EventSelector, Subscription};
