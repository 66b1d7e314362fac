//! Subscription handles — cancellation tokens returned by the bus.

use std::sync::{Mutex, PoisonError, Weak};

use tracing::debug;

use finhub_core::events::EventType;

use crate::bus::BusState;

/// What a subscription listens for: one exact event type, or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSelector {
    /// Deliver only events of this exact type.
    Exact(EventType),
    /// Deliver every event regardless of type.
    All,
}

/// Handle for one active subscription.
///
/// [`Subscription::cancel`] removes exactly this subscription and is
/// idempotent. Dropping the handle does **not** cancel: an unreferenced
/// subscription lives for the life of the bus.
#[derive(Debug)]
pub struct Subscription {
    selector: EventSelector,
    id: u64,
    state: Weak<Mutex<BusState>>,
}

impl Subscription {
    pub(crate) fn new(selector: EventSelector, id: u64, state: Weak<Mutex<BusState>>) -> Self {
        Self {
            selector,
            id,
            state,
        }
    }

    /// Returns what this subscription listens for.
    pub fn selector(&self) -> EventSelector {
        self.selector
    }

    /// Removes this subscription from the bus.
    ///
    /// Safe to call more than once; the second call is a no-op, as is
    /// cancelling after the bus itself has been dropped.
    pub fn cancel(&self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);

        match self.selector {
            EventSelector::Exact(event_type) => {
                if let Some(entries) = state.typed.get_mut(&event_type) {
                    entries.retain(|entry| entry.id != self.id);
                    if entries.is_empty() {
                        state.typed.remove(&event_type);
                    }
                }
            }
            EventSelector::All => {
                state.wildcard.retain(|entry| entry.id != self.id);
            }
        }

        debug!(subscription_id = self.id, "Subscription cancelled");
    }
}
