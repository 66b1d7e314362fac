//! Event bus — subscribers register handlers by event type, publishers
//! dispatch synchronously to every matching handler.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, error};

use finhub_core::AppResult;
use finhub_core::events::{Event, EventType};

use crate::subscription::{EventSelector, Subscription};

/// Callback invoked for every delivered event.
///
/// Returning `Err` reports a handler fault: the bus logs it and continues
/// dispatching to the remaining handlers.
pub type EventHandler = dyn Fn(&Event) -> AppResult<()> + Send + Sync;

/// A registered handler with its subscription id.
pub(crate) struct HandlerEntry {
    pub(crate) id: u64,
    pub(crate) handler: Arc<EventHandler>,
}

/// Mutable bus state: handler lists per event type plus wildcard handlers.
///
/// Lists are kept in registration order; dispatch order follows them.
#[derive(Default)]
pub(crate) struct BusState {
    pub(crate) typed: HashMap<EventType, Vec<HandlerEntry>>,
    pub(crate) wildcard: Vec<HandlerEntry>,
    pub(crate) next_id: u64,
}

/// Typed in-process publish/subscribe dispatcher.
///
/// All operations are synchronous and complete before returning. The
/// subscriber set is snapshotted at publish entry, so handlers may
/// subscribe, cancel, or publish reentrantly; a subscription made during
/// a publish first sees the next publish.
pub struct EventBus {
    state: Arc<Mutex<BusState>>,
}

impl EventBus {
    /// Creates a new event bus with no subscribers.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(BusState::default())),
        }
    }

    /// Registers `handler` for every subsequent publish of exactly
    /// `event_type`.
    ///
    /// The returned [`Subscription`] cancels this registration; dropping it
    /// without cancelling leaves the subscription alive for the life of
    /// the bus.
    pub fn subscribe<F>(&self, event_type: EventType, handler: F) -> Subscription
    where
        F: Fn(&Event) -> AppResult<()> + Send + Sync + 'static,
    {
        let mut state = self.lock_state();
        let id = state.next_id;
        state.next_id += 1;
        state.typed.entry(event_type).or_default().push(HandlerEntry {
            id,
            handler: Arc::new(handler),
        });

        debug!(event_type = %event_type, subscription_id = id, "Subscriber registered");

        Subscription::new(EventSelector::Exact(event_type), id, Arc::downgrade(&self.state))
    }

    /// Registers `handler` for every subsequent publish regardless of type.
    ///
    /// Same cancellation contract as [`EventBus::subscribe`].
    pub fn subscribe_all<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&Event) -> AppResult<()> + Send + Sync + 'static,
    {
        let mut state = self.lock_state();
        let id = state.next_id;
        state.next_id += 1;
        state.wildcard.push(HandlerEntry {
            id,
            handler: Arc::new(handler),
        });

        debug!(subscription_id = id, "Wildcard subscriber registered");

        Subscription::new(EventSelector::All, id, Arc::downgrade(&self.state))
    }

    /// Synchronously delivers `event` to every handler subscribed to its
    /// type, then to every wildcard handler, in registration order.
    ///
    /// Handler faults are logged and never surface to the publisher; one
    /// failing handler never prevents the remaining handlers from running.
    pub fn publish(&self, event: &Event) {
        let event_type = event.event_type();

        let handlers: Vec<Arc<EventHandler>> = {
            let state = self.lock_state();
            state
                .typed
                .get(&event_type)
                .into_iter()
                .flatten()
                .chain(state.wildcard.iter())
                .map(|entry| Arc::clone(&entry.handler))
                .collect()
        };

        debug!(
            event_id = %event.id,
            event_type = %event_type,
            handler_count = handlers.len(),
            "Dispatching event"
        );

        for handler in handlers {
            if let Err(e) = handler(event) {
                error!(
                    event_id = %event.id,
                    event_type = %event_type,
                    error = %e,
                    "Event handler failed"
                );
            }
        }
    }

    /// Returns the total number of active subscriptions, wildcard included.
    pub fn subscriber_count(&self) -> usize {
        let state = self.lock_state();
        state.typed.values().map(Vec::len).sum::<usize>() + state.wildcard.len()
    }

    /// Returns whether any handler is subscribed to exactly `event_type`.
    pub fn has_subscribers(&self, event_type: EventType) -> bool {
        let state = self.lock_state();
        state
            .typed
            .get(&event_type)
            .map(|entries| !entries.is_empty())
            .unwrap_or(false)
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, BusState> {
        // Handlers run outside the lock, so a poisoned state is still
        // consistent; recover it rather than propagate the panic.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}
