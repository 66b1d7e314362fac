//! Integration tests for the event bus dispatch contract.

mod helpers;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use finhub_core::AppError;
use finhub_events::EventBus;
use finhub_core::events::EventType;

#[test]
fn exact_type_handler_fires_once_per_matching_publish() {
    let bus = EventBus::new();
    let count = Arc::new(AtomicUsize::new(0));

    let count_clone = Arc::clone(&count);
    let _sub = bus.subscribe(EventType::AccountPaymentSubmitted, move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    bus.publish(&helpers::payment_submitted(1_000));
    bus.publish(&helpers::payment_submitted(2_000));
    bus.publish(&helpers::balance_updated(50_000));

    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn wildcard_handler_fires_for_every_type() {
    let bus = EventBus::new();
    let count = Arc::new(AtomicUsize::new(0));

    let count_clone = Arc::clone(&count);
    let _sub = bus.subscribe_all(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    // No dedicated subscriber exists for either type.
    bus.publish(&helpers::payment_submitted(1_000));
    bus.publish(&helpers::balance_updated(50_000));

    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn cancelled_subscription_stops_receiving() {
    let bus = EventBus::new();
    let count = Arc::new(AtomicUsize::new(0));

    let count_clone = Arc::clone(&count);
    let sub = bus.subscribe(EventType::AccountPaymentSubmitted, move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    bus.publish(&helpers::payment_submitted(1_000));
    sub.cancel();
    bus.publish(&helpers::payment_submitted(2_000));
    // Second cancel must be a silent no-op.
    sub.cancel();
    bus.publish(&helpers::payment_submitted(3_000));

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn one_failing_subscriber_never_suppresses_the_rest() {
    let bus = EventBus::new();
    let delivered = Arc::new(AtomicUsize::new(0));

    let delivered_clone = Arc::clone(&delivered);
    let _before = bus.subscribe(EventType::AccountPaymentSubmitted, move |_| {
        delivered_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    let _failing = bus.subscribe(EventType::AccountPaymentSubmitted, |_| {
        Err(AppError::internal("listener fault"))
    });
    let delivered_clone = Arc::clone(&delivered);
    let _after = bus.subscribe(EventType::AccountPaymentSubmitted, move |_| {
        delivered_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    let delivered_clone = Arc::clone(&delivered);
    let _wildcard = bus.subscribe_all(move |_| {
        delivered_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    bus.publish(&helpers::payment_submitted(1_000));

    // Both remaining typed handlers plus the wildcard ran exactly once.
    assert_eq!(delivered.load(Ordering::SeqCst), 3);

    // Later publishes keep working normally.
    bus.publish(&helpers::payment_submitted(2_000));
    assert_eq!(delivered.load(Ordering::SeqCst), 6);
}

#[test]
fn delivery_order_is_deterministic() {
    let bus = EventBus::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    let order_clone = Arc::clone(&order);
    let _first = bus.subscribe(EventType::AccountPaymentSubmitted, move |_| {
        order_clone.lock().unwrap().push("typed-1");
        Ok(())
    });
    let order_clone = Arc::clone(&order);
    let _wildcard = bus.subscribe_all(move |_| {
        order_clone.lock().unwrap().push("wildcard");
        Ok(())
    });
    let order_clone = Arc::clone(&order);
    let _second = bus.subscribe(EventType::AccountPaymentSubmitted, move |_| {
        order_clone.lock().unwrap().push("typed-2");
        Ok(())
    });

    bus.publish(&helpers::payment_submitted(1_000));

    // Type-specific subscribers run before wildcard subscribers, each
    // group in registration order.
    assert_eq!(*order.lock().unwrap(), vec!["typed-1", "typed-2", "wildcard"]);
}

#[test]
fn handlers_subscribed_after_a_publish_never_see_it() {
    let bus = EventBus::new();
    bus.publish(&helpers::payment_submitted(1_000));

    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = Arc::clone(&count);
    let _sub = bus.subscribe(EventType::AccountPaymentSubmitted, move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    assert_eq!(count.load(Ordering::SeqCst), 0);
}
