//! Integration tests for the activation sweep and the composed bootstrap
//! flow.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use uuid::Uuid;

use finhub_core::events::{AiEvent, BnplEvent, EventPayload, EventType};
use finhub_events::EventBus;
use finhub_plugin::{PluginRegistry, ProductCategory, ProductPlugin};
use plugin_bnpl::BnplPlugin;
use plugin_credit_card::CreditCardPlugin;

use helpers::{PassivePlugin, StubPlugin, manifest};

#[tokio::test]
async fn every_hook_runs_once_and_failures_never_abort_the_sweep() {
    let registry = PluginRegistry::new();
    let good = StubPlugin::new(manifest("good", ProductCategory::CreditCard));
    let bad = StubPlugin::failing(manifest("bad", ProductCategory::Bnpl));
    let also_good = StubPlugin::new(manifest("also-good", ProductCategory::Savings));

    registry.register(Arc::clone(&good) as Arc<dyn ProductPlugin>).unwrap();
    registry.register(Arc::clone(&bad) as Arc<dyn ProductPlugin>).unwrap();
    registry
        .register(Arc::clone(&also_good) as Arc<dyn ProductPlugin>)
        .unwrap();

    let report = registry.activate_all().await;

    assert_eq!(good.activations(), 1);
    assert_eq!(bad.activations(), 1);
    assert_eq!(also_good.activations(), 1);
    assert_eq!(report.activated, vec!["good", "also-good"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].plugin_id, "bad");
    assert!(!report.is_complete());
    assert_eq!(report.total(), 3);
}

#[tokio::test]
async fn plugins_without_a_hook_are_trivial_successes() {
    let registry = PluginRegistry::new();
    registry
        .register(PassivePlugin::new(manifest("passive", ProductCategory::Checking)))
        .unwrap();

    let report = registry.activate_all().await;

    assert_eq!(report.activated, vec!["passive"]);
    assert!(report.is_complete());
}

#[tokio::test]
async fn empty_registry_sweep_completes_with_an_empty_report() {
    let registry = PluginRegistry::new();
    let report = registry.activate_all().await;
    assert_eq!(report.total(), 0);
    assert!(report.is_complete());
}

#[tokio::test]
async fn bootstrap_drives_the_product_feeds_end_to_end() {
    let bus = Arc::new(EventBus::new());
    let registry = PluginRegistry::new();

    let credit_card = Arc::new(CreditCardPlugin::new(Arc::clone(&bus)));
    let activity = credit_card.activity();
    let bnpl = Arc::new(BnplPlugin::new(Arc::clone(&bus)));
    let schedule = bnpl.schedule();

    registry.register(credit_card as Arc<dyn ProductPlugin>).unwrap();
    registry.register(bnpl as Arc<dyn ProductPlugin>).unwrap();

    let report = registry.activate_all().await;
    assert!(report.is_complete());

    let insights = Arc::new(AtomicUsize::new(0));
    let insights_clone = Arc::clone(&insights);
    let _sub = bus.subscribe(EventType::AiInsightGenerated, move |_| {
        insights_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    // A large payment lands in the activity feed and raises an insight.
    bus.publish(&helpers::payment_submitted(250_000));
    assert_eq!(activity.len(), 1);
    assert_eq!(insights.load(Ordering::SeqCst), 1);

    // A plan and its first installment land in the schedule book.
    let plan_id = Uuid::new_v4();
    bus.publish(&helpers::event(EventPayload::Bnpl(BnplEvent::PlanCreated {
        plan_id,
        principal_cents: 60_000,
        installments: 4,
    })));
    bus.publish(&helpers::event(EventPayload::Bnpl(BnplEvent::InstallmentDue {
        plan_id,
        installment: 1,
        amount_cents: 15_000,
        due_date: Utc::now(),
    })));

    let plan = schedule.plan(plan_id).unwrap();
    assert_eq!(plan.due.len(), 1);
    assert_eq!(plan.due[0].amount_cents, 15_000);
}

#[tokio::test]
async fn dismissing_an_insight_round_trips_on_the_bus() {
    let bus = Arc::new(EventBus::new());
    let dismissed = Arc::new(AtomicUsize::new(0));

    let dismissed_clone = Arc::clone(&dismissed);
    let _sub = bus.subscribe(EventType::AiInsightDismissed, move |_| {
        dismissed_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    bus.publish(&helpers::event(EventPayload::Ai(AiEvent::InsightDismissed {
        insight_id: Uuid::new_v4(),
    })));

    assert_eq!(dismissed.load(Ordering::SeqCst), 1);
}
