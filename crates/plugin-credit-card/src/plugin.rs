//! Credit card plugin implementation — registers with the FinHub plugin
//! system.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use finhub_core::AppResult;
use finhub_core::events::{
    AccountEvent, AiEvent, Event, EventPayload, EventSource, EventType, InsightSeverity,
};
use finhub_events::{EventBus, Subscription};
use finhub_plugin::{
    ComponentRef, ComponentSlot, PluginManifest, ProductCategory, ProductPlugin, RouteDescriptor,
};
use finhub_plugin_sdk::plugin_manifest;

use crate::activity::ActivityFeed;

/// Payments at or above this amount get a spending insight.
const LARGE_PAYMENT_CENTS: i64 = 100_000;

/// Credit card product plugin for FinHub.
#[derive(Debug)]
pub struct CreditCardPlugin {
    /// The host event bus, injected at construction.
    bus: Arc<EventBus>,
    /// Payment activity feed, populated after activation.
    activity: Arc<ActivityFeed>,
    /// Live bus subscriptions held for the life of the plugin.
    subscriptions: Mutex<Vec<Subscription>>,
}

impl CreditCardPlugin {
    /// Creates the plugin against the host event bus.
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self {
            bus,
            activity: Arc::new(ActivityFeed::new()),
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// Returns the payment activity feed.
    pub fn activity(&self) -> Arc<ActivityFeed> {
        Arc::clone(&self.activity)
    }
}

#[async_trait]
impl ProductPlugin for CreditCardPlugin {
    fn manifest(&self) -> PluginManifest {
        let manifest = plugin_manifest! {
            id: "credit-card",
            name: "Credit Card",
            description: "Credit card accounts, statements, and card controls",
            icon: "credit-card",
            color: "#2563eb",
            categories: [ProductCategory::CreditCard],
        };
        manifest
            .with_capability("freeze_card")
            .with_capability("view_statements")
            .with_capability("dispute_transaction")
            .with_component(ComponentRef::new(ComponentSlot::SummaryCard, "CreditCardSummary"))
            .with_component(ComponentRef::new(ComponentSlot::DetailView, "CreditCardDetail"))
            .with_route(RouteDescriptor::new("/cards", "CreditCardDetail").with_title("Cards"))
    }

    async fn on_activate(&self) -> AppResult<()> {
        let activity = Arc::clone(&self.activity);
        let bus = Arc::clone(&self.bus);
        let submitted = self
            .bus
            .subscribe(EventType::AccountPaymentSubmitted, move |event| {
                if let EventPayload::Account(AccountEvent::PaymentSubmitted {
                    account_id,
                    amount_cents,
                    currency,
                }) = &event.payload
                {
                    activity.record_submitted(*account_id, *amount_cents, currency);
                    if *amount_cents >= LARGE_PAYMENT_CENTS {
                        bus.publish(&Event::new(
                            Uuid::new_v4().to_string(),
                            EventSource::new("finhub", "plugin-credit-card"),
                            EventPayload::Ai(AiEvent::InsightGenerated {
                                insight_id: Uuid::new_v4(),
                                category: ProductCategory::CreditCard.as_str().to_string(),
                                title: format!(
                                    "Large payment of {}.{:02} submitted",
                                    amount_cents / 100,
                                    amount_cents % 100
                                ),
                                severity: InsightSeverity::Info,
                            }),
                        ));
                    }
                }
                Ok(())
            });

        let activity = Arc::clone(&self.activity);
        let posted = self
            .bus
            .subscribe(EventType::AccountPaymentPosted, move |event| {
                if let EventPayload::Account(AccountEvent::PaymentPosted {
                    account_id,
                    amount_cents,
                }) = &event.payload
                {
                    activity.record_posted(*account_id, *amount_cents);
                }
                Ok(())
            });

        let mut subscriptions = self
            .subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscriptions.push(submitted);
        subscriptions.push(posted);

        info!("Credit card plugin activated");
        Ok(())
    }
}
