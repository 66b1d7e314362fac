//! Buy-now-pay-later plugin implementation — registers with the FinHub
//! plugin system.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tracing::{info, warn};

use finhub_core::AppResult;
use finhub_core::events::{BnplEvent, EventPayload, EventType};
use finhub_events::{EventBus, Subscription};
use finhub_plugin::{
    ComponentRef, ComponentSlot, PluginManifest, ProductCategory, ProductPlugin, RouteDescriptor,
};
use finhub_plugin_sdk::plugin_manifest;

use crate::schedule::ScheduleBook;

/// Buy-now-pay-later product plugin for FinHub.
#[derive(Debug)]
pub struct BnplPlugin {
    /// The host event bus, injected at construction.
    bus: Arc<EventBus>,
    /// Installment schedule book, populated after activation.
    schedule: Arc<ScheduleBook>,
    /// Live bus subscriptions held for the life of the plugin.
    subscriptions: Mutex<Vec<Subscription>>,
}

impl BnplPlugin {
    /// Creates the plugin against the host event bus.
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self {
            bus,
            schedule: Arc::new(ScheduleBook::new()),
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// Returns the installment schedule book.
    pub fn schedule(&self) -> Arc<ScheduleBook> {
        Arc::clone(&self.schedule)
    }
}

#[async_trait]
impl ProductPlugin for BnplPlugin {
    fn manifest(&self) -> PluginManifest {
        let manifest = plugin_manifest! {
            id: "bnpl",
            name: "Pay Later",
            description: "Buy-now-pay-later plans and installment schedules",
            icon: "calendar-clock",
            color: "#7c3aed",
            categories: [ProductCategory::Bnpl],
        };
        manifest
            .with_capability("create_plan")
            .with_capability("view_schedule")
            .with_component(ComponentRef::new(ComponentSlot::SummaryCard, "BnplSummary"))
            .with_route(RouteDescriptor::new("/bnpl", "BnplDetail").with_title("Pay Later"))
    }

    async fn on_activate(&self) -> AppResult<()> {
        let schedule = Arc::clone(&self.schedule);
        let created = self.bus.subscribe(EventType::BnplPlanCreated, move |event| {
            if let EventPayload::Bnpl(BnplEvent::PlanCreated {
                plan_id,
                principal_cents,
                installments,
            }) = &event.payload
            {
                schedule.register_plan(*plan_id, *principal_cents, *installments);
            }
            Ok(())
        });

        let schedule = Arc::clone(&self.schedule);
        let due = self.bus.subscribe(EventType::BnplInstallmentDue, move |event| {
            if let EventPayload::Bnpl(BnplEvent::InstallmentDue {
                plan_id,
                installment,
                amount_cents,
                due_date,
            }) = &event.payload
            {
                if !schedule.record_due(*plan_id, *installment, *amount_cents, *due_date) {
                    warn!(
                        event_id = %event.id,
                        plan_id = %plan_id,
                        "Installment due for untracked plan"
                    );
                }
            }
            Ok(())
        });

        let mut subscriptions = self
            .subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscriptions.push(created);
        subscriptions.push(due);

        info!("BNPL plugin activated");
        Ok(())
    }
}
