//! Domain events emitted by FinHub modules.
//!
//! Events are dispatched through the event bus and consumed by the host
//! shell, the AI insight surface, and the product plugins. The vocabulary
//! is closed: every [`EventType`] maps to exactly one payload shape, and
//! adding a new type is additive — existing payload shapes never change.

pub mod account;
pub mod ai;
pub mod bnpl;
pub mod card;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use account::AccountEvent;
pub use ai::{AiEvent, InsightSeverity};
pub use bnpl::BnplEvent;
pub use card::{CardEvent, CardStatus};

/// Enumeration of all event types in the system.
///
/// The canonical string form is dot-namespaced `domain.entity.action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A payment was submitted against an account.
    AccountPaymentSubmitted,
    /// A previously submitted payment posted to the account.
    AccountPaymentPosted,
    /// An account balance changed.
    AccountBalanceUpdated,
    /// A card changed status (frozen, closed, ...).
    CardStatusChanged,
    /// A card transaction was recorded.
    CardTransactionRecorded,
    /// A buy-now-pay-later plan was created.
    BnplPlanCreated,
    /// A buy-now-pay-later installment came due.
    BnplInstallmentDue,
    /// The AI layer generated an insight.
    AiInsightGenerated,
    /// A user dismissed an AI insight.
    AiInsightDismissed,
}

impl EventType {
    /// Returns the canonical dot-namespaced name of this event type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccountPaymentSubmitted => "account.payment.submitted",
            Self::AccountPaymentPosted => "account.payment.posted",
            Self::AccountBalanceUpdated => "account.balance.updated",
            Self::CardStatusChanged => "card.status.changed",
            Self::CardTransactionRecorded => "card.transaction.recorded",
            Self::BnplPlanCreated => "bnpl.plan.created",
            Self::BnplInstallmentDue => "bnpl.installment.due",
            Self::AiInsightGenerated => "ai.insight.generated",
            Self::AiInsightDismissed => "ai.insight.dismissed",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Union of all domain event payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// An account-related event.
    Account(AccountEvent),
    /// A card-related event.
    Card(CardEvent),
    /// A buy-now-pay-later event.
    Bnpl(BnplEvent),
    /// An AI insight event.
    Ai(AiEvent),
}

impl EventPayload {
    /// Returns the event type this payload carries.
    ///
    /// The mapping is total: every payload variant belongs to exactly one
    /// [`EventType`].
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Account(AccountEvent::PaymentSubmitted { .. }) => {
                EventType::AccountPaymentSubmitted
            }
            Self::Account(AccountEvent::PaymentPosted { .. }) => EventType::AccountPaymentPosted,
            Self::Account(AccountEvent::BalanceUpdated { .. }) => EventType::AccountBalanceUpdated,
            Self::Card(CardEvent::StatusChanged { .. }) => EventType::CardStatusChanged,
            Self::Card(CardEvent::TransactionRecorded { .. }) => EventType::CardTransactionRecorded,
            Self::Bnpl(BnplEvent::PlanCreated { .. }) => EventType::BnplPlanCreated,
            Self::Bnpl(BnplEvent::InstallmentDue { .. }) => EventType::BnplInstallmentDue,
            Self::Ai(AiEvent::InsightGenerated { .. }) => EventType::AiInsightGenerated,
            Self::Ai(AiEvent::InsightDismissed { .. }) => EventType::AiInsightDismissed,
        }
    }
}

/// Structured provenance for an event: which system and module produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSource {
    /// The originating system (e.g. `"finhub"`).
    pub system: String,
    /// The originating module (e.g. `"plugin-credit-card"`).
    pub module: String,
}

impl EventSource {
    /// Create a new event source.
    pub fn new(system: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            module: module.into(),
        }
    }
}

/// Wrapper for all domain events with metadata.
///
/// Events are immutable after construction and are not retained by the bus
/// after delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Globally unique event ID, supplied by the publisher.
    pub id: String,
    /// When the event was created.
    pub timestamp: DateTime<Utc>,
    /// Where the event originated.
    pub source: EventSource,
    /// The event payload.
    pub payload: EventPayload,
}

impl Event {
    /// Create a new domain event stamped with the current time.
    pub fn new(id: impl Into<String>, source: EventSource, payload: EventPayload) -> Self {
        Self {
            id: id.into(),
            timestamp: Utc::now(),
            source,
            payload,
        }
    }

    /// Returns the type of this event, derived from its payload.
    pub fn event_type(&self) -> EventType {
        self.payload.event_type()
    }
}
