//! Card-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    /// The card is active and usable.
    Active,
    /// The card is temporarily frozen by the cardholder.
    Frozen,
    /// The card is permanently closed.
    Closed,
}

/// Events related to card activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CardEvent {
    /// A card changed status.
    StatusChanged {
        /// The card that changed.
        card_id: Uuid,
        /// The new status.
        status: CardStatus,
    },
    /// A transaction was recorded on a card.
    TransactionRecorded {
        /// The card the transaction was made with.
        card_id: Uuid,
        /// The merchant name.
        merchant: String,
        /// The transaction amount in minor units (cents).
        amount_cents: i64,
    },
}
