//! AI insight domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How prominently the host should surface an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSeverity {
    /// Informational, shown passively.
    Info,
    /// A suggestion the user may act on.
    Suggestion,
    /// Needs attention soon.
    Warning,
}

/// Events related to AI-generated insights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AiEvent {
    /// The AI layer generated a new insight.
    InsightGenerated {
        /// The insight ID.
        insight_id: Uuid,
        /// The product category the insight concerns.
        category: String,
        /// Short human-readable headline.
        title: String,
        /// Display prominence.
        severity: InsightSeverity,
    },
    /// A user dismissed an insight.
    InsightDismissed {
        /// The dismissed insight.
        insight_id: Uuid,
    },
}
