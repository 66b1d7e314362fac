//! Activation sweep results — one outcome per plugin, no short-circuiting.

use serde::{Deserialize, Serialize};

/// A single plugin's activation failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationFailure {
    /// The plugin that failed to activate.
    pub plugin_id: String,
    /// The failure message.
    pub message: String,
}

/// Aggregated outcome of an activation sweep.
///
/// The sweep itself never fails: every plugin settles independently and
/// lands in exactly one of the two lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivationReport {
    /// Plugins that activated successfully, in registration order.
    pub activated: Vec<String>,
    /// Plugins whose activation hook failed.
    pub failed: Vec<ActivationFailure>,
}

impl ActivationReport {
    /// Returns whether every plugin activated successfully.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Returns the total number of plugins that settled.
    pub fn total(&self) -> usize {
        self.activated.len() + self.failed.len()
    }
}
