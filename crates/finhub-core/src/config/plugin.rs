//! Plugin system configuration.

use serde::{Deserialize, Serialize};

/// Plugin system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Whether to run the activation sweep automatically after bootstrap.
    #[serde(default = "default_true")]
    pub auto_activate: bool,
    /// Plugin ids to skip during registration.
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            auto_activate: default_true(),
            disabled: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
