//! Plugin registry — the authoritative catalog of product plugins, with
//! identity and category indices and the activation sweep.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, error, info};

use finhub_core::{AppError, AppResult};

use crate::activation::{ActivationFailure, ActivationReport};
use crate::manifest::{PluginManifest, ProductCategory, RouteDescriptor};

/// Trait that all product plugins implement.
#[async_trait]
pub trait ProductPlugin: Send + Sync + std::fmt::Debug {
    /// Returns the plugin manifest.
    fn manifest(&self) -> PluginManifest;

    /// Called once during the host's activation sweep.
    ///
    /// The default implementation is a trivial success, for plugins with
    /// no activation work.
    async fn on_activate(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Mutable registry state.
///
/// Invariant: every id in `order` and every id in `categories` refers to
/// an entry in `plugins`.
#[derive(Default)]
struct RegistryState {
    /// Plugin ID → plugin instance (primary store).
    plugins: HashMap<String, Arc<dyn ProductPlugin>>,
    /// Plugin IDs in registration order.
    order: Vec<String>,
    /// Category → owning plugin ID. First registration wins.
    categories: HashMap<ProductCategory, String>,
}

/// Registry of all product plugins.
pub struct PluginRegistry {
    state: RwLock<RegistryState>,
}

impl PluginRegistry {
    /// Creates a new empty plugin registry.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Registers a plugin.
    ///
    /// Rejects a duplicate id with a conflict error, leaving the original
    /// registration intact. Each declared category is indexed
    /// first-writer-wins: a later plugin never takes over an owned slot.
    pub fn register(&self, plugin: Arc<dyn ProductPlugin>) -> AppResult<()> {
        let manifest = plugin.manifest();
        manifest.validate()?;

        let mut state = self.write_state();
        if state.plugins.contains_key(&manifest.id) {
            return Err(AppError::conflict(format!(
                "plugin '{}' is already registered",
                manifest.id
            )));
        }

        for category in &manifest.categories {
            state
                .categories
                .entry(*category)
                .or_insert_with(|| manifest.id.clone());
        }
        state.order.push(manifest.id.clone());
        state.plugins.insert(manifest.id.clone(), plugin);

        info!(
            plugin_id = %manifest.id,
            name = %manifest.name,
            categories = manifest.categories.len(),
            "Plugin registered"
        );

        Ok(())
    }

    /// Removes the plugin with this id from the primary store and from
    /// every category slot it owns.
    ///
    /// Unregistering an unknown id is a silent no-op: cleanup must be safe
    /// to call speculatively.
    pub fn unregister(&self, plugin_id: &str) {
        let mut state = self.write_state();
        if state.plugins.remove(plugin_id).is_none() {
            debug!(plugin_id = %plugin_id, "Unregister of unknown plugin ignored");
            return;
        }
        state.order.retain(|id| id != plugin_id);
        state.categories.retain(|_, owner| owner != plugin_id);

        info!(plugin_id = %plugin_id, "Plugin unregistered");
    }

    /// Gets a plugin by id.
    pub fn get(&self, plugin_id: &str) -> Option<Arc<dyn ProductPlugin>> {
        let state = self.read_state();
        state.plugins.get(plugin_id).cloned()
    }

    /// Resolves the plugin owning a product category.
    pub fn get_for_category(&self, category: ProductCategory) -> Option<Arc<dyn ProductPlugin>> {
        let state = self.read_state();
        state
            .categories
            .get(&category)
            .and_then(|id| state.plugins.get(id))
            .cloned()
    }

    /// Returns the capability list of the plugin owning a category, or an
    /// empty list when the category is unclaimed.
    pub fn capabilities_for_category(&self, category: ProductCategory) -> Vec<String> {
        self.get_for_category(category)
            .map(|plugin| plugin.manifest().capabilities)
            .unwrap_or_default()
    }

    /// Returns a snapshot of every registered plugin, in registration
    /// order.
    pub fn list(&self) -> Vec<Arc<dyn ProductPlugin>> {
        let state = self.read_state();
        state
            .order
            .iter()
            .filter_map(|id| state.plugins.get(id))
            .cloned()
            .collect()
    }

    /// Returns the concatenation of every registered plugin's routes, in
    /// registration order. Recomputed from current state on each call.
    pub fn routes(&self) -> Vec<RouteDescriptor> {
        self.list()
            .into_iter()
            .flat_map(|plugin| plugin.manifest().routes)
            .collect()
    }

    /// Returns the number of registered plugins.
    pub fn count(&self) -> usize {
        let state = self.read_state();
        state.plugins.len()
    }

    /// Checks whether a plugin id is registered.
    pub fn contains(&self, plugin_id: &str) -> bool {
        let state = self.read_state();
        state.plugins.contains_key(plugin_id)
    }

    /// Runs every registered plugin's activation hook concurrently and
    /// waits for all of them to settle.
    ///
    /// Individual failures are logged and recorded in the report; the
    /// sweep itself never fails and never aborts the remaining plugins.
    pub async fn activate_all(&self) -> ActivationReport {
        let plugins: Vec<(String, Arc<dyn ProductPlugin>)> = {
            let state = self.read_state();
            state
                .order
                .iter()
                .filter_map(|id| state.plugins.get(id).map(|p| (id.clone(), Arc::clone(p))))
                .collect()
        };

        info!(plugin_count = plugins.len(), "Starting activation sweep");

        let outcomes = join_all(plugins.into_iter().map(|(id, plugin)| async move {
            let result = plugin.on_activate().await;
            (id, result)
        }))
        .await;

        let mut report = ActivationReport::default();
        for (id, result) in outcomes {
            match result {
                Ok(()) => {
                    debug!(plugin_id = %id, "Plugin activated");
                    report.activated.push(id);
                }
                Err(e) => {
                    error!(plugin_id = %id, error = %e, "Plugin activation failed");
                    report.failed.push(ActivationFailure {
                        plugin_id: id,
                        message: e.to_string(),
                    });
                }
            }
        }

        info!(
            activated = report.activated.len(),
            failed = report.failed.len(),
            "Activation sweep complete"
        );

        report
    }

    fn read_state(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("count", &self.count())
            .finish()
    }
}
