//! # finhub-plugin
//!
//! Plugin framework for FinHub. Provides:
//!
//! - The [`ProductPlugin`] trait and the manifest contract plugins export
//! - [`PluginRegistry`] with identity and product-category indices
//! - The asynchronous settle-all activation protocol with per-plugin
//!   fault isolation

pub mod activation;
pub mod manifest;
pub mod registry;

pub use activation::{ActivationFailure, ActivationReport};
pub use manifest::{ComponentRef, ComponentSlot, PluginManifest, ProductCategory, RouteDescriptor};
pub use registry::{PluginRegistry, ProductPlugin};
