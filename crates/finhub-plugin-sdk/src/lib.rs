//! # finhub-plugin-sdk
//!
//! SDK for developing product plugins for FinHub.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use finhub_plugin_sdk::prelude::*;
//!
//! #[derive(Debug)]
//! struct SavingsPlugin;
//!
//! #[async_trait]
//! impl ProductPlugin for SavingsPlugin {
//!     fn manifest(&self) -> PluginManifest {
//!         let manifest = plugin_manifest! {
//!             id: "savings",
//!             name: "Savings",
//!             description: "Savings accounts module",
//!             categories: [ProductCategory::Savings],
//!         };
//!         manifest
//!             .with_capability("open_account")
//!             .with_route(RouteDescriptor::new("/savings", "SavingsDetail"))
//!     }
//!
//!     async fn on_activate(&self) -> AppResult<()> {
//!         Ok(())
//!     }
//! }
//! ```

pub mod macros;

/// Prelude for convenient imports.
pub mod prelude {
    pub use async_trait::async_trait;

    pub use finhub_core::events::{
        AccountEvent, AiEvent, BnplEvent, CardEvent, CardStatus, Event, EventPayload, EventSource,
        EventType, InsightSeverity,
    };
    pub use finhub_core::{AppError, AppResult};
    pub use finhub_events::{EventBus, EventSelector, Subscription};
    pub use finhub_plugin::{
        ActivationReport, ComponentRef, ComponentSlot, PluginManifest, PluginRegistry,
        ProductCategory, ProductPlugin, RouteDescriptor,
    };

    pub use crate::plugin_manifest;
}
