//! FinHub Shell — host application for the product plugin system.
//!
//! Main entry point that constructs the event bus and plugin registry,
//! registers the product plugins, and runs the activation sweep.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

use finhub_core::config::AppConfig;
use finhub_core::error::AppError;
use finhub_core::events::{AccountEvent, Event, EventPayload, EventSource};
use finhub_events::EventBus;
use finhub_plugin::{PluginRegistry, ProductPlugin};
use plugin_bnpl::BnplPlugin;
use plugin_credit_card::CreditCardPlugin;

#[tokio::main]
async fn main() {
    let env = std::env::var("FINHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main shell run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FinHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Core services ────────────────────────────────────
    let bus = Arc::new(EventBus::new());
    let registry = Arc::new(PluginRegistry::new());

    // ── Step 2: Register product plugins ─────────────────────────
    let credit_card = Arc::new(CreditCardPlugin::new(Arc::clone(&bus)));
    let activity = credit_card.activity();
    let bnpl = Arc::new(BnplPlugin::new(Arc::clone(&bus)));

    let plugins: Vec<Arc<dyn ProductPlugin>> = vec![credit_card, bnpl];
    for plugin in plugins {
        let manifest = plugin.manifest();
        if config.plugins.disabled.contains(&manifest.id) {
            tracing::info!(plugin_id = %manifest.id, "Plugin disabled by configuration");
            continue;
        }
        registry.register(plugin)?;
    }

    // ── Step 3: Activation sweep ─────────────────────────────────
    if config.plugins.auto_activate {
        let report = registry.activate_all().await;
        if report.is_complete() {
            tracing::info!(activated = report.activated.len(), "All plugins activated");
        } else {
            for failure in &report.failed {
                tracing::warn!(
                    plugin_id = %failure.plugin_id,
                    message = %failure.message,
                    "Plugin failed to activate"
                );
            }
        }
    } else {
        tracing::info!("Automatic activation disabled by configuration");
    }

    // ── Step 4: Host view ────────────────────────────────────────
    for plugin in registry.list() {
        let manifest = plugin.manifest();
        tracing::info!(
            plugin_id = %manifest.id,
            name = %manifest.name,
            categories = manifest.categories.len(),
            capabilities = manifest.capabilities.len(),
            "Product module available"
        );
    }
    for route in registry.routes() {
        tracing::info!(path = %route.path, component = %route.component, "Route registered");
    }

    // ── Step 5: Demo traffic ─────────────────────────────────────
    bus.publish(&Event::new(
        Uuid::new_v4().to_string(),
        EventSource::new("finhub", "shell"),
        EventPayload::Account(AccountEvent::PaymentSubmitted {
            account_id: Uuid::new_v4(),
            amount_cents: 125_000,
            currency: "USD".to_string(),
        }),
    ));
    tracing::info!(
        feed_entries = activity.len(),
        "Credit card activity feed after demo publish"
    );

    Ok(())
}
