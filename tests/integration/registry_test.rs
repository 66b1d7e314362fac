//! Integration tests for plugin registration, lookup, and aggregation.

mod helpers;

use std::sync::Arc;

use finhub_core::error::ErrorKind;
use finhub_events::EventBus;
use finhub_plugin::{
    PluginRegistry, ProductCategory, ProductPlugin, RouteDescriptor,
};
use plugin_bnpl::BnplPlugin;
use plugin_credit_card::CreditCardPlugin;

use helpers::{StubPlugin, manifest};

#[test]
fn duplicate_id_is_rejected_and_first_registration_survives() {
    let registry = PluginRegistry::new();
    let original = StubPlugin::new(
        manifest("cards", ProductCategory::CreditCard).with_capability("freeze_card"),
    );
    let imposter = StubPlugin::new(manifest("cards", ProductCategory::Savings));

    registry.register(original).unwrap();
    let err = registry.register(imposter).unwrap_err();

    assert_eq!(err.kind, ErrorKind::Conflict);
    let kept = registry.get("cards").unwrap();
    assert_eq!(kept.manifest().capabilities, vec!["freeze_card"]);
    assert_eq!(kept.manifest().categories, vec![ProductCategory::CreditCard]);
    assert_eq!(registry.count(), 1);
}

#[test]
fn category_lookup_resolves_declared_and_misses_undeclared() {
    let registry = PluginRegistry::new();
    registry
        .register(StubPlugin::new(manifest("cards", ProductCategory::CreditCard)))
        .unwrap();

    let owner = registry.get_for_category(ProductCategory::CreditCard).unwrap();
    assert_eq!(owner.manifest().id, "cards");
    assert!(registry.get_for_category(ProductCategory::Savings).is_none());
}

#[test]
fn first_registration_wins_category_ties() {
    let registry = PluginRegistry::new();
    registry
        .register(StubPlugin::new(manifest("first", ProductCategory::Savings)))
        .unwrap();
    registry
        .register(StubPlugin::new(manifest("second", ProductCategory::Savings)))
        .unwrap();

    let owner = registry.get_for_category(ProductCategory::Savings).unwrap();
    assert_eq!(owner.manifest().id, "first");
}

#[test]
fn capabilities_project_through_the_category_index() {
    let registry = PluginRegistry::new();
    registry
        .register(StubPlugin::new(
            manifest("cards", ProductCategory::CreditCard)
                .with_capability("freeze_card")
                .with_capability("view_statements"),
        ))
        .unwrap();

    assert_eq!(
        registry.capabilities_for_category(ProductCategory::CreditCard),
        vec!["freeze_card", "view_statements"]
    );
    assert!(registry
        .capabilities_for_category(ProductCategory::Investment)
        .is_empty());
}

#[test]
fn unregister_clears_every_index_and_tolerates_unknown_ids() {
    let registry = PluginRegistry::new();
    registry
        .register(StubPlugin::new(manifest("cards", ProductCategory::CreditCard)))
        .unwrap();

    registry.unregister("cards");

    assert!(registry.get("cards").is_none());
    assert!(registry.get_for_category(ProductCategory::CreditCard).is_none());
    assert_eq!(registry.count(), 0);

    registry.unregister("cards");
    registry.unregister("never-existed");
}

#[test]
fn routes_concatenate_in_registration_order_and_track_removal() {
    let registry = PluginRegistry::new();
    registry
        .register(StubPlugin::new(
            manifest("cards", ProductCategory::CreditCard)
                .with_route(RouteDescriptor::new("/cards", "CardDetail"))
                .with_route(RouteDescriptor::new("/cards/statements", "Statements")),
        ))
        .unwrap();
    registry
        .register(StubPlugin::new(
            manifest("bnpl", ProductCategory::Bnpl)
                .with_route(RouteDescriptor::new("/bnpl", "BnplDetail")),
        ))
        .unwrap();

    let routes = registry.routes();
    assert_eq!(routes.len(), 3);
    assert_eq!(routes[0].path, "/cards");
    assert_eq!(routes[1].path, "/cards/statements");
    assert_eq!(routes[2].path, "/bnpl");

    registry.unregister("cards");
    let routes = registry.routes();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].path, "/bnpl");
}

#[test]
fn list_returns_insertion_order_snapshot() {
    let registry = PluginRegistry::new();
    registry
        .register(StubPlugin::new(manifest("alpha", ProductCategory::Savings)))
        .unwrap();
    registry
        .register(StubPlugin::new(manifest("beta", ProductCategory::Checking)))
        .unwrap();
    registry
        .register(StubPlugin::new(manifest("gamma", ProductCategory::Investment)))
        .unwrap();

    let ids: Vec<String> = registry.list().iter().map(|p| p.manifest().id).collect();
    assert_eq!(ids, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn two_product_scenario_matches_the_host_contract() {
    let registry = PluginRegistry::new();
    let plugin_a = StubPlugin::new(
        manifest("cards", ProductCategory::CreditCard)
            .with_capability("freeze_card")
            .with_capability("view_statements")
            .with_route(RouteDescriptor::new("/cards", "CardDetail")),
    );
    let plugin_b = StubPlugin::new(
        manifest("bnpl", ProductCategory::Bnpl)
            .with_route(RouteDescriptor::new("/bnpl", "BnplDetail")),
    );

    registry.register(plugin_a).unwrap();
    registry.register(plugin_b).unwrap();

    assert_eq!(registry.list().len(), 2);
    assert_eq!(registry.routes().len(), 2);
    assert_eq!(
        registry
            .get_for_category(ProductCategory::CreditCard)
            .unwrap()
            .manifest()
            .id,
        "cards"
    );
    assert!(registry.get_for_category(ProductCategory::Savings).is_none());
}

#[test]
fn shipped_product_plugins_register_side_by_side() {
    let bus = Arc::new(EventBus::new());
    let registry = PluginRegistry::new();

    registry
        .register(Arc::new(CreditCardPlugin::new(Arc::clone(&bus))) as Arc<dyn ProductPlugin>)
        .unwrap();
    registry
        .register(Arc::new(BnplPlugin::new(Arc::clone(&bus))) as Arc<dyn ProductPlugin>)
        .unwrap();

    assert_eq!(registry.count(), 2);
    assert_eq!(
        registry
            .get_for_category(ProductCategory::CreditCard)
            .unwrap()
            .manifest()
            .id,
        "credit-card"
    );
    assert_eq!(
        registry
            .get_for_category(ProductCategory::Bnpl)
            .unwrap()
            .manifest()
            .id,
        "bnpl"
    );
    assert_eq!(registry.routes().len(), 2);
}
