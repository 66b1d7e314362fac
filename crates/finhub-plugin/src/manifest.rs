//! Plugin manifest types — the shape a product module exports to be
//! registrable.
//!
//! The registry treats `components` and `routes` as opaque pass-through;
//! only identity and categories are interpreted, and routes are
//! concatenated for the host UI.

use serde::{Deserialize, Serialize};

use finhub_core::{AppError, AppResult};

/// Product categories a plugin can claim ownership of.
///
/// The host UI resolves exactly one owning plugin per category slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// Credit card products.
    CreditCard,
    /// Buy-now-pay-later products.
    Bnpl,
    /// Savings accounts.
    Savings,
    /// Checking accounts.
    Checking,
    /// Personal loans.
    PersonalLoan,
    /// Investment accounts.
    Investment,
}

impl ProductCategory {
    /// Returns the snake_case name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::Bnpl => "bnpl",
            Self::Savings => "savings",
            Self::Checking => "checking",
            Self::PersonalLoan => "personal_loan",
            Self::Investment => "investment",
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// UI slots a plugin component can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentSlot {
    /// The dashboard summary card.
    SummaryCard,
    /// The full product detail view.
    DetailView,
    /// The product settings panel.
    SettingsPanel,
}

/// Opaque reference to a UI component a plugin offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRef {
    /// The slot the component fills.
    pub slot: ComponentSlot,
    /// The exported component name, resolved by the host renderer.
    pub export: String,
}

impl ComponentRef {
    /// Creates a new component reference.
    pub fn new(slot: ComponentSlot, export: impl Into<String>) -> Self {
        Self {
            slot,
            export: export.into(),
        }
    }
}

/// Navigable path a plugin contributes to the host router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// The route path (e.g. `"/cards"`).
    pub path: String,
    /// The exported component rendered at this path.
    pub component: String,
    /// Optional navigation title.
    pub title: Option<String>,
}

impl RouteDescriptor {
    /// Creates a new route descriptor.
    pub fn new(path: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            component: component.into(),
            title: None,
        }
    }

    /// Sets the navigation title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Manifest a plugin exports to describe itself to the registry.
///
/// The `id` is the primary key and is immutable after registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Unique plugin identifier.
    pub id: String,
    /// Human-readable plugin name.
    pub name: String,
    /// Plugin description.
    pub description: String,
    /// Icon name for the host UI.
    #[serde(default)]
    pub icon: String,
    /// Accent color for the host UI.
    #[serde(default)]
    pub color: String,
    /// Product categories this plugin handles. Must be non-empty.
    pub categories: Vec<ProductCategory>,
    /// Named operations the plugin supports, used for capability gating.
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// UI components the plugin offers.
    #[serde(default)]
    pub components: Vec<ComponentRef>,
    /// Routes the plugin contributes to the host router.
    #[serde(default)]
    pub routes: Vec<RouteDescriptor>,
}

impl PluginManifest {
    /// Creates a manifest with identity fields only.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: String::new(),
            color: String::new(),
            categories: Vec::new(),
            capabilities: Vec::new(),
            components: Vec::new(),
            routes: Vec::new(),
        }
    }

    /// Sets the icon name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Sets the accent color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Claims a product category.
    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.categories.push(category);
        self
    }

    /// Declares a supported capability.
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }

    /// Adds a UI component reference.
    pub fn with_component(mut self, component: ComponentRef) -> Self {
        self.components.push(component);
        self
    }

    /// Adds a route.
    pub fn with_route(mut self, route: RouteDescriptor) -> Self {
        self.routes.push(route);
        self
    }

    /// Validates that this manifest is registrable.
    pub fn validate(&self) -> AppResult<()> {
        if self.id.is_empty() {
            return Err(AppError::validation("plugin id cannot be empty"));
        }
        if self.name.is_empty() {
            return Err(AppError::validation(format!(
                "plugin '{}' has an empty name",
                self.id
            )));
        }
        if self.categories.is_empty() {
            return Err(AppError::validation(format!(
                "plugin '{}' declares no product categories",
                self.id
            )));
        }
        Ok(())
    }
}
