//! Convenience macros for plugin development.

/// Macro for building a plugin manifest literal.
///
/// # Example
/// ```rust,ignore
/// let manifest = plugin_manifest! {
///     id: "credit-card",
///     name: "Credit Card",
///     description: "Credit card product module",
///     categories: [ProductCategory::CreditCard],
/// };
/// ```
#[macro_export]
macro_rules! plugin_manifest {
    (
        id: $id:expr,
        name: $name:expr,
        description: $desc:expr,
        categories: [$($category:expr),+ $(,)?] $(,)?
    ) => {{
        let mut manifest = $crate::prelude::PluginManifest::new($id, $name, $desc);
        $(
            manifest = manifest.with_category($category);
        )+
        manifest
    }};
    (
        id: $id:expr,
        name: $name:expr,
        description: $desc:expr,
        icon: $icon:expr,
        color: $color:expr,
        categories: [$($category:expr),+ $(,)?] $(,)?
    ) => {{
        let mut manifest = $crate::prelude::PluginManifest::new($id, $name, $desc)
            .with_icon($icon)
            .with_color($color);
        $(
            manifest = manifest.with_category($category);
        )+
        manifest
    }};
}
