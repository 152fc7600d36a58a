//! Tool argument shapes accepted over the wire.

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use uigen_kit::FormField;

/// Arguments of `generate_component`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateComponentArgs {
    /// Registered component name.
    pub component: String,
    /// Raw attribute bag; validated before use.
    pub props: Option<JsonValue>,
    /// Inner content.
    pub children: Option<String>,
    /// Classes appended as the last `className` attribute.
    pub class_name: Option<String>,
    /// Wraps the markup in an importing module.
    #[serde(default)]
    pub include_imports: bool,
}

/// Arguments of `list_components`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListComponentsArgs {
    /// Category tag or `all`.
    pub category: Option<String>,
}

/// One entry of `compose_components`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComposeItem {
    /// Registered component name.
    #[serde(rename = "type")]
    pub component: String,
    /// Raw attribute bag.
    pub props: Option<JsonValue>,
    /// Inner content.
    pub children: Option<String>,
}

/// Arguments of `compose_components`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComposeComponentsArgs {
    /// Components in output order.
    pub components: Vec<ComposeItem>,
    /// Layout kind; unknown values fall back to vertical.
    pub layout: Option<String>,
}

/// Arguments of `generate_tailwind_classes`.
#[derive(Debug, Clone, Deserialize)]
pub struct TailwindClassesArgs {
    /// Table kind (`spacing`, `colors`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Overrides read by the spacing table.
    pub values: Option<Map<String, JsonValue>>,
}

/// Arguments of `create_responsive_layout`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsiveLayoutArgs {
    /// Layout template name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Accepted for compatibility; templates use fixed breakpoints.
    pub breakpoints: Option<Map<String, JsonValue>>,
}

/// Arguments of `create_form`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormArgs {
    /// Fields in output order.
    pub fields: Vec<FormField>,
    /// `single-column`, `two-column` or `inline`.
    pub layout: Option<String>,
    /// Emit state hooks and required-field checks.
    #[serde(default)]
    pub include_validation: bool,
}

/// Arguments of `get_component_docs`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentDocsArgs {
    /// Component name.
    pub component: String,
    /// `usage`, `props`, `examples` or `accessibility`.
    pub section: Option<String>,
}

/// Arguments of `check_accessibility`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessibilityArgs {
    /// Component name.
    pub component: String,
}
