//! Descriptor types for the component catalog.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Fixed set of component category tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Buttons, badges, chips, providers.
    Core,
    /// Menus, tabs, breadcrumbs.
    Navigation,
    /// Inputs and selection controls.
    Form,
    /// Cards, tables and other read-only presentation.
    DataDisplay,
    /// Alerts, toasts, progress.
    Feedback,
    /// Dialogs and structural containers.
    Layout,
}

impl Category {
    /// Every category, in listing order.
    pub const ALL: [Category; 6] = [
        Category::Core,
        Category::Navigation,
        Category::Form,
        Category::DataDisplay,
        Category::Feedback,
        Category::Layout,
    ];

    /// Tag name of the category (e.g. `data-display`).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Navigation => "navigation",
            Category::Form => "form",
            Category::DataDisplay => "data-display",
            Category::Feedback => "feedback",
            Category::Layout => "layout",
        }
    }

    /// Exact lookup by tag name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared kind of a prop value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Text value.
    String,
    /// Flag.
    Boolean,
    /// Numeric value.
    Number,
    /// Callback.
    Function,
    /// Object literal.
    Object,
    /// Array literal.
    Array,
}

impl ValueKind {
    /// Lowercase name used in documentation tables.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::Function => "function",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
        }
    }
}

/// Schema for one component prop.
///
/// `required` and `options` are documentation only; generation never
/// enforces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropSpec {
    /// Declared value kind.
    #[serde(rename = "type")]
    pub value_kind: ValueKind,
    /// Whether callers are expected to supply the prop.
    #[serde(default)]
    pub required: bool,
    /// Default value, matching `value_kind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<JsonValue>,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Allowed string literals, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl PropSpec {
    /// Creates an optional prop of the given kind.
    pub fn new(value_kind: ValueKind, description: impl Into<String>) -> Self {
        Self {
            value_kind,
            required: false,
            default: None,
            description: description.into(),
            options: None,
        }
    }

    /// Marks the prop as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, value: impl Into<JsonValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the allowed string literals.
    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|o| o.to_string()).collect());
        self
    }
}

/// Static metadata describing one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// Unique PascalCase identifier (e.g., "Button").
    pub name: String,
    /// Category tag.
    pub category: Category,
    /// One-line description.
    #[serde(default)]
    pub description: String,
    /// Prop schema keyed by prop name, in declaration order.
    #[serde(default)]
    pub props: IndexMap<String, PropSpec>,
    /// Literal usage snippets.
    #[serde(default)]
    pub examples: Vec<String>,
    /// Accessibility notes.
    #[serde(default)]
    pub accessibility: Vec<String>,
}

/// Top-level shape of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Descriptors to register, in file order.
    #[serde(default)]
    pub components: Vec<ComponentDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_name("all"), None);
        assert_eq!(Category::from_name("Form"), None);
    }

    #[test]
    fn category_serializes_as_tag() {
        let json = serde_json::to_string(&Category::DataDisplay).unwrap();
        assert_eq!(json, "\"data-display\"");
    }

    #[test]
    fn prop_spec_deserializes_with_defaults() {
        let spec: PropSpec =
            serde_json::from_str(r#"{"type": "string", "options": ["sm", "lg"]}"#).unwrap();
        assert_eq!(spec.value_kind, ValueKind::String);
        assert!(!spec.required);
        assert_eq!(spec.default, None);
        assert_eq!(spec.options, Some(vec!["sm".to_string(), "lg".to_string()]));
    }
}
