//! Markup generation and composition.
//!
//! [`Generator`] turns a `(name, attributes, children, extra class)` request
//! into a component invocation string, and composes several invocations into
//! a layout container.

use crate::registry::Registry;
use serde_json::Value as JsonValue;
use uigen_core::{
    AttrValue, AttributeBag, LayoutKind, Result, UiError, js_number_text, normalize_json,
    sanitize_attributes, validate_layout_kind,
};

/// Attribute key that receives the extra class.
pub const CLASS_NAME_KEY: &str = "className";

/// Package imported by [`Generator::generate_with_imports`] unless overridden.
pub const DEFAULT_PACKAGE: &str = "its-just-ui";

/// Separator placed between composed fragments.
const FRAGMENT_SEPARATOR: &str = "\n  ";

/// Container class for each layout with its own entry.
const LAYOUT_CLASSES: [(LayoutKind, &str); 3] = [
    (LayoutKind::Vertical, "flex flex-col gap-4"),
    (LayoutKind::Horizontal, "flex flex-row gap-4"),
    (
        LayoutKind::Grid,
        "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
    ),
];

/// One item of a composition request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationRequest {
    /// Registered component name.
    pub component_name: String,
    /// Attributes for the invocation.
    pub attributes: Option<AttributeBag>,
    /// Children text.
    pub children: Option<String>,
}

impl GenerationRequest {
    /// Creates a request for a component without attributes or children.
    pub fn new(component_name: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
            attributes: None,
            children: None,
        }
    }

    /// Sets the attribute bag.
    pub fn with_attributes(mut self, attributes: AttributeBag) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Sets the children text.
    pub fn with_children(mut self, children: impl Into<String>) -> Self {
        self.children = Some(children.into());
        self
    }
}

/// Returns the container class for a layout.
///
/// Layouts without a table entry (the form-only variants) use the vertical
/// class.
///
/// # Examples
///
/// ```
/// use uigen_core::LayoutKind;
/// use uigen_kit::codegen::layout_class;
///
/// assert_eq!(layout_class(LayoutKind::Horizontal), "flex flex-row gap-4");
/// assert_eq!(layout_class(LayoutKind::Inline), "flex flex-col gap-4");
/// ```
pub fn layout_class(layout: LayoutKind) -> &'static str {
    let (_, vertical) = LAYOUT_CLASSES[0];
    LAYOUT_CLASSES
        .iter()
        .find(|(kind, _)| *kind == layout)
        .map(|(_, class)| *class)
        .unwrap_or(vertical)
}

/// Serializes one attribute, or `None` when the entry emits nothing.
fn format_attribute(key: &str, value: &AttrValue) -> Option<String> {
    match value {
        AttrValue::Boolean(true) => Some(key.to_string()),
        AttrValue::Boolean(false) => None,
        AttrValue::String(text) => Some(format!("{key}=\"{text}\"")),
        AttrValue::Number(number) => Some(format!("{key}={{{}}}", js_number_text(number))),
        AttrValue::Object(map) => {
            let json = normalize_json(JsonValue::Object(map.clone()));
            Some(format!("{key}={{{json}}}"))
        }
        AttrValue::Array(items) => {
            let json = normalize_json(JsonValue::Array(items.clone()));
            Some(format!("{key}={{{json}}}"))
        }
        AttrValue::Callable(source) => Some(format!("{key}={{{source}}}")),
        AttrValue::Absent => None,
    }
}

/// Serializes an attribute bag into an attribute list.
///
/// Fragments follow bag order, are joined by single spaces and carry one
/// leading space. An empty string is returned when nothing survives. The
/// bag is formatted as given; sanitizing is the caller's job.
///
/// # Examples
///
/// ```
/// use uigen_core::AttributeBag;
/// use uigen_kit::codegen::format_attributes;
///
/// let mut bag = AttributeBag::new();
/// bag.insert("variant", "primary");
/// bag.insert("disabled", true);
/// bag.insert("loading", false);
/// bag.insert("maxLength", 100);
/// assert_eq!(
///     format_attributes(&bag),
///     " variant=\"primary\" disabled maxLength={100}"
/// );
/// assert_eq!(format_attributes(&AttributeBag::new()), "");
/// ```
pub fn format_attributes(bag: &AttributeBag) -> String {
    let fragments: Vec<String> = bag
        .iter()
        .filter_map(|(key, value)| format_attribute(key, value))
        .filter(|fragment| !fragment.is_empty())
        .collect();

    if fragments.is_empty() {
        String::new()
    } else {
        format!(" {}", fragments.join(" "))
    }
}

/// Generates markup from descriptors held by a [`Registry`].
#[derive(Debug, Clone, Copy)]
pub struct Generator<'r> {
    registry: &'r Registry,
}

impl<'r> Generator<'r> {
    /// Creates a generator over `registry`.
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// The registry this generator reads from.
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Generates one component invocation.
    ///
    /// Fails with [`UiError::UnknownComponent`] when `name` is not registered.
    /// Attributes are sanitized, `extra_class` is appended last under
    /// `className`, and non-empty `children` produce the wrapping form
    /// instead of the self-closing one.
    pub fn generate(
        &self,
        name: &str,
        attributes: Option<&AttributeBag>,
        children: Option<&str>,
        extra_class: Option<&str>,
    ) -> Result<String> {
        if self.registry.lookup(name).is_none() {
            return Err(UiError::unknown_component(name));
        }

        let mut bag = attributes.map(sanitize_attributes).unwrap_or_default();
        if let Some(class) = extra_class.filter(|c| !c.is_empty()) {
            bag.push_last(CLASS_NAME_KEY, class);
        }
        let attrs = format_attributes(&bag);

        log::debug!("Generating <{}> with {} attributes", name, bag.len());

        Ok(match children.filter(|c| !c.is_empty()) {
            Some(children) => format!("<{name}{attrs}>\n  {children}\n</{name}>"),
            None => format!("<{name}{attrs} />"),
        })
    }

    /// Generates each request in order and wraps them in a layout container.
    ///
    /// The first failing item aborts the whole composition.
    pub fn compose(&self, requests: &[GenerationRequest], layout: Option<&str>) -> Result<String> {
        let layout = validate_layout_kind(layout);
        let fragments = requests
            .iter()
            .map(|request| {
                self.generate(
                    &request.component_name,
                    request.attributes.as_ref(),
                    request.children.as_deref(),
                    None,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(format!(
            "<div className=\"{}\">\n  {}\n</div>",
            layout_class(layout),
            fragments.join(FRAGMENT_SEPARATOR)
        ))
    }

    /// Generates a component wrapped in a module importing it from `package`.
    pub fn generate_with_imports(
        &self,
        name: &str,
        attributes: Option<&AttributeBag>,
        children: Option<&str>,
        extra_class: Option<&str>,
        package: &str,
    ) -> Result<String> {
        let code = self.generate(name, attributes, children, extra_class)?;
        let body = code
            .lines()
            .map(|line| format!("    {line}"))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(format!(
            "import {{ {name} }} from '{package}';\nimport '{package}/styles.css';\n\n\
             export default function MyComponent() {{\n  return (\n    {}\n  );\n}}",
            body.trim()
        ))
    }
}
