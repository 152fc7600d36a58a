//! Markdown documentation rendered from component descriptors.

use crate::codegen::{DEFAULT_PACKAGE, Generator};
use crate::registry::{ComponentDescriptor, PropSpec, Registry, ValueKind};
use serde_json::Value as JsonValue;
use std::fmt::Write as FmtWrite;
use uigen_core::escape_for_display;

/// Documentation section selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocSection {
    /// Description, basic usage and import lines.
    #[default]
    Usage,
    /// Prop reference table and TypeScript interface.
    Props,
    /// Literal usage examples.
    Examples,
    /// Accessibility features and keyboard support.
    Accessibility,
}

impl DocSection {
    /// Parses a section name; unknown names select [`DocSection::Usage`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("props") => DocSection::Props,
            Some("examples") => DocSection::Examples,
            Some("accessibility") => DocSection::Accessibility,
            _ => DocSection::Usage,
        }
    }
}

fn not_found(registry: &Registry, name: &str) -> String {
    format!(
        "Component \"{}\" not found. Available components: {}",
        escape_for_display(name),
        registry.names().collect::<Vec<_>>().join(", ")
    )
}

/// Renders one documentation section for a registered component.
///
/// Unknown components yield a not-found message rather than an error.
pub fn component_docs(registry: &Registry, name: &str, section: Option<&str>) -> String {
    let Some(component) = registry.lookup(name) else {
        log::debug!("Docs requested for unknown component {:?}", name);
        return not_found(registry, name);
    };

    match DocSection::from_name(section) {
        DocSection::Usage => usage_doc(registry, component),
        DocSection::Props => props_doc(component),
        DocSection::Examples => examples_doc(registry, component),
        DocSection::Accessibility => accessibility_doc(component),
    }
}

/// First example of a component, or a generated bare invocation.
fn primary_example(registry: &Registry, component: &ComponentDescriptor) -> String {
    component.examples.first().cloned().unwrap_or_else(|| {
        Generator::new(registry)
            .generate(&component.name, None, None, None)
            .unwrap_or_else(|_| format!("<{} />", component.name))
    })
}

fn usage_doc(registry: &Registry, component: &ComponentDescriptor) -> String {
    let name = &component.name;
    let features = if component.accessibility.is_empty() {
        "- None listed".to_string()
    } else {
        format!("- {}", component.accessibility.join("\n- "))
    };

    format!(
        "# {name} Component\n\n\
         ## Description\n{description}\n\n\
         ## Basic Usage\n\
         ```jsx\n\
         import {{ {name} }} from '{DEFAULT_PACKAGE}';\n\n\
         function MyComponent() {{\n  return (\n    {example}\n  );\n}}\n\
         ```\n\n\
         ## Category\n{category}\n\n\
         ## Key Features\n{features}\n\n\
         ## Installation\n```bash\nnpm install {DEFAULT_PACKAGE}\n```\n\n\
         ## Import\n```jsx\nimport {{ {name} }} from '{DEFAULT_PACKAGE}';\nimport '{DEFAULT_PACKAGE}/styles.css';\n```",
        description = component.description,
        example = primary_example(registry, component),
        category = component.category,
    )
}

fn display_default(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn typescript_type(spec: &PropSpec) -> String {
    match (&spec.options, spec.value_kind) {
        (Some(options), _) if !options.is_empty() => format!("'{}'", options.join("' | '")),
        (_, ValueKind::Function) => "() => void".to_string(),
        (_, ValueKind::Array) => "unknown[]".to_string(),
        (_, ValueKind::Object) => "Record<string, unknown>".to_string(),
        (_, kind) => kind.as_str().to_string(),
    }
}

fn props_doc(component: &ComponentDescriptor) -> String {
    let name = &component.name;
    let mut out = format!(
        "# {name} Props\n\n## Props Reference\n\n\
         | Prop | Type | Required | Default | Description | Options |\n\
         |------|------|----------|---------|-------------|---------|\n"
    );

    for (prop, spec) in &component.props {
        let default = spec
            .default
            .as_ref()
            .map(|d| format!("`{}`", display_default(d)))
            .unwrap_or_else(|| "-".to_string());
        let options = spec
            .options
            .as_ref()
            .map(|o| format!("`{}`", o.join("` | `")))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "| {prop} | `{}` | {} | {default} | {} | {options} |",
            spec.value_kind.as_str(),
            if spec.required { "Yes" } else { "No" },
            spec.description,
        )
        .ok();
    }

    write!(
        out,
        "\n## TypeScript Interface\n```typescript\ninterface {name}Props {{\n"
    )
    .ok();
    for (prop, spec) in &component.props {
        let optional = if spec.required { "" } else { "?" };
        writeln!(out, "  {prop}{optional}: {};", typescript_type(spec)).ok();
    }
    out.push_str("}\n```");
    out
}

fn examples_doc(registry: &Registry, component: &ComponentDescriptor) -> String {
    let name = &component.name;
    let examples = if component.examples.is_empty() {
        vec![primary_example(registry, component)]
    } else {
        component.examples.clone()
    };

    let rendered = examples
        .iter()
        .enumerate()
        .map(|(index, example)| format!("### Example {}\n```jsx\n{example}\n```", index + 1))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "# {name} Examples\n\n## Live Examples\n\n{rendered}\n\n\
         ## With Custom Theming\n```jsx\n\
         import {{ ThemeProvider, {name} }} from '{DEFAULT_PACKAGE}';\n\n\
         const customTheme = {{\n  colors: {{\n    primary: '#007bff',\n    secondary: '#6c757d'\n  }}\n}};\n\n\
         function ThemedExample() {{\n  return (\n    <ThemeProvider theme={{customTheme}}>\n      {example}\n    </ThemeProvider>\n  );\n}}\n```",
        example = primary_example(registry, component),
    )
}

fn accessibility_doc(component: &ComponentDescriptor) -> String {
    let name = &component.name;
    let features = component
        .accessibility
        .iter()
        .map(|feature| {
            format!("### {feature}\n- Fully implemented and tested\n- Complies with WCAG 2.1 Level AA standards")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "# {name} Accessibility\n\n## Accessibility Features\n\n{features}\n\n\
         ## ARIA Attributes\n\n\
         The {name} component includes the following ARIA attributes:\n\n\
         - `role`: Appropriate ARIA role for the component\n\
         - `aria-label`: Descriptive label for screen readers\n\
         - `aria-describedby`: Associates with description elements\n\
         - `aria-disabled`: Indicates disabled state\n\n\
         ## Keyboard Navigation\n\n\
         | Key | Action |\n|-----|--------|\n\
         | Tab | Move focus to/from component |\n\
         | Enter | Activate component |\n\
         | Space | Toggle component (if applicable) |\n\
         | Arrow Keys | Navigate within component (if applicable) |\n\
         | Escape | Close/cancel action (if applicable) |"
    )
}

/// Renders an accessibility checklist for a registered component.
pub fn check_accessibility(registry: &Registry, name: &str) -> String {
    let Some(component) = registry.lookup(name) else {
        return format!("Component \"{}\" not found.", escape_for_display(name));
    };

    let checks = component
        .accessibility
        .iter()
        .map(|feature| format!("- ✓ {feature}"))
        .collect::<Vec<_>>()
        .join("\n");
    let id = component.name.to_lowercase();
    let name = &component.name;

    format!(
        "# {name} Accessibility Check\n\n\
         ## ✅ Accessibility Features\n{checks}\n\n\
         ### Manual Testing Checklist\n\
         - [ ] Test with keyboard only navigation\n\
         - [ ] Test with screen reader (NVDA/JAWS/VoiceOver)\n\
         - [ ] Verify color contrast in light/dark modes\n\
         - [ ] Check focus indicators visibility\n\
         - [ ] Validate ARIA labels and descriptions\n\n\
         ### Code Example with Full Accessibility\n```jsx\n\
         <{name}\n  id=\"accessible-{id}\"\n  aria-label=\"Descriptive label\"\n  aria-describedby=\"help-text\"\n  tabIndex={{0}}\n>\n  Accessible Content\n</{name}>\n\
         <span id=\"help-text\" className=\"sr-only\">\n  Additional help text for screen readers\n</span>\n```"
    )
}
