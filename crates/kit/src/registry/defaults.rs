//! Default component catalog.
//!
//! These descriptors describe the its-just-ui component library and are what
//! [`Registry::with_defaults`](super::Registry::with_defaults) registers at
//! start-up.

use super::types::{Category, ComponentDescriptor, PropSpec, ValueKind};

/// Builds the default catalog in registration order.
///
/// # Example
///
/// ```
/// use uigen_kit::registry::defaults::default_catalog;
///
/// let catalog = default_catalog();
/// assert_eq!(catalog[0].name, "Button");
/// assert!(catalog.iter().any(|c| c.name == "ThemeProvider"));
/// ```
pub fn default_catalog() -> Vec<ComponentDescriptor> {
    vec![
        button(),
        badge(),
        chip(),
        input(),
        select(),
        checkbox(),
        card(),
        table(),
        alert(),
        dialog(),
        theme_provider(),
    ]
}

/// Names of the components in [`default_catalog`], in registration order.
pub fn default_component_names() -> &'static [&'static str] {
    &[
        "Button",
        "Badge",
        "Chip",
        "Input",
        "Select",
        "Checkbox",
        "Card",
        "Table",
        "Alert",
        "Dialog",
        "ThemeProvider",
    ]
}

fn descriptor(
    name: &str,
    category: Category,
    description: &str,
    props: Vec<(&str, PropSpec)>,
    examples: &[&str],
    accessibility: &[&str],
) -> ComponentDescriptor {
    ComponentDescriptor {
        name: name.to_string(),
        category,
        description: description.to_string(),
        props: props
            .into_iter()
            .map(|(key, spec)| (key.to_string(), spec))
            .collect(),
        examples: examples.iter().map(|e| e.to_string()).collect(),
        accessibility: accessibility.iter().map(|a| a.to_string()).collect(),
    }
}

fn string(description: &str) -> PropSpec {
    PropSpec::new(ValueKind::String, description)
}

fn boolean(description: &str) -> PropSpec {
    PropSpec::new(ValueKind::Boolean, description)
}

fn flag(description: &str) -> PropSpec {
    boolean(description).with_default(false)
}

fn button() -> ComponentDescriptor {
    descriptor(
        "Button",
        Category::Core,
        "A versatile button component with multiple variants and states",
        vec![
            (
                "variant",
                string("Button variant").with_default("primary").with_options(&[
                    "primary",
                    "secondary",
                    "outline",
                    "ghost",
                    "link",
                    "destructive",
                ]),
            ),
            (
                "size",
                string("Button size")
                    .with_default("md")
                    .with_options(&["xs", "sm", "md", "lg", "xl"]),
            ),
            ("loading", flag("Show loading state")),
            ("disabled", flag("Disable the button")),
            ("fullWidth", flag("Make button full width")),
            ("onClick", PropSpec::new(ValueKind::Function, "Click handler")),
        ],
        &[
            "<Button variant=\"primary\">Click me</Button>",
            "<Button variant=\"outline\" size=\"lg\">Large Button</Button>",
            "<Button loading>Loading...</Button>",
        ],
        &["ARIA labels", "Keyboard navigation", "Focus states"],
    )
}

fn badge() -> ComponentDescriptor {
    descriptor(
        "Badge",
        Category::Core,
        "A small badge component for labels and status indicators",
        vec![
            (
                "variant",
                string("Badge variant").with_default("default").with_options(&[
                    "default", "success", "warning", "error", "info",
                ]),
            ),
            (
                "size",
                string("Badge size")
                    .with_default("md")
                    .with_options(&["sm", "md", "lg"]),
            ),
        ],
        &[
            "<Badge variant=\"success\">Active</Badge>",
            "<Badge variant=\"error\" size=\"sm\">Error</Badge>",
        ],
        &["ARIA labels", "Color contrast compliant"],
    )
}

fn chip() -> ComponentDescriptor {
    descriptor(
        "Chip",
        Category::Core,
        "A chip component for tags and selections",
        vec![
            (
                "variant",
                string("Chip variant")
                    .with_default("filled")
                    .with_options(&["filled", "outlined"]),
            ),
            (
                "color",
                string("Chip color").with_default("default").with_options(&[
                    "default",
                    "primary",
                    "secondary",
                    "success",
                    "warning",
                    "error",
                ]),
            ),
            ("deletable", flag("Show delete button")),
            ("onDelete", PropSpec::new(ValueKind::Function, "Delete handler")),
        ],
        &[
            "<Chip>Tag</Chip>",
            "<Chip color=\"primary\" deletable>Removable</Chip>",
        ],
        &["ARIA labels", "Keyboard navigation for delete"],
    )
}

fn input() -> ComponentDescriptor {
    descriptor(
        "Input",
        Category::Form,
        "A text input component with validation support",
        vec![
            (
                "type",
                string("Input type").with_default("text").with_options(&[
                    "text", "email", "password", "number", "search", "tel", "url",
                ]),
            ),
            ("placeholder", string("Placeholder text")),
            ("label", string("Input label")),
            ("error", string("Error message")),
            ("disabled", flag("Disable the input")),
            ("required", flag("Mark as required")),
        ],
        &[
            "<Input label=\"Email\" type=\"email\" placeholder=\"Enter your email\" />",
            "<Input label=\"Password\" type=\"password\" required />",
            "<Input label=\"Name\" error=\"Name is required\" />",
        ],
        &[
            "Label association",
            "Error announcements",
            "Required field indicators",
        ],
    )
}

fn select() -> ComponentDescriptor {
    descriptor(
        "Select",
        Category::Form,
        "A dropdown select component",
        vec![
            (
                "options",
                PropSpec::new(ValueKind::Array, "Array of options").required(),
            ),
            ("label", string("Select label")),
            ("placeholder", string("Placeholder text")),
            ("multiple", flag("Allow multiple selection")),
            ("searchable", flag("Enable search")),
        ],
        &[
            "<Select label=\"Country\" options={countries} placeholder=\"Select a country\" />",
            "<Select options={tags} multiple searchable />",
        ],
        &[
            "Keyboard navigation",
            "Screen reader support",
            "ARIA listbox",
        ],
    )
}

fn checkbox() -> ComponentDescriptor {
    descriptor(
        "Checkbox",
        Category::Form,
        "A checkbox component",
        vec![
            ("label", string("Checkbox label")),
            ("checked", boolean("Checked state")),
            ("indeterminate", flag("Indeterminate state")),
            ("disabled", flag("Disable the checkbox")),
        ],
        &[
            "<Checkbox label=\"I agree to the terms\" />",
            "<Checkbox label=\"Select all\" indeterminate />",
        ],
        &[
            "Label association",
            "Keyboard support",
            "ARIA checked state",
        ],
    )
}

fn card() -> ComponentDescriptor {
    descriptor(
        "Card",
        Category::DataDisplay,
        "A card container component",
        vec![
            (
                "variant",
                string("Card variant")
                    .with_default("elevated")
                    .with_options(&["flat", "elevated", "outlined"]),
            ),
            (
                "padding",
                string("Card padding")
                    .with_default("md")
                    .with_options(&["none", "sm", "md", "lg", "xl"]),
            ),
            ("clickable", flag("Make card clickable")),
        ],
        &[
            "<Card variant=\"elevated\"><p>Card content</p></Card>",
            "<Card variant=\"outlined\" padding=\"lg\" clickable>Clickable card</Card>",
        ],
        &["Semantic HTML", "Interactive states"],
    )
}

fn table() -> ComponentDescriptor {
    descriptor(
        "Table",
        Category::DataDisplay,
        "A data table component with sorting and pagination",
        vec![
            ("data", PropSpec::new(ValueKind::Array, "Table data").required()),
            (
                "columns",
                PropSpec::new(ValueKind::Array, "Column definitions").required(),
            ),
            ("sortable", flag("Enable sorting")),
            ("selectable", flag("Enable row selection")),
            ("pagination", flag("Enable pagination")),
        ],
        &[
            "<Table data={users} columns={columns} sortable />",
            "<Table data={products} columns={productColumns} selectable pagination />",
        ],
        &[
            "Table semantics",
            "Header associations",
            "Keyboard navigation",
        ],
    )
}

fn alert() -> ComponentDescriptor {
    descriptor(
        "Alert",
        Category::Feedback,
        "An alert message component",
        vec![
            (
                "variant",
                string("Alert variant")
                    .with_default("info")
                    .with_options(&["info", "success", "warning", "error"]),
            ),
            ("title", string("Alert title")),
            ("dismissible", flag("Show dismiss button")),
        ],
        &[
            "<Alert variant=\"success\" title=\"Success!\">Operation completed successfully</Alert>",
            "<Alert variant=\"error\" dismissible>An error occurred</Alert>",
        ],
        &["ARIA alert role", "Live regions", "Dismiss button"],
    )
}

fn dialog() -> ComponentDescriptor {
    descriptor(
        "Dialog",
        Category::Layout,
        "A modal dialog component",
        vec![
            ("open", boolean("Dialog open state").required()),
            (
                "onClose",
                PropSpec::new(ValueKind::Function, "Close handler").required(),
            ),
            ("title", string("Dialog title")),
            (
                "size",
                string("Dialog size")
                    .with_default("md")
                    .with_options(&["sm", "md", "lg", "xl", "full"]),
            ),
        ],
        &[
            "<Dialog open={isOpen} onClose={handleClose} title=\"Confirm Action\">Are you sure?</Dialog>",
            "<Dialog open={showModal} onClose={closeModal} size=\"lg\">Content</Dialog>",
        ],
        &["Focus trap", "ARIA dialog", "Escape key handling"],
    )
}

fn theme_provider() -> ComponentDescriptor {
    descriptor(
        "ThemeProvider",
        Category::Core,
        "Provides theme context to child components",
        vec![
            (
                "theme",
                PropSpec::new(ValueKind::Object, "Custom theme configuration"),
            ),
            (
                "mode",
                string("Theme mode")
                    .with_default("light")
                    .with_options(&["light", "dark", "system"]),
            ),
        ],
        &[
            "<ThemeProvider mode=\"dark\"><App /></ThemeProvider>",
            "<ThemeProvider theme={customTheme}><App /></ThemeProvider>",
        ],
        &["Color contrast", "System preferences support"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uigen_core::validate_component_name;

    #[test]
    fn names_match_catalog_order() {
        let names: Vec<String> = default_catalog().into_iter().map(|c| c.name).collect();
        assert_eq!(names, default_component_names());
    }

    #[test]
    fn every_default_name_is_a_valid_identifier() {
        for name in default_component_names() {
            assert!(validate_component_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn button_schema_matches_library() {
        let button = button();
        assert_eq!(button.category, Category::Core);
        assert_eq!(
            button.props.keys().collect::<Vec<_>>(),
            vec!["variant", "size", "loading", "disabled", "fullWidth", "onClick"]
        );
        let variant = &button.props["variant"];
        assert_eq!(variant.default, Some("primary".into()));
        assert_eq!(variant.options.as_ref().map(Vec::len), Some(6));
        assert_eq!(button.props["onClick"].value_kind, ValueKind::Function);
    }

    #[test]
    fn required_props_are_marked() {
        let dialog = dialog();
        assert!(dialog.props["open"].required);
        assert!(dialog.props["onClose"].required);
        assert!(!dialog.props["title"].required);
    }
}
