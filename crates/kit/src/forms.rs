//! Form scaffolding from a list of field definitions.

use crate::theme::js_single_quoted;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt::Write as FmtWrite;
use uigen_core::{LayoutKind, strip_angle_brackets, validate_layout_kind};

/// Input kind of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Email address.
    Email,
    /// Masked password.
    Password,
    /// Numeric input.
    Number,
    /// Dropdown of fixed options.
    Select,
    /// Single checkbox.
    Checkbox,
    /// Radio group of fixed options.
    Radio,
    /// Date picker.
    Date,
    /// Color picker.
    Color,
    /// File upload.
    File,
}

impl FieldKind {
    /// Library component rendering this kind.
    pub fn component(self) -> &'static str {
        match self {
            FieldKind::Text
            | FieldKind::Email
            | FieldKind::Password
            | FieldKind::Number => "Input",
            FieldKind::Select => "Select",
            FieldKind::Checkbox => "Checkbox",
            FieldKind::Radio => "RadioGroup",
            FieldKind::Date => "DatePicker",
            FieldKind::Color => "ColorPicker",
            FieldKind::File => "Upload",
        }
    }

    fn input_type(self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Password => Some("password"),
            FieldKind::Number => Some("number"),
            _ => None,
        }
    }
}

/// One field of a generated form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormField {
    /// State variable and `name` attribute.
    pub name: String,
    /// Input kind.
    #[serde(rename = "type")]
    pub field_type: FieldKind,
    /// Visible label.
    pub label: String,
    /// Adds `required` and a presence check.
    #[serde(default)]
    pub required: bool,
    /// Placeholder text; a label-derived one is used when absent.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Choices for `select` and `radio`.
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

impl FormField {
    /// Creates an optional field with no placeholder or options.
    pub fn new(name: impl Into<String>, field_type: FieldKind, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
            label: label.into(),
            required: false,
            placeholder: None,
            options: None,
        }
    }

    /// Marks the field required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the option list.
    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|o| o.to_string()).collect());
        self
    }

    fn options_literal(&self) -> String {
        let options = self.options.as_deref().unwrap_or_default();
        serde_json::to_string(options).unwrap_or_else(|_| "[]".to_string())
    }

    fn placeholder_or(&self, fallback: impl FnOnce() -> String) -> String {
        self.placeholder
            .as_deref()
            .map(strip_angle_brackets)
            .unwrap_or_else(fallback)
    }

    fn render(&self) -> String {
        let label = strip_angle_brackets(&self.label);
        let mut lines = vec![
            format!("label=\"{label}\""),
            format!("name=\"{}\"", strip_angle_brackets(&self.name)),
        ];
        let lower = label.to_lowercase();

        match self.field_type {
            FieldKind::Text | FieldKind::Email | FieldKind::Password | FieldKind::Number => {
                if let Some(kind) = self.field_type.input_type() {
                    lines.push(format!("type=\"{kind}\""));
                }
                let placeholder = self.placeholder_or(|| format!("Enter {lower}"));
                lines.push(format!("placeholder=\"{placeholder}\""));
            }
            FieldKind::Select => {
                lines.push(format!("options={{{}}}", self.options_literal()));
                let placeholder = self.placeholder_or(|| format!("Select {lower}"));
                lines.push(format!("placeholder=\"{placeholder}\""));
            }
            FieldKind::Radio => {
                lines.push(format!("options={{{}}}", self.options_literal()));
            }
            FieldKind::Date => {
                let placeholder = self.placeholder_or(|| "Select date".to_string());
                lines.push(format!("placeholder=\"{placeholder}\""));
            }
            FieldKind::Checkbox | FieldKind::Color | FieldKind::File => {}
        }

        // Checkboxes and color pickers carry no required marker.
        let supports_required = !matches!(self.field_type, FieldKind::Checkbox | FieldKind::Color);
        if self.required && supports_required {
            lines.push("required".to_string());
        }

        let mut out = format!("        <{}\n", self.field_type.component());
        for line in lines {
            writeln!(out, "          {line}").ok();
        }
        out.push_str("        />");
        out
    }
}

/// Container classes for a form layout.
pub fn form_layout_class(layout: LayoutKind) -> &'static str {
    match layout {
        LayoutKind::TwoColumn => "grid grid-cols-1 md:grid-cols-2 gap-4",
        LayoutKind::Inline => "flex flex-wrap gap-4",
        _ => "space-y-4",
    }
}

/// Components the form imports, sorted. `Button` is always present.
pub fn required_components(fields: &[FormField]) -> Vec<&'static str> {
    let mut components: BTreeSet<&'static str> = BTreeSet::from(["Button"]);
    components.extend(fields.iter().map(|f| f.field_type.component()));
    components.into_iter().collect()
}

fn setter_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("set{}{}", first.to_uppercase(), chars.as_str()),
        None => "set".to_string(),
    }
}

fn validation_state(fields: &[FormField]) -> String {
    let mut out = String::new();
    for field in fields {
        writeln!(
            out,
            "  const [{}, {}] = useState('');",
            field.name,
            setter_name(&field.name)
        )
        .ok();
    }
    out.push_str("  const [errors, setErrors] = useState<Record<string, string>>({});\n\n");
    out
}

fn validation_logic(fields: &[FormField]) -> String {
    let mut out = String::from("    const newErrors: Record<string, string> = {};\n");
    for field in fields.iter().filter(|f| f.required) {
        let message = js_single_quoted(&format!("{} is required", field.label));
        write!(
            out,
            "    if (!{name}) {{\n      newErrors.{name} = {message};\n    }}\n",
            name = field.name
        )
        .ok();
    }
    let names = fields
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    write!(
        out,
        "    if (Object.keys(newErrors).length > 0) {{\n      setErrors(newErrors);\n      return;\n    }}\n    console.log('Form submitted:', {{ {names} }});"
    )
    .ok();
    out
}

/// Emits a `CustomForm` module for the given fields.
///
/// The layout is normalized by [`validate_layout_kind`]. With
/// `include_validation`, each field gets a state hook and required fields
/// are checked on submit.
pub fn create_form(
    fields: &[FormField],
    layout: Option<&str>,
    include_validation: bool,
    package: &str,
) -> String {
    let layout_class = form_layout_class(validate_layout_kind(layout));
    let imports = required_components(fields).join(", ");
    let rendered = fields
        .iter()
        .map(FormField::render)
        .collect::<Vec<_>>()
        .join("\n\n");

    let (react_import, state, submit) = if include_validation {
        (
            "import { useState } from 'react';\n",
            validation_state(fields),
            validation_logic(fields),
        )
    } else {
        ("", String::new(), "    // Handle form submission".to_string())
    };

    log::debug!(
        "Generating form with {} fields ({})",
        fields.len(),
        layout_class
    );

    format!(
        "import {{ {imports} }} from '{package}';\n{react_import}\n\
         export default function CustomForm() {{\n{state}\
         \x20 const handleSubmit = (e: React.FormEvent) => {{\n    e.preventDefault();\n{submit}\n  }};\n\n\
         \x20 return (\n    <form onSubmit={{handleSubmit}} className=\"max-w-2xl mx-auto p-6\">\n      <div className=\"{layout_class}\">\n{rendered}\n      </div>\n\n\
         \x20     <div className=\"mt-6 flex gap-4\">\n        <Button type=\"submit\" variant=\"primary\">\n          Submit\n        </Button>\n        <Button type=\"reset\" variant=\"outline\">\n          Reset\n        </Button>\n      </div>\n    </form>\n  );\n}}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_fields() -> Vec<FormField> {
        vec![
            FormField::new("email", FieldKind::Email, "Email").required(),
            FormField::new("password", FieldKind::Password, "Password").required(),
            FormField::new("remember", FieldKind::Checkbox, "Remember me").required(),
        ]
    }

    #[test]
    fn deserializes_fields() {
        let fields: Vec<FormField> = serde_json::from_str(
            r#"[
                {"name": "country", "type": "select", "label": "Country", "options": ["NL", "JP"]},
                {"name": "born", "type": "date", "label": "Born"}
            ]"#,
        )
        .unwrap();
        assert_eq!(fields[0].field_type, FieldKind::Select);
        assert!(!fields[0].required);
        assert_eq!(fields[1].field_type, FieldKind::Date);
    }

    #[test]
    fn unknown_field_kind_is_rejected() {
        let err = serde_json::from_str::<FormField>(
            r#"{"name": "notes", "type": "textarea", "label": "Notes"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown variant `textarea`"), "{err}");
    }

    #[test]
    fn required_components_are_sorted_and_include_button() {
        assert_eq!(required_components(&[]), vec!["Button"]);
        let fields = vec![
            FormField::new("a", FieldKind::File, "A"),
            FormField::new("b", FieldKind::Text, "B"),
            FormField::new("c", FieldKind::Email, "C"),
            FormField::new("d", FieldKind::Date, "D"),
        ];
        assert_eq!(
            required_components(&fields),
            vec!["Button", "DatePicker", "Input", "Upload"]
        );
    }

    #[test]
    fn layout_classes() {
        assert_eq!(
            form_layout_class(validate_layout_kind(Some("two-column"))),
            "grid grid-cols-1 md:grid-cols-2 gap-4"
        );
        assert_eq!(
            form_layout_class(validate_layout_kind(Some("inline"))),
            "flex flex-wrap gap-4"
        );
        assert_eq!(form_layout_class(validate_layout_kind(Some("grid"))), "space-y-4");
        assert_eq!(form_layout_class(validate_layout_kind(None)), "space-y-4");
    }

    #[test]
    fn text_field_with_default_placeholder() {
        let field = FormField::new("fullName", FieldKind::Text, "Full Name").required();
        assert_eq!(
            field.render(),
            "        <Input\n          label=\"Full Name\"\n          name=\"fullName\"\n          type=\"text\"\n          placeholder=\"Enter full name\"\n          required\n        />"
        );
    }

    #[test]
    fn optional_field_has_no_required_line() {
        let field =
            FormField::new("city", FieldKind::Select, "City").with_options(&["Tokyo", "Osaka"]);
        assert_eq!(
            field.render(),
            "        <Select\n          label=\"City\"\n          name=\"city\"\n          options={[\"Tokyo\",\"Osaka\"]}\n          placeholder=\"Select city\"\n        />"
        );
    }

    #[test]
    fn checkbox_ignores_required() {
        let field = FormField::new("terms", FieldKind::Checkbox, "Terms").required();
        assert!(!field.render().contains("required"));
    }

    #[test]
    fn form_without_validation() {
        let form = create_form(&login_fields(), Some("two-column"), false, "its-just-ui");
        assert!(form.starts_with("import { Button, Checkbox, Input } from 'its-just-ui';\n\nexport default function CustomForm() {\n  const handleSubmit"));
        assert!(form.contains("    // Handle form submission\n  };"));
        assert!(form.contains("<div className=\"grid grid-cols-1 md:grid-cols-2 gap-4\">"));
        assert!(!form.contains("useState"));
    }

    #[test]
    fn form_with_validation() {
        let form = create_form(&login_fields(), None, true, "its-just-ui");
        assert!(form.contains("import { useState } from 'react';\n\nexport default"));
        assert!(form.contains("  const [email, setEmail] = useState('');\n"));
        assert!(form.contains("  const [remember, setRemember] = useState('');\n"));
        assert!(form.contains(
            "    if (!password) {\n      newErrors.password = 'Password is required';\n    }\n"
        ));
        assert!(form.contains("console.log('Form submitted:', { email, password, remember });"));
        assert!(form.contains("<div className=\"space-y-4\">"));
    }

    #[test]
    fn labels_are_stripped_of_angle_brackets() {
        let field = FormField::new("x", FieldKind::Color, "<b>Color</b>");
        assert!(field.render().contains("label=\"bColor/b\""));
    }
}
