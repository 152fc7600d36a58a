//! Tool catalog and dispatch.
//!
//! Every tool takes a JSON argument object and returns text. Errors are
//! typed here and only flattened to `Error: <message>` by [`ToolBox::call_text`].

use crate::batch::{BatchArgs, generate_batch};
use crate::types::{
    AccessibilityArgs, ComponentDocsArgs, ComposeComponentsArgs, CreateFormArgs,
    GenerateComponentArgs, ListComponentsArgs, ResponsiveLayoutArgs, TailwindClassesArgs,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value as JsonValue, json};
use thiserror::Error;
use uigen_core::{UiError, validate_attribute_bag};
use uigen_kit::{
    GenerationRequest, Generator, Registry, ThemeConfig, UTILITY_KINDS, check_accessibility,
    component_docs, configure_theme, create_form, responsive_layout, tailwind_classes,
};

/// Errors surfaced by a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool with this name exists.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    /// Arguments did not match the tool's input shape.
    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments {
        /// Tool name.
        tool: String,
        /// Deserializer message.
        message: String,
    },
    /// Validation or generation failed.
    #[error(transparent)]
    Ui(#[from] UiError),
    /// A structured result could not be encoded.
    #[error("Failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Name, description and JSON schema of a tool, as listed to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Tool name used in `tools/call`.
    pub name: &'static str,
    /// Human-readable summary.
    pub description: &'static str,
    /// JSON schema of the argument object.
    pub input_schema: JsonValue,
}

/// Text produced by a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Result text, or `Error: <message>`.
    pub text: String,
    /// Set when the call failed.
    pub is_error: bool,
}

fn tool(name: &'static str, description: &'static str, input_schema: JsonValue) -> ToolDefinition {
    ToolDefinition {
        name,
        description,
        input_schema,
    }
}

/// Every tool the server exposes, in listing order.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    let item_schema = json!({
        "type": "object",
        "properties": {
            "type": {"type": "string"},
            "props": {"type": "object"},
            "children": {"type": "string"}
        },
        "required": ["type"]
    });

    vec![
        tool(
            "generate_component",
            "Generate a component invocation with the given props and styling",
            json!({
                "type": "object",
                "properties": {
                    "component": {"type": "string", "description": "Name of a registered component"},
                    "props": {"type": "object", "description": "Props to pass to the component"},
                    "children": {"type": "string", "description": "Children content for the component"},
                    "className": {"type": "string", "description": "Additional CSS classes"},
                    "includeImports": {"type": "boolean", "description": "Wrap the markup in an importing module"}
                },
                "required": ["component"]
            }),
        ),
        tool(
            "list_components",
            "List registered components grouped by category",
            json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "enum": ["all", "core", "navigation", "form", "data-display", "feedback", "layout"],
                        "description": "Filter components by category"
                    }
                }
            }),
        ),
        tool(
            "compose_components",
            "Compose several components inside a layout container",
            json!({
                "type": "object",
                "properties": {
                    "components": {"type": "array", "items": item_schema},
                    "layout": {
                        "type": "string",
                        "enum": ["vertical", "horizontal", "grid"],
                        "description": "Layout for composition"
                    }
                },
                "required": ["components"]
            }),
        ),
        tool(
            "configure_theme",
            "Configure theme settings including colors, mode, and typography",
            json!({
                "type": "object",
                "properties": {
                    "mode": {"type": "string", "enum": ["light", "dark", "system"]},
                    "colors": {
                        "type": "object",
                        "properties": {
                            "primary": {"type": "string"},
                            "secondary": {"type": "string"},
                            "success": {"type": "string"},
                            "warning": {"type": "string"},
                            "error": {"type": "string"},
                            "info": {"type": "string"}
                        }
                    },
                    "borderRadius": {"type": "string"},
                    "fontFamily": {"type": "string"}
                }
            }),
        ),
        tool(
            "generate_tailwind_classes",
            "Generate utility class tables for a styling concern",
            json!({
                "type": "object",
                "properties": {
                    "type": {"type": "string", "enum": UTILITY_KINDS},
                    "values": {"type": "object", "description": "Overrides for the spacing table"}
                },
                "required": ["type"]
            }),
        ),
        tool(
            "create_responsive_layout",
            "Create a responsive page layout",
            json!({
                "type": "object",
                "properties": {
                    "type": {
                        "type": "string",
                        "enum": uigen_kit::layouts::LAYOUT_KINDS
                    },
                    "breakpoints": {
                        "type": "object",
                        "properties": {
                            "sm": {"type": "string"},
                            "md": {"type": "string"},
                            "lg": {"type": "string"},
                            "xl": {"type": "string"}
                        }
                    }
                },
                "required": ["type"]
            }),
        ),
        tool(
            "create_form",
            "Generate a form built from form components",
            json!({
                "type": "object",
                "properties": {
                    "fields": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": {"type": "string"},
                                "type": {
                                    "type": "string",
                                    "enum": ["text", "email", "password", "number", "select", "checkbox", "radio", "date", "color", "file"]
                                },
                                "label": {"type": "string"},
                                "required": {"type": "boolean"},
                                "placeholder": {"type": "string"},
                                "options": {"type": "array", "items": {"type": "string"}}
                            },
                            "required": ["name", "type", "label"]
                        }
                    },
                    "layout": {"type": "string", "enum": ["single-column", "two-column", "inline"]},
                    "includeValidation": {"type": "boolean"}
                },
                "required": ["fields"]
            }),
        ),
        tool(
            "get_component_docs",
            "Get documentation, usage examples, and prop descriptions for a component",
            json!({
                "type": "object",
                "properties": {
                    "component": {"type": "string", "description": "Component name"},
                    "section": {"type": "string", "enum": ["usage", "props", "examples", "accessibility"]}
                },
                "required": ["component"]
            }),
        ),
        tool(
            "check_accessibility",
            "Get accessibility features and ARIA attributes for a component",
            json!({
                "type": "object",
                "properties": {
                    "component": {"type": "string", "description": "Component name"}
                },
                "required": ["component"]
            }),
        ),
        tool(
            "generate_batch",
            "Generate many independent components in parallel",
            json!({
                "type": "object",
                "properties": {
                    "items": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "id": {"type": "string"},
                                "component": {"type": "string"},
                                "props": {"type": "object"},
                                "children": {"type": "string"},
                                "className": {"type": "string"}
                            },
                            "required": ["id", "component"]
                        }
                    },
                    "options": {
                        "type": "object",
                        "properties": {
                            "maxThreads": {"type": "integer", "minimum": 1},
                            "continueOnError": {"type": "boolean"}
                        }
                    }
                },
                "required": ["items"]
            }),
        ),
    ]
}

fn parse_args<T: DeserializeOwned>(
    tool: &str,
    arguments: Option<JsonValue>,
) -> Result<T, ToolError> {
    let value = match arguments {
        None | Some(JsonValue::Null) => JsonValue::Object(Default::default()),
        Some(value) => value,
    };
    serde_json::from_value(value).map_err(|err| ToolError::InvalidArguments {
        tool: tool.to_string(),
        message: err.to_string(),
    })
}

/// Owns the registry and answers tool calls against it.
#[derive(Debug, Clone)]
pub struct ToolBox {
    registry: Registry,
    package: String,
}

impl ToolBox {
    /// Creates a tool box. `package` names the library in import lines.
    pub fn new(registry: Registry, package: impl Into<String>) -> Self {
        Self {
            registry,
            package: package.into(),
        }
    }

    /// The registry answering lookups.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs a tool and returns its text result.
    pub fn call(&self, name: &str, arguments: Option<JsonValue>) -> Result<String, ToolError> {
        let generator = Generator::new(&self.registry);
        log::debug!("Calling tool {name}");

        match name {
            "generate_component" => {
                let args: GenerateComponentArgs = parse_args(name, arguments)?;
                let attrs = validate_attribute_bag(args.props.as_ref())?;
                let children = args.children.as_deref();
                let class = args.class_name.as_deref();
                let code = if args.include_imports {
                    generator.generate_with_imports(
                        &args.component,
                        Some(&attrs),
                        children,
                        class,
                        &self.package,
                    )?
                } else {
                    generator.generate(&args.component, Some(&attrs), children, class)?
                };
                Ok(code)
            }
            "list_components" => {
                let args: ListComponentsArgs = parse_args(name, arguments)?;
                let listing = self.registry.list_by_category(args.category.as_deref());
                Ok(serde_json::to_string_pretty(&listing)?)
            }
            "compose_components" => {
                let args: ComposeComponentsArgs = parse_args(name, arguments)?;
                let requests = args
                    .components
                    .into_iter()
                    .map(|item| -> Result<GenerationRequest, UiError> {
                        let mut request = GenerationRequest::new(item.component)
                            .with_attributes(validate_attribute_bag(item.props.as_ref())?);
                        request.children = item.children;
                        Ok(request)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(generator.compose(&requests, args.layout.as_deref())?)
            }
            "configure_theme" => {
                let config: ThemeConfig = parse_args(name, arguments)?;
                Ok(configure_theme(&config, &self.package)?)
            }
            "generate_tailwind_classes" => {
                let args: TailwindClassesArgs = parse_args(name, arguments)?;
                if !UTILITY_KINDS.contains(&args.kind.as_str()) {
                    return Err(ToolError::InvalidArguments {
                        tool: name.to_string(),
                        message: format!(
                            "type must be one of {}, got \"{}\"",
                            UTILITY_KINDS.join(", "),
                            args.kind
                        ),
                    });
                }
                Ok(tailwind_classes(&args.kind, args.values.as_ref()))
            }
            "create_responsive_layout" => {
                let args: ResponsiveLayoutArgs = parse_args(name, arguments)?;
                Ok(responsive_layout(&args.kind).to_string())
            }
            "create_form" => {
                let args: CreateFormArgs = parse_args(name, arguments)?;
                Ok(create_form(
                    &args.fields,
                    args.layout.as_deref(),
                    args.include_validation,
                    &self.package,
                ))
            }
            "get_component_docs" => {
                let args: ComponentDocsArgs = parse_args(name, arguments)?;
                Ok(component_docs(
                    &self.registry,
                    &args.component,
                    args.section.as_deref(),
                ))
            }
            "check_accessibility" => {
                let args: AccessibilityArgs = parse_args(name, arguments)?;
                Ok(check_accessibility(&self.registry, &args.component))
            }
            "generate_batch" => {
                let args: BatchArgs = parse_args(name, arguments)?;
                let result = generate_batch(&self.registry, args.items, args.options);
                Ok(serde_json::to_string_pretty(&result)?)
            }
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }

    /// Runs a tool, folding failures into `Error: <message>` text.
    pub fn call_text(&self, name: &str, arguments: Option<JsonValue>) -> ToolOutput {
        match self.call(name, arguments) {
            Ok(text) => ToolOutput {
                text,
                is_error: false,
            },
            Err(err) => {
                log::warn!("Tool {name} failed: {err}");
                ToolOutput {
                    text: format!("Error: {err}"),
                    is_error: true,
                }
            }
        }
    }
}
