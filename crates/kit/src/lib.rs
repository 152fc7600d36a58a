#![deny(missing_docs)]
//! uigen kit: component registry, markup generation and snippet templates.

/// Markup generation and composition.
pub mod codegen;
/// Component documentation and accessibility reports.
pub mod docs;
/// Form scaffolding.
pub mod forms;
/// Responsive page layouts.
pub mod layouts;
/// Component registry and catalog loading.
pub mod registry;
/// Theme provider setup snippets.
pub mod theme;
/// Utility-class tables.
pub mod utilities;

pub use codegen::{
    DEFAULT_PACKAGE, GenerationRequest, Generator, format_attributes, layout_class,
};
pub use docs::{DocSection, check_accessibility, component_docs};
pub use forms::{FieldKind, FormField, create_form};
pub use layouts::responsive_layout;
pub use registry::{
    ALL_CATEGORIES, CatalogError, CatalogFile, Category, ComponentDescriptor, PropSpec, Registry,
    ValueKind,
};
pub use theme::{ThemeColors, ThemeConfig, configure_theme};
pub use utilities::{UTILITY_KINDS, tailwind_classes};
