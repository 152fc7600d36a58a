#![deny(missing_docs)]
//! uigen core: tagged attribute values, validation and sanitization.

/// Error type shared by the uigen crates.
pub mod error;
/// Character-level sanitizers.
pub mod sanitize;
/// Request input validators.
pub mod validation;
/// Attribute values and the ordered attribute bag.
pub mod value;

pub use error::{Result, UiError};
pub use sanitize::{escape_for_display, strip_angle_brackets};
pub use validation::{
    LayoutKind, ThemeMode, sanitize_attributes, validate_attribute_bag, validate_color_literal,
    validate_component_name, validate_layout_kind, validate_theme_mode,
};
pub use value::{
    AttrValue, AttributeBag, js_number_text, normalize_json, normalize_number,
};
