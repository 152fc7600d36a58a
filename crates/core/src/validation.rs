//! Validation of untrusted request input.
//!
//! Structural problems (component name, bag shape, color syntax) are rejected
//! with a [`UiError`]. Enumerated choices (layout kind, theme mode) never fail
//! and fall back to a documented default instead.

use crate::error::{Result, UiError};
use crate::sanitize::strip_angle_brackets;
use crate::value::{AttrValue, AttributeBag};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value as JsonValue;
use std::fmt;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("valid hex pattern"));

static RGB_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgb\(\s*[0-9]{1,3}\s*,\s*[0-9]{1,3}\s*,\s*[0-9]{1,3}\s*\)$")
        .expect("valid rgb pattern")
});

// Channel values are checked for digit count only; 256 passes.
static RGBA_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^rgba\(\s*[0-9]{1,3}\s*,\s*[0-9]{1,3}\s*,\s*[0-9]{1,3}\s*,\s*[01]?\.?[0-9]*\s*\)$",
    )
    .expect("valid rgba pattern")
});

/// Checks that `name` looks like a component identifier.
///
/// A valid name starts with an uppercase ASCII letter followed by zero or
/// more ASCII alphanumerics.
///
/// # Examples
///
/// ```
/// use uigen_core::validate_component_name;
///
/// assert!(validate_component_name("Button").is_ok());
/// assert!(validate_component_name("My-Component").is_err());
/// ```
pub fn validate_component_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(UiError::invalid_name(
            "Component name must be a non-empty string",
        ));
    };

    if !first.is_ascii_uppercase() || !chars.all(|c| c.is_ascii_alphanumeric()) {
        return Err(UiError::invalid_name(
            "Component name must start with uppercase letter and contain only alphanumeric characters",
        ));
    }

    Ok(())
}

/// Validates and sanitizes a raw attribute bag from the tool boundary.
///
/// `None` and JSON `null` normalize to an empty bag. Anything other than a
/// JSON object fails with [`UiError::InvalidShape`]. Surviving entries go
/// through [`sanitize_attributes`].
pub fn validate_attribute_bag(raw: Option<&JsonValue>) -> Result<AttributeBag> {
    match raw {
        None | Some(JsonValue::Null) => Ok(AttributeBag::new()),
        Some(JsonValue::Object(map)) => {
            let bag = AttributeBag::from_json_map(map.clone());
            Ok(sanitize_attributes(&bag))
        }
        Some(_) => Err(UiError::invalid_shape("Props must be an object")),
    }
}

/// Filters and cleans an attribute bag.
///
/// Callables and absent values are dropped. String values lose every `<` and
/// `>` character. Other kinds pass through unchanged, in their original order.
pub fn sanitize_attributes(bag: &AttributeBag) -> AttributeBag {
    bag.iter()
        .filter(|(_, value)| !value.is_dropped_on_sanitize())
        .map(|(key, value)| {
            let cleaned = match value {
                AttrValue::String(text) => AttrValue::String(strip_angle_brackets(text)),
                other => other.clone(),
            };
            (key.to_string(), cleaned)
        })
        .collect()
}

/// Composition layout styles accepted by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutKind {
    /// Stacked column (the default).
    #[default]
    Vertical,
    /// Side by side row.
    Horizontal,
    /// Responsive grid.
    Grid,
    /// Form-only single column.
    SingleColumn,
    /// Form-only two columns.
    TwoColumn,
    /// Form-only wrapped inline row.
    Inline,
}

impl LayoutKind {
    /// Every accepted layout kind.
    pub const ALL: [LayoutKind; 6] = [
        LayoutKind::Vertical,
        LayoutKind::Horizontal,
        LayoutKind::Grid,
        LayoutKind::SingleColumn,
        LayoutKind::TwoColumn,
        LayoutKind::Inline,
    ];

    /// Wire name of the layout.
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutKind::Vertical => "vertical",
            LayoutKind::Horizontal => "horizontal",
            LayoutKind::Grid => "grid",
            LayoutKind::SingleColumn => "single-column",
            LayoutKind::TwoColumn => "two-column",
            LayoutKind::Inline => "inline",
        }
    }

    /// Exact, case-sensitive lookup by wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes a layout name, falling back to `vertical` for anything unknown.
///
/// # Examples
///
/// ```
/// use uigen_core::{LayoutKind, validate_layout_kind};
///
/// assert_eq!(validate_layout_kind(Some("grid")), LayoutKind::Grid);
/// assert_eq!(validate_layout_kind(Some("diagonal")), LayoutKind::Vertical);
/// assert_eq!(validate_layout_kind(None), LayoutKind::Vertical);
/// ```
pub fn validate_layout_kind(kind: Option<&str>) -> LayoutKind {
    match kind.and_then(LayoutKind::from_name) {
        Some(layout) => layout,
        None => {
            if let Some(unknown) = kind {
                log::debug!("Unknown layout kind {:?}, using vertical", unknown);
            }
            LayoutKind::default()
        }
    }
}

/// Theme modes accepted by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    /// Light palette (the default).
    #[default]
    Light,
    /// Dark palette.
    Dark,
    /// Follow the operating system preference.
    System,
}

impl ThemeMode {
    /// Every accepted theme mode.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Wire name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Exact, case-sensitive lookup by wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == name)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes a theme mode, falling back to `light` for anything unknown.
pub fn validate_theme_mode(mode: Option<&str>) -> ThemeMode {
    mode.and_then(ThemeMode::from_name).unwrap_or_default()
}

/// Accepts `#rgb`, `#rrggbb`, `rgb(r,g,b)` and `rgba(r,g,b,a)` literals.
///
/// The check is purely syntactic. Returns the input unchanged on success.
///
/// # Examples
///
/// ```
/// use uigen_core::validate_color_literal;
///
/// assert_eq!(validate_color_literal("#fff").unwrap(), "#fff");
/// assert!(validate_color_literal("red").is_err());
/// ```
pub fn validate_color_literal(value: &str) -> Result<&str> {
    if HEX_COLOR.is_match(value) || RGB_COLOR.is_match(value) || RGBA_COLOR.is_match(value) {
        Ok(value)
    } else {
        Err(UiError::invalid_color(value))
    }
}
