//! Theme configuration snippets.

use serde::Deserialize;
use std::fmt::Write as FmtWrite;
use uigen_core::{Result, validate_color_literal, validate_theme_mode};

/// Named theme colors, emitted in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThemeColors {
    /// Primary brand color.
    pub primary: Option<String>,
    /// Secondary color.
    pub secondary: Option<String>,
    /// Success state color.
    pub success: Option<String>,
    /// Warning state color.
    pub warning: Option<String>,
    /// Error state color.
    pub error: Option<String>,
    /// Informational color.
    pub info: Option<String>,
}

impl ThemeColors {
    /// Iterates the colors that are set, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("success", &self.success),
            ("warning", &self.warning),
            ("error", &self.error),
            ("info", &self.info),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
    }
}

/// Input for [`configure_theme`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// `light`, `dark` or `system`; other values fall back to `light`.
    pub mode: Option<String>,
    /// Palette overrides.
    pub colors: Option<ThemeColors>,
    /// CSS border radius (e.g. `8px`).
    pub border_radius: Option<String>,
    /// CSS font family.
    pub font_family: Option<String>,
}

/// Escapes a value for a single-quoted JavaScript string.
pub(crate) fn js_single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

/// Emits a module that wraps an app in a configured `ThemeProvider`.
///
/// Every color must pass [`validate_color_literal`]; the first invalid one
/// fails the call.
pub fn configure_theme(config: &ThemeConfig, package: &str) -> Result<String> {
    let mut theme = String::new();

    if let Some(colors) = &config.colors {
        let mut entries = Vec::new();
        for (name, value) in colors.entries() {
            let value = validate_color_literal(value)?;
            entries.push(format!("\n    {name}: {}", js_single_quoted(value)));
        }
        if !entries.is_empty() {
            write!(theme, "\n  colors: {{{}\n  }},", entries.join(",")).ok();
        }
    }
    if let Some(radius) = &config.border_radius {
        write!(theme, "\n  borderRadius: {},", js_single_quoted(radius)).ok();
    }
    if let Some(font) = &config.font_family {
        write!(theme, "\n  fontFamily: {},", js_single_quoted(font)).ok();
    }

    let mode = config
        .mode
        .as_deref()
        .map(|m| format!("mode=\"{}\" ", validate_theme_mode(Some(m))))
        .unwrap_or_default();

    Ok(format!(
        "import {{ ThemeProvider }} from '{package}';\nimport '{package}/styles.css';\n\n\
         const customTheme = {{{theme}\n}};\n\n\
         export default function App() {{\n  return (\n    <ThemeProvider {mode}theme={{customTheme}}>\n      {{/* Your app content */}}\n    </ThemeProvider>\n  );\n}}"
    ))
}
