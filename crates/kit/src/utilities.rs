//! Fixed utility-class tables.
//!
//! Each kind maps to a constant snippet. Only the spacing table reads
//! `values`, overriding its `padding`, `margin` and `gap` entries.

use serde_json::{Map as JsonMap, Value as JsonValue};
use uigen_core::js_number_text;

/// Kinds accepted by [`tailwind_classes`], in listing order.
pub const UTILITY_KINDS: [&str; 5] = ["spacing", "colors", "typography", "layout", "effects"];

/// Returned for kinds without a table.
pub const UNKNOWN_KIND: &str = "// Unknown type";

const SPACING_DEFAULTS: [(&str, &str); 3] =
    [("padding", "p-4"), ("margin", "m-2"), ("gap", "gap-4")];

const COLOR_CLASSES: &str = r"// Color utility classes
const colorClasses = {
  // Background colors
  bgPrimary: 'bg-blue-500',
  bgSecondary: 'bg-gray-500',
  bgSuccess: 'bg-green-500',
  bgWarning: 'bg-yellow-500',
  bgError: 'bg-red-500',
  bgWhite: 'bg-white',
  bgBlack: 'bg-black',
  bgTransparent: 'bg-transparent',

  // Text colors
  textPrimary: 'text-blue-500',
  textSecondary: 'text-gray-500',
  textSuccess: 'text-green-500',
  textWarning: 'text-yellow-500',
  textError: 'text-red-500',
  textWhite: 'text-white',
  textBlack: 'text-black',
  textMuted: 'text-gray-400',

  // Border colors
  borderPrimary: 'border-blue-500',
  borderSecondary: 'border-gray-500',
  borderSuccess: 'border-green-500',
  borderWarning: 'border-yellow-500',
  borderError: 'border-red-500',
  borderGray: 'border-gray-300',

  // Gradient backgrounds
  gradientPrimary: 'bg-gradient-to-r from-blue-400 to-blue-600',
  gradientSecondary: 'bg-gradient-to-r from-gray-400 to-gray-600',
  gradientSuccess: 'bg-gradient-to-r from-green-400 to-green-600',
};";

const TYPOGRAPHY_CLASSES: &str = r"// Typography utility classes
const typographyClasses = {
  // Font sizes
  textXs: 'text-xs',
  textSm: 'text-sm',
  textBase: 'text-base',
  textLg: 'text-lg',
  textXl: 'text-xl',
  text2xl: 'text-2xl',
  text3xl: 'text-3xl',
  text4xl: 'text-4xl',
  text5xl: 'text-5xl',

  // Font weights
  fontThin: 'font-thin',
  fontLight: 'font-light',
  fontNormal: 'font-normal',
  fontMedium: 'font-medium',
  fontSemibold: 'font-semibold',
  fontBold: 'font-bold',
  fontExtrabold: 'font-extrabold',

  // Text alignment
  textLeft: 'text-left',
  textCenter: 'text-center',
  textRight: 'text-right',
  textJustify: 'text-justify',

  // Line height
  leadingNone: 'leading-none',
  leadingTight: 'leading-tight',
  leadingSnug: 'leading-snug',
  leadingNormal: 'leading-normal',
  leadingRelaxed: 'leading-relaxed',
  leadingLoose: 'leading-loose',

  // Text decoration
  underline: 'underline',
  noUnderline: 'no-underline',
  lineThrough: 'line-through',

  // Text transform
  uppercase: 'uppercase',
  lowercase: 'lowercase',
  capitalize: 'capitalize',
  normalCase: 'normal-case',
};

// Responsive typography
const responsiveHeading = 'text-2xl md:text-3xl lg:text-4xl xl:text-5xl font-bold';
const responsiveBody = 'text-sm md:text-base lg:text-lg';";

const LAYOUT_CLASSES: &str = r"// Layout utility classes
const layoutClasses = {
  // Display
  block: 'block',
  inlineBlock: 'inline-block',
  inline: 'inline',
  flex: 'flex',
  inlineFlex: 'inline-flex',
  grid: 'grid',
  hidden: 'hidden',

  // Flexbox
  flexRow: 'flex-row',
  flexCol: 'flex-col',
  flexWrap: 'flex-wrap',
  flexNoWrap: 'flex-nowrap',
  itemsStart: 'items-start',
  itemsCenter: 'items-center',
  itemsEnd: 'items-end',
  justifyStart: 'justify-start',
  justifyCenter: 'justify-center',
  justifyEnd: 'justify-end',
  justifyBetween: 'justify-between',
  justifyAround: 'justify-around',
  justifyEvenly: 'justify-evenly',

  // Grid
  gridCols1: 'grid-cols-1',
  gridCols2: 'grid-cols-2',
  gridCols3: 'grid-cols-3',
  gridCols4: 'grid-cols-4',
  gridCols6: 'grid-cols-6',
  gridCols12: 'grid-cols-12',

  // Position
  relative: 'relative',
  absolute: 'absolute',
  fixed: 'fixed',
  sticky: 'sticky',

  // Width & Height
  wFull: 'w-full',
  hFull: 'h-full',
  wScreen: 'w-screen',
  hScreen: 'h-screen',
  minHScreen: 'min-h-screen',
  maxWScreen: 'max-w-screen-xl',

  // Overflow
  overflowHidden: 'overflow-hidden',
  overflowAuto: 'overflow-auto',
  overflowScroll: 'overflow-scroll',
};

// Common layout patterns
const centerContent = 'flex items-center justify-center';
const container = 'container mx-auto px-4';
const responsiveGrid = 'grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4';";

const EFFECT_CLASSES: &str = r"// Effect utility classes
const effectClasses = {
  // Shadows
  shadowSm: 'shadow-sm',
  shadow: 'shadow',
  shadowMd: 'shadow-md',
  shadowLg: 'shadow-lg',
  shadowXl: 'shadow-xl',
  shadow2xl: 'shadow-2xl',
  shadowNone: 'shadow-none',

  // Rounded corners
  roundedNone: 'rounded-none',
  roundedSm: 'rounded-sm',
  rounded: 'rounded',
  roundedMd: 'rounded-md',
  roundedLg: 'rounded-lg',
  roundedXl: 'rounded-xl',
  rounded2xl: 'rounded-2xl',
  roundedFull: 'rounded-full',

  // Opacity
  opacity0: 'opacity-0',
  opacity25: 'opacity-25',
  opacity50: 'opacity-50',
  opacity75: 'opacity-75',
  opacity100: 'opacity-100',

  // Transitions
  transitionAll: 'transition-all',
  transitionColors: 'transition-colors',
  transitionOpacity: 'transition-opacity',
  transitionShadow: 'transition-shadow',
  transitionTransform: 'transition-transform',
  duration150: 'duration-150',
  duration300: 'duration-300',
  duration500: 'duration-500',

  // Transforms
  scale50: 'scale-50',
  scale75: 'scale-75',
  scale100: 'scale-100',
  scale125: 'scale-125',
  scale150: 'scale-150',
  rotate45: 'rotate-45',
  rotate90: 'rotate-90',
  rotate180: 'rotate-180',

  // Hover effects
  hoverScale: 'hover:scale-105',
  hoverShadow: 'hover:shadow-lg',
  hoverOpacity: 'hover:opacity-80',

  // Cursor
  cursorPointer: 'cursor-pointer',
  cursorNotAllowed: 'cursor-not-allowed',
  cursorWait: 'cursor-wait',
};

// Common effect combinations
const cardEffect = 'rounded-lg shadow-md hover:shadow-lg transition-shadow duration-300';
const buttonEffect = 'rounded-md shadow-sm hover:shadow-md transition-all duration-150';";

/// Text a value takes when interpolated into a JavaScript template.
fn interpolated(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        JsonValue::Number(number) => js_number_text(number),
        JsonValue::Bool(flag) => flag.to_string(),
        JsonValue::Null => "null".to_string(),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| match item {
                JsonValue::Null => String::new(),
                other => interpolated(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        JsonValue::Object(_) => "[object Object]".to_string(),
    }
}

fn spacing_classes(values: Option<&JsonMap<String, JsonValue>>) -> String {
    let [padding, margin, gap] = SPACING_DEFAULTS.map(|(key, default)| {
        values
            .and_then(|v| v.get(key))
            .map(interpolated)
            .unwrap_or_else(|| default.to_string())
    });

    format!(
        "// Spacing utility classes
const spacingClasses = {{
  // Padding
  padding: '{padding}',
  paddingX: 'px-4',
  paddingY: 'py-4',
  paddingTop: 'pt-4',
  paddingRight: 'pr-4',
  paddingBottom: 'pb-4',
  paddingLeft: 'pl-4',

  // Margin
  margin: '{margin}',
  marginX: 'mx-auto',
  marginY: 'my-4',
  marginTop: 'mt-4',
  marginRight: 'mr-4',
  marginBottom: 'mb-4',
  marginLeft: 'ml-4',

  // Gap (for flex/grid)
  gap: '{gap}',
  gapX: 'gap-x-4',
  gapY: 'gap-y-4',

  // Space between (for flex children)
  spaceBetween: 'space-y-4',
  spaceX: 'space-x-4',
}};

// Responsive spacing
const responsiveSpacing = 'p-2 md:p-4 lg:p-6 xl:p-8';"
    )
}

/// Emits the utility-class table for `kind`.
///
/// Unknown kinds yield [`UNKNOWN_KIND`] rather than an error.
///
/// # Examples
///
/// ```
/// use uigen_kit::utilities::tailwind_classes;
///
/// assert!(tailwind_classes("colors", None).contains("bgPrimary: 'bg-blue-500',"));
/// assert_eq!(tailwind_classes("borders", None), "// Unknown type");
/// ```
pub fn tailwind_classes(kind: &str, values: Option<&JsonMap<String, JsonValue>>) -> String {
    log::debug!("Emitting utility classes for {kind}");
    match kind {
        "spacing" => spacing_classes(values),
        "colors" => COLOR_CLASSES.to_string(),
        "typography" => TYPOGRAPHY_CLASSES.to_string(),
        "layout" => LAYOUT_CLASSES.to_string(),
        "effects" => EFFECT_CLASSES.to_string(),
        _ => UNKNOWN_KIND.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: JsonValue) -> JsonMap<String, JsonValue> {
        match value {
            JsonValue::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn spacing_uses_defaults() {
        let out = tailwind_classes("spacing", None);
        assert!(out.starts_with("// Spacing utility classes\nconst spacingClasses = {"));
        assert!(out.contains("  padding: 'p-4',\n  paddingX: 'px-4',"));
        assert!(out.contains("  margin: 'm-2',"));
        assert!(out.contains("  gap: 'gap-4',"));
        assert!(out.ends_with("const responsiveSpacing = 'p-2 md:p-4 lg:p-6 xl:p-8';"));
    }

    #[test]
    fn spacing_values_override_defaults() {
        let values = map(json!({"padding": "p-8", "gap": 6.0, "ignored": "x"}));
        let out = tailwind_classes("spacing", Some(&values));
        assert!(out.contains("  padding: 'p-8',"));
        assert!(out.contains("  margin: 'm-2',"));
        assert!(out.contains("  gap: '6',"));
        assert!(!out.contains("ignored"));
    }

    #[test]
    fn every_kind_has_a_table() {
        for kind in UTILITY_KINDS {
            let out = tailwind_classes(kind, None);
            assert!(out.starts_with("// "), "{kind}");
            assert_ne!(out, UNKNOWN_KIND, "{kind}");
        }
        assert!(tailwind_classes("layout", None).contains("centerContent = 'flex items-center"));
        assert!(tailwind_classes("effects", None).contains("hoverScale: 'hover:scale-105',"));
        assert!(tailwind_classes("typography", None).contains("const responsiveBody"));
    }

    #[test]
    fn other_tables_ignore_values() {
        let values = map(json!({"padding": "p-8"}));
        assert_eq!(
            tailwind_classes("colors", Some(&values)),
            tailwind_classes("colors", None)
        );
    }

    #[test]
    fn unknown_kind_falls_back() {
        assert_eq!(tailwind_classes("", None), UNKNOWN_KIND);
        assert_eq!(tailwind_classes("Spacing", None), UNKNOWN_KIND);
    }

    #[test]
    fn interpolation_follows_template_rules() {
        assert_eq!(interpolated(&json!(["p-1", 2, null])), "p-1,2,");
        assert_eq!(interpolated(&json!({"a": 1})), "[object Object]");
        assert_eq!(interpolated(&json!(true)), "true");
    }
}
