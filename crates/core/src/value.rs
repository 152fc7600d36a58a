//! Tagged attribute values and the ordered attribute bag.

use indexmap::IndexMap;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

/// A single attribute value, tagged at the point where input is ingested.
///
/// Formatting code matches on the tag instead of re-inspecting runtime types,
/// so every kind has exactly one serialization rule.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Plain text, emitted as `key="value"`.
    String(String),
    /// Numeric literal, emitted as `key={value}`.
    Number(Number),
    /// Flag; `true` emits the bare key, `false` emits nothing.
    Boolean(bool),
    /// Object literal, emitted as `key={<json>}`.
    Object(JsonMap<String, JsonValue>),
    /// Array literal, emitted as `key={<json>}`.
    Array(Vec<JsonValue>),
    /// Callable reference carried as its source text.
    Callable(String),
    /// Explicitly absent value.
    Absent,
}

impl AttrValue {
    /// Creates a callable reference from its textual representation.
    pub fn callable(source: impl Into<String>) -> Self {
        AttrValue::Callable(source.into())
    }

    /// Returns the value kind name (`string`, `number`, ...).
    pub fn kind(&self) -> &'static str {
        match self {
            AttrValue::String(_) => "string",
            AttrValue::Number(_) => "number",
            AttrValue::Boolean(_) => "boolean",
            AttrValue::Object(_) => "object",
            AttrValue::Array(_) => "array",
            AttrValue::Callable(_) => "function",
            AttrValue::Absent => "undefined",
        }
    }

    /// Returns the string content for `String` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the flag for `Boolean` values.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// True for values the sanitizer drops entirely.
    pub fn is_dropped_on_sanitize(&self) -> bool {
        matches!(self, AttrValue::Callable(_) | AttrValue::Absent)
    }
}

impl From<JsonValue> for AttrValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => AttrValue::Absent,
            JsonValue::Bool(flag) => AttrValue::Boolean(flag),
            JsonValue::Number(number) => AttrValue::Number(number),
            JsonValue::String(text) => AttrValue::String(text),
            JsonValue::Array(items) => AttrValue::Array(items),
            JsonValue::Object(map) => AttrValue::Object(map),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Boolean(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<u64> for AttrValue {
    fn from(value: u64) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<f64> for AttrValue {
    /// Non-finite floats have no literal form and become `Absent`.
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(AttrValue::Number)
            .unwrap_or(AttrValue::Absent)
    }
}

/// Magnitude from which JavaScript switches integral numbers to exponent form.
const PLAIN_INTEGER_LIMIT: f64 = 1e21;

/// Rewrites an integral float as an integer, so `1.0` prints as `1` and
/// `-0.0` as `0`. Fractional and very large values are returned unchanged.
pub fn normalize_number(number: Number) -> Number {
    let Some(float) = number.as_f64().filter(|_| number.is_f64()) else {
        return number;
    };
    if float.fract() != 0.0 || float.abs() >= PLAIN_INTEGER_LIMIT {
        return number;
    }
    if float >= i64::MIN as f64 && float < i64::MAX as f64 {
        Number::from(float as i64)
    } else if float >= 0.0 && float < u64::MAX as f64 {
        Number::from(float as u64)
    } else {
        number
    }
}

/// Applies [`normalize_number`] to every number nested in `value`.
pub fn normalize_json(value: JsonValue) -> JsonValue {
    match value {
        JsonValue::Number(number) => JsonValue::Number(normalize_number(number)),
        JsonValue::Array(items) => {
            JsonValue::Array(items.into_iter().map(normalize_json).collect())
        }
        JsonValue::Object(map) => JsonValue::Object(
            map.into_iter()
                .map(|(key, value)| (key, normalize_json(value)))
                .collect(),
        ),
        other => other,
    }
}

/// Renders a number the way a JavaScript template literal would.
///
/// Integral floats lose their fraction and positive exponents carry a sign
/// (`1e+21`).
pub fn js_number_text(number: &Number) -> String {
    let text = normalize_number(number.clone()).to_string();
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Ordered mapping from attribute name to value.
///
/// Iteration order is insertion order. Re-inserting an existing key replaces
/// its value without moving it; [`AttributeBag::push_last`] moves it to the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeBag {
    entries: IndexMap<String, AttrValue>,
}

impl AttributeBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry, keeping the key's original position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Inserts an entry as the last one, moving an existing key to the end.
    pub fn push_last(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        self.entries.shift_remove(&key);
        self.entries.insert(key, value.into());
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// Returns true when the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the bag has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Builds a bag from a JSON object, preserving its key order.
    pub fn from_json_map(map: JsonMap<String, JsonValue>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeBag
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = AttributeBag::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

impl IntoIterator for AttributeBag {
    type Item = (String, AttrValue);
    type IntoIter = indexmap::map::IntoIter<String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_values_map_to_tags() {
        assert_eq!(AttrValue::from(json!(null)), AttrValue::Absent);
        assert_eq!(AttrValue::from(json!(true)), AttrValue::Boolean(true));
        assert_eq!(AttrValue::from(json!(100)), AttrValue::Number(100.into()));
        assert_eq!(AttrValue::from(json!("x")), AttrValue::String("x".into()));
        assert_eq!(AttrValue::from(json!([1, 2])).kind(), "array");
        assert_eq!(AttrValue::from(json!({"a": 1})).kind(), "object");
    }

    #[test]
    fn non_finite_float_is_absent() {
        assert_eq!(AttrValue::from(f64::NAN), AttrValue::Absent);
        assert_eq!(AttrValue::from(1.5).kind(), "number");
    }

    #[test]
    fn integral_floats_print_as_integers() {
        let text = |value: f64| js_number_text(&Number::from_f64(value).unwrap());
        assert_eq!(text(1.0), "1");
        assert_eq!(text(-0.0), "0");
        assert_eq!(text(-42.0), "-42");
        assert_eq!(text(1.5), "1.5");
        assert_eq!(text(1e21), "1e+21");
        assert_eq!(js_number_text(&Number::from(7)), "7");
    }

    #[test]
    fn nested_numbers_are_normalized() {
        let value = normalize_json(json!({"opacity": 1.0, "steps": [2.0, 0.5], "name": "x"}));
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"opacity":1,"steps":[2,0.5],"name":"x"}"#
        );
    }

    #[test]
    fn insertion_order_is_preserved() {
        let bag: AttributeBag = [("zeta", "1"), ("alpha", "2"), ("mid", "3")]
            .into_iter()
            .collect();
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn reinsert_keeps_position_push_last_moves() {
        let mut bag = AttributeBag::new();
        bag.insert("a", "1");
        bag.insert("b", "2");
        bag.insert("a", "3");
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(bag.get("a").and_then(AttrValue::as_str), Some("3"));

        bag.push_last("a", "4");
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(bag.get("a").and_then(AttrValue::as_str), Some("4"));
    }

    #[test]
    fn from_json_map_keeps_key_order() {
        let JsonValue::Object(map) = json!({"variant": "primary", "size": "lg", "disabled": true})
        else {
            unreachable!()
        };
        let bag = AttributeBag::from_json_map(map);
        assert_eq!(
            bag.keys().collect::<Vec<_>>(),
            vec!["variant", "size", "disabled"]
        );
    }
}
