use proptest::prelude::*;
use serde_json::json;
use uigen_core::{
    AttrValue, LayoutKind, ThemeMode, validate_attribute_bag, validate_component_name,
    validate_layout_kind, validate_theme_mode,
};

proptest! {
    #[test]
    fn layout_validation_is_idempotent(input in ".{0,16}") {
        let once = validate_layout_kind(Some(&input));
        let twice = validate_layout_kind(Some(once.as_str()));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn accepted_layouts_round_trip(index in 0usize..LayoutKind::ALL.len()) {
        let kind = LayoutKind::ALL[index];
        prop_assert_eq!(validate_layout_kind(Some(kind.as_str())), kind);
    }

    #[test]
    fn theme_validation_is_idempotent(input in ".{0,16}") {
        let once = validate_theme_mode(Some(&input));
        prop_assert_eq!(validate_theme_mode(Some(once.as_str())), once);
        prop_assert!(ThemeMode::ALL.contains(&once));
    }

    #[test]
    fn pascal_identifiers_are_valid_names(name in "[A-Z][A-Za-z0-9]{0,20}") {
        prop_assert!(validate_component_name(&name).is_ok());
    }

    #[test]
    fn lowercase_or_digit_start_is_invalid(name in "[a-z0-9][A-Za-z0-9]{0,20}") {
        prop_assert!(validate_component_name(&name).is_err());
    }

    #[test]
    fn sanitized_strings_never_contain_angle_brackets(text in ".{0,40}") {
        let raw = json!({ "title": text.clone() });
        let bag = validate_attribute_bag(Some(&raw)).unwrap();
        let cleaned = bag.get("title").and_then(AttrValue::as_str).unwrap();
        prop_assert!(!cleaned.contains('<') && !cleaned.contains('>'));
        let expected: String = text.chars().filter(|c| *c != '<' && *c != '>').collect();
        prop_assert_eq!(cleaned, expected.as_str());
    }
}
