use proptest::prelude::*;
use serde_json::json;
use uigen_core::{AttributeBag, LayoutKind, validate_attribute_bag};
use uigen_kit::forms::{FieldKind, FormField};
use uigen_kit::registry::defaults::default_component_names;
use uigen_kit::{DEFAULT_PACKAGE, GenerationRequest, Generator, Registry, create_form, layout_class};

fn bag(value: serde_json::Value) -> AttributeBag {
    validate_attribute_bag(Some(&value)).unwrap()
}

#[test]
fn compose_dashboard_snapshot() {
    let registry = Registry::with_defaults();
    let generator = Generator::new(&registry);
    let requests = vec![
        GenerationRequest::new("Alert")
            .with_attributes(bag(json!({"variant": "success", "dismissible": true})))
            .with_children("Saved"),
        GenerationRequest::new("Card")
            .with_attributes(bag(json!({"padding": "lg", "clickable": false}))),
        GenerationRequest::new("Button").with_attributes(bag(json!({"size": "sm", "tabIndex": 2}))),
    ];

    let out = generator.compose(&requests, Some("horizontal")).unwrap();
    insta::assert_snapshot!(out, @r#"
    <div className="flex flex-row gap-4">
      <Alert variant="success" dismissible>
      Saved
    </Alert>
      <Card padding="lg" />
      <Button size="sm" tabIndex={2} />
    </div>
    "#);
}

#[test]
fn generate_with_imports_snapshot() {
    let registry = Registry::with_defaults();
    let generator = Generator::new(&registry);
    let out = generator
        .generate_with_imports(
            "Dialog",
            Some(&bag(json!({"open": true, "title": "Confirm"}))),
            Some("Are you sure?"),
            Some("max-w-md"),
            DEFAULT_PACKAGE,
        )
        .unwrap();
    insta::assert_snapshot!(out, @r#"
    import { Dialog } from 'its-just-ui';
    import 'its-just-ui/styles.css';

    export default function MyComponent() {
      return (
        <Dialog open title="Confirm" className="max-w-md">
          Are you sure?
        </Dialog>
      );
    }
    "#);
}

#[test]
fn create_form_snapshot() {
    let fields = vec![
        FormField::new("email", FieldKind::Email, "Email").required(),
        FormField::new("plan", FieldKind::Radio, "Plan").with_options(&["free", "pro"]),
    ];
    let out = create_form(&fields, Some("inline"), true, DEFAULT_PACKAGE);
    insta::assert_snapshot!(out, @r#"
    import { Button, Input, RadioGroup } from 'its-just-ui';
    import { useState } from 'react';

    export default function CustomForm() {
      const [email, setEmail] = useState('');
      const [plan, setPlan] = useState('');
      const [errors, setErrors] = useState<Record<string, string>>({});

      const handleSubmit = (e: React.FormEvent) => {
        e.preventDefault();
        const newErrors: Record<string, string> = {};
        if (!email) {
          newErrors.email = 'Email is required';
        }
        if (Object.keys(newErrors).length > 0) {
          setErrors(newErrors);
          return;
        }
        console.log('Form submitted:', { email, plan });
      };

      return (
        <form onSubmit={handleSubmit} className="max-w-2xl mx-auto p-6">
          <div className="flex flex-wrap gap-4">
            <Input
              label="Email"
              name="email"
              type="email"
              placeholder="Enter email"
              required
            />

            <RadioGroup
              label="Plan"
              name="plan"
              options={["free","pro"]}
            />
          </div>

          <div className="mt-6 flex gap-4">
            <Button type="submit" variant="primary">
              Submit
            </Button>
            <Button type="reset" variant="outline">
              Reset
            </Button>
          </div>
        </form>
      );
    }
    "#);
}

#[test]
fn registry_generator_round_trip_over_defaults() {
    let registry = Registry::with_defaults();
    let generator = Generator::new(&registry);
    for name in default_component_names() {
        assert_eq!(
            generator.generate(name, None, None, None).unwrap(),
            format!("<{name} />")
        );
    }
}

fn default_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(default_component_names().to_vec())
}

proptest! {
    #[test]
    fn children_wrap_the_component(name in default_name(), children in "[a-zA-Z0-9 ]{1,24}") {
        let registry = Registry::with_defaults();
        let out = Generator::new(&registry).generate(name, None, Some(&children), None).unwrap();
        prop_assert_eq!(out, format!("<{name}>\n  {children}\n</{name}>"));
    }

    #[test]
    fn booleans_are_bare_or_absent(key in "[a-z][a-zA-Z]{0,11}", flag in any::<bool>()) {
        let registry = Registry::with_defaults();
        let mut attrs = AttributeBag::new();
        attrs.insert(key.clone(), flag);
        let out = Generator::new(&registry).generate("Button", Some(&attrs), None, None).unwrap();
        if flag {
            prop_assert_eq!(out, format!("<Button {key} />"));
        } else {
            prop_assert_eq!(out, "<Button />".to_string());
        }
    }

    #[test]
    fn integers_render_in_braces(key in "[a-z][a-zA-Z]{0,11}", n in any::<i64>()) {
        let registry = Registry::with_defaults();
        let mut attrs = AttributeBag::new();
        attrs.insert(key.clone(), n);
        let out = Generator::new(&registry).generate("Input", Some(&attrs), None, None).unwrap();
        prop_assert_eq!(out, format!("<Input {key}={{{n}}} />"));
    }

    #[test]
    fn generated_strings_never_contain_injected_brackets(text in ".{0,40}") {
        let registry = Registry::with_defaults();
        let mut attrs = AttributeBag::new();
        attrs.insert("title", text);
        let out = Generator::new(&registry).generate("Badge", Some(&attrs), None, None).unwrap();
        let inner = &out["<Badge".len()..out.len() - "/>".len()];
        prop_assert!(!inner.contains('<') && !inner.contains('>'));
    }

    #[test]
    fn compose_class_follows_layout(kind in prop::sample::select(LayoutKind::ALL.to_vec())) {
        let registry = Registry::with_defaults();
        let requests = [GenerationRequest::new("Chip")];
        let out = Generator::new(&registry).compose(&requests, Some(kind.as_str())).unwrap();
        let expected = format!("<div className=\"{}\">\n  <Chip />\n</div>", layout_class(kind));
        prop_assert_eq!(out, expected);
    }
}
