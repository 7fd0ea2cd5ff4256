//! Property tests for the validation engine.

use proptest::prelude::*;

use recval_model::{FieldRule, FieldType, Record, RuleSpec, Schema, Value};
use recval_validate::validate_record;

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::Text),
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
    ]
}

fn arb_field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        Just(FieldType::String),
        Just(FieldType::Integer),
        Just(FieldType::Boolean),
        Just(FieldType::Other),
    ]
}

fn arb_spec() -> impl Strategy<Value = RuleSpec> {
    (
        arb_field_type(),
        proptest::option::of(0usize..8),
        proptest::option::of(0usize..8),
        proptest::option::of(-50i64..50),
        proptest::option::of(-50i64..50),
    )
        .prop_map(|(field_type, min_length, max_length, minimum, maximum)| RuleSpec {
            min_length,
            max_length,
            minimum,
            maximum,
            ..RuleSpec::new(field_type)
        })
}

fn arb_schema() -> impl Strategy<Value = Schema> {
    (
        proptest::collection::vec(("[a-z]{1,6}", arb_spec()), 0..5),
        proptest::collection::vec("[a-z]{1,6}", 0..3),
    )
        .prop_map(|(fields, required)| {
            let mut properties: Vec<FieldRule> = Vec::new();
            for (name, spec) in fields {
                if properties.iter().all(|rule| rule.name != name) {
                    properties.push(FieldRule { name, spec });
                }
            }
            Schema {
                properties,
                required,
            }
        })
}

fn arb_record() -> impl Strategy<Value = Record> {
    proptest::collection::btree_map("[a-z]{1,6}", arb_value(), 0..6)
}

proptest! {
    #[test]
    fn validation_is_idempotent(schema in arb_schema(), record in arb_record()) {
        let first = validate_record(&schema, &record);
        let second = validate_record(&schema, &record);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn absent_required_field_reports_exactly_once(schema in arb_schema(), record in arb_record()) {
        let violations = validate_record(&schema, &record);
        for rule in &schema.properties {
            if record.contains_key(&rule.name) {
                continue;
            }
            let required_message = format!("{} is required.", rule.name);
            let required_count = violations
                .iter()
                .filter(|message| **message == required_message)
                .count();
            if schema.is_required(&rule.name) {
                prop_assert_eq!(required_count, 1);
            } else {
                prop_assert_eq!(required_count, 0);
            }
            // No rule-check messages for an absent field.
            let other_count = violations
                .iter()
                .filter(|message| {
                    message.starts_with(&format!("{} ", rule.name))
                        && **message != required_message
                })
                .count();
            prop_assert_eq!(other_count, 0);
        }
    }

    #[test]
    fn undeclared_fields_never_surface(schema in arb_schema(), record in arb_record()) {
        let violations = validate_record(&schema, &record);
        for name in record.keys() {
            if schema.field(name).is_some() {
                continue;
            }
            prop_assert!(
                violations
                    .iter()
                    .all(|message| !message.starts_with(&format!("{name} "))),
                "undeclared field {} surfaced in {:?}",
                name,
                violations
            );
        }
    }

    #[test]
    fn integer_spec_rejects_every_boolean(flag in any::<bool>()) {
        let spec = RuleSpec::new(FieldType::Integer);
        let violations = recval_validate::validate_field("age", &Value::Bool(flag), &spec);
        prop_assert_eq!(violations, vec!["age should be an integer.".to_string()]);
    }
}
