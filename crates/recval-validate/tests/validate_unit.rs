//! Unit tests for field and record validation.

use recval_model::{FieldType, Record, RuleSpec, Schema, Value};
use recval_validate::{validate_field, validate_record};

fn example_schema() -> Schema {
    Schema::from_json(
        r#"{
            "properties": {
                "name": {"type": "string", "min_length": 2},
                "age": {"type": "integer", "minimum": 0, "maximum": 120}
            },
            "required": ["name"]
        }"#,
    )
    .expect("parse schema")
}

fn record(entries: &[(&str, Value)]) -> Record {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[test]
fn valid_record_yields_no_violations() {
    let schema = example_schema();
    let input = record(&[("name", Value::from("Al")), ("age", Value::Int(30))]);
    assert_eq!(validate_record(&schema, &input), Vec::<String>::new());
}

#[test]
fn missing_required_field_short_circuits_its_checks() {
    let schema = example_schema();
    let input = record(&[("age", Value::Int(200))]);
    assert_eq!(
        validate_record(&schema, &input),
        vec![
            "name is required.".to_string(),
            "age must be at most 120.".to_string(),
        ]
    );
}

#[test]
fn violations_follow_schema_declaration_order() {
    let schema = example_schema();
    let input = record(&[("name", Value::from("A")), ("age", Value::Int(-1))]);
    assert_eq!(
        validate_record(&schema, &input),
        vec![
            "name should be at least 2 characters.".to_string(),
            "age must be at least 0.".to_string(),
        ]
    );
}

#[test]
fn absent_optional_field_is_skipped() {
    let schema = example_schema();
    let input = record(&[("name", Value::from("Al"))]);
    assert_eq!(validate_record(&schema, &input), Vec::<String>::new());
}

#[test]
fn undeclared_record_fields_are_ignored() {
    let schema = example_schema();
    let input = record(&[
        ("name", Value::from("Al")),
        ("nickname", Value::from("Big Al")),
    ]);
    assert_eq!(validate_record(&schema, &input), Vec::<String>::new());
}

#[test]
fn boolean_is_not_an_integer() {
    let spec = RuleSpec::new(FieldType::Integer);
    assert_eq!(
        validate_field("age", &Value::Bool(true), &spec),
        vec!["age should be an integer.".to_string()]
    );
}

#[test]
fn integer_is_not_a_boolean() {
    let spec = RuleSpec::new(FieldType::Boolean);
    assert_eq!(
        validate_field("active", &Value::Int(1), &spec),
        vec!["active should be a boolean.".to_string()]
    );
}

#[test]
fn type_messages_per_tag() {
    let spec = RuleSpec::new(FieldType::String);
    assert_eq!(
        validate_field("name", &Value::Int(7), &spec),
        vec!["name should be a string.".to_string()]
    );
}

#[test]
fn pattern_must_match_at_position_zero() {
    let spec = RuleSpec {
        pattern: Some("^A".to_string()),
        ..RuleSpec::new(FieldType::String)
    };
    assert_eq!(
        validate_field("code", &Value::from("xA"), &spec),
        vec!["code does not match required pattern.".to_string()]
    );
    assert!(validate_field("code", &Value::from("Ax"), &spec).is_empty());
}

#[test]
fn unanchored_pattern_still_matches_from_the_start() {
    let spec = RuleSpec {
        pattern: Some("[a-z]+@[a-z]+".to_string()),
        ..RuleSpec::new(FieldType::String)
    };
    assert!(validate_field("email", &Value::from("al@example"), &spec).is_empty());
    assert_eq!(
        validate_field("email", &Value::from(" al@example"), &spec),
        vec!["email does not match required pattern.".to_string()]
    );
}

#[test]
fn length_and_pattern_rules_skip_non_string_values() {
    let spec = RuleSpec {
        min_length: Some(5),
        max_length: Some(10),
        pattern: Some("^A".to_string()),
        ..RuleSpec::new(FieldType::Other)
    };
    assert!(validate_field("field", &Value::Int(3), &spec).is_empty());
    assert!(validate_field("field", &Value::Bool(false), &spec).is_empty());
}

#[test]
fn numeric_bounds_skip_non_integer_values() {
    let spec = RuleSpec {
        minimum: Some(0),
        maximum: Some(10),
        ..RuleSpec::new(FieldType::Other)
    };
    assert!(validate_field("field", &Value::from("-5"), &spec).is_empty());
}

#[test]
fn length_counts_characters_not_bytes() {
    let spec = RuleSpec {
        max_length: Some(3),
        ..RuleSpec::new(FieldType::String)
    };
    assert!(validate_field("name", &Value::from("äöü"), &spec).is_empty());
}

#[test]
fn enum_membership_is_exact_for_any_value_type() {
    let spec = RuleSpec {
        allowed: Some(vec![Value::from("admin"), Value::Int(2)]),
        ..RuleSpec::new(FieldType::Other)
    };
    assert!(validate_field("role", &Value::from("admin"), &spec).is_empty());
    assert!(validate_field("role", &Value::Int(2), &spec).is_empty());
    assert_eq!(
        validate_field("role", &Value::from("user"), &spec),
        vec!["role must be one of [\"admin\", 2].".to_string()]
    );
}

#[test]
fn all_violated_rules_report_without_short_circuit() {
    let spec = RuleSpec {
        min_length: Some(10),
        pattern: Some("^Z".to_string()),
        allowed: Some(vec![Value::from("zulu")]),
        ..RuleSpec::new(FieldType::String)
    };
    let violations = validate_field("code", &Value::from("abc"), &spec);
    assert_eq!(
        violations,
        vec![
            "code should be at least 10 characters.".to_string(),
            "code does not match required pattern.".to_string(),
            "code must be one of [\"zulu\"].".to_string(),
        ]
    );
}

#[test]
fn unrecognized_type_tag_skips_the_type_check() {
    let schema = Schema::from_json(r#"{"properties": {"score": {"type": "decimal"}}}"#)
        .expect("parse schema");
    let input = record(&[("score", Value::from("anything"))]);
    assert!(validate_record(&schema, &input).is_empty());
}

#[test]
fn required_name_without_declaration_is_inert() {
    let schema = Schema::from_json(
        r#"{"properties": {"name": {"type": "string"}}, "required": ["name", "ghost"]}"#,
    )
    .expect("parse schema");
    let input = record(&[("name", Value::from("Al"))]);
    assert!(validate_record(&schema, &input).is_empty());
}

#[test]
fn inconsistent_bounds_flag_every_candidate() {
    let spec = RuleSpec {
        minimum: Some(10),
        maximum: Some(5),
        ..RuleSpec::new(FieldType::Integer)
    };
    let violations = validate_field("age", &Value::Int(7), &spec);
    assert_eq!(
        violations,
        vec![
            "age must be at least 10.".to_string(),
            "age must be at most 5.".to_string(),
        ]
    );
}
