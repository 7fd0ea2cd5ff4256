//! Synthetic test case derivation.
//!
//! Cases are generated from schema metadata rather than hand-written: one
//! baseline record expected to satisfy every per-field constraint in
//! isolation, then one invalid variant per qualifying rule key, each
//! overwriting a single field of the baseline.

use serde::Serialize;

use recval_model::{FieldType, Record, RuleSpec, Schema, Value};

/// A labeled synthetic record.
#[derive(Debug, Clone, Serialize)]
pub struct TestCase {
    pub label: String,
    pub record: Record,
}

/// Generate the baseline case plus per-field invalid variants.
///
/// Output order: baseline first, then variants in schema declaration order
/// with the rule-key sub-order too short, invalid pattern, below minimum,
/// above maximum, not in enum. No variant is derived for `max_length` or for
/// type mismatches. The pattern variant uses the literal text "invalid" and
/// is not guaranteed to actually violate an arbitrary pattern.
pub fn generate_cases(schema: &Schema) -> Vec<TestCase> {
    let baseline = baseline_record(schema);
    let mut cases = vec![TestCase {
        label: "Valid case".to_string(),
        record: baseline.clone(),
    }];
    for rule in &schema.properties {
        cases.extend(variants_for(&rule.name, &rule.spec, &baseline));
    }
    cases
}

/// Build a record expected to pass every field's own constraints.
pub fn baseline_record(schema: &Schema) -> Record {
    let mut record = Record::new();
    for rule in &schema.properties {
        record.insert(rule.name.clone(), baseline_value(&rule.spec));
    }
    record
}

fn baseline_value(spec: &RuleSpec) -> Value {
    match spec.field_type {
        FieldType::String => {
            if let Some(allowed) = &spec.allowed
                && let Some(first) = allowed.first()
            {
                first.clone()
            } else if let Some(min_length) = spec.min_length {
                Value::Text("x".repeat(min_length))
            } else {
                Value::from("test")
            }
        }
        FieldType::Integer => Value::Int(spec.minimum.unwrap_or(0)),
        FieldType::Boolean => Value::Bool(true),
        FieldType::Other => Value::Null,
    }
}

fn variants_for(field: &str, spec: &RuleSpec, baseline: &Record) -> Vec<TestCase> {
    let mut cases = Vec::new();
    if spec.field_type == FieldType::String {
        if spec.min_length.is_some() {
            cases.push(overwrite(
                baseline,
                field,
                Value::Text(String::new()),
                format!("{field}: too short"),
            ));
        }
        if spec.pattern.is_some() {
            cases.push(overwrite(
                baseline,
                field,
                Value::from("invalid"),
                format!("{field}: invalid pattern"),
            ));
        }
    }
    if spec.field_type == FieldType::Integer {
        if let Some(minimum) = spec.minimum {
            cases.push(overwrite(
                baseline,
                field,
                Value::Int(minimum - 1),
                format!("{field}: below minimum"),
            ));
        }
        if let Some(maximum) = spec.maximum {
            cases.push(overwrite(
                baseline,
                field,
                Value::Int(maximum + 1),
                format!("{field}: above maximum"),
            ));
        }
    }
    if spec.allowed.is_some() {
        cases.push(overwrite(
            baseline,
            field,
            Value::from("not-in-enum"),
            format!("{field}: not in enum"),
        ));
    }
    cases
}

fn overwrite(baseline: &Record, field: &str, value: Value, label: String) -> TestCase {
    let mut record = baseline.clone();
    record.insert(field.to_string(), value);
    TestCase { label, record }
}
