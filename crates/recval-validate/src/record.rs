//! Record-level validation.

use recval_model::{Record, Schema};

use crate::field::validate_field;

/// Validate a record against a schema, aggregating every violation.
///
/// Iteration follows schema declaration order. An absent field yields the
/// required-field message when listed as required and is otherwise skipped
/// without further checks. Record fields with no schema declaration are
/// ignored entirely. The call is pure: same inputs, same output.
pub fn validate_record(schema: &Schema, record: &Record) -> Vec<String> {
    let mut violations = Vec::new();
    for rule in &schema.properties {
        match record.get(&rule.name) {
            None => {
                if schema.is_required(&rule.name) {
                    violations.push(format!("{} is required.", rule.name));
                }
            }
            Some(value) => violations.extend(validate_field(&rule.name, value, &rule.spec)),
        }
    }
    violations
}
