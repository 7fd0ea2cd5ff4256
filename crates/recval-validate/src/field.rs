//! Per-field rule evaluation.

use regex::Regex;

use recval_model::{FieldType, RuleSpec, Value};

/// Evaluate one field value against its constraint bundle.
///
/// Checks run in a fixed order (type, min_length, max_length, pattern, enum,
/// minimum, maximum), are independent, and never short-circuit: every
/// violated constraint contributes its own message. Length and pattern rules
/// apply only to text values and numeric bounds only to integers; when the
/// guard fails the check is skipped without a violation, so a `pattern` rule
/// on a non-string value reports nothing.
pub fn validate_field(field: &str, value: &Value, spec: &RuleSpec) -> Vec<String> {
    let mut violations = Vec::new();

    match spec.field_type {
        FieldType::String => {
            if !matches!(value, Value::Text(_)) {
                violations.push(format!("{field} should be a string."));
            }
        }
        FieldType::Integer => {
            // Value carries booleans as a distinct variant, so a boolean
            // never passes the integer check.
            if !matches!(value, Value::Int(_)) {
                violations.push(format!("{field} should be an integer."));
            }
        }
        FieldType::Boolean => {
            if !matches!(value, Value::Bool(_)) {
                violations.push(format!("{field} should be a boolean."));
            }
        }
        FieldType::Other => {}
    }

    if let (Some(min_length), Value::Text(text)) = (spec.min_length, value)
        && text.chars().count() < min_length
    {
        violations.push(format!(
            "{field} should be at least {min_length} characters."
        ));
    }

    if let (Some(max_length), Value::Text(text)) = (spec.max_length, value)
        && text.chars().count() > max_length
    {
        violations.push(format!("{field} should be at most {max_length} characters."));
    }

    if let (Some(pattern), Value::Text(text)) = (spec.pattern.as_deref(), value) {
        match Regex::new(pattern) {
            Ok(regex) => {
                // Partial match anchored at position 0; a later substring
                // match does not count.
                let matched = regex.find(text).is_some_and(|hit| hit.start() == 0);
                if !matched {
                    violations.push(format!("{field} does not match required pattern."));
                }
            }
            Err(error) => {
                // Schema loading rejects uncompilable patterns, so this only
                // fires for hand-built specs.
                tracing::debug!(field, %error, "skipping uncompilable pattern");
            }
        }
    }

    if let Some(allowed) = &spec.allowed
        && !allowed.contains(value)
    {
        violations.push(format!(
            "{field} must be one of {}.",
            render_values(allowed)
        ));
    }

    if let (Some(minimum), Value::Int(number)) = (spec.minimum, value)
        && *number < minimum
    {
        violations.push(format!("{field} must be at least {minimum}."));
    }

    if let (Some(maximum), Value::Int(number)) = (spec.maximum, value)
        && *number > maximum
    {
        violations.push(format!("{field} must be at most {maximum}."));
    }

    violations
}

/// Render an allowed-value list as its literal sequence representation,
/// e.g. `["admin", "user"]`.
fn render_values(values: &[Value]) -> String {
    let rendered: Vec<String> = values.iter().map(Value::render).collect();
    format!("[{}]", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_list_renders_literally() {
        let values = vec![Value::from("admin"), Value::Int(2), Value::Bool(false)];
        assert_eq!(render_values(&values), "[\"admin\", 2, false]");
    }
}
