pub mod error;
pub mod record;
pub mod rule;
pub mod schema;
pub mod value;

pub use error::{RecvalError, Result};
pub use record::{Record, load_record};
pub use rule::{FieldType, RuleSpec};
pub use schema::{FieldRule, Schema};
pub use value::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_spec_defaults_to_no_constraints() {
        let spec = RuleSpec::new(FieldType::String);
        assert!(spec.min_length.is_none());
        assert!(spec.max_length.is_none());
        assert!(spec.pattern.is_none());
        assert!(spec.allowed.is_none());
        assert!(spec.minimum.is_none());
        assert!(spec.maximum.is_none());
    }

    #[test]
    fn value_renders_for_messages() {
        assert_eq!(Value::from("admin").render(), "\"admin\"");
        assert_eq!(Value::Int(42).render(), "42");
        assert_eq!(Value::Bool(true).render(), "true");
        assert_eq!(Value::Null.render(), "null");
    }

    #[test]
    fn boolean_value_is_not_an_integer() {
        assert_ne!(Value::Bool(true), Value::Int(1));
        assert_ne!(Value::Bool(false), Value::Int(0));
    }
}
