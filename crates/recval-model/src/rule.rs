//! Per-field constraint bundle.

use serde::Deserialize;

use crate::value::Value;

/// Declared field type tag.
///
/// Tags outside the recognized set deserialize to `Other` and skip the type
/// check entirely. That passthrough is a documented extension point, not a
/// safety guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Boolean,
    #[serde(other)]
    Other,
}

impl FieldType {
    /// Canonical tag text, used in prompts and log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Other => "other",
        }
    }
}

/// Constraints for one schema field.
///
/// Every constraint besides `type` is optional; absence means no constraint
/// of that kind. No self-validation happens here: a `minimum` above
/// `maximum` is accepted as-is and only surfaces when every candidate value
/// fails a bound. Unrecognized keys in the source JSON are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSpec {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Regular expression matched from the start of the value (partial
    /// match anchored at position 0, not a full-string match).
    pub pattern: Option<String>,
    /// Ordered allowed-value list; membership test only, any value type.
    #[serde(rename = "enum")]
    pub allowed: Option<Vec<Value>>,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
}

impl RuleSpec {
    /// A spec with the given type and no other constraints.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            min_length: None,
            max_length: None,
            pattern: None,
            allowed: None,
            minimum: None,
            maximum: None,
        }
    }
}
