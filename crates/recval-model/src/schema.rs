//! Schema loading and lookup.
//!
//! A schema is the external contract the validator runs against: an ordered
//! set of field declarations plus the list of required field names. It is
//! immutable for the duration of a validation run.

use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::{RecvalError, Result};
use crate::rule::RuleSpec;

/// One declared field with its constraint bundle.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub name: String,
    pub spec: RuleSpec,
}

/// Declarative description of expected record shape.
///
/// `properties` preserves declaration order from the source document; the
/// validator and the case generator both iterate in that order. `required`
/// names are not cross-checked against `properties`: a required name with no
/// declaration is silently inert.
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    #[serde(deserialize_with = "ordered_field_rules")]
    pub properties: Vec<FieldRule>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl Schema {
    /// Parse a schema from JSON text and verify its patterns compile.
    ///
    /// A rule-spec without a `type` key or with an uncompilable `pattern` is
    /// a configuration error and fails here, before any validation runs.
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: Schema = serde_json::from_str(json)?;
        schema.check_patterns()?;
        Ok(schema)
    }

    /// Load a schema from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Look up the spec for a declared field.
    pub fn field(&self, name: &str) -> Option<&RuleSpec> {
        self.properties
            .iter()
            .find(|rule| rule.name == name)
            .map(|rule| &rule.spec)
    }

    /// Returns true if the field name is listed as required.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|required| required == name)
    }

    /// Compile every declared pattern once, surfacing invalid regexes as
    /// configuration errors.
    pub fn check_patterns(&self) -> Result<()> {
        for rule in &self.properties {
            if let Some(pattern) = &rule.spec.pattern
                && let Err(source) = Regex::new(pattern)
            {
                return Err(RecvalError::Pattern {
                    field: rule.name.clone(),
                    source,
                });
            }
        }
        Ok(())
    }
}

fn ordered_field_rules<'de, D>(deserializer: D) -> std::result::Result<Vec<FieldRule>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FieldRulesVisitor;

    impl<'de> Visitor<'de> for FieldRulesVisitor {
        type Value = Vec<FieldRule>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of field name to rule spec")
        }

        fn visit_map<A: MapAccess<'de>>(
            self,
            mut access: A,
        ) -> std::result::Result<Self::Value, A::Error> {
            let mut rules = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((name, spec)) = access.next_entry::<String, RuleSpec>()? {
                rules.push(FieldRule { name, spec });
            }
            Ok(rules)
        }
    }

    deserializer.deserialize_map(FieldRulesVisitor)
}
