//! Record loading.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::value::Value;

/// A record under validation: field name to scalar value. Absent fields are
/// simply missing keys. The validator never mutates a record.
pub type Record = BTreeMap<String, Value>;

/// Load a record from a JSON object file.
pub fn load_record(path: &Path) -> Result<Record> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
