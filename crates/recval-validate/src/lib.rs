//! Rule evaluation engine.
//!
//! The engine is stateless: both entry points are pure functions over
//! immutable inputs and may be called concurrently from independent callers
//! without coordination.

mod field;
mod record;

pub use field::validate_field;
pub use record::validate_record;
