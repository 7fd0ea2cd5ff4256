mod generator;

pub use generator::{TestCase, baseline_record, generate_cases};
