//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use recval_cases::{TestCase, generate_cases};
use recval_model::{Record, Schema, load_record};
use recval_validate::validate_record;

use crate::cli::{CasesArgs, RunArgs, ValidateArgs};

/// One generated case together with its validation outcome.
pub struct CaseOutcome {
    pub label: String,
    pub record: Record,
    pub violations: Vec<String>,
}

/// Result of the `run` subcommand: every generated case, validated.
pub struct RunResult {
    pub schema_path: PathBuf,
    pub schema: Schema,
    pub outcomes: Vec<CaseOutcome>,
}

pub fn run_cases(args: &RunArgs) -> Result<RunResult> {
    let schema = load_schema(&args.schema)?;
    let cases = generate_cases(&schema);
    tracing::info!(
        fields = schema.properties.len(),
        required = schema.required.len(),
        cases = cases.len(),
        "running generated cases"
    );
    let outcomes = cases
        .into_iter()
        .map(|case| {
            let violations = validate_record(&schema, &case.record);
            tracing::debug!(
                label = %case.label,
                violations = violations.len(),
                "case validated"
            );
            let TestCase { label, record } = case;
            CaseOutcome {
                label,
                record,
                violations,
            }
        })
        .collect();
    Ok(RunResult {
        schema_path: args.schema.clone(),
        schema,
        outcomes,
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<Vec<String>> {
    let schema = load_schema(&args.schema)?;
    let record = load_record(&args.record)
        .with_context(|| format!("failed to load record {}", args.record.display()))?;
    Ok(validate_record(&schema, &record))
}

pub fn run_print_cases(args: &CasesArgs) -> Result<()> {
    let schema = load_schema(&args.schema)?;
    let cases = generate_cases(&schema);
    let json = serde_json::to_string_pretty(&cases)?;
    println!("{json}");
    Ok(())
}

fn load_schema(path: &Path) -> Result<Schema> {
    Schema::from_path(path).with_context(|| format!("failed to load schema {}", path.display()))
}
