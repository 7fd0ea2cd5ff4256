//! Interactive record entry.
//!
//! A simple request/response cycle: prompt for each schema field, coerce the
//! input per the declared type, validate, print, and loop until the operator
//! declines another case. No state beyond the record under construction.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use recval_model::{FieldType, Record, Schema, Value};
use recval_validate::validate_record;

use crate::commands::CaseOutcome;
use crate::summary::print_case_detail;

pub fn prompt_loop(schema: &Schema) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut counter = 0usize;
    loop {
        let answer = prompt(&mut input, "Do you want to enter a custom test case? (y/n): ")?;
        if !answer.eq_ignore_ascii_case("y") {
            return Ok(());
        }
        counter += 1;
        let record = prompt_record(&mut input, schema)?;
        let violations = validate_record(schema, &record);
        print_case_detail(&CaseOutcome {
            label: format!("Custom case {counter}"),
            record,
            violations,
        });
    }
}

fn prompt_record<R: BufRead>(input: &mut R, schema: &Schema) -> Result<Record> {
    let mut record = Record::new();
    for rule in &schema.properties {
        let raw = prompt(
            input,
            &format!(
                "Enter value for {} ({}): ",
                rule.name,
                rule.spec.field_type.as_str()
            ),
        )?;
        record.insert(
            rule.name.clone(),
            coerce_input(&rule.name, &raw, rule.spec.field_type),
        );
    }
    Ok(record)
}

fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Coerce raw console input to the declared field type.
///
/// Integer parse failures fall back to 0 with a warning; booleans accept
/// `true`/`1`/`yes` (case-insensitive) as true and anything else as false.
/// Every other declared type keeps the input as text.
fn coerce_input(field: &str, raw: &str, field_type: FieldType) -> Value {
    match field_type {
        FieldType::Integer => match raw.parse::<i64>() {
            Ok(number) => Value::Int(number),
            Err(_) => {
                tracing::warn!(field, raw, "invalid integer, using 0");
                println!("Invalid integer for {field}, using 0.");
                Value::Int(0)
            }
        },
        FieldType::Boolean => {
            let truthy = matches!(raw.to_lowercase().as_str(), "true" | "1" | "yes");
            Value::Bool(truthy)
        }
        FieldType::String | FieldType::Other => Value::Text(raw.to_string()),
    }
}
