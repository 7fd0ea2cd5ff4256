//! Console reporting for case runs.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::{CaseOutcome, RunResult};

pub fn print_summary(result: &RunResult) {
    println!("Schema: {}", result.schema_path.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Case"),
        header_cell("Outcome"),
        header_cell("Violations"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for outcome in &result.outcomes {
        table.add_row(vec![
            Cell::new(&outcome.label),
            outcome_cell(outcome),
            violation_count_cell(outcome),
        ]);
    }
    println!("{table}");
    for outcome in &result.outcomes {
        print_case_detail(outcome);
    }
}

pub fn print_case_detail(outcome: &CaseOutcome) {
    println!();
    println!("Test case: {}", outcome.label);
    match serde_json::to_string(&outcome.record) {
        Ok(json) => println!("Input: {json}"),
        Err(error) => println!("Input: <unserializable: {error}>"),
    }
    if outcome.violations.is_empty() {
        println!("Valid!");
    } else {
        println!("Errors:");
        for violation in &outcome.violations {
            println!("- {violation}");
        }
    }
}

fn outcome_cell(outcome: &CaseOutcome) -> Cell {
    if outcome.violations.is_empty() {
        Cell::new("VALID")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("INVALID").fg(Color::Red)
    }
}

fn violation_count_cell(outcome: &CaseOutcome) -> Cell {
    if outcome.violations.is_empty() {
        Cell::new(0).fg(Color::DarkGrey)
    } else {
        Cell::new(outcome.violations.len()).fg(Color::Red)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
