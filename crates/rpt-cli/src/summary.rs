//! Human-readable summaries printed after a command succeeds.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use polars::prelude::DataFrame;

use crate::types::{MergeResult, RunResult};

const PREVIEW_ROWS: usize = 5;

pub fn print_merge_summary(result: &MergeResult) {
    println!("Merged: {}", result.merged.join(" + "));
    if !result.skipped.is_empty() {
        println!("Skipped: {}", result.skipped.join(", "));
    }
    println!(
        "Result: {} rows x {} columns",
        result.table.height(),
        result.table.width()
    );
    println!("Exported: {}", result.output.display());
    print_preview(&result.table);
}

pub fn print_run_summary(result: &RunResult) {
    println!(
        "Pipeline complete: {} step(s), {} rows x {} columns",
        result.steps,
        result.table.height(),
        result.table.width()
    );
    println!("Written: {}", result.destination.display());
    print_preview(&result.table);
}

/// Prints the first few rows of a frame, like the original preview panes.
fn print_preview(frame: &DataFrame) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        frame
            .get_column_names()
            .iter()
            .map(|name| Cell::new(name.as_str()).add_attribute(Attribute::Bold)),
    );
    for row_index in 0..frame.height().min(PREVIEW_ROWS) {
        let row: Vec<Cell> = frame
            .get_columns()
            .iter()
            .map(|column| match column.get(row_index) {
                Ok(value) => Cell::new(value.str_value()),
                Err(_) => Cell::new(""),
            })
            .collect();
        table.add_row(row);
    }
    println!("{table}");
    if frame.height() > PREVIEW_ROWS {
        println!("... {} more row(s)", frame.height() - PREVIEW_ROWS);
    }
}
