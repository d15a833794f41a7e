//! Conversion summary table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Table};

use crate::commands::ConvertResult;

/// Print the per-run summary after a successful conversion.
pub fn print_summary(result: &ConvertResult) {
    if let Some(path) = &result.design_csv {
        println!("Design table: {}", path.display());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec!["Run", "Trials", "Output"]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for report in &result.runs {
        table.add_row(vec![
            Cell::new(report.run),
            Cell::new(report.trials),
            Cell::new(report.path.display()),
        ]);
    }
    println!("{table}");
    println!(
        "Saved {} onset file{} from {} trial{}",
        result.runs.len(),
        if result.runs.len() == 1 { "" } else { "s" },
        result.trials,
        if result.trials == 1 { "" } else { "s" },
    );
}
