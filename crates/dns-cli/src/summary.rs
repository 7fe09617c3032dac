use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dns_cli::types::ExtractResult;

/// Print the two status lines of a finished extraction.
pub fn print_extract_summary(result: &ExtractResult) {
    println!("{}", extract_summary_lines(result));
}

fn extract_summary_lines(result: &ExtractResult) -> String {
    let summary = &result.summary;
    format!(
        "[ok] wrote {}  rows={}  class={}  subclass={}\n\
         [info] resp_flag=1 rows={}  rcode_nonnull={}",
        summary.path.display(),
        summary.rows,
        result.label.class(),
        result.label.subclass(),
        summary.response_rows,
        summary.rcode_non_null
    )
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use dns_model::Label;
    use dns_output::OutputSummary;

    use super::*;

    #[test]
    fn status_lines() {
        let result = ExtractResult {
            label: Label::new("Benign", "Benign"),
            summary: OutputSummary {
                path: PathBuf::from("tmp/extracted.csv"),
                rows: 3,
                response_rows: 2,
                rcode_non_null: 2,
            },
            rows_skipped: 0,
        };
        insta::assert_snapshot!(extract_summary_lines(&result), @r"
        [ok] wrote tmp/extracted.csv  rows=3  class=Benign  subclass=Benign
        [info] resp_flag=1 rows=2  rcode_nonnull=2
        ");
    }
}
