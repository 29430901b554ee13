use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use umya_spreadsheet::{Table, TableColumn, Worksheet};

use crate::summary::builder::{NumberFormat, SummarySheet, SummaryValue, HEADERS};
use crate::utils::{cell_reference, index_to_col_name};

const TABLE_NAME: &str = "Flexstunden";

/// Writes `summary` into an already named, empty worksheet.
pub fn write_summary(summary: &SummarySheet, worksheet: &mut Worksheet) {
    for cell in &summary.cells {
        let target = worksheet.get_cell_mut(cell_reference(cell.row, cell.col).as_str());

        match &cell.value {
            SummaryValue::Text(text) => {
                target.set_value_string(text.as_str());
            }
            SummaryValue::Number(number) => {
                target.set_value_number(to_f64(*number));
            }
            SummaryValue::Formula { text, result } => {
                // The cached result goes in first; setting a value drops the formula
                target.set_value_number(to_f64(cached_result(*result)));
                target.set_formula(formula_body(text));
            }
        }

        if let Some(pattern) = cell.format.pattern() {
            target
                .get_style_mut()
                .get_number_format_mut()
                .set_format_code(pattern);
        }
    }

    let (first_row, first_col, last_row, last_col) = summary.table_range();
    let mut table = Table::new(
        TABLE_NAME,
        (
            cell_reference(first_row, first_col).as_str(),
            cell_reference(last_row, last_col).as_str(),
        ),
    );
    for header in HEADERS {
        table.add_column(TableColumn::new(header));
    }
    worksheet.add_table(table);

    let used_cols = summary.cells.iter().map(|c| c.col).max().unwrap_or(HEADERS.len());
    for col in 1..=used_cols {
        worksheet
            .get_column_dimension_mut(&index_to_col_name(col))
            .set_auto_width(true);
    }
}

/// Formula text as stored in the file, without the leading "=".
fn formula_body(text: &str) -> &str {
    text.strip_prefix('=').unwrap_or(text)
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn cached_result(value: Decimal) -> Decimal {
    value.round_dp(10).normalize()
}
