use rust_decimal::Decimal;

use crate::error::ReportError;
use crate::report::Teacher;
use crate::summary::settings::{SETTINGS_VALUE_COL, SUMMARY_SHEET_NAME};
use crate::summary::{FlexHours, FlexSettings};
use crate::utils::{cell_left, cell_reference};

pub const HEADERS: [&str; 12] = [
    "Kürzel",
    "Vorname",
    "Nachname",
    "Realstunden",
    "Flexminuten/Woche",
    "Flexstunden/Woche",
    "Flexstunden/Jahr",
    "Anzahl Wochen Zeitraum 1",
    "Flexstunden pro Woche im Zeitraum 1",
    "Anzahl Wochen Zeitraum 2",
    "Flexstunden pro Woche im Zeitraum 2",
    "Soll-/Istvergleich der Flexstunden pro Jahr",
];

pub const SHORT_NAME_COL: usize = 1;
pub const FIRST_NAME_COL: usize = 2;
pub const LAST_NAME_COL: usize = 3;
pub const ACTUAL_HOURS_COL: usize = 4;
pub const FLEX_MINUTES_PER_WEEK_COL: usize = 5;
pub const FLEX_HOURS_PER_WEEK_COL: usize = 6;
pub const FLEX_HOURS_PER_YEAR_COL: usize = 7;
pub const PERIOD1_WEEKS_COL: usize = 8;
pub const PERIOD1_RATE_COL: usize = 9;
pub const PERIOD2_WEEKS_COL: usize = 10;
pub const PERIOD2_RATE_COL: usize = 11;
pub const VARIANCE_COL: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    General,
    TwoDecimals,
    Integer,
}

impl NumberFormat {
    pub fn pattern(self) -> Option<&'static str> {
        match self {
            NumberFormat::General => None,
            NumberFormat::TwoDecimals => Some("0.00"),
            NumberFormat::Integer => Some("0"),
        }
    }

    fn for_column(col: usize) -> Self {
        match col {
            ACTUAL_HOURS_COL..=FLEX_HOURS_PER_YEAR_COL | VARIANCE_COL => NumberFormat::TwoDecimals,
            PERIOD1_WEEKS_COL..=PERIOD2_RATE_COL => NumberFormat::Integer,
            _ => NumberFormat::General,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryValue {
    Text(String),
    Number(Decimal),
    /// Formula text with a leading "=", plus the value it evaluates to.
    Formula { text: String, result: Decimal },
}

/// A cell of the summary sheet, 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCell {
    pub row: usize,
    pub col: usize,
    pub value: SummaryValue,
    pub format: NumberFormat,
}

/// The evaluation sheet as data, ready to be written into a workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct SummarySheet {
    pub name: String,
    pub cells: Vec<SummaryCell>,
    pub rows: Vec<FlexHours>,
    pub settings: FlexSettings,
}

impl SummarySheet {
    pub fn cell(&self, row: usize, col: usize) -> Option<&SummaryCell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }

    pub fn last_row(&self) -> usize {
        self.rows.len() + 1
    }

    /// `(first_row, first_col, last_row, last_col)` of the table, 1-based.
    ///
    /// A table needs at least one data row, so an empty teacher list still
    /// spans row 2.
    pub fn table_range(&self) -> (usize, usize, usize, usize) {
        (1, 1, self.last_row().max(2), HEADERS.len())
    }
}

/// Lays out the "Auswertung" sheet for `teachers` in the given order.
pub fn build_summary(
    teachers: &[Teacher],
    settings: &FlexSettings,
) -> Result<SummarySheet, ReportError> {
    let mut cells = Vec::with_capacity((teachers.len() + 1) * HEADERS.len() + 6);

    for (idx, header) in HEADERS.iter().enumerate() {
        cells.push(SummaryCell {
            row: 1,
            col: idx + 1,
            value: SummaryValue::Text((*header).to_string()),
            format: NumberFormat::General,
        });
    }

    for setting in settings.entries() {
        if let Some((row, col)) = cell_left((setting.row, SETTINGS_VALUE_COL)) {
            cells.push(SummaryCell {
                row,
                col,
                value: SummaryValue::Text(setting.name.to_string()),
                format: NumberFormat::General,
            });
        }
        cells.push(SummaryCell {
            row: setting.row,
            col: SETTINGS_VALUE_COL,
            value: SummaryValue::Number(setting.value),
            format: NumberFormat::General,
        });
    }

    let mut rows = Vec::with_capacity(teachers.len());
    for (idx, teacher) in teachers.iter().enumerate() {
        let row = idx + 2;
        let flex = FlexHours::compute(teacher.actual_hours(), settings).ok_or_else(|| {
            ReportError::FlexOutOfRange {
                teacher: teacher.short_name().to_string(),
            }
        })?;
        cells.extend(teacher_row(row, teacher, &flex, settings));
        rows.push(flex);
    }

    Ok(SummarySheet {
        name: SUMMARY_SHEET_NAME.to_string(),
        cells,
        rows,
        settings: settings.clone(),
    })
}

fn teacher_row(
    row: usize,
    teacher: &Teacher,
    flex: &FlexHours,
    settings: &FlexSettings,
) -> Vec<SummaryCell> {
    let at = |col: usize| cell_reference(row, col);
    let minute_reduction = settings.minute_reduction().reference();
    let lesson_minutes = settings.lesson_minutes().reference();
    let week_count = settings.week_count().reference();

    let actual_hours = at(ACTUAL_HOURS_COL);
    let per_week = at(FLEX_HOURS_PER_WEEK_COL);
    let per_year = at(FLEX_HOURS_PER_YEAR_COL);
    let period1_weeks = at(PERIOD1_WEEKS_COL);
    let period1_rate = at(PERIOD1_RATE_COL);
    let period2_weeks = at(PERIOD2_WEEKS_COL);
    let period2_rate = at(PERIOD2_RATE_COL);

    let values = [
        (SHORT_NAME_COL, SummaryValue::Text(teacher.short_name().to_string())),
        (FIRST_NAME_COL, SummaryValue::Text(teacher.first_name().to_string())),
        (LAST_NAME_COL, SummaryValue::Text(teacher.last_name().to_string())),
        (ACTUAL_HOURS_COL, SummaryValue::Number(teacher.actual_hours())),
        (
            FLEX_MINUTES_PER_WEEK_COL,
            formula(
                format!("={actual_hours}*{minute_reduction}"),
                flex.flex_minutes_per_week,
            ),
        ),
        (
            FLEX_HOURS_PER_WEEK_COL,
            formula(
                format!("={}/{lesson_minutes}", at(FLEX_MINUTES_PER_WEEK_COL)),
                flex.flex_hours_per_week,
            ),
        ),
        (
            FLEX_HOURS_PER_YEAR_COL,
            formula(format!("={per_week}*{week_count}"), flex.flex_hours_per_year),
        ),
        (
            PERIOD1_WEEKS_COL,
            formula(
                format!("=ROUNDDOWN({per_year}-{period2_rate}*{week_count},0)"),
                flex.period1_weeks,
            ),
        ),
        (
            PERIOD1_RATE_COL,
            formula(format!("=ROUNDUP({per_week},0)"), flex.period1_hours_per_week),
        ),
        (
            PERIOD2_WEEKS_COL,
            formula(format!("={week_count}-{period1_weeks}"), flex.period2_weeks),
        ),
        (
            PERIOD2_RATE_COL,
            formula(format!("=ROUNDDOWN({per_week},0)"), flex.period2_hours_per_week),
        ),
        (
            VARIANCE_COL,
            formula(
                format!(
                    "={per_year}-({period1_weeks}*{period1_rate}+{period2_weeks}*{period2_rate})"
                ),
                flex.variance,
            ),
        ),
    ];

    values
        .into_iter()
        .map(|(col, value)| SummaryCell {
            row,
            col,
            value,
            format: NumberFormat::for_column(col),
        })
        .collect()
}

fn formula(text: String, result: Decimal) -> SummaryValue {
    SummaryValue::Formula { text, result }
}
