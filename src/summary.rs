mod builder;
mod flex;
mod settings;
mod writer;

pub use builder::{
    build_summary, NumberFormat, SummaryCell, SummarySheet, SummaryValue, HEADERS,
};
pub use flex::FlexHours;
pub use settings::{FlexSettings, Setting, SETTINGS_VALUE_COL, SUMMARY_SHEET_NAME};
pub use writer::write_summary;
