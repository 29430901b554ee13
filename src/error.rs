use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("\"{}\" konnte nicht gefunden werden.", .0.display())]
    FileNotFound(PathBuf),

    #[error("missing column {column} for teacher {teacher}")]
    MissingColumn { column: String, teacher: String },

    #[error("invalid Realstunden value \"{value}\" in row {row} for teacher {teacher}: {source}")]
    InvalidHours {
        teacher: String,
        row: usize,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("negative Realstunden value {value} in row {row} for teacher {teacher}")]
    NegativeHours {
        teacher: String,
        row: usize,
        value: Decimal,
    },

    #[error("Realstunden total for teacher {teacher} is out of range at row {row}")]
    HoursOutOfRange { teacher: String, row: usize },

    #[error("flex hours for teacher {teacher} are out of range")]
    FlexOutOfRange { teacher: String },

    #[error("workbook contains no worksheets")]
    NoWorksheet,
}
