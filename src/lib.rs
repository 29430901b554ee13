pub mod app;
pub mod error;
pub mod excel;
pub mod json_export;
pub mod launcher;
pub mod report;
pub mod summary;
pub mod utils;

pub use error::ReportError;
