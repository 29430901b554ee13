use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::ReportError;
use crate::excel::{format_number, Cell, CellType, Sheet};
use crate::summary::{write_summary, SummarySheet};

/// Every sheet of a workbook, loaded into memory.
#[derive(Debug, Clone)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    file_path: PathBuf,
}

pub fn open_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ReportError::FileNotFound(path.to_path_buf()).into());
    }

    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Unable to parse Excel file: {}", path.display()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .with_context(|| format!("Unable to read worksheet: {}", name))?;
        sheets.push(create_sheet_from_range(name, &range));
    }

    if sheets.is_empty() {
        return Err(ReportError::NoWorksheet.into());
    }

    info!(path = %path.display(), sheets = sheets.len(), "opened workbook");

    Ok(Workbook {
        sheets,
        file_path: path.to_path_buf(),
    })
}

fn create_sheet_from_range(name: &str, range: &Range<Data>) -> Sheet {
    let mut sheet = Sheet::new(name);
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    for (row_idx, col_idx, data) in range.used_cells() {
        let row = start_row as usize + row_idx + 1;
        let col = start_col as usize + col_idx + 1;
        sheet.set_cell(row, col, cell_from_data(data));
    }

    sheet
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::empty(),
        Data::String(s) => Cell::text(s.clone()),
        Data::Float(f) => Cell::number(*f),
        Data::Int(i) => Cell::number(*i as f64),
        Data::Bool(b) => Cell::new_with_type(
            if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellType::Boolean,
        ),
        Data::Error(e) => Cell::new_with_type(format!("{:?}", e), CellType::Error),
        Data::DateTime(dt) => Cell::new_with_type(format_number(dt.as_f64()), CellType::Date),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s.clone()),
    }
}

impl Workbook {
    /// The sheet holding the Untis report.
    pub fn first_sheet(&self) -> Result<&Sheet, ReportError> {
        self.sheets.first().ok_or(ReportError::NoWorksheet)
    }

    pub fn get_sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    pub fn get_file_path(&self) -> &Path {
        &self.file_path
    }

    /// Copies the source file to `path` and appends `summary` as a new
    /// sheet. The copied sheets are not touched; a sheet that already
    /// carries the summary's name is replaced.
    pub fn save_copy_with_summary(&self, path: &Path, summary: &SummarySheet) -> Result<()> {
        fs::copy(&self.file_path, path).with_context(|| {
            format!(
                "Unable to copy {} to {}",
                self.file_path.display(),
                path.display()
            )
        })?;

        let mut book = umya_spreadsheet::reader::xlsx::read(path)
            .with_context(|| format!("Unable to open workbook copy: {}", path.display()))?;

        if book
            .get_sheet_collection()
            .iter()
            .any(|sheet| sheet.get_name() == summary.name)
        {
            debug!(sheet = %summary.name, "replacing existing evaluation sheet");
            book.remove_sheet_by_name(&summary.name)
                .map_err(|e| anyhow!("Unable to remove sheet {}: {}", summary.name, e))?;
        }

        let worksheet = book
            .new_sheet(summary.name.as_str())
            .map_err(|e| anyhow!("Unable to add sheet {}: {}", summary.name, e))?;
        write_summary(summary, worksheet);

        umya_spreadsheet::writer::xlsx::write(&book, path)
            .with_context(|| format!("Unable to save workbook: {}", path.display()))?;

        info!(path = %path.display(), "saved workbook");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let path = Path::new("/nonexistent/untis/Bericht.xlsx");

        let err = open_workbook(path).unwrap_err();

        match err.downcast_ref::<ReportError>() {
            Some(ReportError::FileNotFound(missing)) => assert_eq!(missing, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "\"/nonexistent/untis/Bericht.xlsx\" konnte nicht gefunden werden."
        );
    }

    #[test]
    fn numeric_cells_keep_their_value() {
        assert_eq!(cell_from_data(&Data::Float(2.5)).value, "2.5");
        assert_eq!(cell_from_data(&Data::Int(3)).value, "3");
        assert_eq!(cell_from_data(&Data::Bool(true)).cell_type, CellType::Boolean);
        assert!(cell_from_data(&Data::String(String::new())).is_empty());
    }
}
