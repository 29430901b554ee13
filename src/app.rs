use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::excel::open_workbook;
use crate::report::{parse_report, Report, ReportLayout};
use crate::summary::{build_summary, FlexSettings, SummarySheet};

pub const OUTPUT_SUFFIX: &str = "_mit_Auswertung";

pub struct RunOptions {
    pub input: PathBuf,
    pub layout: ReportLayout,
    pub settings: FlexSettings,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            layout: ReportLayout::default(),
            settings: FlexSettings::default(),
        }
    }
}

pub struct RunOutcome {
    pub output_path: PathBuf,
    pub report: Report,
    pub summary: SummarySheet,
}

/// Path as typed or pasted at the prompt: whitespace and the quotes a file
/// manager adds around paths are dropped.
pub fn normalize_input_path(line: &str) -> PathBuf {
    PathBuf::from(line.trim().trim_matches('"'))
}

/// `<stem>_mit_Auswertung.<ext>` next to the input.
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Bericht".to_string());
    let extension = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "xlsx".to_string());
    let parent = input.parent().unwrap_or_else(|| Path::new(""));

    parent.join(format!("{stem}{OUTPUT_SUFFIX}.{extension}"))
}

/// Reads the report, evaluates it and writes the augmented copy.
pub fn run(options: &RunOptions) -> Result<RunOutcome> {
    let workbook = open_workbook(&options.input)?;
    debug!(
        path = %workbook.get_file_path().display(),
        sheets = ?workbook.get_sheet_names(),
        "loaded report workbook"
    );
    let sheet = workbook.first_sheet()?;

    let report = parse_report(sheet, &options.layout)?;
    if report.teachers.is_empty() {
        warn!(sheet = %sheet.name, "no teacher blocks found");
    }

    let summary = build_summary(&report.teachers, &options.settings)?;
    let output_path = output_path_for(&options.input);
    workbook.save_copy_with_summary(&output_path, &summary)?;

    info!(
        output = %output_path.display(),
        teachers = report.teachers.len(),
        "evaluation written"
    );

    Ok(RunOutcome {
        output_path,
        report,
        summary,
    })
}
