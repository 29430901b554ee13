use anyhow::{Context, Result};
use serde::Serialize;

use crate::report::{Report, Teacher};
use crate::summary::{FlexHours, FlexSettings, SummarySheet};

#[derive(Debug, Serialize)]
pub struct TeacherSummary<'a> {
    pub teacher: &'a Teacher,
    pub flex: &'a FlexHours,
}

/// Machine readable form of the evaluation sheet.
#[derive(Debug, Serialize)]
pub struct SummaryExport<'a> {
    pub settings: &'a FlexSettings,
    pub teachers: Vec<TeacherSummary<'a>>,
    pub warnings: Vec<String>,
}

pub fn summary_export<'a>(report: &'a Report, summary: &'a SummarySheet) -> SummaryExport<'a> {
    SummaryExport {
        settings: &summary.settings,
        teachers: report
            .teachers
            .iter()
            .zip(&summary.rows)
            .map(|(teacher, flex)| TeacherSummary { teacher, flex })
            .collect(),
        warnings: report.warnings.iter().map(ToString::to_string).collect(),
    }
}

pub fn serialize_to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize data to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ParseWarning;
    use crate::summary::build_summary;
    use rust_decimal::Decimal;
    use serde_json::Value;

    #[test]
    fn export_pairs_teachers_with_their_flex_hours() {
        let report = Report {
            teachers: vec![Teacher::new("ABCD", "Anna", "Muster", Decimal::from(13))],
            warnings: vec![ParseWarning {
                teacher: "ABCD".into(),
                row: 9,
                classes: "3AH, 5AK".into(),
            }],
        };
        let summary = build_summary(&report.teachers, &FlexSettings::default()).unwrap();

        let json = serialize_to_json(&summary_export(&report, &summary)).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["settings"]["minute_reduction"], 7.0);
        assert_eq!(value["teachers"][0]["teacher"]["short_name"], "ABCD");
        assert_eq!(value["teachers"][0]["teacher"]["actual_hours"], 13.0);
        assert_eq!(value["teachers"][0]["flex"]["flex_hours_per_year"], 91.0);
        assert_eq!(value["teachers"][0]["flex"]["period2_weeks"], 38.0);
        assert_eq!(
            value["warnings"][0],
            "mixed day and night school lessons in 3AH, 5AK"
        );
    }
}
