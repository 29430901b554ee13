// End-to-end runs over real xlsx files written to a temp directory

use calamine::{open_workbook, open_workbook_auto, Data, Reader, Xlsx};
use pretty_assertions::assert_eq;
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use untis_flex_report::app::{output_path_for, run, RunOptions};
use untis_flex_report::report::{LessonFilter, ReportLayout};
use untis_flex_report::ReportError;

/// Lesson row: hours, F-Upis, classes.
type Lesson = (f64, &'static str, &'static str);

fn write_untis_export(dir: &Path, blocks: &[(&str, &str, &str, Vec<Lesson>)]) -> PathBuf {
    let path = dir.join("Lehrerbericht.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet().set_name("Lehrer").unwrap();

    sheet
        .merge_range(0, 0, 0, 5, "Untis 2024 - Unterrichtsverteilung", &Format::new().set_bold())
        .unwrap();
    let mut row = 2u32;
    for (code, first, last, lessons) in blocks {
        sheet.write_string(row, 0, *code).unwrap();
        sheet.write_string(row, 1, *last).unwrap();
        sheet.write_string(row, 3, *first).unwrap();
        sheet.write_string(row + 1, 0, "Unterricht").unwrap();

        let header = row + 3;
        for (col, label) in ["Nr.", "Fach", "Klasse(n)", "F-Upis", "Realstunden"]
            .iter()
            .enumerate()
        {
            sheet.write_string(header, col as u16, *label).unwrap();
        }

        for (i, (hours, upis, classes)) in lessons.iter().enumerate() {
            let r = header + 1 + i as u32;
            sheet.write_number(r, 0, (i + 1) as f64).unwrap();
            sheet.write_string(r, 1, "D").unwrap();
            sheet.write_string(r, 2, *classes).unwrap();
            sheet.write_string(r, 3, *upis).unwrap();
            sheet.write_number(r, 4, *hours).unwrap();
        }

        let last_lesson = header + lessons.len() as u32;
        sheet.write_string(last_lesson + 2, 0, "Summe").unwrap();
        row = last_lesson + 4;
    }

    workbook.save(&path).unwrap();
    path
}

fn options(input: PathBuf) -> RunOptions {
    RunOptions::new(input)
}

#[test]
fn writes_evaluation_sheet_next_to_the_report() {
    let dir = TempDir::new().unwrap();
    let input = write_untis_export(
        dir.path(),
        &[
            ("ABCD", "Anna", "Muster", vec![(10.0, "M", "3AH"), (5.0, "R", "3AH"), (3.0, "M", "3AH")]),
            ("EFGH", "Erik", "Huber", vec![(12.5, "M", "4BH")]),
        ],
    );

    let outcome = run(&options(input.clone())).unwrap();

    assert_eq!(outcome.output_path, dir.path().join("Lehrerbericht_mit_Auswertung.xlsx"));
    assert_eq!(outcome.output_path, output_path_for(&input));
    assert!(outcome.output_path.is_file());

    let mut output = open_workbook_auto(&outcome.output_path).unwrap();
    assert_eq!(output.sheet_names(), vec!["Lehrer".to_string(), "Auswertung".to_string()]);

    let original = output.worksheet_range("Lehrer").unwrap();
    assert_eq!(
        original.get_value((2, 0)),
        Some(&Data::String("ABCD".to_string()))
    );

    let values = output.worksheet_range("Auswertung").unwrap();
    assert_eq!(values.get_value((0, 0)), Some(&Data::String("Kürzel".to_string())));
    assert_eq!(
        values.get_value((0, 11)),
        Some(&Data::String("Soll-/Istvergleich der Flexstunden pro Jahr".to_string()))
    );
    assert_eq!(values.get_value((1, 0)), Some(&Data::String("ABCD".to_string())));
    assert_eq!(values.get_value((1, 1)), Some(&Data::String("Anna".to_string())));
    assert_eq!(values.get_value((1, 2)), Some(&Data::String("Muster".to_string())));
    assert_eq!(values.get_value((1, 3)), Some(&Data::Float(13.0)));
    assert_eq!(values.get_value((2, 3)), Some(&Data::Float(12.5)));
    assert_eq!(values.get_value((0, 13)), Some(&Data::String("Minutenreduktion".to_string())));
    assert_eq!(values.get_value((0, 14)), Some(&Data::Float(7.0)));
    assert_eq!(values.get_value((2, 14)), Some(&Data::Float(43.0)));

    let formulas = output.worksheet_formula("Auswertung").unwrap();
    let formula = |row: u32, col: u32| {
        formulas
            .get_value((row, col))
            .map(|f| f.trim_start_matches('=').to_string())
            .unwrap_or_default()
    };
    assert_eq!(formula(1, 4), "D2*$O$1");
    assert_eq!(formula(1, 5), "E2/$O$2");
    assert_eq!(formula(1, 6), "F2*$O$3");
    assert_eq!(formula(1, 8), "ROUNDUP(F2,0)");
    assert_eq!(formula(1, 9), "$O$3-H2");
    assert_eq!(formula(2, 7), "ROUNDDOWN(G3-K3*$O$3,0)");
    assert_eq!(formula(2, 11), "G3-(H3*I3+J3*K3)");
}

#[test]
fn original_sheet_is_copied_unchanged() {
    let dir = TempDir::new().unwrap();
    let input = write_untis_export(dir.path(), &[("ABCD", "Anna", "Muster", vec![(4.0, "M", "3AH")])]);

    let outcome = run(&options(input.clone())).unwrap();

    let merges = |path: &Path| {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        workbook.load_merged_regions().unwrap();
        let regions: Vec<_> = workbook
            .merged_regions_by_sheet("Lehrer")
            .into_iter()
            .map(|(_, _, region)| (region.start, region.end))
            .collect();
        regions
    };
    assert_eq!(merges(&input), vec![((0, 0), (0, 5))]);
    assert_eq!(merges(&outcome.output_path), merges(&input));

    let cells = |path: &Path| {
        let range = open_workbook_auto(path).unwrap().worksheet_range("Lehrer").unwrap();
        let (first_row, first_col) = range.start().unwrap_or((0, 0));
        let used: Vec<_> = range
            .used_cells()
            .map(|(row, col, data)| (first_row + row as u32, first_col + col as u32, data.clone()))
            .collect();
        used
    };
    assert_eq!(cells(&outcome.output_path), cells(&input));
}

#[test]
fn out_of_range_hours_fail_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_untis_export(dir.path(), &[("ABCD", "Anna", "Muster", vec![(5e28, "M", "3AH")])]);

    let err = match run(&options(input.clone())) {
        Ok(_) => panic!("expected out of range hours"),
        Err(e) => e,
    };

    match err.downcast_ref::<ReportError>() {
        Some(ReportError::FlexOutOfRange { teacher }) => assert_eq!(teacher, "ABCD"),
        other => panic!("expected FlexOutOfRange, got {other:?}"),
    }
    assert!(!output_path_for(&input).exists());
}

#[test]
fn day_school_filter_drops_night_school_lessons() {
    let dir = TempDir::new().unwrap();
    let input = write_untis_export(
        dir.path(),
        &[(
            "ABCD",
            "Anna",
            "Muster",
            vec![(4.0, "M", "3AH"), (2.0, "M", "5AK"), (1.0, "M", "3AH, 5AK")],
        )],
    );
    let mut options = options(input);
    options.layout = ReportLayout::default().with_filter(LessonFilter::DaySchoolOnly);

    let outcome = run(&options).unwrap();

    assert_eq!(outcome.report.teachers[0].actual_hours().to_string(), "4");
    assert_eq!(outcome.report.warnings.len(), 1);
}

#[test]
fn rerunning_replaces_the_evaluation_sheet() {
    let dir = TempDir::new().unwrap();
    let input = write_untis_export(dir.path(), &[("ABCD", "Anna", "Muster", vec![(3.0, "M", "")])]);
    let first = run(&options(input)).unwrap();

    let second = run(&options(first.output_path.clone())).unwrap();

    let output = open_workbook_auto(&second.output_path).unwrap();
    assert_eq!(output.sheet_names(), vec!["Lehrer".to_string(), "Auswertung".to_string()]);
    assert_eq!(
        second.output_path,
        dir.path().join("Lehrerbericht_mit_Auswertung_mit_Auswertung.xlsx")
    );
}

#[test]
fn missing_report_names_the_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("gibt-es-nicht.xlsx");

    let err = match run(&options(input.clone())) {
        Ok(_) => panic!("expected missing file"),
        Err(e) => e,
    };

    match err.downcast_ref::<ReportError>() {
        Some(ReportError::FileNotFound(path)) => assert_eq!(path, &input),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
    assert!(!output_path_for(&input).exists());
}

#[test]
fn missing_column_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kaputt.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet().set_name("Lehrer").unwrap();
    sheet.write_string(0, 0, "WXYZ").unwrap();
    sheet.write_string(0, 1, "Zach").unwrap();
    sheet.write_string(3, 0, "F-Upis").unwrap();
    sheet.write_string(4, 0, "M").unwrap();
    sheet.write_string(6, 0, "Summe").unwrap();
    workbook.save(&path).unwrap();

    let err = match run(&options(path.clone())) {
        Ok(_) => panic!("expected missing column"),
        Err(e) => e,
    };

    assert_eq!(err.to_string(), "missing column Realstunden for teacher WXYZ");
    assert!(!output_path_for(&path).exists());
}
