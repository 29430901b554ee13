use rust_decimal::Decimal;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::error::ReportError;
use crate::excel::Sheet;
use crate::report::classes::{classify_class_list, ClassList};
use crate::report::layout::{
    LessonFilter, ReportLayout, ACTUAL_HOURS_COLUMN, CLASSES_COLUMN, LESSON_CODE_COLUMN,
};
use crate::report::Teacher;
use crate::utils::{cell_below, row_below};

/// Non-fatal finding while reading a teacher block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub teacher: String,
    pub row: usize,
    pub classes: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mixed day and night school lessons in {}", self.classes)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub teachers: Vec<Teacher>,
    pub warnings: Vec<ParseWarning>,
}

struct LessonColumns {
    hours: usize,
    lesson_code: usize,
    classes: Option<usize>,
}

struct TeacherBlock {
    teacher: Teacher,
    last_row: usize,
}

/// Reads every teacher block of an Untis lesson report.
///
/// A block starts at a row whose first cell is a four letter upper-case
/// short name. Its lesson table header sits `layout.header_offset` rows
/// below; lesson rows follow until the "Realstunden" column runs empty.
pub fn parse_report(sheet: &Sheet, layout: &ReportLayout) -> Result<Report, ReportError> {
    let mut report = Report::default();
    let mut seen = HashSet::new();
    let mut start_row = 1;

    while start_row < sheet.max_rows {
        let Some(teacher_row) = find_next_teacher_row(sheet, start_row) else {
            break;
        };

        let block = read_teacher_block(sheet, teacher_row, layout, &mut report.warnings)?;
        debug!(
            teacher = block.teacher.short_name(),
            row = teacher_row,
            hours = %block.teacher.actual_hours(),
            "read teacher block"
        );

        if !seen.insert(block.teacher.short_name().to_string()) {
            warn!(
                teacher = block.teacher.short_name(),
                row = teacher_row,
                "teacher appears more than once in the report"
            );
        }

        report.teachers.push(block.teacher);
        start_row = row_below(block.last_row, layout.resume_offset);
    }

    info!(
        sheet = %sheet.name,
        teachers = report.teachers.len(),
        warnings = report.warnings.len(),
        "parsed Untis report"
    );

    Ok(report)
}

pub fn is_teacher_short_name(value: &str) -> bool {
    value.chars().count() == 4 && value.chars().all(char::is_uppercase)
}

fn find_next_teacher_row(sheet: &Sheet, from: usize) -> Option<usize> {
    (from..=sheet.max_rows).find(|&row| is_teacher_short_name(sheet.text(row, 1)))
}

fn read_teacher_block(
    sheet: &Sheet,
    teacher_row: usize,
    layout: &ReportLayout,
    warnings: &mut Vec<ParseWarning>,
) -> Result<TeacherBlock, ReportError> {
    let short_name = sheet.text(teacher_row, 1);
    let last_name = sheet.text(teacher_row, 2);
    let first_name = sheet.text(teacher_row, 4);

    let header_row = row_below(teacher_row, layout.header_offset);
    let columns = locate_columns(sheet, header_row, layout.filter, short_name)?;

    let mut actual_hours = Decimal::ZERO;
    let mut last_row = header_row;
    let mut hours_cell = cell_below((header_row, columns.hours));

    while !sheet.is_blank(hours_cell.0, hours_cell.1) {
        let row = hours_cell.0;
        if lesson_counts(sheet, row, &columns, short_name, warnings) {
            let hours = parse_hours(sheet.text(row, columns.hours), short_name, row)?;
            actual_hours = actual_hours.checked_add(hours).ok_or_else(|| {
                ReportError::HoursOutOfRange {
                    teacher: short_name.to_string(),
                    row,
                }
            })?;
        }
        last_row = row;
        hours_cell = cell_below(hours_cell);
    }

    Ok(TeacherBlock {
        teacher: Teacher::new(short_name, first_name, last_name, actual_hours),
        last_row,
    })
}

fn locate_columns(
    sheet: &Sheet,
    header_row: usize,
    filter: LessonFilter,
    teacher: &str,
) -> Result<LessonColumns, ReportError> {
    let find = |label: &str| {
        sheet
            .find_in_row(header_row, label)
            .ok_or_else(|| ReportError::MissingColumn {
                column: label.to_string(),
                teacher: teacher.to_string(),
            })
    };

    let hours = find(ACTUAL_HOURS_COLUMN)?;
    let lesson_code = find(LESSON_CODE_COLUMN)?;
    let classes = match filter {
        LessonFilter::AllLessons => None,
        LessonFilter::DaySchoolOnly => Some(find(CLASSES_COLUMN)?),
    };

    Ok(LessonColumns {
        hours,
        lesson_code,
        classes,
    })
}

fn lesson_counts(
    sheet: &Sheet,
    row: usize,
    columns: &LessonColumns,
    teacher: &str,
    warnings: &mut Vec<ParseWarning>,
) -> bool {
    // "R" marks reductions and substitutions
    if sheet.text(row, columns.lesson_code).eq_ignore_ascii_case("R") {
        return false;
    }

    let Some(classes_col) = columns.classes else {
        return true;
    };

    let classes = sheet.text(row, classes_col);
    match classify_class_list(classes) {
        ClassList::DaySchool => true,
        ClassList::NightSchool | ClassList::Empty => false,
        ClassList::Mixed => {
            let warning = ParseWarning {
                teacher: teacher.to_string(),
                row,
                classes: classes.to_string(),
            };
            warn!(teacher, row, "{}", warning);
            warnings.push(warning);
            false
        }
    }
}

fn parse_hours(value: &str, teacher: &str, row: usize) -> Result<Decimal, ReportError> {
    let hours = Decimal::from_str(value.trim()).map_err(|source| ReportError::InvalidHours {
        teacher: teacher.to_string(),
        row,
        value: value.to_string(),
        source,
    })?;

    if hours.is_sign_negative() && !hours.is_zero() {
        return Err(ReportError::NegativeHours {
            teacher: teacher.to_string(),
            row,
            value: hours,
        });
    }

    Ok(hours)
}
