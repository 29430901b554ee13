pub const ACTUAL_HOURS_COLUMN: &str = "Realstunden";
pub const LESSON_CODE_COLUMN: &str = "F-Upis";
pub const CLASSES_COLUMN: &str = "Klasse(n)";

/// Which lesson rows count toward a teacher's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LessonFilter {
    /// Every row except those marked "R".
    #[default]
    AllLessons,
    /// Like `AllLessons`, and the class list must be day-school only.
    DaySchoolOnly,
}

impl LessonFilter {
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            LessonFilter::AllLessons => &[ACTUAL_HOURS_COLUMN, LESSON_CODE_COLUMN],
            LessonFilter::DaySchoolOnly => {
                &[ACTUAL_HOURS_COLUMN, LESSON_CODE_COLUMN, CLASSES_COLUMN]
            }
        }
    }
}

/// Geometry of a teacher block in the Untis export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLayout {
    /// Rows from the teacher name row down to the table header.
    pub header_offset: usize,
    /// Rows skipped after the last lesson row before searching again.
    pub resume_offset: usize,
    pub filter: LessonFilter,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            header_offset: 3,
            resume_offset: 4,
            filter: LessonFilter::default(),
        }
    }
}

impl ReportLayout {
    pub fn with_filter(mut self, filter: LessonFilter) -> Self {
        self.filter = filter;
        self
    }
}
