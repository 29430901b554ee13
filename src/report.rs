mod classes;
mod layout;
mod parser;
mod teacher;

pub use classes::{classify_class_list, is_day_school_class, ClassList};
pub use layout::{
    LessonFilter, ReportLayout, ACTUAL_HOURS_COLUMN, CLASSES_COLUMN, LESSON_CODE_COLUMN,
};
pub use parser::{is_teacher_short_name, parse_report, ParseWarning, Report};
pub use teacher::Teacher;
