use regex::Regex;
use std::sync::LazyLock;

// Grade digits, parallel letter, then H or F for the day-school branches.
static DAY_SCHOOL_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[A-Z][HF]").expect("day-school class pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassList {
    DaySchool,
    NightSchool,
    Mixed,
    Empty,
}

pub fn is_day_school_class(code: &str) -> bool {
    DAY_SCHOOL_CLASS.is_match(code)
}

/// Classifies a comma-separated "Klasse(n)" cell.
pub fn classify_class_list(text: &str) -> ClassList {
    let codes: Vec<&str> = text
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .collect();

    if codes.is_empty() {
        return ClassList::Empty;
    }

    let day_school = codes.iter().filter(|code| is_day_school_class(code)).count();
    match day_school {
        0 => ClassList::NightSchool,
        n if n == codes.len() => ClassList::DaySchool,
        _ => ClassList::Mixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_codes() {
        assert!(is_day_school_class("3AH"));
        assert!(is_day_school_class("12BF"));
        assert!(is_day_school_class("1AHIT"));
        assert!(!is_day_school_class("3AK"));
        assert!(!is_day_school_class("AH3"));
        assert!(!is_day_school_class("3ah"));
        assert!(!is_day_school_class("3H"));
    }

    #[test]
    fn class_lists() {
        assert_eq!(classify_class_list("3AH"), ClassList::DaySchool);
        assert_eq!(classify_class_list("3AH, 4BF"), ClassList::DaySchool);
        assert_eq!(classify_class_list("5AK,6BK"), ClassList::NightSchool);
        assert_eq!(classify_class_list("3AH, 5AK"), ClassList::Mixed);
        assert_eq!(classify_class_list(""), ClassList::Empty);
        assert_eq!(classify_class_list(" , "), ClassList::Empty);
    }
}
