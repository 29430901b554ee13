use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::fixed_cell_reference;

pub const SUMMARY_SHEET_NAME: &str = "Auswertung";

pub const SETTINGS_VALUE_COL: usize = 15;

/// A named constant in the settings area beside the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub name: &'static str,
    pub value: Decimal,
    pub row: usize,
}

impl Setting {
    pub fn reference(&self) -> String {
        fixed_cell_reference(self.row, SETTINGS_VALUE_COL)
    }
}

/// Conversion constants between taught hours and flex hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlexSettings {
    /// Minutes credited per actual hour and week.
    pub minute_reduction: Decimal,
    /// Minutes in one lesson hour.
    pub lesson_minutes: Decimal,
    /// Teaching weeks per school year.
    pub week_count: Decimal,
}

impl Default for FlexSettings {
    fn default() -> Self {
        Self {
            minute_reduction: Decimal::from(7),
            lesson_minutes: Decimal::from(43),
            week_count: Decimal::from(43),
        }
    }
}

impl FlexSettings {
    pub fn minute_reduction(&self) -> Setting {
        Setting {
            name: "Minutenreduktion",
            value: self.minute_reduction,
            row: 1,
        }
    }

    pub fn lesson_minutes(&self) -> Setting {
        Setting {
            name: "Stundendauer",
            value: self.lesson_minutes,
            row: 2,
        }
    }

    pub fn week_count(&self) -> Setting {
        Setting {
            name: "Wochenanzahl",
            value: self.week_count,
            row: 3,
        }
    }

    pub fn entries(&self) -> [Setting; 3] {
        [self.minute_reduction(), self.lesson_minutes(), self.week_count()]
    }
}
