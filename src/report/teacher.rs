use rust_decimal::Decimal;
use serde::Serialize;

/// One teacher block from the Untis report with its qualifying hour total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Teacher {
    short_name: String,
    first_name: String,
    last_name: String,
    actual_hours: Decimal,
}

impl Teacher {
    pub fn new(
        short_name: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        actual_hours: Decimal,
    ) -> Self {
        Self {
            short_name: short_name.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            actual_hours,
        }
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn actual_hours(&self) -> Decimal {
        self.actual_hours
    }
}
