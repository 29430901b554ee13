#[derive(Clone, Debug, PartialEq)]
pub enum CellType {
    Text,
    Number,
    Date,
    Boolean,
    Error,
    Empty,
}

/// One grid cell as loaded from the source workbook.
///
/// `value` is the displayed text the parser sees; a formula cell carries
/// its cached result.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub value: String,
    pub cell_type: CellType,
}

impl Cell {
    pub fn new_with_type(value: String, cell_type: CellType) -> Self {
        Self { value, cell_type }
    }

    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            return Self::empty();
        }
        Self::new_with_type(value, CellType::Text)
    }

    pub fn number(number: f64) -> Self {
        Self::new_with_type(format_number(number), CellType::Number)
    }

    pub fn empty() -> Self {
        Self::new_with_type(String::new(), CellType::Empty)
    }

    /// Blank as far as the report layout is concerned: nothing is displayed.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Canonical text of a numeric cell: integral values without a fraction,
/// everything else in the shortest form that round-trips. Never locale
/// dependent and never in exponent notation.
pub fn format_number(f: f64) -> String {
    if f == (f as i64) as f64 && f.abs() < 1e10 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}
