use crate::excel::Cell;

/// A worksheet held as a 1-based grid. Row 0 and column 0 are padding so
/// `data[row][col]` lines up with spreadsheet coordinates.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub name: String,
    pub data: Vec<Vec<Cell>>,
    pub max_rows: usize,
    pub max_cols: usize,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: vec![vec![Cell::empty(); 1]; 1],
            max_rows: 0,
            max_cols: 0,
        }
    }

    /// Builds a sheet from rows starting at A1.
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        let mut sheet = Self::new(name);
        for (row_idx, row) in rows.into_iter().enumerate() {
            for (col_idx, cell) in row.into_iter().enumerate() {
                sheet.set_cell(row_idx + 1, col_idx + 1, cell);
            }
        }
        sheet
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row == 0 || col == 0 {
            return None;
        }
        self.data.get(row).and_then(|r| r.get(col))
    }

    /// Text of a cell, or "" outside the used range.
    pub fn text(&self, row: usize, col: usize) -> &str {
        self.cell(row, col).map_or("", |c| c.value.as_str())
    }

    pub fn is_blank(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_none_or(Cell::is_empty)
    }

    /// First column in `row` whose text equals `label`, ignoring case.
    pub fn find_in_row(&self, row: usize, label: &str) -> Option<usize> {
        let label = label.to_lowercase();
        (1..=self.max_cols).find(|&col| self.text(row, col).to_lowercase() == label)
    }

    pub fn ensure_cell_exists(&mut self, row: usize, col: usize) {
        if row >= self.data.len() {
            let row_len = self.data.first().map_or(col + 1, Vec::len);
            self.data
                .resize_with(row + 1, || vec![Cell::empty(); row_len]);
        }

        if col >= self.data[0].len() {
            for row_data in &mut self.data {
                row_data.resize_with(col + 1, Cell::empty);
            }
        }
    }

    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        if row == 0 || col == 0 {
            return;
        }
        self.ensure_cell_exists(row, col);

        if !cell.is_empty() {
            self.max_rows = self.max_rows.max(row);
            self.max_cols = self.max_cols.max(col);
        }
        self.data[row][col] = cell;
    }

    /// Non-empty cells in row-major order as `(row, col, cell)`, 1-based.
    pub fn used_cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.data.iter().enumerate().skip(1).flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .skip(1)
                .filter(|(_, cell)| !cell.is_empty())
                .map(move |(col, cell)| (row, col, cell))
        })
    }
}
