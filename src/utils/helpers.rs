#[must_use]
pub fn index_to_col_name(index: usize) -> String {
    let mut col_name = String::new();
    let mut n = index;

    while n > 0 {
        let remainder = (n - 1) % 26;
        col_name.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }

    if col_name.is_empty() {
        col_name.push('A');
    }

    col_name
}

// Relative reference (e.g., D7)
#[must_use]
pub fn cell_reference(row: usize, col: usize) -> String {
    format!("{}{}", index_to_col_name(col), row)
}

// Absolute reference (e.g., $O$1), survives row insertion and sorting
#[must_use]
pub fn fixed_cell_reference(row: usize, col: usize) -> String {
    format!("${}${}", index_to_col_name(col), row)
}
