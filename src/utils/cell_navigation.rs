//! Index arithmetic for walking a 1-based grid.
//!
//! Positions are plain `(row, col)` pairs; none of these functions look at
//! cell contents, so they work the same for any sheet.

#[must_use]
pub fn row_below(row: usize, offset: usize) -> usize {
    row + offset
}

#[must_use]
pub fn cell_below(pos: (usize, usize)) -> (usize, usize) {
    (row_below(pos.0, 1), pos.1)
}

// None at column 1
#[must_use]
pub fn cell_left(pos: (usize, usize)) -> Option<(usize, usize)> {
    pos.1.checked_sub(1).filter(|c| *c >= 1).map(|c| (pos.0, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_are_pure_offsets() {
        assert_eq!(row_below(4, 3), 7);
        assert_eq!(cell_below((4, 2)), (5, 2));
        assert_eq!(cell_left((4, 2)), Some((4, 1)));
        assert_eq!(cell_left((4, 1)), None);
    }
}
