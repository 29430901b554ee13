mod cell_navigation;
mod helpers;

pub use cell_navigation::{cell_below, cell_left, row_below};
pub use helpers::{cell_reference, fixed_cell_reference, index_to_col_name};
