mod cell;
mod sheet;
mod workbook;

pub use cell::{format_number, Cell, CellType};
pub use sheet::Sheet;
pub use workbook::{open_workbook, Workbook};
