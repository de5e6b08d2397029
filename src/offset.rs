//! Offset type for addressing cells and windows within a grid.

use std::fmt;

/// A cell position in a grid, represented as row and column.
///
/// Both `row` and `column` are 0-indexed. Ordering is row-major, which is
/// also the order in which the matcher visits candidate offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset {
    pub row: usize,
    pub column: usize,
}

impl Offset {
    /// Create a new offset.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The top-left cell.
    pub fn zero() -> Self {
        Self { row: 0, column: 0 }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row, self.column)
    }
}
