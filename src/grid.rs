//! Rectangular character grids and the text normalizer that builds them.
//!
//! Every line of the source text becomes one row. Line terminators stay in
//! the row as ordinary cells, and short rows are padded with spaces so the
//! grid is rectangular: columns beyond the end of a line read as blank.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use ropey::Rope;
use tracing::debug;

use crate::error::GridError;
use crate::offset::Offset;

/// The cell used to pad short rows.
pub const PAD: char = ' ';

/// A non-empty, rectangular grid of characters.
///
/// Grids can only be built through [`Grid::from_rows`] or [`normalize`], so
/// every value has at least one row, at least one column, and rows of equal
/// width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Grid {
    /// Build a grid from rows that are already rectangular.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        let width = rows.first().ok_or(GridError::EmptyInput)?.len();
        if width == 0 {
            return Err(GridError::DegenerateGrid);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        Ok(Self { rows, width })
    }

    /// Build a grid from string rows, one `&str` per row.
    ///
    /// Handy for literal grids; rows are taken as-is, no padding is applied.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, GridError> {
        Self::from_rows(
            lines
                .iter()
                .map(|line| line.as_ref().chars().collect())
                .collect(),
        )
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[char]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn row(&self, index: usize) -> Option<&[char]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// A read-only view of the `height` x `width` sub-grid whose top-left
    /// cell is `origin`, or `None` if it would extend past the grid.
    pub fn window(&self, origin: Offset, height: usize, width: usize) -> Option<Window<'_>> {
        let fits = origin
            .row
            .checked_add(height)
            .is_some_and(|end| end <= self.height())
            && origin
                .column
                .checked_add(width)
                .is_some_and(|end| end <= self.width());
        fits.then_some(Window {
            grid: self,
            origin,
            height,
            width,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// A borrowed rectangular region of a [`Grid`].
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    grid: &'a Grid,
    origin: Offset,
    height: usize,
    width: usize,
}

impl<'a> Window<'a> {
    /// Rows of the window, each a slice into the parent grid.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &'a [char]> + 'a {
        let grid: &'a Grid = self.grid;
        let columns = self.origin.column..self.origin.column + self.width;
        grid.rows[self.origin.row..self.origin.row + self.height]
            .iter()
            .map(move |row| &row[columns.clone()])
    }
}

/// Convert raw text into a rectangular grid.
///
/// Each line becomes a row that keeps its terminator as a trailing cell.
/// `"\r\n"` and a lone `'\r'` are read as `'\n'`, so every terminator is
/// exactly one cell. Rows shorter than the longest one are padded with [`PAD`].
pub fn normalize(text: &str) -> Result<Grid, GridError> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let rope = Rope::from_str(&text);
    let mut rows: Vec<Vec<char>> = rope.lines().map(|line| line.chars().collect()).collect();

    // A terminated final line is followed by an empty slice, which is not a row.
    if rows.last().is_some_and(Vec::is_empty) {
        rows.pop();
    }

    let max_len = rows
        .iter()
        .map(Vec::len)
        .max()
        .ok_or(GridError::EmptyInput)?;
    for row in &mut rows {
        row.resize(max_len, PAD);
    }

    let grid = Grid::from_rows(rows)?;
    debug!(height = grid.height(), width = grid.width(), "normalized grid");
    Ok(grid)
}

/// Read `path` once, start to end, and [`normalize`] its contents.
pub fn normalize_file(path: impl AsRef<Path>) -> Result<Grid, GridError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => GridError::NotFound {
            path: path.to_path_buf(),
        },
        _ => GridError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read grid source");
    normalize(&text)
}
