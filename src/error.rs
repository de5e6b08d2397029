use std::path::PathBuf;

/// Errors that can occur while building a [`Grid`](crate::Grid).
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The named input file does not exist.
    #[error("No such file: {}", path.display())]
    NotFound { path: PathBuf },
    /// The input file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The text contained no lines at all.
    #[error("Input contains no lines")]
    EmptyInput,
    /// The grid has rows but they hold no cells.
    #[error("Grid rows must hold at least one cell")]
    DegenerateGrid,
    /// A row's width differs from the first row's.
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}
