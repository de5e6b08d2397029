//! Count every occurrence of a 2D character pattern (a "bug") in a larger
//! character grid (a "landscape").
//!
//! Blank cells in the bug are wildcards: they match whatever is underneath.
//! Blank cells in the landscape get no such treatment.
//!
//! # Example
//!
//! ```rust
//! use bugfind::{Offset, count_matches, find_matches, normalize};
//!
//! let bug = normalize("o#o").unwrap();
//! let landscape = normalize("x o  o\nxxo#ox\n").unwrap();
//!
//! assert_eq!(count_matches(&bug, &landscape), 1);
//! assert_eq!(find_matches(&bug, &landscape), vec![Offset::new(1, 2)]);
//! ```

mod app;
mod error;
mod grid;
pub mod matcher;
mod offset;
pub mod prompt;

pub use app::App;
pub use error::GridError;
pub use grid::{Grid, PAD, Window, normalize, normalize_file};
pub use matcher::{cells_match, count_matches, find_matches, is_wildcard, matches_at};
pub use offset::Offset;
pub use prompt::{FileRole, Prompter, StdioPrompter};
