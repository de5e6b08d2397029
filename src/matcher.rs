//! Pattern matcher: find every placement of a pattern grid in a landscape.
//!
//! Blank cells in the pattern are wildcards. Blank cells in the landscape
//! have no special meaning, so the comparison is deliberately one-sided.

use itertools::iproduct;
use tracing::{debug, trace};

use crate::grid::Grid;
use crate::offset::Offset;

/// Test whether `ch` is blank, and therefore a wildcard when it appears in a
/// pattern.
///
/// Blank covers Unicode white space plus the ASCII information separators
/// (`0x1C`–`0x1F`), which line-oriented text tools also treat as space.
pub fn is_wildcard(ch: char) -> bool {
    ch.is_whitespace() || ('\x1c'..='\x1f').contains(&ch)
}

/// Compare one pattern cell with one landscape cell.
pub fn cells_match(pattern: char, landscape: char) -> bool {
    pattern == landscape || is_wildcard(pattern)
}

/// All top-left offsets at which `pattern` fits inside `landscape`, in
/// row-major order. Empty when the pattern is larger in either dimension.
pub fn offsets(pattern: &Grid, landscape: &Grid) -> impl Iterator<Item = Offset> + use<> {
    let rows = (landscape.height() + 1).saturating_sub(pattern.height());
    let columns = (landscape.width() + 1).saturating_sub(pattern.width());
    iproduct!(0..rows, 0..columns).map(|(row, column)| Offset::new(row, column))
}

/// Test whether `pattern` matches `landscape` with its top-left cell at `at`.
///
/// Every cell pair must match. Returns `false` if the pattern does not fit.
pub fn matches_at(pattern: &Grid, landscape: &Grid, at: Offset) -> bool {
    let Some(window) = landscape.window(at, pattern.height(), pattern.width()) else {
        return false;
    };
    pattern.rows().zip(window.rows()).all(|(want, have)| {
        want.iter()
            .zip(have)
            .all(|(&p, &l)| cells_match(p, l))
    })
}

/// Every offset at which `pattern` matches `landscape`, in row-major order.
///
/// Overlapping matches are all reported.
pub fn find_matches(pattern: &Grid, landscape: &Grid) -> Vec<Offset> {
    debug!(
        pattern_height = pattern.height(),
        pattern_width = pattern.width(),
        landscape_height = landscape.height(),
        landscape_width = landscape.width(),
        "scanning landscape"
    );
    let found: Vec<Offset> = offsets(pattern, landscape)
        .filter(|&at| matches_at(pattern, landscape, at))
        .inspect(|at| trace!(%at, "match"))
        .collect();
    debug!(matches = found.len(), "scan complete");
    found
}

/// Count the offsets at which `pattern` matches `landscape`.
pub fn count_matches(pattern: &Grid, landscape: &Grid) -> usize {
    find_matches(pattern, landscape).len()
}
