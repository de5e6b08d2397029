//! Scan orchestration.
//!
//! The `App` struct ties together prompting, grid normalization and the
//! matcher, and writes the human-readable report.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::grid::{Grid, normalize_file};
use crate::matcher::find_matches;
use crate::prompt::{FileRole, Prompter, ask_for_file};

/// A single bug-hunting run.
pub struct App {
    pub bug_path: Option<PathBuf>,
    pub landscape_path: Option<PathBuf>,
    pub show_locations: bool,
}

impl App {
    pub fn new(bug_path: Option<PathBuf>, landscape_path: Option<PathBuf>) -> Self {
        Self {
            bug_path,
            landscape_path,
            show_locations: false,
        }
    }

    /// Resolve both files, scan, and report. Returns the number of matches.
    pub fn run(&mut self, prompter: &mut dyn Prompter, out: &mut dyn Write) -> Result<usize> {
        let bug_path = resolve(&mut self.bug_path, prompter, FileRole::Bug)?;
        let landscape_path = resolve(&mut self.landscape_path, prompter, FileRole::Landscape)?;

        let bug = load(&bug_path, FileRole::Bug)?;
        let landscape = load(&landscape_path, FileRole::Landscape)?;

        let found = find_matches(&bug, &landscape);
        info!(
            bug = %bug_path.display(),
            landscape = %landscape_path.display(),
            matches = found.len(),
            "scan finished"
        );

        if self.show_locations {
            for at in &found {
                writeln!(out, "bug at {at}")?;
            }
        }
        writeln!(out, "A total of {} bugs were found!", found.len())?;
        Ok(found.len())
    }
}

/// Use the path given up front, or ask for one and remember it.
fn resolve(
    slot: &mut Option<PathBuf>,
    prompter: &mut dyn Prompter,
    role: FileRole,
) -> Result<PathBuf> {
    if let Some(path) = slot.as_ref() {
        if !path.is_file() {
            bail!("No such {} file: {}", role.label(), path.display());
        }
        return Ok(path.clone());
    }
    let path = ask_for_file(prompter, role)?;
    *slot = Some(path.clone());
    Ok(path)
}

fn load(path: &Path, role: FileRole) -> Result<Grid> {
    normalize_file(path).with_context(|| format!("Cannot use {} file {}", role.label(), path.display()))
}
