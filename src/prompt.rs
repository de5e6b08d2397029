//! Prompt abstraction layer.
//!
//! Provides a `Prompter` trait for line-oriented question/answer I/O and two
//! implementations:
//! - `StdioPrompter` for real terminal interaction
//! - `MockPrompter` for testing

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Abstraction over interactive prompting.
pub trait Prompter {
    /// Show a line of text to the user.
    fn say(&mut self, message: &str) -> Result<()>;

    /// Show `question` and read one line of reply, without its terminator.
    ///
    /// Returns `None` once input is exhausted.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

/// Prompter on the process's stdin and stdout.
pub struct StdioPrompter<R, W> {
    input: R,
    output: W,
}

impl StdioPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for StdioPrompter<io::StdinLock<'static>, io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdioPrompter<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for StdioPrompter<R, W> {
    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read reply")?;
        if read == 0 {
            return Ok(None);
        }
        let reply = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(reply))
    }
}

/// Which of the two input files is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Bug,
    Landscape,
}

impl FileRole {
    fn step(self) -> usize {
        match self {
            FileRole::Bug => 1,
            FileRole::Landscape => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileRole::Bug => "bug",
            FileRole::Landscape => "landscape",
        }
    }

    fn example(self) -> &'static str {
        match self {
            FileRole::Bug => "bug.txt",
            FileRole::Landscape => "landscape.txt",
        }
    }
}

pub const MISSING_FILE: &str = "An error has occurred! No such file exists. Please try again!";

/// Ask for the name of an existing file, re-prompting until one is given.
pub fn ask_for_file(prompter: &mut dyn Prompter, role: FileRole) -> Result<PathBuf> {
    prompter.say(&format!(
        "{}) We need to specify the name of the {} file",
        role.step(),
        role.label()
    ))?;
    prompter.say(&format!(
        "Please do not forget to include its extension, e.g. -> {}",
        role.example()
    ))?;

    let question = format!("Please enter the {} file's name:", role.label());
    loop {
        let Some(reply) = prompter.ask(&question)? else {
            bail!("Input ended before a {} file was named", role.label());
        };
        if reply.is_empty() {
            prompter.say(MISSING_FILE)?;
            continue;
        }
        let path = PathBuf::from(reply);
        if path.is_file() {
            debug!(role = role.label(), path = %path.display(), "file chosen");
            return Ok(path);
        }
        debug!(role = role.label(), path = %path.display(), "no such file");
        prompter.say(MISSING_FILE)?;
    }
}

/// Mock prompter for testing — replays queued replies and records output.
#[cfg(test)]
#[derive(Default)]
pub struct MockPrompter {
    pub replies: Vec<String>,
    pub said: Vec<String>,
}

#[cfg(test)]
impl MockPrompter {
    pub fn new<S: Into<String>>(replies: impl IntoIterator<Item = S>) -> Self {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            said: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for MockPrompter {
    fn say(&mut self, message: &str) -> Result<()> {
        self.said.push(message.to_string());
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.said.push(question.to_string());
        if self.replies.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.replies.remove(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_for_file_accepts_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let name = file.path().to_string_lossy().to_string();
        let mut prompter = MockPrompter::new([name.clone()]);
        let path = ask_for_file(&mut prompter, FileRole::Bug).unwrap();
        assert_eq!(path, PathBuf::from(name));
        assert_eq!(
            prompter.said,
            vec![
                "1) We need to specify the name of the bug file",
                "Please do not forget to include its extension, e.g. -> bug.txt",
                "Please enter the bug file's name:",
            ]
        );
    }

    #[test]
    fn ask_for_file_reprompts_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let present = dir.path().join("landscape.txt");
        std::fs::write(&present, "x\n").unwrap();

        let mut prompter = MockPrompter::new([
            missing.to_string_lossy().to_string(),
            "   ".to_string(),
            dir.path().to_string_lossy().to_string(),
            present.to_string_lossy().to_string(),
        ]);
        let path = ask_for_file(&mut prompter, FileRole::Landscape).unwrap();
        assert_eq!(path, present);
        let complaints = prompter.said.iter().filter(|s| *s == MISSING_FILE).count();
        assert_eq!(complaints, 3);
        assert_eq!(prompter.said[0], "2) We need to specify the name of the landscape file");
    }

    #[test]
    fn ask_for_file_keeps_surrounding_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let padded = dir.path().join(" bug.txt ");
        std::fs::write(&padded, "o#o\n").unwrap();

        let mut prompter = MockPrompter::new([padded.to_string_lossy().to_string()]);
        let path = ask_for_file(&mut prompter, FileRole::Bug).unwrap();
        assert_eq!(path, padded);
        assert!(!prompter.said.iter().any(|s| s == MISSING_FILE));
    }

    #[test]
    fn ask_for_file_fails_at_end_of_input() {
        let mut prompter = MockPrompter::new(["does-not-exist.txt"]);
        let err = ask_for_file(&mut prompter, FileRole::Bug).unwrap_err();
        assert_eq!(err.to_string(), "Input ended before a bug file was named");
    }

    #[test]
    fn stdio_prompter_reads_lines() {
        let input = io::Cursor::new("first\r\nsecond");
        let mut output = Vec::new();
        {
            let mut prompter = StdioPrompter::with_io(input, &mut output);
            prompter.say("hello").unwrap();
            assert_eq!(prompter.ask("q1?").unwrap().as_deref(), Some("first"));
            assert_eq!(prompter.ask("q2?").unwrap().as_deref(), Some("second"));
            assert_eq!(prompter.ask("q3?").unwrap(), None);
        }
        assert_eq!(String::from_utf8(output).unwrap(), "hello\nq1?\nq2?\nq3?\n");
    }
}
