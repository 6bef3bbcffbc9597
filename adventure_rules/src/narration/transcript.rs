//! In-memory narration capture.

use super::Narrator;

/// Records every narrated line in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines recorded so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The recorded output exactly as a terminal would have received it:
    /// every line followed by a newline.
    pub fn text(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Narrator for Transcript {
    fn say(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}
