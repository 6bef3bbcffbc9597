//! Narration - where descriptive text goes.
//!
//! Describing an entity never touches process-wide state directly. Callers
//! hand in a [`Narrator`] and every line of text is routed through it:
//! - [`Transcript`] captures lines in memory
//! - [`WriteNarrator`] writes lines to any [`std::io::Write`], e.g. [`stdout()`]

mod transcript;

pub use transcript::*;

use std::io::{self, Write};

/// A sink for lines of descriptive text.
pub trait Narrator {
    /// Emit a single line. The line carries no trailing newline.
    fn say(&mut self, line: &str);
}

impl<N: Narrator + ?Sized> Narrator for &mut N {
    fn say(&mut self, line: &str) {
        (**self).say(line);
    }
}

impl Narrator for Vec<String> {
    fn say(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

/// Narrator writing newline-terminated lines to an [`io::Write`].
///
/// Write failures are logged and dropped, so narrating stays infallible.
#[derive(Debug)]
pub struct WriteNarrator<W: Write> {
    writer: W,
}

impl<W: Write> WriteNarrator<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap the narrator, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Narrator for WriteNarrator<W> {
    fn say(&mut self, line: &str) {
        if let Err(err) = writeln!(self.writer, "{}", line) {
            tracing::warn!("Failed to narrate line {:?}: {}", line, err);
        }
    }
}

/// Narrator for the process's standard output.
pub fn stdout() -> WriteNarrator<io::Stdout> {
    WriteNarrator::new(io::stdout())
}
