//! Source location tracking
//!
//! Spans are produced by the reader and threaded through analysis untouched,
//! so every compile error can name the position of the form that caused it.

use std::fmt;

/// A span in source code (byte offsets plus line/column for errors)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub col: u32,
    pub file: Option<String>,
}

impl Span {
    pub fn new(start: usize, end: usize, line: u32, col: u32) -> Self {
        Span {
            start,
            end,
            line,
            col,
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Span for nodes the compiler builds itself (quasiquote re-wrapping,
    /// test fixtures). Line 0 never comes out of a reader.
    pub fn synthetic() -> Self {
        Span::default()
    }

    pub fn is_synthetic(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.is_synthetic()) {
            (_, true) => write!(f, "<generated>"),
            (Some(file), false) => write!(f, "{}:{}:{}", file, self.line, self.col),
            (None, false) => write!(f, "{}:{}", self.line, self.col),
        }
    }
}
