//! Core error types

use thiserror::Error;

/// A failure to parse CSS text into a [`Css`](crate::Css) fragment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("CSS error: line {line}, column {column}: {message}")]
pub struct CssError {
    /// Human-readable error message
    pub message: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// The input near the failure
    pub fragment: String,
    /// Parser context stack, outermost first
    pub contexts: Vec<String>,
}

impl CssError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
            fragment: String::new(),
            contexts: Vec::new(),
        }
    }
}

/// Result type for CSS parsing
pub type Result<T> = std::result::Result<T, CssError>;
