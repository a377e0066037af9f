//! Diagnostics produced while generating declaration files.
//!
//! Two kinds exist: parse warnings, which never stop generation, and
//! per-file failures, which stop only the file they belong to.

use std::fmt;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A syntax error the Fluent parser recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub file_path: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub col: usize,
    pub source_line: String,
    pub message: String,
}

impl ParseWarning {
    pub fn severity() -> Severity {
        Severity::Warning
    }
}

/// A file whose declaration could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub input: String,
    /// Full error chain, outermost context first.
    pub error: String,
}

impl FileFailure {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn new(input: impl Into<String>, error: &anyhow::Error) -> Self {
        Self {
            input: input.into(),
            error: format!("{:#}", error),
        }
    }
}
