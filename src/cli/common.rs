//! Shared CLI plumbing: error type and exit codes.

use std::fmt;

/// Result alias for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// What went wrong, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Invalid configuration or arguments; nothing was written.
    Validation,
    /// I/O failure while reading input or writing output.
    Io,
}

/// A command-level error with a user-facing message.
#[derive(Debug)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

impl CliError {
    /// Creates a validation error (exit code 2).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 1).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// The error kind.
    #[must_use]
    pub fn kind(&self) -> CliErrorKind {
        self.kind
    }

    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            CliErrorKind::Io => 1,
            CliErrorKind::Validation => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}
