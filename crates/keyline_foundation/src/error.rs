//! Error types for the Keyline system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Convenience alias for results carrying a Keyline [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Keyline operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an empty input error.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput)
    }

    /// Creates a command not found error.
    #[must_use]
    pub fn command_not_found(keyword: impl Into<String>) -> Self {
        Self::new(ErrorKind::CommandNotFound {
            keyword: keyword.into(),
        })
    }

    /// Creates a no viable overload error.
    #[must_use]
    pub fn no_viable_overload(keyword: impl Into<String>, consumed: usize) -> Self {
        Self::new(ErrorKind::NoViableOverload {
            keyword: keyword.into(),
            consumed,
        })
    }

    /// Creates an ambiguous command error.
    #[must_use]
    pub fn ambiguous(keyword: impl Into<String>, signatures: Vec<String>) -> Self {
        Self::new(ErrorKind::AmbiguousCommand {
            keyword: keyword.into(),
            signatures,
        })
    }

    /// Creates a contract violation error.
    #[must_use]
    pub fn contract_violation(param: impl Into<String>, position: usize) -> Self {
        Self::new(ErrorKind::ContractViolation {
            param: param.into(),
            position,
        })
    }

    /// Creates a line editor error.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: message.into(),
        })
    }

    /// Returns true if this error signals a bug or environment failure
    /// rather than a problem with the user's input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ContractViolation { .. } | ErrorKind::Editor(_) | ErrorKind::Io { .. }
        )
    }

    /// Returns the command keyword this error refers to, if any.
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::CommandNotFound { keyword }
            | ErrorKind::NoViableOverload { keyword, .. }
            | ErrorKind::AmbiguousCommand { keyword, .. } => Some(keyword),
            _ => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Dispatch was attempted with no tokens at all.
    #[error("empty input")]
    EmptyInput,

    /// No registered command shares the input's keyword.
    #[error("command not found: {keyword}")]
    CommandNotFound {
        /// The keyword that was looked up.
        keyword: String,
    },

    /// The keyword matched but every overload was eliminated.
    #[error("no overload of `{keyword}` matches the arguments (matched {consumed} token(s))")]
    NoViableOverload {
        /// The keyword that was looked up.
        keyword: String,
        /// Tokens matched by the furthest-progressing candidate, keyword included.
        consumed: usize,
    },

    /// Several overloads matched with no priority difference between them.
    #[error("ambiguous command `{keyword}`: {}", .signatures.join(" | "))]
    AmbiguousCommand {
        /// The keyword that was looked up.
        keyword: String,
        /// Signatures of the tied overloads.
        signatures: Vec<String>,
    },

    /// A parameter was asked to convert tokens it does not accept.
    #[error("internal error: {param} cannot consume token at position {position}")]
    ContractViolation {
        /// Display form of the parameter.
        param: String,
        /// Token position the conversion was attempted at.
        position: usize,
    },

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// A script file could not be read.
    #[error("cannot read {path}: {message}")]
    Io {
        /// The path that was read.
        path: String,
        /// The underlying error message.
        message: String,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Script file the input came from.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
    /// The raw input line being dispatched.
    pub input: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the offending input.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if let Some(input) = &self.input {
            if self.source.is_some() {
                write!(f, ": ")?;
            }
            write!(f, "`{input}`")?;
        }
        Ok(())
    }
}
