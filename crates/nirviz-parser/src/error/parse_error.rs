//! The ParseError type returned by artifact parsing.

use std::fmt;

use crate::error::ErrorCode;

/// A type alias for `Result<T, ParseError>`.
pub type Result<T> = std::result::Result<T, ParseError>;

/// A one-based position inside a text artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    line: usize,
    column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

/// Error type for reading a NIR artifact.
///
/// Carries an [`ErrorCode`], a message, and optionally the position in the
/// artifact and a help text suggesting a fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    code: ErrorCode,
    message: String,
    location: Option<Location>,
    help: Option<String>,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
            help: None,
        }
    }

    /// Set the position in the artifact.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(location) = self.location {
            write!(
                f,
                " at line {}, column {}",
                location.line(),
                location.column()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
