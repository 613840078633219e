//! Error types for the tokscan lexer

use thiserror::Error;

/// tokscan errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Lexing failed at a reproducible position
    ///
    /// **Triggered by:** A raw token no classification rule accepts, or
    /// calling `advance()` after end-of-input was reached
    /// **Example:** `x = #` (`#` is neither a fixed token, literal nor identifier)
    #[error("Lexer error at line {line}, column {column}: {message} (near `{context}`)")]
    Lexer {
        /// Line of the cursor when the error occurred (1-indexed)
        line: usize,
        /// Column of the cursor when the error occurred (1-indexed)
        column: usize,
        /// Error description
        message: String,
        /// Source window around the cursor, see `Lexer::context`
        context: String,
    },

    /// Token definitions table is inconsistent
    ///
    /// **Triggered by:** Duplicate or empty fixed spellings, a character that
    /// is both whitespace and a symbol, or a spelling containing whitespace
    #[error("Invalid token definitions: {0}")]
    InvalidDefinitions(String),

    /// Token definitions could not be decoded
    #[error("Malformed token definitions: {0}")]
    DefinitionsFormat(String),

    /// Checkpoint was taken on a lexer over a different buffer
    #[error("Checkpoint does not belong to this lexer")]
    ForeignCheckpoint,
}

impl Error {
    /// Create a definitions validation error with a message
    pub fn definitions(msg: impl Into<String>) -> Self {
        Error::InvalidDefinitions(msg.into())
    }

    /// Position `(line, column)` of a lexer error
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Lexer { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }

    /// Whether this error was raised while lexing a buffer
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, Error::Lexer { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::DefinitionsFormat(err.to_string())
    }
}

/// Result type for tokscan operations
pub type Result<T> = std::result::Result<T, Error>;
