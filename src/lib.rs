//! # tokscan - a table-driven tokenizer
//!
//! A hand-written lexer that turns source text into a stream of typed
//! tokens for a downstream parser. Which words are keywords, which
//! characters are operators and which are whitespace comes from a
//! [`TokenDefinitions`] table; integers, strings, booleans and identifiers
//! are built in.
//!
//! ## Quick Start
//!
//! ```rust
//! use tokscan::{Lexer, TokenKind};
//!
//! # fn main() -> tokscan::Result<()> {
//! let mut lexer = Lexer::new("if (x >= 10) { return true }")?;
//!
//! let mut seen = Vec::new();
//! while !lexer.eof() {
//!     seen.push(lexer.token_text().unwrap_or_default().to_string());
//!     lexer.advance()?;
//! }
//!
//! assert_eq!(seen, ["if", "(", "x", ">=", "10", ")", "{", "return", "true", "}"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## How raw tokens are found
//!
//! - A symbol character under the cursor starts a run of consecutive symbols
//!   (`&&`, `->`, `<=`), matched as one candidate (maximal munch).
//!   Touching delimiters such as `))` or `);` are one run as well, so with the
//!   built-in table they need whitespace between them (see
//!   [`TokenDefinitions`]'s `Default` impl).
//! - Anything else runs up to the next whitespace or symbol character.
//! - Each raw token is classified by the first matching rule: fixed-text
//!   table, integer, string, boolean, identifier.
//!
//! ## Lookahead
//!
//! [`Lexer::mark`] returns a [`Checkpoint`]; rolling it back restores the
//! lexer exactly, so a parser can try one production and fall back to another:
//!
//! ```rust
//! use tokscan::{Lexer, TokenKind};
//!
//! # fn main() -> tokscan::Result<()> {
//! let mut lexer = Lexer::new("f ( x )")?;
//! let checkpoint = lexer.mark();
//! lexer.advance()?;
//! if !lexer.at(&TokenKind::fixed("=")) {
//!     checkpoint.rollback(&mut lexer)?;
//! }
//! assert_eq!(lexer.token_text(), Some("f"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Errors carry the cursor position and a window of the surrounding source:
//!
//! ```rust
//! use tokscan::tokenize;
//!
//! let err = tokenize("x = 3 # 4").unwrap_err();
//! assert_eq!(err.position(), Some((1, 7)));
//! assert!(err.to_string().contains("Token '#' hasn't been recognized"));
//! ```

/// Version of the tokscan crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{
    tokenize, tokenize_with, Checkpoint, FixedToken, Lexer, Token, TokenDefinitions, TokenKind,
    Tokens,
};

/// Type alias for the lexer.
/// Converts raw source text into tokens for the parser.
pub type Scanner = Lexer;
