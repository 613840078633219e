//! Lexical analysis for tokscan
//!
//! Converts source text into a stream of tokens, one `advance()` at a time,
//! driven by a [`TokenDefinitions`] table.

mod checkpoint;
mod definitions;
mod rules;
mod scanner;
mod token;

pub use checkpoint::Checkpoint;
pub use definitions::{FixedToken, TokenDefinitions};
pub use rules::{classify, Rule};
pub use scanner::{tokenize, tokenize_with, Lexer, Tokens};
pub use token::{Token, TokenKind};
