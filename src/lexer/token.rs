use serde::{Deserialize, Serialize};

/// A single token from the source buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Exact text the token was matched from
    pub lexeme: String,
    /// Byte offset where the token starts
    pub offset: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, offset: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            offset,
        }
    }

    /// Byte offset just past the token's text
    pub fn end(&self) -> usize {
        self.offset + self.lexeme.len()
    }
}

/// All token kinds the lexer can produce
///
/// Fixed-text kinds are identified by their spelling, which comes from the
/// active [`TokenDefinitions`](super::TokenDefinitions) table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Keyword or operator with a pre-registered spelling
    Fixed(String),
    /// Signed decimal integer literal
    Integer,
    /// Double-quoted string literal, quotes included in the lexeme
    String,
    /// `true` or `false`
    Boolean,
    /// Identifier (`[a-zA-Z_][a-zA-Z_0-9]*`)
    Identifier,
}

impl TokenKind {
    /// Fixed-text kind for the given spelling
    pub fn fixed(spelling: impl Into<String>) -> Self {
        TokenKind::Fixed(spelling.into())
    }

    /// Spelling of a fixed-text kind
    pub fn spelling(&self) -> Option<&str> {
        match self {
            TokenKind::Fixed(spelling) => Some(spelling),
            TokenKind::Integer | TokenKind::String | TokenKind::Boolean | TokenKind::Identifier => {
                None
            }
        }
    }

    /// Check if the kind is one of the literal kinds
    pub fn is_literal(&self) -> bool {
        match self {
            TokenKind::Integer | TokenKind::String | TokenKind::Boolean => true,
            TokenKind::Fixed(_) | TokenKind::Identifier => false,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Fixed(spelling) => write!(f, "'{}'", spelling),
            TokenKind::Integer => write!(f, "INTEGER"),
            TokenKind::String => write!(f, "STRING"),
            TokenKind::Boolean => write!(f, "BOOLEAN"),
            TokenKind::Identifier => write!(f, "IDENTIFIER"),
        }
    }
}
