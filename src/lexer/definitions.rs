//! Token definitions consumed by the lexer
//!
//! A definitions table names the whitespace characters, the symbol characters
//! that combine into operator spellings, and the ordered list of fixed-text
//! tokens checked before any literal or identifier rule.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// A keyword or operator with an exact spelling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedToken {
    /// Descriptive name (e.g. `EQUALS`)
    pub name: String,
    /// Literal spelling matched against raw tokens
    pub spelling: String,
}

impl FixedToken {
    /// Creates a new fixed-text token entry
    pub fn new(name: impl Into<String>, spelling: impl Into<String>) -> Self {
        FixedToken {
            name: name.into(),
            spelling: spelling.into(),
        }
    }
}

/// Character classes and fixed-text table driving the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDefinitions {
    /// Characters skipped between tokens
    pub whitespace: Vec<char>,
    /// Punctuation characters; consecutive symbols form one raw token
    pub symbols: Vec<char>,
    /// Fixed-text tokens in priority order
    pub fixed: Vec<FixedToken>,
}

const DEFAULT_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

const DEFAULT_SYMBOLS: &[char] = &[
    '+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|', '(', ')', '{', '}', '[', ']', ',', ';',
    ':', '.',
];

const DEFAULT_FIXED: &[(&str, &str)] = &[
    // Keywords
    ("FUN", "fun"),
    ("VAR", "var"),
    ("VAL", "val"),
    ("IF", "if"),
    ("ELSE", "else"),
    ("WHILE", "while"),
    ("FOR", "for"),
    ("IN", "in"),
    ("RETURN", "return"),
    ("BREAK", "break"),
    ("CONTINUE", "continue"),
    ("NULL", "null"),
    // Operators
    ("PLUS", "+"),
    ("MINUS", "-"),
    ("STAR", "*"),
    ("SLASH", "/"),
    ("PERCENT", "%"),
    ("ASSIGN", "="),
    ("EQ", "=="),
    ("NOT_EQ", "!="),
    ("LT", "<"),
    ("LT_EQ", "<="),
    ("GT", ">"),
    ("GT_EQ", ">="),
    ("AND", "&&"),
    ("OR", "||"),
    ("NOT", "!"),
    ("ARROW", "->"),
    ("DOT_DOT", ".."),
    // Delimiters
    ("LEFT_PAREN", "("),
    ("RIGHT_PAREN", ")"),
    ("LEFT_BRACE", "{"),
    ("RIGHT_BRACE", "}"),
    ("LEFT_BRACKET", "["),
    ("RIGHT_BRACKET", "]"),
    ("COMMA", ","),
    ("SEMICOLON", ";"),
    ("COLON", ":"),
    ("DOT", "."),
];

lazy_static::lazy_static! {
    /// Built-in definitions, shared by every lexer created with `Lexer::new`
    static ref DEFAULT_DEFINITIONS: Arc<TokenDefinitions> = Arc::new(TokenDefinitions::new(
        DEFAULT_WHITESPACE.to_vec(),
        DEFAULT_SYMBOLS.to_vec(),
        DEFAULT_FIXED
            .iter()
            .map(|(name, spelling)| FixedToken::new(*name, *spelling))
            .collect(),
    ));
}

/// The built-in language: C-like keywords, operators and delimiters
///
/// Every delimiter (`(`, `)`, `,`, `;`, ...) is a symbol character, so
/// delimiters that touch each other form one raw token. `f(x)` lexes, but
/// `f()`, `g(h(x))` and `print(x);` do not, because `()`, `))` and `);` are
/// not spelled in the table. Put whitespace between touching delimiters, or
/// add the runs you need with [`TokenDefinitions::with_fixed`].
///
/// ```
/// use std::sync::Arc;
/// use tokscan::{tokenize, tokenize_with, TokenDefinitions};
///
/// assert!(tokenize("print(x);").is_err());
/// assert!(tokenize("print(x) ;").is_ok());
///
/// let defs = TokenDefinitions::default().with_fixed("CLOSE_END", ");");
/// assert_eq!(tokenize_with("print(x);", Arc::new(defs)).unwrap().len(), 4);
/// ```
impl Default for TokenDefinitions {
    fn default() -> Self {
        TokenDefinitions::clone(&DEFAULT_DEFINITIONS)
    }
}

impl TokenDefinitions {
    /// Creates a definitions table without validating it
    pub fn new(whitespace: Vec<char>, symbols: Vec<char>, fixed: Vec<FixedToken>) -> Self {
        TokenDefinitions {
            whitespace,
            symbols,
            fixed,
        }
    }

    /// Shared handle to the built-in definitions, see [`Default`] for their caveats
    pub fn shared_default() -> Arc<TokenDefinitions> {
        Arc::clone(&DEFAULT_DEFINITIONS)
    }

    /// Decodes and validates definitions from JSON
    ///
    /// ```
    /// use tokscan::TokenDefinitions;
    ///
    /// let defs = TokenDefinitions::from_json(r#"{
    ///     "whitespace": [" "],
    ///     "symbols": ["=", "&"],
    ///     "fixed": [{"name": "AND", "spelling": "&&"}]
    /// }"#).unwrap();
    /// assert!(defs.is_symbol('&'));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let defs: TokenDefinitions = serde_json::from_str(json)?;
        defs.validate()?;
        Ok(defs)
    }

    /// Serializes the definitions to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Appends a fixed-text token to the end of the table
    pub fn with_fixed(mut self, name: impl Into<String>, spelling: impl Into<String>) -> Self {
        self.fixed.push(FixedToken::new(name, spelling));
        self
    }

    /// Checks the table for entries the lexer cannot honour
    ///
    /// Duplicate spellings, empty spellings, spellings containing whitespace
    /// and characters registered as both whitespace and symbol are errors.
    /// Spellings that mix symbol and word characters are accepted with a
    /// warning, since no raw token can ever equal them.
    pub fn validate(&self) -> Result<()> {
        if let Some(c) = self.whitespace.iter().find(|c| self.symbols.contains(c)) {
            return Err(Error::definitions(format!(
                "character {:?} is both whitespace and a symbol",
                c
            )));
        }

        let mut seen = HashSet::new();
        for token in &self.fixed {
            if token.spelling.is_empty() {
                return Err(Error::definitions(format!(
                    "fixed token {} has an empty spelling",
                    token.name
                )));
            }
            if token.spelling.chars().any(|c| self.is_whitespace(c)) {
                return Err(Error::definitions(format!(
                    "fixed token {} spelling `{}` contains whitespace",
                    token.name, token.spelling
                )));
            }
            if !seen.insert(token.spelling.as_str()) {
                return Err(Error::definitions(format!(
                    "duplicate spelling `{}` (fixed token {})",
                    token.spelling, token.name
                )));
            }

            let symbol_chars = token.spelling.chars().filter(|c| self.is_symbol(*c)).count();
            if symbol_chars != 0 && symbol_chars != token.spelling.chars().count() {
                tracing::warn!(
                    "Fixed token {} spelling `{}` mixes symbol and word characters and can never match",
                    token.name,
                    token.spelling
                );
            }
        }

        Ok(())
    }

    /// First fixed-text entry whose spelling equals `raw`
    pub fn fixed_spelling(&self, raw: &str) -> Option<&FixedToken> {
        self.fixed.iter().find(|token| token.spelling == raw)
    }

    /// Check if `c` is a whitespace character
    pub fn is_whitespace(&self, c: char) -> bool {
        self.whitespace.contains(&c)
    }

    /// Check if `c` is a symbol character
    pub fn is_symbol(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }
}
