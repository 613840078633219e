//! Classification rules, tried in priority order

use super::definitions::TokenDefinitions;
use super::token::TokenKind;
use regex::Regex;

lazy_static::lazy_static! {
    // `(`, `)` and `|` are excluded from string contents along with `"` and newline
    static ref STRING_LITERAL: Regex = Regex::new(r#"^"[^("|\n)]*""#).unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z_0-9]*$").unwrap();
}

/// A single classification rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Exact match against the fixed-text table
    Fixed,
    /// Signed 32-bit decimal integer
    Integer,
    /// Double-quoted string starting at the cursor
    String,
    /// `true` / `false`
    Boolean,
    /// `[a-zA-Z_][a-zA-Z_0-9]*`
    Identifier,
}

impl Rule {
    /// All rules in the order they are tried
    pub const ORDER: [Rule; 5] = [
        Rule::Fixed,
        Rule::Integer,
        Rule::String,
        Rule::Boolean,
        Rule::Identifier,
    ];

    /// Try this rule against the raw token
    ///
    /// `rest` is the buffer from the cursor onward; only the string rule looks
    /// past the raw token. Returns the kind and the exact matched text.
    pub fn apply<'a>(
        self,
        defs: &TokenDefinitions,
        raw: &'a str,
        rest: &'a str,
    ) -> Option<(TokenKind, &'a str)> {
        match self {
            Rule::Fixed => defs
                .fixed_spelling(raw)
                .map(|token| (TokenKind::Fixed(token.spelling.clone()), raw)),
            Rule::Integer => raw.parse::<i32>().ok().map(|_| (TokenKind::Integer, raw)),
            Rule::String => STRING_LITERAL
                .find(rest)
                .map(|m| (TokenKind::String, m.as_str())),
            Rule::Boolean => {
                matches!(raw, "true" | "false").then_some((TokenKind::Boolean, raw))
            }
            Rule::Identifier => IDENTIFIER
                .is_match(raw)
                .then_some((TokenKind::Identifier, raw)),
        }
    }
}

/// Classify a raw token, stopping at the first rule that matches
pub fn classify<'a>(
    defs: &TokenDefinitions,
    raw: &'a str,
    rest: &'a str,
) -> Option<(TokenKind, &'a str)> {
    Rule::ORDER
        .iter()
        .find_map(|rule| rule.apply(defs, raw, rest))
}
