use super::checkpoint::{Checkpoint, LexerState};
use super::definitions::TokenDefinitions;
use super::rules;
use super::token::{Token, TokenKind};
use crate::error::{Error, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Characters shown on each side of the cursor by `context()`
const CONTEXT_WIDTH: usize = 10;

/// Marker placed at the cursor by `context()`
const CONTEXT_MARKER: &str = "<~?~>";

fn next_lexer_id() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Pull-based lexer over an in-memory buffer
///
/// The consumer calls [`advance`](Lexer::advance) and inspects the current
/// token between calls. Construction primes the lexer: a freshly built
/// lexer already exposes the first token, or is at end-of-input when the
/// buffer is empty or whitespace-only.
///
/// ```
/// use tokscan::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("val answer = 42").unwrap();
/// assert!(lexer.at(&TokenKind::fixed("val")));
/// lexer.advance().unwrap();
/// assert_eq!(lexer.token_text(), Some("answer"));
/// lexer.advance().unwrap();
/// lexer.advance().unwrap();
/// assert!(lexer.at(&TokenKind::Integer));
/// lexer.advance().unwrap();
/// assert!(lexer.eof());
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    /// Identity shared with the checkpoints this lexer hands out
    id: u64,
    /// Source buffer, never modified
    data: String,
    /// Character classes and fixed-text table
    defs: Arc<TokenDefinitions>,
    state: LexerState,
}

impl Lexer {
    /// Creates a lexer over `source` using the built-in definitions
    pub fn new(source: impl Into<String>) -> Result<Self> {
        Self::with_definitions(source, TokenDefinitions::shared_default())
    }

    /// Creates a lexer over `source` using the given definitions
    ///
    /// Leading whitespace is skipped and the first token is lexed before
    /// returning, so an unrecognized first token fails construction.
    pub fn with_definitions(
        source: impl Into<String>,
        defs: Arc<TokenDefinitions>,
    ) -> Result<Self> {
        let mut lexer = Lexer {
            id: next_lexer_id(),
            data: source.into(),
            defs,
            state: LexerState::default(),
        };
        lexer.prime()?;
        Ok(lexer)
    }

    fn prime(&mut self) -> Result<()> {
        self.state.offset = self.whitespace_length(0);
        self.advance()
    }

    /// Moves to the next token
    ///
    /// Reaching the end of the buffer sets [`eof`](Lexer::eof) without an
    /// error; calling `advance` again after that is an error. On failure the
    /// lexer state is left unchanged.
    pub fn advance(&mut self) -> Result<()> {
        if !self.state.is_eof && self.state.offset == self.data.len() {
            self.state.is_eof = true;
            tracing::debug!("Lexer reached end of input at offset {}", self.state.offset);
            return Ok(());
        }
        if self.state.is_eof {
            return Err(self.error("Expected token but instead EOF"));
        }

        let rest = &self.data[self.state.offset..];
        let raw = self.raw_token_text();
        let token = match rules::classify(&self.defs, raw, rest) {
            Some((kind, text)) => Token::new(kind, text, self.state.offset),
            None => return Err(self.error(format!("Token '{}' hasn't been recognized", raw))),
        };

        tracing::trace!(
            "Matched {} `{}` at offset {}",
            token.kind,
            token.lexeme,
            token.offset
        );

        let end = token.end();
        self.state.current = Some(token);
        self.state.offset = end + self.whitespace_length(end);
        Ok(())
    }

    /// Byte length of the whitespace run starting at `offset`
    fn whitespace_length(&self, offset: usize) -> usize {
        self.data[offset..]
            .chars()
            .take_while(|c| self.defs.is_whitespace(*c))
            .map(char::len_utf8)
            .sum()
    }

    /// Raw token at the cursor, before classification
    ///
    /// A symbol at the cursor starts a run of consecutive symbols; anything
    /// else runs until the next whitespace or symbol character. Only the
    /// raw token and the character ending it are scanned.
    fn raw_token_text(&self) -> &str {
        let rest = &self.data[self.state.offset..];

        if rest.starts_with(|c| self.defs.is_symbol(c)) {
            let first_non_symbol = rest.find(|c| !self.defs.is_symbol(c)).unwrap_or(rest.len());
            return &rest[..first_non_symbol];
        }
        let boundary = rest
            .find(|c| self.defs.is_whitespace(c) || self.defs.is_symbol(c))
            .unwrap_or(rest.len());
        &rest[..boundary]
    }

    fn error(&self, message: impl Into<String>) -> Error {
        let (line, column) = self.position();
        Error::Lexer {
            line,
            column,
            message: message.into(),
            context: self.context(),
        }
    }

    /// Kind of the current token
    ///
    /// `None` only when no token has been lexed (empty or whitespace-only
    /// buffer). After end-of-input the last token is still reported; use
    /// [`eof`](Lexer::eof) or [`at`](Lexer::at) to tell the two apart.
    pub fn token(&self) -> Option<&TokenKind> {
        self.state.current.as_ref().map(|token| &token.kind)
    }

    /// Exact text of the current token
    pub fn token_text(&self) -> Option<&str> {
        self.state.current.as_ref().map(|token| token.lexeme.as_str())
    }

    /// The current token together with its start offset
    pub fn current(&self) -> Option<&Token> {
        self.state.current.as_ref()
    }

    /// Whether end-of-input has been reached
    pub fn eof(&self) -> bool {
        self.state.is_eof
    }

    /// Check if the lexer is not at end-of-input and the current token is `expected`
    pub fn at(&self, expected: &TokenKind) -> bool {
        !self.eof() && self.token() == Some(expected)
    }

    /// Check if the current token is the fixed-text token spelled `spelling`
    pub fn at_fixed(&self, spelling: &str) -> bool {
        !self.eof() && self.token().and_then(TokenKind::spelling) == Some(spelling)
    }

    /// Cursor position as 1-based `(line, column)`
    pub fn position(&self) -> (usize, usize) {
        self.position_of(self.state.offset)
    }

    /// 1-based `(line, column)` of a byte offset into the buffer
    ///
    /// Columns count characters. Offsets past the last line resolve to the
    /// line after it.
    pub fn position_of(&self, offset: usize) -> (usize, usize) {
        let mut unresolved = offset;
        let mut line_count = 0;
        for (index, line) in self.data.split('\n').enumerate() {
            if unresolved <= line.len() {
                let column = line
                    .get(..unresolved)
                    .map_or(unresolved, |head| head.chars().count());
                return (index + 1, column + 1);
            }
            unresolved -= line.len() + 1;
            line_count += 1;
        }
        (line_count + 1, unresolved + 1)
    }

    /// Short window of source around the cursor for error messages
    ///
    /// ```
    /// use tokscan::Lexer;
    ///
    /// let lexer = Lexer::new("first\nsecond").unwrap();
    /// assert_eq!(lexer.context(), "first\\n<~?~>second");
    /// ```
    pub fn context(&self) -> String {
        let (before, after) = self.data.split_at(self.state.offset);
        let head_start = before
            .char_indices()
            .rev()
            .nth(CONTEXT_WIDTH - 1)
            .map_or(0, |(index, _)| index);
        let tail_end = after
            .char_indices()
            .nth(CONTEXT_WIDTH)
            .map_or(after.len(), |(index, _)| index);

        format!(
            "{}{}{}",
            &before[head_start..],
            CONTEXT_MARKER,
            &after[..tail_end]
        )
        .replace('\n', "\\n")
    }

    /// Snapshot the current state for a later rollback
    pub fn mark(&self) -> Checkpoint {
        Checkpoint::new(self.id, self.state.clone())
    }

    pub(crate) fn restore(&mut self, state: LexerState) {
        self.state = state;
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// Cursor byte offset (start of the next raw token)
    pub fn offset(&self) -> usize {
        self.state.offset
    }

    /// The source buffer
    pub fn source(&self) -> &str {
        &self.data
    }

    /// Definitions this lexer classifies with
    pub fn definitions(&self) -> &Arc<TokenDefinitions> {
        &self.defs
    }

    /// Iterator over the remaining tokens, starting with the current one
    ///
    /// Yields each token once; a lexer error is yielded as the final item.
    pub fn into_tokens(self) -> Tokens {
        Tokens {
            lexer: self,
            pending: None,
            failed: false,
        }
    }
}

/// Iterator returned by [`Lexer::into_tokens`]
#[derive(Debug)]
pub struct Tokens {
    lexer: Lexer,
    pending: Option<Error>,
    failed: bool,
}

impl Iterator for Tokens {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            self.failed = true;
            return Some(Err(err));
        }
        if self.failed || self.lexer.eof() {
            return None;
        }

        let token = self.lexer.current()?.clone();
        if let Err(err) = self.lexer.advance() {
            self.pending = Some(err);
        }
        Some(Ok(token))
    }
}

/// Lex a whole buffer with the built-in definitions
///
/// ```
/// use tokscan::{tokenize, TokenKind};
///
/// let tokens = tokenize("if (ok) { return \"yes\" }").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
/// assert_eq!(kinds[0], TokenKind::fixed("if"));
/// assert_eq!(kinds[2], TokenKind::Identifier);
/// assert_eq!(kinds[6], TokenKind::String);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source)?.into_tokens().collect()
}

/// Lex a whole buffer with the given definitions
pub fn tokenize_with(source: &str, defs: Arc<TokenDefinitions>) -> Result<Vec<Token>> {
    Lexer::with_definitions(source, defs)?
        .into_tokens()
        .collect()
}
