use super::scanner::Lexer;
use super::token::Token;
use crate::error::{Error, Result};

/// Mutable scanner state, everything a rollback has to restore
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct LexerState {
    /// Byte offset of the next raw token
    pub(crate) offset: usize,
    /// Set once the cursor reaches the end of the buffer
    pub(crate) is_eof: bool,
    /// Last successfully classified token
    pub(crate) current: Option<Token>,
}

/// Snapshot of a lexer for speculative lookahead
///
/// Created by [`Lexer::mark`]. Checkpoints are plain values: taking several
/// and rolling back to any of them in any order is allowed, and rolling back
/// never changes the checkpoint itself.
///
/// ```
/// use tokscan::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("a = 1").unwrap();
/// let checkpoint = lexer.mark();
/// lexer.advance().unwrap();
/// lexer.advance().unwrap();
/// assert_eq!(lexer.token(), Some(&TokenKind::Integer));
///
/// checkpoint.rollback(&mut lexer).unwrap();
/// assert_eq!(lexer.token(), Some(&TokenKind::Identifier));
/// assert_eq!(lexer.token_text(), Some("a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    lexer_id: u64,
    state: LexerState,
}

impl Checkpoint {
    pub(crate) fn new(lexer_id: u64, state: LexerState) -> Self {
        Checkpoint { lexer_id, state }
    }

    /// Restore `lexer` to the state it had when this checkpoint was taken
    pub fn rollback(&self, lexer: &mut Lexer) -> Result<()> {
        if lexer.id() != self.lexer_id {
            return Err(Error::ForeignCheckpoint);
        }
        tracing::debug!(
            "Rolling back lexer from offset {} to {}",
            lexer.offset(),
            self.state.offset
        );
        lexer.restore(self.state.clone());
        Ok(())
    }

    /// Cursor offset captured by the checkpoint
    pub fn offset(&self) -> usize {
        self.state.offset
    }

    /// Whether the lexer was at end-of-input when the checkpoint was taken
    pub fn eof(&self) -> bool {
        self.state.is_eof
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_rollback_restores_everything() {
        let mut lexer = Lexer::new("x y z").unwrap();
        let checkpoint = lexer.mark();
        let before = (lexer.position(), lexer.current().cloned(), lexer.eof());

        while !lexer.eof() {
            lexer.advance().unwrap();
        }
        checkpoint.rollback(&mut lexer).unwrap();

        assert_eq!(before, (lexer.position(), lexer.current().cloned(), lexer.eof()));
        assert_eq!(checkpoint.offset(), 2);
        assert!(!checkpoint.eof());
    }

    #[test]
    fn test_rollback_from_eof() {
        let mut lexer = Lexer::new("x").unwrap();
        lexer.advance().unwrap();
        assert!(lexer.eof());
        let at_end = lexer.mark();
        assert!(at_end.eof());

        at_end.rollback(&mut lexer).unwrap();
        assert!(lexer.eof());
        assert!(lexer.advance().is_err());
    }

    #[test]
    fn test_foreign_checkpoint_rejected() {
        let first = Lexer::new("a").unwrap();
        let mut second = Lexer::new("a").unwrap();
        let checkpoint = first.mark();
        assert_eq!(checkpoint.rollback(&mut second), Err(Error::ForeignCheckpoint));
        assert_eq!(second.token(), Some(&TokenKind::Identifier));
    }

    #[test]
    fn test_checkpoint_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Checkpoint>();
    }
}
