//! A bounded lookahead cursor over the token stream.
//!
//! The parser never needs more than two tokens of lookahead, so the cursor
//! buffers at most two: `peek` and `peek_second` fill the buffer on demand,
//! `advance` drains it. Lexical errors surface through whichever call pulls
//! the offending token.

use std::collections::VecDeque;

use rjack_ast::token::Token;
use rjack_diagnostics::LexError;

use crate::tokenizer::Tokenizer;

/// The explicit peek/advance handle the parser drives.
///
/// Each cursor is private to one parse; nothing is shared across
/// compilation units.
pub struct TokenCursor {
    tokenizer: Tokenizer,
    /// At most two tokens pulled but not yet consumed.
    buffer: VecDeque<Token>,
    /// Whether the tokenizer has reported end of input.
    exhausted: bool,
}

impl TokenCursor {
    /// Create a cursor over one compilation unit's source text.
    pub fn new(source: &str) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
            buffer: VecDeque::with_capacity(2),
            exhausted: false,
        }
    }

    /// Pull tokens until the buffer holds `n + 1` of them or input ends.
    fn fill(&mut self, n: usize) -> Result<(), LexError> {
        debug_assert!(n < 2);
        while self.buffer.len() <= n && !self.exhausted {
            match self.tokenizer.next_token()? {
                Some(token) => self.buffer.push_back(token),
                None => self.exhausted = true,
            }
        }
        Ok(())
    }

    /// The next token, without consuming it.
    pub fn peek(&mut self) -> Result<Option<&Token>, LexError> {
        self.fill(0)?;
        Ok(self.buffer.front())
    }

    /// The token after the next one, without consuming anything.
    pub fn peek_second(&mut self) -> Result<Option<&Token>, LexError> {
        self.fill(1)?;
        Ok(self.buffer.get(1))
    }

    /// Consume and return the next token, or `None` at end of input.
    pub fn advance(&mut self) -> Result<Option<Token>, LexError> {
        self.fill(0)?;
        Ok(self.buffer.pop_front())
    }

    /// The 1-based line to report for end-of-input diagnostics.
    pub fn line(&self) -> u32 {
        self.buffer
            .front()
            .map(|t| t.line)
            .unwrap_or_else(|| self.tokenizer.line())
    }
}
