//! Token cursor with one-token lookahead.

use crate::fixity::lexing::Token;

/// Read position over a borrowed token slice. Each parse call owns its own cursor.
#[derive(Debug, Clone)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek_type(&self) -> Option<&'t str> {
        self.peek().map(|token| token.token_type.as_str())
    }

    /// Whether the next token has type `token_type`.
    pub fn at(&self, token_type: &str) -> bool {
        self.peek().is_some_and(|token| token.is(token_type))
    }

    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Index of the next token.
    pub fn position(&self) -> usize {
        self.pos
    }
}
