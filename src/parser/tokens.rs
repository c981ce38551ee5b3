//! Token navigation utilities for the expression parser.

use crate::lexer::{Token, TokenKind};

use super::{ParseError, Parser};

impl<'a> Parser<'a> {
    /// Returns the current token without consuming it.
    pub(super) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    /// Consumes and returns the current token.
    pub(super) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    /// Returns true if every token has been consumed.
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Consumes the current token if it has the expected kind.
    pub(super) fn expect(
        &mut self,
        kind: TokenKind,
        description: &str,
    ) -> Result<&'a Token, ParseError> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.current += 1;
                Ok(token)
            }
            Some(token) => Err(ParseError::unexpected(
                description,
                token.text.clone(),
                token.span.clone().into(),
            )),
            None => Err(ParseError::end(description)),
        }
    }
}
