//! Lexical analysis for validador.
//!
//! This module converts one line of source text into a stream of [`Token`]s.
//! Whitespace produces no tokens, and characters that match no pattern are
//! skipped silently; a line with stray characters then simply fails
//! classification later on.
//!
//! ## Example
//!
//! ```
//! use validador::lexer::{lex, TokenKind};
//!
//! let tokens = lex("edad Entero;");
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].kind, TokenKind::Variable);
//! assert_eq!(tokens[1].kind, TokenKind::TypeName);
//! ```
//!
//! ## Design Notes
//!
//! The lexer is built on the [`logos`](https://docs.rs/logos) crate, which
//! generates a DFA-based lexer from the token definitions in [`token`].
//! We wrap it in our own [`Lexer`] to yield owned tokens with spans.

mod token;

pub use token::{Token, TokenKind};

use logos::Logos;

/// The lexer for one line of source text.
///
/// Wraps a `logos` lexer and yields [`Token`]s in left-to-right order.
/// The iterator is finite and cannot be restarted.
pub struct Lexer<'source> {
    /// The underlying logos lexer
    inner: logos::Lexer<'source, TokenKind>,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given line.
    ///
    /// # Example
    ///
    /// ```
    /// use validador::lexer::Lexer;
    ///
    /// let lexer = Lexer::new("total = a + b;");
    /// assert_eq!(lexer.count(), 6);
    /// ```
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
        }
    }

    /// Get the next token, if any.
    ///
    /// Returns `None` when the end of input is reached.
    /// Unrecognized characters are skipped.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            match self.inner.next()? {
                Ok(kind) => {
                    let span = self.inner.span();
                    let text = self.inner.slice();
                    return Some(Token::new(kind, span, text));
                }
                Err(()) => {
                    log::trace!(
                        "skipping unrecognized input {:?} at {:?}",
                        self.inner.slice(),
                        self.inner.span()
                    );
                    continue;
                }
            }
        }
    }

    /// Collect all remaining tokens into a vector.
    pub fn collect_tokens(self) -> Vec<Token> {
        self.collect()
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Convenience function to lex a line directly.
///
/// # Example
///
/// ```
/// use validador::lexer::{lex, TokenKind};
///
/// let tokens = lex("x = Captura.Entero();");
/// assert_eq!(tokens[2].kind, TokenKind::Capture);
/// ```
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect_tokens()
}
