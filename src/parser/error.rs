//! Parser error types.
//!
//! `UnrecognizedSyntax` is what the line classifier reports for a line that
//! matches no statement shape; its message is shown to the user as is. The
//! remaining variants describe why an arithmetic expression is malformed and
//! end up as the source of a semantic `MalformedExpression` error.

use crate::ast::Span;
use thiserror::Error;

/// A parse error with location and description.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// The line's token shape matches no statement form.
    #[error("Sintaxis incorrecta")]
    UnrecognizedSyntax {
        /// Span of the whole line.
        span: Span,
    },

    /// Expected a specific token but found something else.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// What we expected to find.
        expected: String,
        /// What we actually found.
        found: String,
        /// Location of the unexpected token.
        span: Span,
    },

    /// Parentheses or unary signs nested past [`MAX_NESTING`](super::MAX_NESTING).
    #[error("expression nested too deeply")]
    TooDeep {
        /// Location of the token that went over the limit.
        span: Span,
    },

    /// Reached the end of the operands unexpectedly.
    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd {
        /// What we expected to find.
        expected: String,
    },
}

impl ParseError {
    /// Returns the span of this error, if available.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::UnrecognizedSyntax { span } => Some(*span),
            ParseError::UnexpectedToken { span, .. } => Some(*span),
            ParseError::TooDeep { span } => Some(*span),
            ParseError::UnexpectedEnd { .. } => None,
        }
    }

    /// Creates an "unexpected token" error.
    pub fn unexpected(expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            span,
        }
    }

    /// Creates an "unexpected end" error.
    pub fn end(expected: impl Into<String>) -> Self {
        ParseError::UnexpectedEnd {
            expected: expected.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_syntax_message() {
        let err = ParseError::UnrecognizedSyntax {
            span: Span::new(0, 3),
        };
        assert_eq!(err.to_string(), "Sintaxis incorrecta");
        assert_eq!(err.span(), Some(Span::new(0, 3)));
    }

    #[test]
    fn test_end_error_has_no_span() {
        let err = ParseError::end("expression");
        assert_eq!(err.span(), None);
        assert!(err.to_string().contains("expression"));
    }
}
