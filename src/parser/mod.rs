//! Line classification and expression parsing for validador.
//!
//! There is no multi-line grammar: [`classify`] looks at the token shape of a
//! single line and picks the statement form it belongs to, and [`Parser`]
//! checks that the operands of an arithmetic line form a well-formed
//! expression.
//!
//! # Example
//!
//! ```
//! use validador::ast::StatementKind;
//! use validador::lexer::lex;
//! use validador::parser::classify;
//!
//! let tokens = lex("edad Entero;");
//! let statement = classify(&tokens).expect("declaration");
//!
//! assert!(matches!(statement.kind, StatementKind::Declaration { .. }));
//! ```
//!
//! # Matching Order
//!
//! Shapes are tried in a fixed order and the first match wins:
//!
//! 1. `Variable TypeName ;` - declaration
//! 2. `Variable = literal ;` - literal assignment
//! 3. `Variable = Variable ;` - variable copy
//! 4. `Variable = Capture ;` - capture assignment
//! 5. `_ = ... ;` - arithmetic assignment (positional match)
//! 6. `Mensaje.Texto ( Variable|Text ) ;` - print
//!
//! The positional arithmetic shape must come after the exact shapes 2-4,
//! otherwise every simple assignment would be treated as arithmetic.

mod error;
mod expressions;
mod tokens;

pub use error::ParseError;

use crate::ast::{Expr, Span, Statement, StatementKind, VarType};
use crate::lexer::{Token, TokenKind as K};

/// Classifies one line's tokens into a statement shape.
///
/// Returns [`ParseError::UnrecognizedSyntax`] when no shape matches.
pub fn classify(tokens: &[Token]) -> Result<Statement<'_>, ParseError> {
    let span = line_span(tokens);
    let shape: Vec<K> = tokens.iter().map(|t| t.kind).collect();

    let kind = match shape.as_slice() {
        [K::Variable, K::TypeName, K::Semicolon] => {
            let var_type = VarType::from_name(&tokens[1].text)
                .ok_or(ParseError::UnrecognizedSyntax { span })?;
            StatementKind::Declaration {
                name: &tokens[0],
                var_type,
            }
        }
        [
            K::Variable,
            K::Equals,
            K::IntegerLiteral | K::RealLiteral | K::TextLiteral,
            K::Semicolon,
        ] => StatementKind::LiteralAssignment {
            target: &tokens[0],
            literal: &tokens[2],
        },
        [K::Variable, K::Equals, K::Variable, K::Semicolon] => StatementKind::VariableCopy {
            target: &tokens[0],
            source: &tokens[2],
        },
        [K::Variable, K::Equals, K::Capture, K::Semicolon] => {
            let captured = VarType::from_capture(&tokens[2].text)
                .ok_or(ParseError::UnrecognizedSyntax { span })?;
            StatementKind::CaptureAssignment {
                target: &tokens[0],
                captured,
                capture: &tokens[2],
            }
        }
        [_, K::Equals, .., K::Semicolon] => StatementKind::Arithmetic {
            target: &tokens[0],
            operands: &tokens[2..tokens.len() - 1],
        },
        [
            K::PrintText,
            K::LeftParen,
            K::Variable | K::TextLiteral,
            K::RightParen,
            K::Semicolon,
        ] => StatementKind::Print {
            argument: &tokens[2],
        },
        _ => return Err(ParseError::UnrecognizedSyntax { span }),
    };

    Ok(Statement::new(kind, span))
}

/// Span from the first token to the last one.
fn line_span(tokens: &[Token]) -> Span {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
        _ => Span::default(),
    }
}

/// Deepest nesting of parentheses and unary signs an expression may have.
pub const MAX_NESTING: usize = 200;

/// Parser for the operands of an arithmetic line.
///
/// The parser consumes a slice of tokens and must use all of them.
pub struct Parser<'a> {
    /// The tokens to parse.
    tokens: &'a [Token],
    /// Current position in the token stream.
    current: usize,
    /// Open parentheses and unary signs around the current position.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given tokens.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parses the whole token slice as one expression.
    ///
    /// Leftover tokens after a complete expression are an error, so `a b`
    /// and `(a + b` are both rejected.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;

        if !self.is_at_end()
            && let Some(token) = self.peek()
        {
            return Err(ParseError::unexpected(
                "operator",
                token.text.clone(),
                token.span.clone().into(),
            ));
        }

        Ok(expr)
    }
}

/// Convenience function to parse arithmetic operands directly.
///
/// # Example
///
/// ```
/// use validador::lexer::lex;
/// use validador::parser::parse_expression;
///
/// let expr = parse_expression(&lex("a + b * 2")).unwrap();
/// assert_eq!(expr.to_string(), "(a + (b * 2))");
/// ```
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse()
}

/// Operator precedence levels for Pratt parsing.
///
/// Higher values mean higher precedence (bind tighter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub(crate) enum Precedence {
    Lowest = 0,
    Additive = 1,       // +, -
    Multiplicative = 2, // *, /
    Unary = 3,          // -x, +x
}
