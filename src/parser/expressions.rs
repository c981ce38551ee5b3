//! Arithmetic expression parsing using Pratt (precedence climbing) parsing.
//!
//! Only well-formedness matters: the resulting [`Expr`] is never evaluated
//! and operands are not resolved against the symbol table.
//!
//! # Precedence Levels (lowest to highest)
//!
//! 1. Addition (+, -)
//! 2. Multiplication (*, /)
//! 3. Unary (-, +)

use crate::ast::{BinaryOp, Expr, ExprKind, Span, UnaryOp};
use crate::lexer::TokenKind;

use super::{MAX_NESTING, ParseError, Parser, Precedence};

impl<'a> Parser<'a> {
    /// Parses an expression.
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_precedence(Precedence::Lowest)
    }

    /// Parses an expression with the given minimum precedence.
    fn parse_expr_precedence(&mut self, min_prec: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix()?;

        while let Some(token) = self.peek() {
            let op_prec = Self::get_precedence(token.kind, &token.text);
            if op_prec <= min_prec {
                break;
            }

            left = self.parse_infix(left, op_prec)?;
        }

        Ok(left)
    }

    /// Parses a prefix expression (literal, variable, unary op, or grouped).
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let token = self.advance().ok_or_else(|| ParseError::end("operand"))?;
        let span: Span = token.span.clone().into();

        match token.kind {
            TokenKind::IntegerLiteral | TokenKind::RealLiteral => {
                Ok(Expr::new(ExprKind::Number(token.text.clone()), span))
            }
            TokenKind::Variable => Ok(Expr::new(ExprKind::Variable(token.text.clone()), span)),
            TokenKind::LeftParen => {
                self.enter_nesting(span)?;
                let inner = self.parse_expression()?;
                let close = self.expect(TokenKind::RightParen, "')'")?;
                self.depth -= 1;
                let span = span.merge(&close.span.clone().into());
                Ok(Expr::new(ExprKind::Grouped(Box::new(inner)), span))
            }
            TokenKind::Operator if token.text == "-" || token.text == "+" => {
                let op = if token.text == "-" {
                    UnaryOp::Negate
                } else {
                    UnaryOp::Plus
                };
                self.enter_nesting(span)?;
                let operand = self.parse_expr_precedence(Precedence::Unary)?;
                self.depth -= 1;
                let span = span.merge(&operand.span);
                Ok(Expr::new(
                    ExprKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    span,
                ))
            }
            _ => Err(ParseError::unexpected("operand", token.text.clone(), span)),
        }
    }

    /// Parses an infix expression (binary operation).
    fn parse_infix(&mut self, left: Expr, precedence: Precedence) -> Result<Expr, ParseError> {
        let op_token = self.advance().ok_or_else(|| ParseError::end("operator"))?;
        let op = BinaryOp::from_symbol(&op_token.text).ok_or_else(|| {
            ParseError::unexpected(
                "operator",
                op_token.text.clone(),
                op_token.span.clone().into(),
            )
        })?;

        // All operators are left-associative
        let right = self.parse_expr_precedence(precedence)?;
        let span = left.span.merge(&right.span);

        Ok(Expr::new(
            ExprKind::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            span,
        ))
    }

    /// Counts one more open group or unary sign, failing past the limit.
    fn enter_nesting(&mut self, span: Span) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::TooDeep { span });
        }
        self.depth += 1;
        Ok(())
    }

    /// Gets the binding power of a token in infix position.
    fn get_precedence(kind: TokenKind, text: &str) -> Precedence {
        match (kind, text) {
            (TokenKind::Operator, "+" | "-") => Precedence::Additive,
            (TokenKind::Operator, "*" | "/") => Precedence::Multiplicative,
            _ => Precedence::Lowest,
        }
    }
}
