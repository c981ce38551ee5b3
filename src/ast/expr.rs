//! Arithmetic expression nodes.
//!
//! Expressions are only recognized, never evaluated, so literals keep their
//! source text instead of a parsed value.

use super::Span;
use std::fmt;

/// An arithmetic expression with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// Where this expression appears in the line.
    pub span: Span,
}

impl Expr {
    /// Creates a new expression.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Expression variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Integer or real literal, as written.
    Number(String),
    /// Variable reference.
    Variable(String),
    /// `-x` or `+x`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `a + b`, `a * b`, ...
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// `( expr )`
    Grouped(Box<Expr>),
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Maps operator text to a binary operator.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Subtract),
            "*" => Some(BinaryOp::Multiply),
            "/" => Some(BinaryOp::Divide),
            _ => None,
        }
    }

    /// The operator as written in source.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Plus,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::Plus => "+",
        }
    }
}

/// Fully parenthesized rendering, handy for checking precedence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(text) | ExprKind::Variable(text) => f.write_str(text),
            ExprKind::Unary { op, operand } => write!(f, "({}{})", op.symbol(), operand),
            ExprKind::Binary { left, op, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            ExprKind::Grouped(inner) => write!(f, "{}", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nests_binary_operations() {
        let a = Expr::new(ExprKind::Variable("a".into()), Span::new(0, 1));
        let two = Expr::new(ExprKind::Number("2".into()), Span::new(4, 5));
        let sum = Expr::new(
            ExprKind::Binary {
                left: Box::new(a),
                op: BinaryOp::Add,
                right: Box::new(two),
            },
            Span::new(0, 5),
        );
        let negated = Expr::new(
            ExprKind::Unary {
                op: UnaryOp::Negate,
                operand: Box::new(sum),
            },
            Span::new(0, 5),
        );
        assert_eq!(negated.to_string(), "(-(a + 2))");
    }

    #[test]
    fn test_operator_symbols() {
        for symbol in ["+", "-", "*", "/"] {
            let op = BinaryOp::from_symbol(symbol).unwrap();
            assert_eq!(op.symbol(), symbol);
        }
        assert_eq!(BinaryOp::from_symbol("%"), None);
    }
}
