//! Statement shapes.
//!
//! Each non-blank line matches at most one shape. The shape decides which
//! semantic rule runs for the line.

use super::{Span, VarType};
use crate::lexer::Token;

/// A classified line.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement<'a> {
    /// What kind of statement this is.
    pub kind: StatementKind<'a>,
    /// Span from the first to the last token of the line.
    pub span: Span,
}

impl<'a> Statement<'a> {
    /// Creates a new statement.
    pub fn new(kind: StatementKind<'a>, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The shapes recognized by the line classifier, in matching order.
#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind<'a> {
    /// `nombre Tipo;`
    Declaration { name: &'a Token, var_type: VarType },

    /// `nombre = 5;`, `nombre = 2.5;` or `nombre = "texto";`
    LiteralAssignment { target: &'a Token, literal: &'a Token },

    /// `destino = origen;`
    VariableCopy { target: &'a Token, source: &'a Token },

    /// `nombre = Captura.Tipo();`
    ///
    /// `captured` is the type named inside the `capture` token.
    CaptureAssignment {
        target: &'a Token,
        captured: VarType,
        capture: &'a Token,
    },

    /// `nombre = <expresión>;`
    ///
    /// `operands` are the tokens strictly between `=` and the final `;`,
    /// possibly empty. The target is whatever token opens the line.
    Arithmetic {
        target: &'a Token,
        operands: &'a [Token],
    },

    /// `Mensaje.Texto(argumento);` where the argument is a variable or text.
    Print { argument: &'a Token },
}

impl StatementKind<'_> {
    /// Short name of the shape, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            StatementKind::Declaration { .. } => "declaration",
            StatementKind::LiteralAssignment { .. } => "literal assignment",
            StatementKind::VariableCopy { .. } => "variable copy",
            StatementKind::CaptureAssignment { .. } => "capture assignment",
            StatementKind::Arithmetic { .. } => "arithmetic assignment",
            StatementKind::Print { .. } => "print",
        }
    }
}
