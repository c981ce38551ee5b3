//! Semantic analysis error types.
//!
//! These errors represent problems found while checking a classified line
//! against the symbol table. The `Display` text of each variant is the
//! message shown to the user after `Error en línea N: `.

use crate::ast::{Span, VarType};
use crate::parser::ParseError;
use thiserror::Error;

/// A semantic error with location and description.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SemanticError {
    // === Declaration Errors ===
    /// Variable declared more than once.
    #[error("Variable '{name}' ya declarada")]
    DuplicateDeclaration { name: String, span: Span },

    /// Variable name that does not start with a lower-case letter.
    #[error("El nombre de la variable debe comenzar con una letra minúscula")]
    InvalidIdentifierCasing { name: String, span: Span },

    /// Reference to a variable that hasn't been declared.
    #[error("Variable '{name}' no declarada")]
    UndeclaredVariable { name: String, span: Span },

    // === Assignment Errors ===
    /// Assignment between different declared types.
    #[error("Asignación tipos de variable diferentes")]
    TypeMismatch {
        expected: VarType,
        found: VarType,
        span: Span,
    },

    /// Literal whose surface form doesn't fit the variable's type.
    #[error("Asignación incorrecta a '{name}'")]
    IncompatibleLiteral {
        name: String,
        expected: VarType,
        literal: String,
        span: Span,
    },

    // === Arithmetic Errors ===
    /// `Captura` used inside an arithmetic expression.
    #[error("No se puede usar Captura en operaciones matemáticas")]
    CaptureInArithmetic { span: Span },

    /// Operands that don't form a well-formed expression.
    #[error("Sintaxis incorrecta en la operación matemática")]
    MalformedExpression {
        span: Span,
        #[source]
        source: ParseError,
    },
}

impl SemanticError {
    /// Returns the primary span of this error.
    pub fn span(&self) -> Span {
        match self {
            SemanticError::DuplicateDeclaration { span, .. } => *span,
            SemanticError::InvalidIdentifierCasing { span, .. } => *span,
            SemanticError::UndeclaredVariable { span, .. } => *span,
            SemanticError::TypeMismatch { span, .. } => *span,
            SemanticError::IncompatibleLiteral { span, .. } => *span,
            SemanticError::CaptureInArithmetic { span } => *span,
            SemanticError::MalformedExpression { span, .. } => *span,
        }
    }

    /// Creates an undeclared variable error.
    pub fn undeclared(name: impl Into<String>, span: Span) -> Self {
        SemanticError::UndeclaredVariable {
            name: name.into(),
            span,
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: VarType, found: VarType, span: Span) -> Self {
        SemanticError::TypeMismatch {
            expected,
            found,
            span,
        }
    }
}
