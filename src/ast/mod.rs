//! Syntax definitions for validador.
//!
//! The language is line oriented, so there is no program tree: each
//! non-blank line is classified into one [`Statement`] shape and checked
//! on its own. Arithmetic lines additionally produce a small [`Expr`] tree.
//!
//! # Structure
//!
//! ```text
//! Statement (one per line)
//! ├── Declaration        edad Entero;
//! ├── LiteralAssignment  edad = 5;
//! ├── VariableCopy       edad = otra;
//! ├── CaptureAssignment  edad = Captura.Entero();
//! ├── Arithmetic         edad = a + b * 2;   → Expr
//! └── Print              Mensaje.Texto(edad);
//! ```
//!
//! # Design Decisions
//!
//! - **Borrowed nodes**: statements borrow the tokens of their line; a
//!   statement never outlives the validation of that line.
//! - **Span on every node**: spans are byte offsets within the line.

mod expr;
mod stmt;

pub use expr::*;
pub use stmt::*;

use std::fmt;

/// A span representing a byte range in a line of source text.
///
/// # Example
///
/// ```
/// use validador::ast::Span;
///
/// let span = Span::new(0, 5);
/// assert_eq!(span.start, 0);
/// assert_eq!(span.end, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the start of the span (inclusive).
    pub start: usize,
    /// Byte offset of the end of the span (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span from start to end byte offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates a span that covers both `self` and `other`.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// The three primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    /// `Entero`
    Integer,
    /// `Texto`
    Text,
    /// `Real`
    Real,
}

impl VarType {
    /// Resolves a type name as written in source.
    ///
    /// ```
    /// use validador::ast::VarType;
    ///
    /// assert_eq!(VarType::from_name("Entero"), Some(VarType::Integer));
    /// assert_eq!(VarType::from_name("entero"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Entero" => Some(VarType::Integer),
            "Texto" => Some(VarType::Text),
            "Real" => Some(VarType::Real),
            _ => None,
        }
    }

    /// Extracts the type embedded in a capture call such as `Captura.Real()`.
    pub fn from_capture(text: &str) -> Option<Self> {
        let (_, rest) = text.split_once('.')?;
        Self::from_name(rest.trim_end_matches(['(', ')']))
    }

    /// The name of the type as written in source.
    pub fn name(&self) -> &'static str {
        match self {
            VarType::Integer => "Entero",
            VarType::Text => "Texto",
            VarType::Real => "Real",
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
