//! # validador
//!
//! A line validator for a small teaching language with Spanish keywords.
//!
//! ## Architecture
//!
//! Each line goes through the same pipeline, independently of the others
//! except for the shared symbol table:
//!
//! ```text
//! Line → Lexer → Classifier → Semantic rule → Diagnostics
//! ```
//!
//! - [`lexer`] - Tokenizes one line
//! - [`parser`] - Matches the token shape of a line; parses arithmetic
//! - [`ast`] - Statement shapes, expressions and spans
//! - [`semantic`] - Declaration, type and usage checks
//! - [`diagnostics`] - Line-numbered messages and the final report
//! - [`lsp`] - Language Server Protocol front end
//!
//! There is no code generation: [`compile`] is reserved and does nothing.
//!
//! ## Example
//!
//! ```
//! let source = r#"
//! edad Entero;
//! edad = Captura.Entero();
//! Mensaje.Texto(edad);
//! "#;
//!
//! let report = validador::validate(source);
//! assert!(report.is_success());
//! assert_eq!(report.render(), vec!["La Sintaxis es correcta"]);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod lsp;
pub mod parser;
pub mod semantic;
pub mod validator;

pub use diagnostics::{Diagnostic, Report, Severity};
pub use validator::{Validator, compile, validate};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::ast::{Span, Statement, StatementKind, VarType};
    pub use crate::diagnostics::{Diagnostic, Report, Severity};
    pub use crate::lexer::{Lexer, Token, TokenKind};
    pub use crate::parser::{ParseError, Parser, classify};
    pub use crate::semantic::{SemanticAnalyzer, SemanticError, Symbol, SymbolTable};
    pub use crate::validator::{Validator, compile, validate};
}
