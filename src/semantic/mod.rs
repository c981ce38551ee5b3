//! Semantic analysis for validador.
//!
//! This phase runs once per classified line. It handles:
//!
//! - **Declarations**: registering names and their types, rejecting
//!   duplicates and names that don't start lower-case
//! - **Assignments**: checking that the target is declared and that the
//!   value (literal, variable or capture) fits its type
//! - **Arithmetic**: rejecting `Captura` and malformed expressions
//! - **Usage tracking**: recording every referenced name for the final
//!   unused-variable warning
//!
//! # Usage
//!
//! ```
//! use validador::lexer::lex;
//! use validador::parser::classify;
//! use validador::semantic::SemanticAnalyzer;
//!
//! let mut analyzer = SemanticAnalyzer::new();
//!
//! let tokens = lex("x = 5;");
//! let statement = classify(&tokens).unwrap();
//! let errors = analyzer.check(1, &statement);
//!
//! assert_eq!(errors[0].to_string(), "Variable 'x' no declarada");
//! ```

pub mod checker;
pub mod error;
pub mod symbols;
pub mod types;

pub use error::SemanticError;
pub use symbols::{Symbol, SymbolTable};

use crate::ast::Statement;
use checker::TypeChecker;

/// Main entry point for semantic analysis.
///
/// The analyzer owns the symbol table of one validation run; create a new
/// analyzer for every run.
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    /// The symbol table for this run.
    symbols: SymbolTable,
}

impl SemanticAnalyzer {
    /// Creates a new semantic analyzer with an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks one classified line and returns the errors found on it.
    pub fn check(&mut self, line: usize, statement: &Statement<'_>) -> Vec<SemanticError> {
        let mut checker = TypeChecker::new(&mut self.symbols, line);
        checker.check_statement(statement);
        checker.errors
    }

    /// The symbol table built so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Consumes the analyzer, returning its symbol table.
    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::VarType;
    use crate::lexer::lex;
    use crate::parser::classify;

    /// Runs each line through the analyzer and returns all errors.
    fn analyze(lines: &[&str]) -> (SemanticAnalyzer, Vec<SemanticError>) {
        let mut analyzer = SemanticAnalyzer::new();
        let mut errors = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let tokens = lex(line);
            let statement = classify(&tokens).expect("line should classify");
            errors.extend(analyzer.check(i + 1, &statement));
        }
        (analyzer, errors)
    }

    #[test]
    fn test_valid_declaration() {
        let (analyzer, errors) = analyze(&["edad Entero;"]);
        assert!(errors.is_empty());
        assert_eq!(analyzer.symbols().type_of("edad"), Some(VarType::Integer));
    }

    #[test]
    fn test_duplicate_declaration_last_type_wins() {
        let (analyzer, errors) = analyze(&["x Entero;", "x Texto;"]);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            SemanticError::DuplicateDeclaration { name, .. } if name == "x"
        ));
        assert_eq!(analyzer.symbols().type_of("x"), Some(VarType::Text));
    }

    #[test]
    fn test_literal_assignment() {
        let (analyzer, errors) = analyze(&["x Entero;", "x = 5;"]);
        assert!(errors.is_empty());
        assert!(analyzer.symbols().is_used("x"));

        let (_, errors) = analyze(&["x Entero;", "x = \"5\";"]);
        assert!(matches!(
            &errors[..],
            [SemanticError::IncompatibleLiteral { expected: VarType::Integer, .. }]
        ));
    }

    #[test]
    fn test_real_accepts_integer_literal() {
        let (analyzer, errors) = analyze(&["r Real;", "r = 7;"]);
        assert!(errors.is_empty());
        assert!(analyzer.symbols().is_used("r"));
    }

    #[test]
    fn test_decimal_literal_is_malformed_arithmetic() {
        let (_, errors) = analyze(&["r Real;", "r = 7.5;"]);
        assert!(matches!(
            &errors[..],
            [SemanticError::MalformedExpression { .. }]
        ));
        assert_eq!(
            errors[0].to_string(),
            "Sintaxis incorrecta en la operación matemática"
        );
    }

    #[test]
    fn test_literal_to_undeclared() {
        let (analyzer, errors) = analyze(&["x = 5;"]);
        assert_eq!(errors, vec![SemanticError::undeclared("x", (0..1).into())]);
        assert!(!analyzer.symbols().is_used("x"));
    }

    #[test]
    fn test_copy_type_mismatch_marks_both_used() {
        let (analyzer, errors) = analyze(&["x Entero;", "y Texto;", "y = x;"]);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            SemanticError::TypeMismatch {
                expected: VarType::Text,
                found: VarType::Integer,
                ..
            }
        ));
        assert!(analyzer.symbols().is_used("x"));
        assert!(analyzer.symbols().is_used("y"));
    }

    #[test]
    fn test_copy_reports_destination_before_source() {
        let (_, errors) = analyze(&["a = b;"]);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            SemanticError::UndeclaredVariable { name, .. } if name == "a"
        ));

        let (_, errors) = analyze(&["a Entero;", "a = b;"]);
        assert!(matches!(
            &errors[..],
            [SemanticError::UndeclaredVariable { name, .. }] if name == "b"
        ));
    }

    #[test]
    fn test_capture_types() {
        let (_, errors) = analyze(&["z Entero;", "z = Captura.Real();"]);
        assert!(matches!(
            errors[..],
            [SemanticError::TypeMismatch {
                expected: VarType::Integer,
                found: VarType::Real,
                ..
            }]
        ));
        // points at the capture call
        assert_eq!(errors[0].span(), crate::ast::Span::new(4, 18));

        let (analyzer, errors) = analyze(&["z Real;", "z = Captura.Real();"]);
        assert!(errors.is_empty());
        assert!(analyzer.symbols().is_used("z"));
    }

    #[test]
    fn test_arithmetic_does_not_check_operands() {
        let (analyzer, errors) = analyze(&["a Entero;", "total Entero;", "total = a + b * 2;"]);
        assert!(errors.is_empty());
        assert!(analyzer.symbols().is_used("total"));
        // operands are not tracked
        assert!(!analyzer.symbols().is_used("a"));
    }

    #[test]
    fn test_arithmetic_undeclared_target_still_parses() {
        let (_, errors) = analyze(&["total = a + ;"]);
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], SemanticError::UndeclaredVariable { .. }));
        assert!(matches!(errors[1], SemanticError::MalformedExpression { .. }));
    }

    #[test]
    fn test_capture_in_arithmetic() {
        let (analyzer, errors) = analyze(&["x Entero;", "x = Captura.Entero() + 1;"]);
        assert!(matches!(
            errors[..],
            [SemanticError::CaptureInArithmetic { .. }]
        ));
        assert!(!analyzer.symbols().is_used("x"));
    }

    #[test]
    fn test_print_argument() {
        let (analyzer, errors) = analyze(&["nombre Texto;", "Mensaje.Texto(nombre);"]);
        assert!(errors.is_empty());
        assert!(analyzer.symbols().is_used("nombre"));

        let (_, errors) = analyze(&["Mensaje.Texto(nadie);"]);
        assert_eq!(errors[0].to_string(), "Variable 'nadie' no declarada");

        let (analyzer, errors) = analyze(&[r#"Mensaje.Texto("hola");"#]);
        assert!(errors.is_empty());
        assert!(analyzer.symbols().is_used("\"hola\""));
    }
}
