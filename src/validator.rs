//! The validation run.
//!
//! A run splits the text into lines and, for every non-blank line, lexes it,
//! classifies its shape and applies the matching semantic rule. Errors on
//! one line never stop the lines after it. The symbol table and usage set
//! are created per run, so validating the same text twice gives the same
//! report.

use crate::diagnostics::{Diagnostic, Report};
use crate::lexer::lex;
use crate::parser::classify;
use crate::semantic::SemanticAnalyzer;

/// Collects the diagnostics of one run.
#[derive(Debug, Default)]
pub struct Validator {
    analyzer: SemanticAnalyzer,
    errors: Vec<Diagnostic>,
}

impl Validator {
    /// Creates a validator with an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates one line. `line_number` is 1-based.
    pub fn validate_line(&mut self, line_number: usize, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        let tokens = lex(line);
        log::debug!(
            "line {} tokens: [{}]",
            line_number,
            tokens
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        // Nothing recognizable on the line
        if tokens.is_empty() {
            return;
        }

        match classify(&tokens) {
            Ok(statement) => {
                log::debug!("line {}: {}", line_number, statement.kind.name());
                for error in self.analyzer.check(line_number, &statement) {
                    self.errors.push(Diagnostic::error(
                        line_number,
                        error.to_string(),
                        Some(error.span()),
                    ));
                }
            }
            Err(error) => {
                log::debug!("line {}: no statement shape matches", line_number);
                self.errors
                    .push(Diagnostic::error(line_number, error.to_string(), error.span()));
            }
        }
    }

    /// Finishes the run and computes the unused variables.
    pub fn finish(self) -> Report {
        let symbols = self.analyzer.into_symbols();
        let unused: Vec<String> = symbols.unused().map(|s| s.name.clone()).collect();

        log::debug!(
            "validation finished: {} errors, {} declared, {} unused",
            self.errors.len(),
            symbols.len(),
            unused.len()
        );

        Report::new(self.errors, symbols.into_symbols(), unused)
    }
}

/// Validates a whole program.
///
/// # Example
///
/// ```
/// let report = validador::validate("x Entero;\nx = \"5\";");
///
/// assert!(!report.is_success());
/// assert_eq!(report.render(), vec!["Error en línea 2: Asignación incorrecta a 'x'"]);
/// ```
pub fn validate(source: &str) -> Report {
    let mut validator = Validator::new();
    for (index, line) in source.split('\n').enumerate() {
        validator.validate_line(index + 1, line);
    }
    validator.finish()
}

/// Reserved for code generation; currently does nothing.
pub fn compile(source: &str) {
    log::debug!("compile requested for {} bytes; no code generation", source.len());
}
