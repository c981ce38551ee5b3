//! Diagnostics produced by a validation run.
//!
//! A run yields a [`Report`]: the line-numbered errors in line order, the
//! final symbol table and the names that were declared but never used. The
//! report renders to the exact lines shown to the user:
//!
//! ```text
//! Error en línea 2: Variable 'x' no declarada
//! Error en línea 5: Sintaxis incorrecta
//! ```
//!
//! or, when there are no errors,
//!
//! ```text
//! La Sintaxis es correcta
//! Advertencia: Variables declaradas pero no utilizadas: n, m
//! ```

use crate::ast::Span;
use crate::semantic::Symbol;
use std::fmt;

/// Output line for a run without errors.
pub const SUCCESS_MESSAGE: &str = "La Sintaxis es correcta";

/// Message of the aggregated unused-variable warning, before the names.
pub const UNUSED_VARIABLES_MESSAGE: &str = "Variables declaradas pero no utilizadas";

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single message for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 1-based line number; 0 for the aggregated unused warning.
    pub line: usize,
    pub severity: Severity,
    /// Message without the `Error en línea N: ` prefix.
    pub message: String,
    /// Byte range within the line, when the problem has a precise location.
    pub span: Option<Span>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(line: usize, message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            line,
            severity: Severity::Error,
            message: message.into(),
            span,
        }
    }

    /// Creates the aggregated unused-variable warning.
    pub fn unused_variables<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let names: Vec<&str> = names.into_iter().collect();
        Self {
            line: 0,
            severity: Severity::Warning,
            message: format!("{}: {}", UNUSED_VARIABLES_MESSAGE, names.join(", ")),
            span: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "Error en línea {}: {}", self.line, self.message),
            Severity::Warning => write!(f, "Advertencia: {}", self.message),
        }
    }
}

/// The outcome of one validation run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    errors: Vec<Diagnostic>,
    symbols: Vec<Symbol>,
    unused: Vec<String>,
}

impl Report {
    /// Creates a report from its parts.
    pub fn new(errors: Vec<Diagnostic>, symbols: Vec<Symbol>, unused: Vec<String>) -> Self {
        Self {
            errors,
            symbols,
            unused,
        }
    }

    /// Returns true if no errors were found.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error diagnostics in line order.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Declared variables in declaration order, with their final types.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Looks up a declared variable by name.
    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// Names declared but never used, in declaration order.
    pub fn unused_variables(&self) -> &[String] {
        &self.unused
    }

    /// The unused-variable warning, suppressed whenever errors exist.
    pub fn unused_warning(&self) -> Option<Diagnostic> {
        if !self.is_success() || self.unused.is_empty() {
            return None;
        }
        Some(Diagnostic::unused_variables(
            self.unused.iter().map(String::as_str),
        ))
    }

    /// Everything the user should see: the errors, or the warning if any.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        if self.is_success() {
            self.unused_warning().into_iter().collect()
        } else {
            self.errors.clone()
        }
    }

    /// Renders the output lines.
    ///
    /// ```
    /// let report = validador::validate("n Entero;");
    /// assert_eq!(
    ///     report.render(),
    ///     vec![
    ///         "La Sintaxis es correcta".to_string(),
    ///         "Advertencia: Variables declaradas pero no utilizadas: n".to_string(),
    ///     ]
    /// );
    /// ```
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.is_success() {
            lines.push(SUCCESS_MESSAGE.to_string());
        }
        lines.extend(self.diagnostics().iter().map(ToString::to_string));
        lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::VarType;

    fn symbol(name: &str, line: usize) -> Symbol {
        Symbol {
            name: name.to_string(),
            var_type: VarType::Integer,
            line,
            span: Span::new(0, name.len()),
        }
    }

    #[test]
    fn test_error_display() {
        let diagnostic = Diagnostic::error(3, "Sintaxis incorrecta", None);
        assert_eq!(diagnostic.to_string(), "Error en línea 3: Sintaxis incorrecta");
        assert_eq!(diagnostic.severity, Severity::Error);
    }

    #[test]
    fn test_unused_warning_display() {
        let warning = Diagnostic::unused_variables(["a", "b"]);
        assert_eq!(
            warning.to_string(),
            "Advertencia: Variables declaradas pero no utilizadas: a, b"
        );
        assert_eq!(warning.severity, Severity::Warning);
        assert_eq!(warning.line, 0);
    }

    #[test]
    fn test_success_without_unused() {
        let report = Report::new(vec![], vec![symbol("a", 1)], vec![]);
        assert!(report.is_success());
        assert_eq!(report.render(), vec![SUCCESS_MESSAGE.to_string()]);
        assert!(report.diagnostics().is_empty());
    }

    #[test]
    fn test_errors_suppress_unused_warning() {
        let report = Report::new(
            vec![Diagnostic::error(2, "Sintaxis incorrecta", None)],
            vec![symbol("a", 1)],
            vec!["a".to_string()],
        );
        assert!(!report.is_success());
        assert_eq!(report.unused_warning(), None);
        assert_eq!(
            report.render(),
            vec!["Error en línea 2: Sintaxis incorrecta".to_string()]
        );
        assert_eq!(report.diagnostics().len(), 1);
    }

    #[test]
    fn test_display_joins_lines() {
        let report = Report::new(vec![], vec![symbol("n", 1)], vec!["n".to_string()]);
        assert_eq!(
            report.to_string(),
            "La Sintaxis es correcta\nAdvertencia: Variables declaradas pero no utilizadas: n\n"
        );
        assert_eq!(report.symbol("n").map(|s| s.line), Some(1));
    }
}
