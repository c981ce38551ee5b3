//! Symbol table for validador semantic analysis.
//!
//! The table lives for exactly one validation run and tracks two things:
//!
//! - **Declarations**: variable name to declared type, in first-declaration
//!   order so the unused-variable warning is deterministic.
//! - **Usage**: the set of names seen in any read or write position after
//!   the declaration line.
//!
//! There are no scopes; every declaration is global to the run.

use crate::ast::{Span, VarType};
use std::collections::{HashMap, HashSet};

/// A declared variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// The variable's name.
    pub name: String,
    /// The declared type (the latest one, if re-declared).
    pub var_type: VarType,
    /// 1-based line of the first declaration.
    pub line: usize,
    /// Span of the name on that line.
    pub span: Span,
}

/// The complete symbol table of one run.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    /// Symbols in first-declaration order.
    symbols: Vec<Symbol>,
    /// Name to index in `symbols`.
    index: HashMap<String, usize>,
    /// Names referenced after declaration.
    used: HashSet<String>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a variable.
    ///
    /// Re-declaring overwrites the stored type and returns the previous one;
    /// the original declaration line is kept.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        var_type: VarType,
        line: usize,
        span: Span,
    ) -> Option<VarType> {
        let name = name.into();
        if let Some(&idx) = self.index.get(&name) {
            let symbol = &mut self.symbols[idx];
            let previous = symbol.var_type;
            symbol.var_type = var_type;
            log::trace!("redeclared `{}`: {} -> {}", name, previous, var_type);
            return Some(previous);
        }

        log::trace!("declared `{}` as {} (line {})", name, var_type, line);
        self.index.insert(name.clone(), self.symbols.len());
        self.symbols.push(Symbol {
            name,
            var_type,
            line,
            span,
        });
        None
    }

    /// Looks up a declared variable.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|&idx| &self.symbols[idx])
    }

    /// Returns the declared type of a variable.
    pub fn type_of(&self, name: &str) -> Option<VarType> {
        self.lookup(name).map(|s| s.var_type)
    }

    /// Returns true if the name has been declared.
    pub fn is_declared(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Records a use of `name`. Undeclared names are recorded too.
    pub fn mark_used(&mut self, name: &str) {
        if self.used.insert(name.to_string()) {
            log::trace!("marked `{}` as used", name);
        }
    }

    /// Returns true if the name has been used.
    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Declared variables that were never used, in declaration order.
    pub fn unused(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter().filter(|s| !self.used.contains(&s.name))
    }

    /// All declared variables, in declaration order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Consumes the table, returning the declared variables.
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }

    /// Number of declared variables.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_and_lookup() {
        let mut table = SymbolTable::new();
        assert_eq!(table.declare("edad", VarType::Integer, 1, Span::new(0, 4)), None);

        let symbol = table.lookup("edad").unwrap();
        assert_eq!(symbol.var_type, VarType::Integer);
        assert_eq!(symbol.line, 1);
        assert!(table.is_declared("edad"));
        assert!(!table.is_declared("nombre"));
    }

    #[test]
    fn test_redeclaration_overwrites_type() {
        let mut table = SymbolTable::new();
        table.declare("x", VarType::Integer, 1, Span::new(0, 1));
        let previous = table.declare("x", VarType::Text, 3, Span::new(0, 1));

        assert_eq!(previous, Some(VarType::Integer));
        assert_eq!(table.type_of("x"), Some(VarType::Text));
        assert_eq!(table.lookup("x").unwrap().line, 1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unused_in_declaration_order() {
        let mut table = SymbolTable::new();
        table.declare("c", VarType::Integer, 1, Span::default());
        table.declare("a", VarType::Real, 2, Span::default());
        table.declare("b", VarType::Text, 3, Span::default());
        table.mark_used("a");

        let unused: Vec<_> = table.unused().map(|s| s.name.as_str()).collect();
        assert_eq!(unused, vec!["c", "b"]);
    }

    #[test]
    fn test_usage_of_undeclared_name() {
        let mut table = SymbolTable::new();
        table.mark_used("fantasma");
        assert!(table.is_used("fantasma"));
        assert!(table.is_empty());
        assert_eq!(table.unused().count(), 0);
    }
}
