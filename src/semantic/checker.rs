//! Per-statement semantic rules.
//!
//! The checker runs the rule selected by the line classifier, updating the
//! symbol table and collecting the errors found on that line. A rule never
//! fails fast on the first error unless a later check would be meaningless
//! (for example the types of an undeclared variable).

use crate::ast::{Span, Statement, StatementKind, VarType};
use crate::lexer::Token;
use crate::parser::parse_expression;

use super::error::SemanticError;
use super::symbols::SymbolTable;
use super::types::is_text_literal;

/// Keyword whose presence anywhere in an arithmetic expression is an error.
const CAPTURE_KEYWORD: &str = "Captura";

/// Checks one statement against the symbol table.
pub struct TypeChecker<'a> {
    /// The run's symbol table.
    symbols: &'a mut SymbolTable,
    /// 1-based line being checked.
    line: usize,
    /// Errors found on this line.
    pub errors: Vec<SemanticError>,
}

impl<'a> TypeChecker<'a> {
    /// Creates a checker for the given line.
    pub fn new(symbols: &'a mut SymbolTable, line: usize) -> Self {
        Self {
            symbols,
            line,
            errors: Vec::new(),
        }
    }

    /// Runs the rule matching the statement's shape.
    pub fn check_statement(&mut self, statement: &Statement<'_>) {
        match &statement.kind {
            StatementKind::Declaration { name, var_type } => {
                self.check_declaration(name, *var_type)
            }
            StatementKind::LiteralAssignment { target, literal } => {
                self.check_literal_assignment(target, literal)
            }
            StatementKind::VariableCopy { target, source } => {
                self.check_variable_copy(target, source)
            }
            StatementKind::CaptureAssignment {
                target,
                captured,
                capture,
            } => self.check_capture(target, *captured, capture),
            StatementKind::Arithmetic { target, operands } => {
                self.check_arithmetic(target, operands, statement.span)
            }
            StatementKind::Print { argument } => self.check_print(argument),
        }
    }

    /// `nombre Tipo;`
    ///
    /// The declaration is registered even when it is reported, so a later
    /// re-declaration wins.
    fn check_declaration(&mut self, name: &Token, var_type: VarType) {
        let span = token_span(name);

        if self.symbols.is_declared(&name.text) {
            self.errors.push(SemanticError::DuplicateDeclaration {
                name: name.text.clone(),
                span,
            });
        } else if !name.text.chars().next().is_some_and(char::is_lowercase) {
            self.errors.push(SemanticError::InvalidIdentifierCasing {
                name: name.text.clone(),
                span,
            });
        }

        self.symbols.declare(&name.text, var_type, self.line, span);
    }

    /// `nombre = literal;`
    fn check_literal_assignment(&mut self, target: &Token, literal: &Token) {
        let Some(expected) = self.declared_type(target) else {
            return;
        };

        if expected.accepts_literal(&literal.text) {
            self.symbols.mark_used(&target.text);
        } else {
            self.errors.push(SemanticError::IncompatibleLiteral {
                name: target.text.clone(),
                expected,
                literal: literal.text.clone(),
                span: token_span(literal),
            });
        }
    }

    /// `destino = origen;`
    ///
    /// Both names count as used whatever the outcome.
    fn check_variable_copy(&mut self, target: &Token, source: &Token) {
        if let Some(expected) = self.declared_type(target)
            && let Some(found) = self.declared_type(source)
            && expected != found
        {
            self.errors.push(SemanticError::type_mismatch(
                expected,
                found,
                token_span(source),
            ));
        }

        self.symbols.mark_used(&target.text);
        self.symbols.mark_used(&source.text);
    }

    /// `nombre = Captura.Tipo();`
    fn check_capture(&mut self, target: &Token, captured: VarType, capture: &Token) {
        if let Some(expected) = self.declared_type(target)
            && expected != captured
        {
            self.errors.push(SemanticError::type_mismatch(
                expected,
                captured,
                token_span(capture),
            ));
        }

        self.symbols.mark_used(&target.text);
    }

    /// `nombre = expresión;`
    ///
    /// Operands are checked for well-formedness only; their declarations
    /// and types are not looked up.
    fn check_arithmetic(&mut self, target: &Token, operands: &[Token], line_span: Span) {
        if !self.symbols.is_declared(&target.text) {
            self.errors
                .push(SemanticError::undeclared(&target.text, token_span(target)));
        }

        let span = operands_span(operands).unwrap_or(line_span);
        let expression = operands
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        if expression.contains(CAPTURE_KEYWORD) {
            self.errors.push(SemanticError::CaptureInArithmetic { span });
            return;
        }

        match parse_expression(operands) {
            Ok(expr) => {
                log::debug!("line {}: `{}` parsed as {}", self.line, expression, expr);
                self.symbols.mark_used(&target.text);
            }
            Err(source) => {
                log::debug!(
                    "line {}: malformed expression `{}`: {}",
                    self.line,
                    expression,
                    source
                );
                self.errors.push(SemanticError::MalformedExpression {
                    span: source.span().unwrap_or(span),
                    source,
                });
            }
        }
    }

    /// `Mensaje.Texto(argumento);`
    ///
    /// The argument is always recorded as used, text literals included.
    fn check_print(&mut self, argument: &Token) {
        if !is_text_literal(&argument.text) && !self.symbols.is_declared(&argument.text) {
            self.errors
                .push(SemanticError::undeclared(&argument.text, token_span(argument)));
        }

        self.symbols.mark_used(&argument.text);
    }

    /// Looks up a variable, reporting it as undeclared if missing.
    fn declared_type(&mut self, token: &Token) -> Option<VarType> {
        let found = self.symbols.type_of(&token.text);
        if found.is_none() {
            self.errors
                .push(SemanticError::undeclared(&token.text, token_span(token)));
        }
        found
    }
}

fn token_span(token: &Token) -> Span {
    token.span.clone().into()
}

fn operands_span(operands: &[Token]) -> Option<Span> {
    let first = operands.first()?;
    let last = operands.last()?;
    Some(Span::new(first.span.start, last.span.end))
}
