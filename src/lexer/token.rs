//! Token definitions for the validador lexer.
//!
//! The teaching language has a tiny vocabulary:
//! - Variables (lower-case first letter) and the three type names
//! - Integer and text literals
//! - The four arithmetic operators plus `=`, `;`, `(` and `)`
//! - Two pseudo-calls: `Captura.<Tipo>()` and the `Mensaje.Texto` prefix
//!
//! ## Design Notes
//!
//! We use the `logos` crate for lexical analysis. Keywords and pseudo-calls
//! all start with an upper-case letter while variables must start with a
//! lower-case one, so `Entero` can never be scanned as a variable.

use logos::Logos;
use std::fmt;

/// A token with its location in the scanned line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// Byte offsets of the token within the scanned text
    pub span: std::ops::Range<usize>,
    /// The original text of the token
    pub text: String,
}

impl Token {
    /// Create a new token with the given kind, span, and text.
    pub fn new(kind: TokenKind, span: std::ops::Range<usize>, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

/// All token kinds of the teaching language.
///
/// The sequence of kinds on a line (its *shape*) is what the line
/// classifier matches against.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    // ==================== Pseudo-calls ====================

    /// `Captura.Entero()`, `Captura.Texto()` or `Captura.Real()`
    #[regex(r"Captura\.(Entero|Texto|Real)\(\)")]
    Capture,

    /// `Mensaje.Texto` print prefix
    #[token("Mensaje.Texto")]
    PrintText,

    // ==================== Names ====================

    /// `Entero`, `Texto` or `Real`
    #[token("Entero")]
    #[token("Texto")]
    #[token("Real")]
    TypeName,

    /// Variable name, always starting with a lower-case ASCII letter
    #[regex(r"[a-z]\w*")]
    Variable,

    // ==================== Literals ====================

    /// Unsigned integer: `42`
    #[regex(r"[0-9]+")]
    IntegerLiteral,

    /// Unsigned decimal: `3.14`
    ///
    /// Never produced by the scanner. At a digit the integer pattern wins,
    /// so `3.14` scans as `3`, a skipped `.`, and `14`.
    RealLiteral,

    /// Double-quoted text, no escapes: `"hola"`
    #[regex(r#""[^"]*""#)]
    TextLiteral,

    // ==================== Punctuation ====================

    /// One of `+ - * /`
    #[regex(r"[+\-*/]")]
    Operator,

    #[token("=")]
    Equals,

    #[token(";")]
    Semicolon,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Capture => "captura",
            TokenKind::PrintText => "Mensaje.Texto",
            TokenKind::TypeName => "tipo",
            TokenKind::Variable => "variable",
            TokenKind::IntegerLiteral => "entero",
            TokenKind::RealLiteral => "real",
            TokenKind::TextLiteral => "texto",
            TokenKind::Operator => "operador",
            TokenKind::Equals => "'='",
            TokenKind::Semicolon => "';'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        TokenKind::lexer(source).filter_map(Result::ok).collect()
    }

    #[test]
    fn test_type_names_are_not_variables() {
        assert_eq!(
            kinds("edad Entero;"),
            vec![TokenKind::Variable, TokenKind::TypeName, TokenKind::Semicolon]
        );
        assert_eq!(kinds("Texto Real"), vec![TokenKind::TypeName, TokenKind::TypeName]);
    }

    #[test]
    fn test_capture_forms() {
        for source in ["Captura.Entero()", "Captura.Texto()", "Captura.Real()"] {
            assert_eq!(kinds(source), vec![TokenKind::Capture], "{source}");
        }
    }

    #[test]
    fn test_print_prefix() {
        assert_eq!(
            kinds(r#"Mensaje.Texto("hola");"#),
            vec![
                TokenKind::PrintText,
                TokenKind::LeftParen,
                TokenKind::TextLiteral,
                TokenKind::RightParen,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_decimal_splits_into_integers() {
        assert_eq!(
            kinds("3.14"),
            vec![TokenKind::IntegerLiteral, TokenKind::IntegerLiteral]
        );
        assert_eq!(kinds("314"), vec![TokenKind::IntegerLiteral]);
    }

    #[test]
    fn test_operators() {
        assert_eq!(kinds("+ - * /"), vec![TokenKind::Operator; 4]);
    }
}
