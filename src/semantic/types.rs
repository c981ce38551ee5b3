//! Literal compatibility rules.
//!
//! A literal fits a type by its surface form only:
//! - `Entero` takes an all-digit literal
//! - `Texto` takes a literal wrapped in double quotes
//! - `Real` takes digits with an optional decimal part (`5` or `5.25`)

use crate::ast::VarType;

impl VarType {
    /// Checks whether a literal, as written, may be assigned to this type.
    ///
    /// ```
    /// use validador::ast::VarType;
    ///
    /// assert!(VarType::Integer.accepts_literal("42"));
    /// assert!(!VarType::Integer.accepts_literal("\"42\""));
    /// assert!(VarType::Real.accepts_literal("42"));
    /// ```
    pub fn accepts_literal(&self, literal: &str) -> bool {
        match self {
            VarType::Integer => is_integer_literal(literal),
            VarType::Text => is_text_literal(literal),
            VarType::Real => is_real_literal(literal),
        }
    }
}

/// All digits, at least one.
fn is_integer_literal(literal: &str) -> bool {
    !literal.is_empty() && literal.chars().all(|c| c.is_ascii_digit())
}

/// Starts and ends with a double quote.
pub(crate) fn is_text_literal(literal: &str) -> bool {
    literal.starts_with('"') && literal.ends_with('"')
}

/// `digits` or `digits.digits`.
fn is_real_literal(literal: &str) -> bool {
    match literal.split_once('.') {
        Some((whole, fraction)) => is_integer_literal(whole) && is_integer_literal(fraction),
        None => is_integer_literal(literal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_literals() {
        assert!(VarType::Integer.accepts_literal("0"));
        assert!(VarType::Integer.accepts_literal("123"));
        assert!(!VarType::Integer.accepts_literal("1.5"));
        assert!(!VarType::Integer.accepts_literal("\"1\""));
        assert!(!VarType::Integer.accepts_literal(""));
    }

    #[test]
    fn test_text_literals() {
        assert!(VarType::Text.accepts_literal("\"hola\""));
        assert!(VarType::Text.accepts_literal("\"\""));
        assert!(!VarType::Text.accepts_literal("5"));
        assert!(!VarType::Text.accepts_literal("\"abierto"));
    }

    #[test]
    fn test_real_literals() {
        assert!(VarType::Real.accepts_literal("5"));
        assert!(VarType::Real.accepts_literal("5.25"));
        assert!(!VarType::Real.accepts_literal("5."));
        assert!(!VarType::Real.accepts_literal(".5"));
        assert!(!VarType::Real.accepts_literal("1.2.3"));
        assert!(!VarType::Real.accepts_literal("\"5.0\""));
    }
}
