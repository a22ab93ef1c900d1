//! Error types for formula compilation and evaluation.

use thiserror::Error;

/// An error produced while compiling or evaluating a formula.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// The formula is structurally invalid.
    #[error("{}", format_with_context(.message, .formula, .position))]
    Malformed {
        /// Error message.
        message: String,
        /// The normalized formula, including the synthetic outer parentheses.
        formula: String,
        /// Character offset into `formula` where the error occurred.
        position: usize,
    },

    /// The caller supplied the wrong number of boolean inputs.
    #[error("expected {expected} boolean inputs, got {actual}")]
    BindingLengthMismatch {
        /// Number of distinct variables in the formula.
        expected: usize,
        /// Number of inputs supplied.
        actual: usize,
    },
}

impl FormulaError {
    /// Creates a malformed-formula error.
    pub fn malformed(message: impl Into<String>, formula: &str, position: usize) -> Self {
        Self::Malformed {
            message: message.into(),
            formula: formula.to_string(),
            position,
        }
    }

    /// Returns the error message without context.
    pub fn message(&self) -> String {
        match self {
            Self::Malformed { message, .. } => message.clone(),
            Self::BindingLengthMismatch { .. } => self.to_string(),
        }
    }

    /// Returns true for structural errors.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// Formats a malformed-formula message with a caret under the offending glyph.
fn format_with_context(message: &str, formula: &str, position: &usize) -> String {
    let clamped = (*position).min(formula.chars().count());
    format!(
        "malformed formula: {message}\n  {formula}\n  {}^",
        " ".repeat(clamped)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display_points_at_position() {
        let err = FormulaError::malformed("connective follows another connective", "(A^^B)", 3);
        let display = err.to_string();
        assert!(display.contains("connective follows another connective"));
        assert!(display.contains("(A^^B)"));
        assert!(display.ends_with("     ^"));
    }

    #[test]
    fn caret_is_clamped() {
        let err = FormulaError::malformed("unclosed", "(A", 99);
        assert!(err.to_string().ends_with("    ^"));
    }

    #[test]
    fn binding_mismatch_display() {
        let err = FormulaError::BindingLengthMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "expected 3 boolean inputs, got 2");
        assert!(!err.is_malformed());
    }

    #[test]
    fn message_extraction() {
        let err = FormulaError::malformed("formula is empty", "()", 0);
        assert_eq!(err.message(), "formula is empty");
        assert!(err.is_malformed());
    }
}
