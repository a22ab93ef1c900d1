//! Error types for criteria compilation.

use std::{error::Error, fmt};

use mcat_formula::FormulaError;
use thiserror::Error;

/// A query that could not be compiled into criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaError {
    /// The kind of error that occurred.
    pub kind: CriteriaErrorKind,
    /// The query text as supplied.
    pub query: String,
}

/// The specific kind of criteria error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaErrorKind {
    /// The token count is not `3 + 4k`.
    #[error("expected conditions of three tokens joined by connectives, got {count} token(s)")]
    TokenCount {
        /// Number of tokens found.
        count: usize,
    },

    /// A connective position holds something that is not a connective.
    #[error("\"{token}\" is not a connective")]
    UnknownConnective {
        /// The offending token.
        token: String,
    },

    /// An operator position holds something that is not an operator.
    #[error("\"{token}\" is not a search operator")]
    UnknownOperator {
        /// The offending token, including any `!` prefix.
        token: String,
    },

    /// More conditions than there are formula variables.
    #[error("too many conditions: {count} (at most {max})")]
    TooManyConditions {
        /// Number of conditions in the query.
        count: usize,
        /// The ceiling.
        max: usize,
    },

    /// The right operand of a pattern operator is not a valid regex.
    #[error("invalid pattern \"{pattern}\": {message}")]
    InvalidPattern {
        /// The pattern text.
        pattern: String,
        /// The regex compiler's explanation.
        message: String,
    },

    /// The generated formula did not compile.
    #[error("the boolean formula is invalid: {}", .0.message())]
    Formula(FormulaError),
}

impl CriteriaError {
    /// Creates an error for a query.
    pub fn new(kind: CriteriaErrorKind, query: impl Into<String>) -> Self {
        Self {
            kind,
            query: query.into(),
        }
    }

    /// Returns the error message without context.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Returns a suggestion for common errors.
    pub fn suggestion(&self) -> Option<&'static str> {
        match &self.kind {
            CriteriaErrorKind::TokenCount { .. } => {
                Some("quote operands that contain spaces, e.g. title = \"Star Wars\"")
            }
            CriteriaErrorKind::UnknownConnective { .. } => {
                Some("join conditions with &, |, <implies> or <reverse_implies>")
            }
            CriteriaErrorKind::UnknownOperator { .. } => {
                Some("try =, contains, >, <, >=, <=, find or matches; prefix ! to negate")
            }
            CriteriaErrorKind::InvalidPattern { .. } => {
                Some("escape regex metacharacters such as ( [ * with a doubled backslash")
            }
            CriteriaErrorKind::TooManyConditions { .. } | CriteriaErrorKind::Formula(_) => None,
        }
    }
}

impl fmt::Display for CriteriaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid criteria: {}", self.kind)?;
        if !self.query.is_empty() {
            write!(f, "\n  {}", self.query)?;
        }
        if let Some(suggestion) = self.suggestion() {
            write!(f, "\nhint: {suggestion}")?;
        }
        Ok(())
    }
}

impl Error for CriteriaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            CriteriaErrorKind::Formula(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_prefix_query_and_hint() {
        let err = CriteriaError::new(
            CriteriaErrorKind::UnknownOperator {
                token: "~".to_string(),
            },
            "title ~ Heat",
        );
        let display = err.to_string();
        assert!(display.starts_with("invalid criteria: \"~\" is not a search operator"));
        assert!(display.contains("\n  title ~ Heat"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn token_count_message() {
        let err = CriteriaError::new(CriteriaErrorKind::TokenCount { count: 4 }, "a b c d");
        assert!(err.message().contains("got 4 token(s)"));
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn ceiling_has_no_hint() {
        let err = CriteriaError::new(
            CriteriaErrorKind::TooManyConditions { count: 27, max: 26 },
            "",
        );
        assert_eq!(err.to_string(), "invalid criteria: too many conditions: 27 (at most 26)");
    }

    #[test]
    fn formula_error_is_source() {
        let formula_err = FormulaError::malformed("formula is empty", "()", 0);
        let err = CriteriaError::new(CriteriaErrorKind::Formula(formula_err), "q");
        assert!(err.message().contains("formula is empty"));
        assert!(err.source().is_some());
    }
}
