//! Compiled formulas.

use std::{fmt, str::FromStr};

use log::debug;

use crate::{
    ast::Expr,
    error::FormulaError,
    lexer::{Normalized, normalize},
    parser::parse_tokens,
    truth_table::Assignments,
};

/// A compiled propositional formula.
///
/// A formula owns its normalized source, its distinct variables in order of first appearance,
/// and its expression tree. It is immutable once built; [`Formula::evaluate_for`] takes the
/// variable bindings as an argument, so one formula can be shared between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    /// Normalized source, including the synthetic outer parentheses.
    source: String,
    /// Distinct variables in order of first appearance.
    variables: Vec<char>,
    /// Root of the expression tree.
    root: Expr,
}

impl Formula {
    /// Compiles formula text.
    ///
    /// Characters other than `A`–`Z`, `^`, `v`, `→`, `←`, `¬`, `(` and `)` are ignored.
    pub fn parse(text: &str) -> Result<Self, FormulaError> {
        let Normalized {
            source,
            tokens,
            variables,
        } = normalize(text);

        let root = parse_tokens(&tokens, &source)?;
        debug_assert!(root.max_variable() < variables.len());
        debug!(
            "compiled formula {source} with {} variable(s), {} node(s)",
            variables.len(),
            root.node_count()
        );

        Ok(Self {
            source,
            variables,
            root,
        })
    }

    /// Returns the normalized source, including the synthetic outer parentheses.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the distinct variables in order of first appearance.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Returns the number of distinct variables.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Returns the root of the expression tree.
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Evaluates the formula with `bindings[i]` as the value of the `i`th variable.
    ///
    /// Fails with [`FormulaError::BindingLengthMismatch`] unless exactly one value is supplied
    /// per distinct variable.
    pub fn evaluate_for(&self, bindings: &[bool]) -> Result<bool, FormulaError> {
        if bindings.len() != self.variables.len() {
            return Err(FormulaError::BindingLengthMismatch {
                expected: self.variables.len(),
                actual: bindings.len(),
            });
        }
        Ok(self.root.evaluate(bindings))
    }

    /// Returns every assignment of the formula's variables, in truth-table order.
    pub fn assignments(&self) -> Assignments {
        Assignments::new(self.variables.len())
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root.to_formula_string(&self.variables))
    }
}

/// Compiles formula text into a [`Formula`].
pub fn compile_formula(text: &str) -> Result<Formula, FormulaError> {
    Formula::parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_source_and_variables() {
        let formula = Formula::parse("(X → Y) v (Z → ¬X)").unwrap();
        assert_eq!(formula.source(), "((X→Y)v(Z→¬X))");
        assert_eq!(formula.variables(), &['X', 'Y', 'Z']);
        assert_eq!(formula.variable_count(), 3);
        assert_eq!(formula.root().max_variable(), 2);
    }

    #[test]
    fn evaluate_for_checks_length() {
        let formula = Formula::parse("A ^ B").unwrap();
        assert_eq!(formula.evaluate_for(&[true, true]), Ok(true));
        assert_eq!(
            formula.evaluate_for(&[true]),
            Err(FormulaError::BindingLengthMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            formula.evaluate_for(&[true, true, true]),
            Err(FormulaError::BindingLengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn repeated_evaluation_without_rebuilding() {
        let formula = Formula::parse("Y ← X").unwrap();
        assert_eq!(formula.evaluate_for(&[false, true]), Ok(false));
        assert_eq!(formula.evaluate_for(&[true, true]), Ok(true));
        assert_eq!(formula.evaluate_for(&[false, false]), Ok(true));
    }

    #[test]
    fn display_renders_glyph_form() {
        let formula: Formula = "(X→Y)v(Z→¬X)".parse().unwrap();
        assert_eq!(formula.to_string(), "(X → Y) v (Z → ¬X)");
    }

    #[test]
    fn display_reparses_to_same_tree() {
        let formula = Formula::parse("¬(A ^ B) → (C v ¬D) ← A").unwrap();
        let reparsed = Formula::parse(&formula.to_string()).unwrap();
        assert_eq!(formula.root(), reparsed.root());
    }

    #[test]
    fn formula_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Formula>();
    }

    #[test]
    fn compile_formula_reports_malformed() {
        assert!(compile_formula("A ^ ^ B").unwrap_err().is_malformed());
        assert!(compile_formula("(A").unwrap_err().is_malformed());
    }
}
