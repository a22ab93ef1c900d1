//! Formula expression tree.
//!
//! Leaves refer to variables by index; evaluation takes the binding vector as an argument, so
//! a tree carries no mutable state and can be evaluated from any number of threads.

use std::fmt;

use crate::lexer::{Connective, NOT};

/// A node in a parsed formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A variable, by index into the owning formula's variable list.
    Var(usize),

    /// Logical complement.
    Not(Box<Self>),

    /// Conjunction.
    And(Box<Self>, Box<Self>),

    /// Disjunction.
    Or(Box<Self>, Box<Self>),

    /// Implication, equivalent to `Or(Not(left), right)`.
    Implies(Box<Self>, Box<Self>),

    /// Reverse implication, equivalent to `Or(left, Not(right))`.
    ReverseImplies(Box<Self>, Box<Self>),
}

impl Expr {
    /// Creates a negation.
    pub fn not(expr: Self) -> Self {
        Self::Not(Box::new(expr))
    }

    /// Creates the binary node for a connective.
    pub fn binary(connective: Connective, left: Self, right: Self) -> Self {
        let (left, right) = (Box::new(left), Box::new(right));
        match connective {
            Connective::And => Self::And(left, right),
            Connective::Or => Self::Or(left, right),
            Connective::Implies => Self::Implies(left, right),
            Connective::ReverseImplies => Self::ReverseImplies(left, right),
        }
    }

    /// Returns the connective and operands of a binary node.
    pub fn as_binary(&self) -> Option<(Connective, &Self, &Self)> {
        match self {
            Self::And(l, r) => Some((Connective::And, l, r)),
            Self::Or(l, r) => Some((Connective::Or, l, r)),
            Self::Implies(l, r) => Some((Connective::Implies, l, r)),
            Self::ReverseImplies(l, r) => Some((Connective::ReverseImplies, l, r)),
            Self::Var(_) | Self::Not(_) => None,
        }
    }

    /// Evaluates the tree under the given bindings.
    ///
    /// Both operands of a binary node are always evaluated. A variable index outside
    /// `bindings` reads as `false`; [`crate::Formula::evaluate_for`] rules that out by
    /// checking the binding length first.
    pub fn evaluate(&self, bindings: &[bool]) -> bool {
        match self {
            Self::Var(index) => bindings.get(*index).copied().unwrap_or(false),
            Self::Not(inner) => !inner.evaluate(bindings),
            Self::And(l, r) => l.evaluate(bindings) & r.evaluate(bindings),
            Self::Or(l, r) => l.evaluate(bindings) | r.evaluate(bindings),
            Self::Implies(l, r) => !l.evaluate(bindings) | r.evaluate(bindings),
            Self::ReverseImplies(l, r) => l.evaluate(bindings) | !r.evaluate(bindings),
        }
    }

    /// Returns the largest variable index referenced by the tree.
    pub fn max_variable(&self) -> usize {
        match self {
            Self::Var(index) => *index,
            Self::Not(inner) => inner.max_variable(),
            Self::And(l, r) | Self::Or(l, r) | Self::Implies(l, r) | Self::ReverseImplies(l, r) => {
                l.max_variable().max(r.max_variable())
            }
        }
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Var(_) => 1,
            Self::Not(inner) => 1 + inner.node_count(),
            Self::And(l, r) | Self::Or(l, r) | Self::Implies(l, r) | Self::ReverseImplies(l, r) => {
                1 + l.node_count() + r.node_count()
            }
        }
    }

    /// Renders the tree back to infix glyph form.
    ///
    /// Binary operands that are themselves binary are parenthesized, so the output parses back
    /// to an equivalent tree under left-to-right combination. Indices without a name render
    /// as `?`.
    pub fn to_formula_string(&self, names: &[char]) -> String {
        match self {
            Self::Var(index) => names.get(*index).copied().unwrap_or('?').to_string(),
            Self::Not(inner) => format!("{NOT}{}", inner.operand_string(names)),
            _ => match self.as_binary() {
                Some((connective, l, r)) => format!(
                    "{} {connective} {}",
                    l.operand_string(names),
                    r.operand_string(names)
                ),
                None => String::new(),
            },
        }
    }

    /// Renders the tree as an operand, parenthesizing binary nodes.
    fn operand_string(&self, names: &[char]) -> String {
        if self.as_binary().is_some() {
            format!("({})", self.to_formula_string(names))
        } else {
            self.to_formula_string(names)
        }
    }

    /// Formats the expression as a tree structure with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::Var(index) => writeln!(f, "{prefix}Var({index})"),
            Self::Not(inner) => {
                writeln!(f, "{prefix}Not")?;
                inner.fmt_tree(f, indent + 1)
            }
            Self::And(l, r) | Self::Or(l, r) | Self::Implies(l, r) | Self::ReverseImplies(l, r) => {
                let label = match self {
                    Self::And(..) => "And",
                    Self::Or(..) => "Or",
                    Self::Implies(..) => "Implies",
                    _ => "ReverseImplies",
                };
                writeln!(f, "{prefix}{label}")?;
                l.fmt_tree(f, indent + 1)?;
                r.fmt_tree(f, indent + 1)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}
