//! Search operators.
//!
//! Every operator is a binary predicate over two resolved string operands. The set is closed:
//! operators are looked up by token with [`SearchOperator::from_token`] and never registered at
//! runtime.

use std::{cmp::Ordering, fmt};

use log::warn;

use crate::{duration::parse_minutes, pattern};

/// A comparison between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOperator {
    /// `=`: the operands are equal.
    Equals,
    /// `contains`: the left operand contains the right.
    Contains,
    /// `>`: numeric greater-than.
    Greater,
    /// `<`: numeric less-than.
    Less,
    /// `>=`: numeric greater-than-or-equal.
    GreaterOrEqual,
    /// `<=`: numeric less-than-or-equal.
    LessOrEqual,
    /// `find`: the right operand is a regex found somewhere in the left.
    Find,
    /// `matches`: the right operand is a regex matching all of the left.
    Matches,
}

impl SearchOperator {
    /// Every operator, in help order.
    pub const ALL: [Self; 8] = [
        Self::Equals,
        Self::Contains,
        Self::Greater,
        Self::Less,
        Self::GreaterOrEqual,
        Self::LessOrEqual,
        Self::Find,
        Self::Matches,
    ];

    /// Looks up an operator by token, ignoring ASCII case.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.token().eq_ignore_ascii_case(token))
    }

    /// Returns the token this operator is written with.
    pub fn token(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::Contains => "contains",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::Find => "find",
            Self::Matches => "matches",
        }
    }

    /// Returns a one-line description for help output.
    pub fn description(self) -> &'static str {
        match self {
            Self::Equals => "tests if the values are equal",
            Self::Contains => "tests if the first value contains the second",
            Self::Greater => "tests if the first value is greater than the second",
            Self::Less => "tests if the first value is less than the second",
            Self::GreaterOrEqual => {
                "tests if the first value is greater than or equal to the second"
            }
            Self::LessOrEqual => "tests if the first value is less than or equal to the second",
            Self::Find => "tests if the first value contains a match for the second, a regex",
            Self::Matches => "tests if the first value matches the second, a regex, entirely",
        }
    }

    /// Returns true if the right operand is a regular expression.
    pub fn is_pattern(self) -> bool {
        matches!(self, Self::Find | Self::Matches)
    }

    /// Returns true if the operands are compared as numbers.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Greater | Self::Less | Self::GreaterOrEqual | Self::LessOrEqual
        )
    }

    /// Applies the operator to two resolved operands.
    ///
    /// Numeric operators parse both sides as integers or durations and yield `false` if either
    /// side does not parse. Pattern operators trim both sides and yield `false` if the pattern
    /// does not compile.
    pub fn test(self, left: &str, right: &str) -> bool {
        match self {
            Self::Equals => left == right,
            Self::Contains => left.contains(right),
            Self::Greater => compare(left, right, Ordering::is_gt),
            Self::Less => compare(left, right, Ordering::is_lt),
            Self::GreaterOrEqual => compare(left, right, Ordering::is_ge),
            Self::LessOrEqual => compare(left, right, Ordering::is_le),
            Self::Find => find(left, right, false),
            Self::Matches => find(left, right, true),
        }
    }
}

impl fmt::Display for SearchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Compares two operands numerically.
fn compare(left: &str, right: &str, accept: fn(Ordering) -> bool) -> bool {
    match (parse_minutes(left.trim()), parse_minutes(right.trim())) {
        (Some(l), Some(r)) => accept(l.cmp(&r)),
        _ => false,
    }
}

/// Runs a regex match, treating an invalid pattern as no match.
fn find(haystack: &str, pattern: &str, anchored: bool) -> bool {
    match pattern::is_match(pattern.trim(), haystack.trim(), anchored) {
        Ok(matched) => matched,
        Err(err) => {
            warn!("ignoring invalid pattern {pattern:?}: {err}");
            false
        }
    }
}
