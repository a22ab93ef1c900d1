//! Criteria compiler.
//!
//! A query is one condition triple followed by any number of `connective condition` pairs:
//!
//! ```text
//! query     → condition (connective condition)*
//! condition → operand ["!"]operator operand
//! ```
//!
//! Each condition is assigned the next formula variable, `A` through `Z`, and the connectives
//! between them become the connectives of a generated formula. A `!` prefix on an operator
//! negates that condition's variable. The generated formula combines left to right with no
//! precedence, exactly as a hand-written formula would.

use std::str::FromStr;

use log::{debug, trace};
use mcat_formula::{Connective, Formula, NOT};

use crate::{
    condition::{Record, SearchCondition},
    error::{CriteriaError, CriteriaErrorKind},
    lexer::tokenize,
    operator::SearchOperator,
    pattern,
};

/// Maximum number of conditions in one query.
pub const MAX_CONDITIONS: usize = 26;

/// Formula variable symbols, in allocation order.
const VARIABLES: &[u8; MAX_CONDITIONS] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Connective spellings accepted between conditions, matched case-insensitively.
pub const CONNECTIVE_ALIASES: [(&str, Connective); 17] = [
    ("&", Connective::And),
    ("&&", Connective::And),
    ("and", Connective::And),
    ("^", Connective::And),
    ("∧", Connective::And),
    ("|", Connective::Or),
    ("||", Connective::Or),
    ("or", Connective::Or),
    ("v", Connective::Or),
    ("∨", Connective::Or),
    ("<implies>", Connective::Implies),
    ("implies", Connective::Implies),
    ("->", Connective::Implies),
    ("→", Connective::Implies),
    ("<reverse_implies>", Connective::ReverseImplies),
    ("<-", Connective::ReverseImplies),
    ("←", Connective::ReverseImplies),
];

/// Looks up a connective by any of its accepted spellings.
pub fn connective_from_token(token: &str) -> Option<Connective> {
    CONNECTIVE_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(token))
        .map(|&(_, connective)| connective)
}

/// A compiled search query.
///
/// Holds one [`SearchCondition`] per formula variable, in variable order, and the formula that
/// combines their outcomes.
#[derive(Debug, Clone)]
pub struct Criteria {
    /// Conditions, where condition `i` supplies formula variable `i`.
    conditions: Vec<SearchCondition>,
    /// The combining formula.
    formula: Formula,
}

impl Criteria {
    /// Compiles query text.
    pub fn compile(query: &str) -> Result<Self, CriteriaError> {
        let error = |kind: CriteriaErrorKind| CriteriaError::new(kind, query);
        let tokens = tokenize(query);

        if tokens.len() < 3 || (tokens.len() - 3) % 4 != 0 {
            return Err(error(CriteriaErrorKind::TokenCount {
                count: tokens.len(),
            }));
        }

        let count = tokens.len().div_ceil(4);
        if count > MAX_CONDITIONS {
            return Err(error(CriteriaErrorKind::TooManyConditions {
                count,
                max: MAX_CONDITIONS,
            }));
        }

        let mut conditions = Vec::with_capacity(count);
        let mut text = String::new();

        // Each chunk is a condition triple, followed by a connective unless it is the last.
        for (symbol, chunk) in VARIABLES.iter().zip(tokens.chunks(4)) {
            let [left, op, right, rest @ ..] = chunk else {
                return Err(error(CriteriaErrorKind::TokenCount {
                    count: tokens.len(),
                }));
            };

            let (negated, name) = match op.strip_prefix('!') {
                Some(name) => (true, name),
                None => (false, op.as_str()),
            };
            let operator = SearchOperator::from_token(name).ok_or_else(|| {
                error(CriteriaErrorKind::UnknownOperator { token: op.clone() })
            })?;

            if operator.is_pattern() {
                let anchored = operator == SearchOperator::Matches;
                if let Err(err) = pattern::compile(right.trim(), anchored) {
                    return Err(error(CriteriaErrorKind::InvalidPattern {
                        pattern: right.clone(),
                        message: err.to_string(),
                    }));
                }
            }

            if negated {
                text.push(NOT);
            }
            text.push(char::from(*symbol));
            conditions.push(SearchCondition::new(left.as_str(), operator, right.as_str()));

            if let Some(token) = rest.first() {
                let connective = connective_from_token(token).ok_or_else(|| {
                    error(CriteriaErrorKind::UnknownConnective {
                        token: token.clone(),
                    })
                })?;
                text.push(connective.glyph());
            }
        }

        let formula =
            Formula::parse(&text).map_err(|err| error(CriteriaErrorKind::Formula(err)))?;
        debug!(
            "compiled criteria {query:?} into {} condition(s), formula {formula}",
            conditions.len()
        );

        Ok(Self {
            conditions,
            formula,
        })
    }

    /// Returns the conditions, in formula variable order.
    pub fn conditions(&self) -> &[SearchCondition] {
        &self.conditions
    }

    /// Returns the combining formula.
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Evaluates each condition against a record, in variable order.
    pub fn evaluate<R: Record + ?Sized>(&self, record: &R) -> Vec<bool> {
        self.conditions.iter().map(|c| c.test(record)).collect()
    }

    /// Returns true if the record satisfies the criteria.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        let bits = self.evaluate(record);
        let verdict = self.formula.root().evaluate(&bits);
        trace!("condition bits {bits:?} -> {verdict}");
        verdict
    }

    /// Keeps the records that satisfy the criteria, in their original order.
    pub fn filter<'a, I>(&'a self, records: I) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Record,
    {
        records.into_iter().filter(|record| self.matches(record))
    }
}

impl FromStr for Criteria {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

/// Compiles query text into [`Criteria`].
pub fn compile_criteria(query: &str) -> Result<Criteria, CriteriaError> {
    Criteria::compile(query)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn kind(query: &str) -> CriteriaErrorKind {
        Criteria::compile(query).unwrap_err().kind
    }

    #[test]
    fn single_condition() {
        let criteria = Criteria::compile("title = Heat").unwrap();
        assert_eq!(criteria.conditions().len(), 1);
        assert_eq!(criteria.formula().source(), "(A)");
        assert!(criteria.matches(&record(&[("title", "Heat")])));
        assert!(!criteria.matches(&record(&[("title", "Ran")])));
    }

    #[test]
    fn generated_formula_text() {
        let criteria =
            Criteria::compile("a = a & b !contains c | d > 1 <implies> e <= 2").unwrap();
        assert_eq!(criteria.formula().source(), "(A^¬BvC→D)");
        assert_eq!(criteria.formula().variable_count(), criteria.conditions().len());
    }

    #[test]
    fn connective_aliases_are_case_insensitive() {
        for alias in ["&", "AND", "And", "&&", "^", "∧"] {
            let q = format!("a = a {alias} b = b");
            assert_eq!(Criteria::compile(&q).unwrap().formula().source(), "(A^B)");
        }
        for alias in ["|", "OR", "||", "v", "V", "∨"] {
            let q = format!("a = a {alias} b = b");
            assert_eq!(Criteria::compile(&q).unwrap().formula().source(), "(AvB)");
        }
        for alias in ["<IMPLIES>", "implies", "->", "→"] {
            let q = format!("a = a {alias} b = b");
            assert_eq!(Criteria::compile(&q).unwrap().formula().source(), "(A→B)");
        }
        for alias in ["<reverse_implies>", "<-", "←"] {
            let q = format!("a = a {alias} b = b");
            assert_eq!(Criteria::compile(&q).unwrap().formula().source(), "(A←B)");
        }
    }

    #[test]
    fn negated_operator() {
        let criteria = Criteria::compile("title != Heat").unwrap();
        assert_eq!(criteria.conditions()[0].operator(), SearchOperator::Equals);
        assert!(criteria.matches(&record(&[("title", "Ran")])));
        assert!(!criteria.matches(&record(&[("title", "Heat")])));
    }

    #[test]
    fn only_one_negation_is_stripped() {
        assert_eq!(
            kind("title !!= Heat"),
            CriteriaErrorKind::UnknownOperator {
                token: "!!=".to_string()
            }
        );
    }

    #[test]
    fn token_counts() {
        for k in 0..=3 {
            let query = std::iter::repeat_n("a = a", k + 1)
                .collect::<Vec<_>>()
                .join(" & ");
            let criteria = Criteria::compile(&query).unwrap();
            assert_eq!(criteria.conditions().len(), k + 1);
        }
        for bad in ["", "a", "a =", "a = a &", "a = a & b", "a = a & b ="] {
            assert!(
                matches!(kind(bad), CriteriaErrorKind::TokenCount { .. }),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn condition_ceiling() {
        let allowed = vec!["a = a"; 26].join(" | ");
        assert_eq!(Criteria::compile(&allowed).unwrap().conditions().len(), 26);

        let too_many = vec!["a = a"; 27].join(" | ");
        assert_eq!(
            kind(&too_many),
            CriteriaErrorKind::TooManyConditions { count: 27, max: 26 }
        );
    }

    #[test]
    fn unknown_tokens() {
        assert_eq!(
            kind("a = a xor b = b"),
            CriteriaErrorKind::UnknownConnective {
                token: "xor".to_string()
            }
        );
        assert_eq!(
            kind("a like b"),
            CriteriaErrorKind::UnknownOperator {
                token: "like".to_string()
            }
        );
    }

    #[test]
    fn invalid_pattern_rejected_at_compile() {
        assert!(matches!(
            kind("title find (unclosed"),
            CriteriaErrorKind::InvalidPattern { .. }
        ));
        assert!(Criteria::compile("title find (ok)").is_ok());
    }

    #[test]
    fn matches_pattern_must_balance_on_its_own() {
        assert!(matches!(
            kind("title matches \"Star)|(?:zzz\""),
            CriteriaErrorKind::InvalidPattern { .. }
        ));
    }

    #[test]
    fn left_to_right_combination() {
        // (A | B) & C, not A | (B & C)
        let criteria = Criteria::compile("x = 1 | x = x & x = 2").unwrap();
        assert!(!criteria.matches(&record(&[("x", "1")])));
    }

    #[test]
    fn evaluate_reports_each_condition() {
        let criteria = Criteria::compile("title contains He & rating > 3").unwrap();
        let bits = criteria.evaluate(&record(&[("title", "Heat"), ("rating", "2")]));
        assert_eq!(bits, vec![true, false]);
    }

    #[test]
    fn filter_keeps_order() {
        let records = vec![
            record(&[("title", "Alien"), ("rating", "5")]),
            record(&[("title", "Heat"), ("rating", "2")]),
            record(&[("title", "Ran"), ("rating", "4")]),
        ];
        let criteria = Criteria::compile("rating >= 4").unwrap();
        let titles: Vec<_> = criteria
            .filter(&records)
            .map(|r| r["title"].as_str())
            .collect();
        assert_eq!(titles, vec!["Alien", "Ran"]);
    }

    #[test]
    fn quoted_operands() {
        let criteria = Criteria::compile(r#"title = "Star Wars""#).unwrap();
        assert_eq!(criteria.conditions()[0].right(), "Star Wars");
        assert!(criteria.matches(&record(&[("title", "Star Wars")])));
    }

    #[test]
    fn error_carries_query() {
        let err = Criteria::compile("a b").unwrap_err();
        assert_eq!(err.query, "a b");
        assert!(err.to_string().starts_with("invalid criteria:"));
    }
}
