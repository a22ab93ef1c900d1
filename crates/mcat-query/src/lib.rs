//! Search criteria for mcat.
//!
//! A search query is a chain of field comparisons joined by connectives:
//!
//! - **Conditions**: `title contains Star`, `rating >= 4`, `duration > 1h30m`
//! - **Operators**: `=`, `contains`, `>`, `<`, `>=`, `<=`, `find`, `matches`
//! - **Negation**: `!` before an operator, e.g. `type != film`
//! - **Connectives**: `&`, `|`, `<implies>`, `<reverse_implies>` and their aliases
//! - **Quoting**: `"Star Wars"` or `Star\ Wars` for operands with spaces
//!
//! Conditions combine strictly left to right. Each condition becomes one variable of a
//! generated [`mcat_formula::Formula`], which decides whether a record matches.
//!
//! Operands that name a field of the record are replaced by the record's value; anything else
//! is literal text. A condition that mentions a field the record does not have is false.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use mcat_query::Criteria;
//!
//! let criteria = Criteria::compile(r#"title contains "Star" & duration > 1h30m"#).unwrap();
//!
//! let film: HashMap<String, String> = [("title", "Star Wars"), ("duration", "121")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//! assert!(criteria.matches(&film));
//! ```

#![warn(missing_docs)]

mod condition;
mod criteria;
mod duration;
mod error;
mod lexer;
mod operator;
mod pattern;

pub use condition::{FieldLookup, Record, SearchCondition};
pub use criteria::{
    CONNECTIVE_ALIASES, Criteria, MAX_CONDITIONS, compile_criteria, connective_from_token,
};
pub use duration::parse_minutes;
pub use error::{CriteriaError, CriteriaErrorKind};
pub use lexer::tokenize;
pub use operator::SearchOperator;
