//! Propositional formula parsing and evaluation for mcat.
//!
//! Formulas are written over upper-case variables `A`–`Z` with these glyphs:
//!
//! - **And**: `^`
//! - **Or**: `v`
//! - **Implies**: `→`
//! - **Reverse implies**: `←`
//! - **Not**: `¬` (prefix)
//! - **Grouping**: `(` and `)`
//!
//! There is no operator precedence. Operands combine strictly left to right, so `A v B ^ C`
//! means `(A v B) ^ C`; use parentheses to group differently.
//!
//! # Example
//!
//! ```
//! use mcat_formula::{Formula, TruthTable};
//!
//! let formula = Formula::parse("(X → Y) v (Z → ¬X)").unwrap();
//! assert_eq!(formula.variables(), &['X', 'Y', 'Z']);
//! assert_eq!(formula.evaluate_for(&[true, false, true]), Ok(false));
//!
//! let table = TruthTable::new(&formula);
//! assert_eq!(table.rows().len(), 8);
//! ```

#![warn(missing_docs)]

mod ast;
mod error;
mod formula;
mod lexer;
mod parser;
mod truth_table;

pub use ast::Expr;
pub use error::FormulaError;
pub use formula::{Formula, compile_formula};
pub use lexer::{AND, Connective, IMPLIES, NOT, Normalized, OR, REVERSE_IMPLIES, Token, normalize};
pub use parser::parse_tokens;
pub use truth_table::{Assignments, Row, TruthTable};
