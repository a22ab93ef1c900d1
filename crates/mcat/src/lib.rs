//! mcat: a media catalogue searched with propositional logic.
//!
//! Films, audio tracks and television programmes are stored in a JSON catalogue and searched
//! with criteria such as `director = "Michael Mann" & duration > 2h`. Each condition becomes a
//! variable of a propositional formula, which is then evaluated against every record.

#![warn(missing_docs)]

pub mod cli;
