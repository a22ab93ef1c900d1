//! Truth table enumeration.

use std::fmt;

use crate::formula::Formula;

/// Iterator over every assignment of `n` boolean variables.
///
/// Row `i` binds variable `k` to bit `k` of `i`, so variable 0 is the least significant bit.
#[derive(Debug, Clone)]
pub struct Assignments {
    /// Number of variables per assignment.
    width: usize,
    /// Next row index.
    next: u64,
    /// Total number of rows.
    rows: u64,
}

impl Assignments {
    /// Creates an iterator over all `2^width` assignments.
    ///
    /// Widths beyond 63 are clamped; formulas never exceed 26 variables.
    pub fn new(width: usize) -> Self {
        let width = width.min(63);
        Self {
            width,
            next: 0,
            rows: 1 << width,
        }
    }
}

impl Iterator for Assignments {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.rows {
            return None;
        }
        let row = self.next;
        self.next += 1;
        Some((0..self.width).map(|k| (row >> k) & 1 == 1).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.rows - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}

/// One row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Variable values, indexed like the formula's variables.
    pub inputs: Vec<bool>,
    /// The formula's value under `inputs`.
    pub output: bool,
}

/// The truth table of a formula.
///
/// Rows are evaluated on demand from [`Assignments`], so neither iterating nor displaying a
/// table holds more than one row in memory.
#[derive(Debug, Clone, Copy)]
pub struct TruthTable<'a> {
    /// The tabulated formula.
    formula: &'a Formula,
}

impl<'a> TruthTable<'a> {
    /// Creates the truth table of a formula.
    pub fn new(formula: &'a Formula) -> Self {
        Self { formula }
    }

    /// Returns the variable names heading the input columns.
    pub fn variables(&self) -> &'a [char] {
        self.formula.variables()
    }

    /// Returns the rows in assignment order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = Row> + use<'a> {
        let formula = self.formula;
        formula.assignments().map(move |inputs| {
            let output = formula.root().evaluate(&inputs);
            Row { inputs, output }
        })
    }

    /// Returns the output column.
    pub fn outputs(&self) -> Vec<bool> {
        self.rows().map(|row| row.output).collect()
    }
}

/// Renders a boolean as a table cell.
fn bit(value: bool) -> char {
    if value { '1' } else { '0' }
}

impl fmt::Display for TruthTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.variables() {
            write!(f, "{name}|")?;
        }
        writeln!(f, "{}", self.formula)?;

        for row in self.rows() {
            for &input in &row.inputs {
                write!(f, "{}|", bit(input))?;
            }
            writeln!(f, "{}", bit(row.output))?;
        }
        Ok(())
    }
}
