//! Search conditions and record field lookup.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    fmt,
};

use crate::operator::SearchOperator;

/// The outcome of looking up an operand as a field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLookup<'a> {
    /// The operand names a field and the record has a value for it.
    Value(Cow<'a, str>),
    /// The operand names a field that does not apply to this record.
    Undefined,
    /// The operand is not a field name; it is used as literal text.
    Unknown,
}

/// Something a search condition can be evaluated against.
pub trait Record {
    /// Looks up a field by name. Implementations match names case-insensitively.
    fn lookup(&self, field: &str) -> FieldLookup<'_>;
}

impl<T: Record + ?Sized> Record for &T {
    fn lookup(&self, field: &str) -> FieldLookup<'_> {
        (**self).lookup(field)
    }
}

impl Record for HashMap<String, String> {
    fn lookup(&self, field: &str) -> FieldLookup<'_> {
        lookup_in(self.iter(), field)
    }
}

impl Record for BTreeMap<String, String> {
    fn lookup(&self, field: &str) -> FieldLookup<'_> {
        lookup_in(self.iter(), field)
    }
}

/// Finds a field in a plain string map.
fn lookup_in<'a>(
    mut entries: impl Iterator<Item = (&'a String, &'a String)>,
    field: &str,
) -> FieldLookup<'a> {
    entries
        .find(|(name, _)| name.eq_ignore_ascii_case(field))
        .map_or(FieldLookup::Unknown, |(_, value)| {
            FieldLookup::Value(Cow::Borrowed(value))
        })
}

/// One `operand operator operand` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCondition {
    /// Left operand text: a field name or a literal.
    left: String,
    /// The comparison.
    operator: SearchOperator,
    /// Right operand text: a field name or a literal.
    right: String,
}

impl SearchCondition {
    /// Creates a condition.
    pub fn new(
        left: impl Into<String>,
        operator: SearchOperator,
        right: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            operator,
            right: right.into(),
        }
    }

    /// Returns the left operand text.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Returns the operator.
    pub fn operator(&self) -> SearchOperator {
        self.operator
    }

    /// Returns the right operand text.
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Evaluates the condition against a record.
    ///
    /// Each operand that names a field is replaced by the record's value for it; other
    /// operands are used literally. If either operand names a field the record does not have,
    /// the condition is false.
    pub fn test<R: Record + ?Sized>(&self, record: &R) -> bool {
        let (Some(left), Some(right)) = (
            resolve(record, &self.left),
            resolve(record, &self.right),
        ) else {
            return false;
        };
        self.operator.test(&left, &right)
    }
}

/// Resolves an operand against a record, returning `None` for an undefined field.
fn resolve<'a, R: Record + ?Sized>(record: &'a R, operand: &'a str) -> Option<Cow<'a, str>> {
    match record.lookup(operand) {
        FieldLookup::Value(value) => Some(value),
        FieldLookup::Undefined => None,
        FieldLookup::Unknown => Some(Cow::Borrowed(operand)),
    }
}

impl fmt::Display for SearchCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", quote(&self.left), self.operator, quote(&self.right))
    }
}

/// Quotes an operand for display if it would not survive tokenizing as-is.
fn quote(operand: &str) -> Cow<'_, str> {
    if operand.is_empty() || operand.contains([' ', '"', '\\']) {
        let escaped = operand.replace('\\', r"\\").replace('"', "\\\"");
        Cow::Owned(format!("\"{escaped}\""))
    } else {
        Cow::Borrowed(operand)
    }
}
