//! Formula normalizer.
//!
//! Reduces raw formula text to the glyphs the parser understands, wraps the result in one
//! synthetic pair of parentheses, and records the distinct variables in order of first
//! appearance.

use std::fmt;

/// Conjunction glyph.
pub const AND: char = '^';
/// Disjunction glyph.
pub const OR: char = 'v';
/// Implication glyph.
pub const IMPLIES: char = '→';
/// Reverse implication glyph.
pub const REVERSE_IMPLIES: char = '←';
/// Negation glyph.
pub const NOT: char = '¬';

/// A binary boolean connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    /// Conjunction: both operands hold.
    And,
    /// Disjunction: at least one operand holds.
    Or,
    /// Implication: `l → r` is `¬l ∨ r`.
    Implies,
    /// Reverse implication: `l ← r` is `l ∨ ¬r`.
    ReverseImplies,
}

impl Connective {
    /// Every connective, in glyph-table order.
    pub const ALL: [Self; 4] = [Self::And, Self::Or, Self::Implies, Self::ReverseImplies];

    /// Returns the connective written with the given glyph.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            AND => Some(Self::And),
            OR => Some(Self::Or),
            IMPLIES => Some(Self::Implies),
            REVERSE_IMPLIES => Some(Self::ReverseImplies),
            _ => None,
        }
    }

    /// Returns the glyph this connective is written with.
    pub fn glyph(self) -> char {
        match self {
            Self::And => AND,
            Self::Or => OR,
            Self::Implies => IMPLIES,
            Self::ReverseImplies => REVERSE_IMPLIES,
        }
    }

    /// Returns a lower-case name for the connective.
    pub fn name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Implies => "implies",
            Self::ReverseImplies => "reverse implies",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A token in a normalized formula.
///
/// The position of a token in the token vector equals the character offset of its glyph in
/// the normalized source, which is what error carets point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A variable, by first-occurrence index.
    Variable(usize),
    /// A binary connective.
    Connective(Connective),
    /// Negation of the next operand.
    Not,
    /// Left parenthesis.
    LParen,
    /// Right parenthesis.
    RParen,
}

/// Formula text after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Retained glyphs, including the synthetic outer parentheses.
    pub source: String,
    /// One token per retained glyph.
    pub tokens: Vec<Token>,
    /// Distinct variable symbols in order of first appearance.
    pub variables: Vec<char>,
}

/// Normalizes raw formula text.
///
/// Keeps upper-case Latin letters, connective glyphs, the negation glyph and parentheses.
/// Everything else, whitespace included, is dropped without complaint.
pub fn normalize(input: &str) -> Normalized {
    let mut source = String::with_capacity(input.len() + 2);
    let mut tokens = Vec::with_capacity(input.len() + 2);
    let mut variables: Vec<char> = Vec::new();

    source.push('(');
    tokens.push(Token::LParen);

    for ch in input.chars() {
        let token = match ch {
            'A'..='Z' => {
                let index = match variables.iter().position(|&v| v == ch) {
                    Some(index) => index,
                    None => {
                        variables.push(ch);
                        variables.len() - 1
                    }
                };
                Token::Variable(index)
            }
            '(' => Token::LParen,
            ')' => Token::RParen,
            NOT => Token::Not,
            _ => match Connective::from_glyph(ch) {
                Some(connective) => Token::Connective(connective),
                None => continue,
            },
        };
        source.push(ch);
        tokens.push(token);
    }

    source.push(')');
    tokens.push(Token::RParen);

    Normalized {
        source,
        tokens,
        variables,
    }
}
