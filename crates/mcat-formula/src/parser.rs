//! Formula parser.
//!
//! Parses a normalized token stream into an expression tree using recursive descent with a
//! single production, "read a section", invoked once per parenthesis depth.
//!
//! # Grammar
//!
//! ```text
//! section → "(" term* ")"
//! term    → VARIABLE | "¬" | CONNECTIVE | section
//! ```
//!
//! There is no precedence: operands combine strictly left to right, and a connective may only
//! sit between two operands. Parse state for a section lives in a [`Frame`] value that each
//! transition consumes and returns, so the parser itself holds no mutable state.

use crate::{
    ast::Expr,
    error::FormulaError,
    lexer::{Connective, Token},
};

/// Maximum parenthesis nesting depth.
const MAX_DEPTH: usize = 256;

/// Parse state for one section.
#[derive(Debug, Default)]
struct Frame {
    /// Connective waiting for its right operand.
    pending: Option<Connective>,
    /// Whether the next operand is negated.
    negated: bool,
    /// The expression accumulated so far.
    node: Option<Expr>,
}

impl Frame {
    /// Toggles pending negation.
    fn negate(self) -> Self {
        Self {
            negated: !self.negated,
            ..self
        }
    }
}

/// Recursive descent parser over a normalized token stream.
struct Parser<'a> {
    /// Normalized tokens, starting with the synthetic `(`.
    tokens: &'a [Token],
    /// Normalized source, for error context.
    source: &'a str,
}

impl<'a> Parser<'a> {
    /// Creates a parser over normalized tokens.
    fn new(tokens: &'a [Token], source: &'a str) -> Self {
        Self { tokens, source }
    }

    /// Creates an error at a token position.
    fn error_at(&self, message: impl Into<String>, position: usize) -> FormulaError {
        FormulaError::malformed(message, self.source, position)
    }

    /// Parses the whole token stream into a single expression.
    fn parse(&self) -> Result<Expr, FormulaError> {
        if self.tokens.first() != Some(&Token::LParen) {
            return Err(self.error_at("expected opening parenthesis", 0));
        }

        let (root, end) = self.read_section(0, 0)?;

        if end < self.tokens.len() {
            return Err(self.error_at("unexpected content after closing parenthesis", end));
        }

        root.ok_or_else(|| self.error_at("formula is empty", 0))
    }

    /// Reads the section opened by the `(` at `open`.
    ///
    /// Returns the section's expression (or `None` for an empty section) and the position
    /// just past its closing `)`.
    fn read_section(
        &self,
        open: usize,
        depth: usize,
    ) -> Result<(Option<Expr>, usize), FormulaError> {
        if depth > MAX_DEPTH {
            return Err(self.error_at("parentheses nested too deeply", open));
        }

        let mut frame = Frame::default();
        let mut position = open + 1;

        loop {
            let Some(&token) = self.tokens.get(position) else {
                return Err(self.error_at("unclosed parenthesis", open));
            };

            match token {
                Token::LParen => {
                    let (inner, next) = self.read_section(position, depth + 1)?;
                    if let Some(expr) = inner {
                        frame = self.combine(frame, expr, position)?;
                    }
                    position = next;
                    continue;
                }
                Token::RParen => {
                    return self.close(frame, position).map(|node| (node, position + 1));
                }
                Token::Connective(connective) => {
                    frame = self.push_connective(frame, connective, position)?;
                }
                Token::Not => frame = frame.negate(),
                Token::Variable(index) => {
                    frame = self.combine(frame, Expr::Var(index), position)?;
                }
            }

            position += 1;
        }
    }

    /// Records a connective as pending.
    fn push_connective(
        &self,
        frame: Frame,
        connective: Connective,
        position: usize,
    ) -> Result<Frame, FormulaError> {
        if frame.node.is_none() {
            return Err(self.error_at(format!("'{connective}' has no left operand"), position));
        }
        if let Some(pending) = frame.pending {
            return Err(self.error_at(
                format!("'{connective}' follows '{pending}' without an operand between them"),
                position,
            ));
        }
        Ok(Frame {
            pending: Some(connective),
            ..frame
        })
    }

    /// Combines a freshly produced operand into the frame.
    ///
    /// Applies any pending negation first, then either starts the running expression or joins
    /// it to the running expression with the pending connective.
    fn combine(
        &self,
        frame: Frame,
        operand: Expr,
        position: usize,
    ) -> Result<Frame, FormulaError> {
        let operand = if frame.negated {
            Expr::not(operand)
        } else {
            operand
        };

        let node = match (frame.node, frame.pending) {
            (None, _) => operand,
            (Some(left), Some(connective)) => Expr::binary(connective, left, operand),
            (Some(_), None) => {
                return Err(self.error_at("missing connective between operands", position));
            }
        };

        Ok(Frame {
            pending: None,
            negated: false,
            node: Some(node),
        })
    }

    /// Closes a section at the `)` found at `position`.
    fn close(&self, frame: Frame, position: usize) -> Result<Option<Expr>, FormulaError> {
        if let Some(pending) = frame.pending {
            return Err(self.error_at(format!("'{pending}' has no right operand"), position));
        }
        if frame.negated {
            return Err(self.error_at("negation is not followed by an operand", position));
        }
        Ok(frame.node)
    }
}

/// Parses normalized tokens into an expression tree.
pub fn parse_tokens(tokens: &[Token], source: &str) -> Result<Expr, FormulaError> {
    Parser::new(tokens, source).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::normalize;

    fn parse(input: &str) -> Result<Expr, FormulaError> {
        let normalized = normalize(input);
        parse_tokens(&normalized.tokens, &normalized.source)
    }

    fn var(i: usize) -> Expr {
        Expr::Var(i)
    }

    fn bin(c: Connective, l: Expr, r: Expr) -> Expr {
        Expr::binary(c, l, r)
    }

    fn position_of(err: &FormulaError) -> usize {
        match err {
            FormulaError::Malformed { position, .. } => *position,
            FormulaError::BindingLengthMismatch { .. } => panic!("expected a malformed error"),
        }
    }

    #[test]
    fn single_variable() {
        assert_eq!(parse("X").unwrap(), var(0));
    }

    #[test]
    fn simple_binary() {
        assert_eq!(
            parse("A ^ B").unwrap(),
            bin(Connective::And, var(0), var(1))
        );
    }

    #[test]
    fn left_to_right_without_precedence() {
        // A v B ^ C = (A v B) ^ C
        assert_eq!(
            parse("A v B ^ C").unwrap(),
            bin(
                Connective::And,
                bin(Connective::Or, var(0), var(1)),
                var(2)
            )
        );
    }

    #[test]
    fn grouping_overrides_order() {
        assert_eq!(
            parse("A v (B ^ C)").unwrap(),
            bin(
                Connective::Or,
                var(0),
                bin(Connective::And, var(1), var(2))
            )
        );
    }

    #[test]
    fn negation_applies_to_next_operand() {
        assert_eq!(
            parse("¬A → B").unwrap(),
            bin(Connective::Implies, Expr::not(var(0)), var(1))
        );
    }

    #[test]
    fn negated_group() {
        assert_eq!(
            parse("¬(A ← B)").unwrap(),
            Expr::not(bin(Connective::ReverseImplies, var(0), var(1)))
        );
    }

    #[test]
    fn double_negation_cancels() {
        assert_eq!(parse("¬¬X").unwrap(), var(0));
        assert_eq!(parse("¬¬¬X").unwrap(), Expr::not(var(0)));
    }

    #[test]
    fn negation_state_does_not_leak_into_group() {
        // The pending negation applies to the group as a whole, not to its first operand.
        assert_eq!(
            parse("¬(A ^ B)").unwrap(),
            Expr::not(bin(Connective::And, var(0), var(1)))
        );
        assert_eq!(
            parse("A ^ (¬B) v C").unwrap(),
            bin(
                Connective::Or,
                bin(Connective::And, var(0), Expr::not(var(1))),
                var(2)
            )
        );
    }

    #[test]
    fn repeated_variable_shares_index() {
        assert_eq!(
            parse("X ^ ¬X").unwrap(),
            bin(Connective::And, var(0), Expr::not(var(0)))
        );
    }

    #[test]
    fn empty_group_contributes_nothing() {
        assert_eq!(parse("A ^ () B").unwrap(), bin(Connective::And, var(0), var(1)));
        assert_eq!(parse("(()) A").unwrap(), var(0));
    }

    #[test]
    fn error_chained_connective() {
        let err = parse("A ^ ^ B").unwrap_err();
        assert!(err.is_malformed());
        assert!(err.message().contains("follows"));
        assert_eq!(position_of(&err), 3);
    }

    #[test]
    fn error_unclosed_paren() {
        let err = parse("(A").unwrap_err();
        assert!(err.message().contains("unclosed"));
    }

    #[test]
    fn error_leading_connective() {
        let err = parse("^ A").unwrap_err();
        assert!(err.message().contains("no left operand"));
    }

    #[test]
    fn error_trailing_connective() {
        let err = parse("A v").unwrap_err();
        assert!(err.message().contains("no right operand"));
    }

    #[test]
    fn error_trailing_negation() {
        let err = parse("A ^ B ¬").unwrap_err();
        assert!(err.message().contains("negation"));
    }

    #[test]
    fn error_missing_connective() {
        let err = parse("A B").unwrap_err();
        assert!(err.message().contains("missing connective"));
        let err = parse("(A)(B)").unwrap_err();
        assert!(err.message().contains("missing connective"));
    }

    #[test]
    fn error_content_after_close() {
        let err = parse("A) ^ B").unwrap_err();
        assert!(err.message().contains("after closing"));
    }

    #[test]
    fn error_empty_formula() {
        let err = parse("   ").unwrap_err();
        assert!(err.message().contains("empty"));
        let err = parse("()").unwrap_err();
        assert!(err.message().contains("empty"));
    }

    #[test]
    fn error_excessive_nesting() {
        let input = format!("{}A{}", "(".repeat(MAX_DEPTH + 2), ")".repeat(MAX_DEPTH + 2));
        let err = parse(&input).unwrap_err();
        assert!(err.message().contains("nested too deeply"));
    }

    #[test]
    fn moderate_nesting_is_fine() {
        let input = format!("{}A{}", "(".repeat(64), ")".repeat(64));
        assert_eq!(parse(&input).unwrap(), var(0));
    }
}
