//! Query tokenizer.
//!
//! Splits a search string on spaces. A double-quoted span keeps its spaces, and a backslash
//! makes the next character literal (a quote, a space, or another backslash). Quotes may open
//! and close anywhere inside a token, so `"tit"le` reads as `title`.

use std::{iter::Peekable, str::Chars};

/// Splits search text into tokens.
struct Lexer<'a> {
    /// Character iterator with one-character lookahead.
    chars: Peekable<Chars<'a>>,
    /// Whether we are inside a double-quoted span.
    in_quote: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            in_quote: false,
        }
    }

    /// Tokenizes the entire input.
    fn tokenize(mut self) -> Vec<String> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token() {
            tokens.push(token);
        }

        tokens
    }

    /// Returns the next token, or None at end of input.
    fn next_token(&mut self) -> Option<String> {
        self.skip_spaces();
        self.chars.peek()?;

        let mut token = String::new();
        while let Some(ch) = self.chars.next() {
            match ch {
                '\\' => {
                    // A trailing lone backslash is dropped.
                    if let Some(escaped) = self.chars.next() {
                        token.push(escaped);
                    }
                }
                '"' => self.in_quote = !self.in_quote,
                ' ' if !self.in_quote => break,
                _ => token.push(ch),
            }
        }

        Some(token)
    }

    /// Skips unquoted spaces between tokens.
    fn skip_spaces(&mut self) {
        while self.chars.next_if_eq(&' ').is_some() {}
    }
}

/// Tokenizes a search string.
///
/// Runs of unquoted spaces separate tokens and never produce empty tokens. A quoted empty
/// string `""` produces an empty token. An unterminated quote extends to the end of input.
///
/// # Examples
///
/// ```
/// use mcat_query::tokenize;
///
/// assert_eq!(
///     tokenize(r#"title contains "star wars" & rating > 3"#),
///     vec!["title", "contains", "star wars", "&", "rating", ">", "3"]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<String> {
    Lexer::new(input).tokenize()
}
