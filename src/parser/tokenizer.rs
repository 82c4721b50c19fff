//! Splits raw markup text into a flat token stream.

use once_cell::sync::Lazy;
use regex::Regex;

use super::token::Token;

/// Matches either a whole tag (from `<` up to and including the next `>`) or
/// a maximal run of character data containing no `<`. A `>` inside an
/// attribute value ends the tag token early; the syntax subset has no
/// escaping.
#[allow(clippy::unwrap_used)]
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>|[^<]+").unwrap());

/// Eagerly tokenized input with a single-consumer cursor over the sequence.
#[derive(Debug)]
pub struct Tokenizer {
    tokens: Vec<Token>,
    position: usize,
}

impl Tokenizer {
    pub fn new(input: &str) -> Self {
        Self {
            tokens: Self::tokenize(input),
            position: 0,
        }
    }

    /// Scans the input in source order. Every match is trimmed; matches that
    /// are empty after trimming are dropped.
    fn tokenize(input: &str) -> Vec<Token> {
        TOKEN_PATTERN
            .find_iter(input)
            .filter_map(|matched| {
                let text = matched.as_str().trim();
                if text.is_empty() {
                    None
                } else if text.starts_with('<') {
                    Some(Token::Tag(text.to_string()))
                } else {
                    Some(Token::Text(text.to_string()))
                }
            })
            .collect()
    }

    /// Returns the token under the cursor and advances, or `None` once the
    /// stream is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the next token to be handed out.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of tokens not yet handed out.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }
}
