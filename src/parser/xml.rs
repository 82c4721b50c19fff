// parser/xml.rs
//! Markup parser implementation.
//!
//! This module provides a recursive descent parser over the token stream
//! that:
//! - Builds an owned document tree in a single forward pass
//! - Never looks ahead further than the current token
//! - Bounds nesting depth instead of overflowing the call stack
//!
//! Closing tags are taken purely as "end of the current children list"; their
//! name is never checked against the tag that opened the scope. Mismatched or
//! missing closing tags therefore produce a structurally different tree, not
//! an error.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{
    config::{ParserConfig, ParsingContext},
    node::{Document, Element, Node},
    token::Token,
    tokenizer::Tokenizer,
};
use crate::error::{ParseError, ParseErrorKind, Result, SyntaxError};

/// Captures the optional repeated `word:` prefix (last repetition wins) and
/// the required local name of an opening tag.
#[allow(clippy::unwrap_used)]
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<(\w+:)*(\w[-\w]*)").unwrap());

/// Captures `name="value"` pairs anywhere in a tag token. Quotes around the
/// value are optional and consumed when present; values may contain word
/// characters, whitespace, colons, hyphens, periods and percent signs.
#[allow(clippy::unwrap_used)]
static ATTRIBUTE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\w[-\w]*)="*([\w\s:.%-]+)"*"#).unwrap());

/// Parser for markup documents
pub struct XmlParser {
    /// Tokenizer that provides tokens
    tokenizer: Tokenizer,
    /// Limits applied while parsing
    config: ParserConfig,
    /// Nesting depth bookkeeping
    context: ParsingContext,
}

impl XmlParser {
    /// Creates a new parser for the given input
    pub fn new(input: &str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    /// Creates a parser with explicit limits
    pub fn with_config(input: &str, config: ParserConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(input),
            config,
            context: ParsingContext::new(),
        }
    }

    /// Number of tokens the parser has not consumed yet.
    pub fn tokens_remaining(&self) -> usize {
        self.tokenizer.remaining()
    }

    /// Parses a complete document.
    ///
    /// The first top-level node becomes the document root; empty input
    /// produces a document without one. Anything after the first top-level
    /// node is left unconsumed.
    pub fn parse(&mut self) -> Result<Document> {
        let mut document = Document::new();
        if let Some(root) = self.parse_element()? {
            document.set_root(root);
        }
        Ok(document)
    }

    /// Parses one node. Returns `None` at a closing tag or at the end of the
    /// token stream, which is how a children-parsing loop detects the end of
    /// its parent's scope.
    fn parse_element(&mut self) -> Result<Option<Node>> {
        let Some(token) = self.tokenizer.next_token() else {
            return Ok(None);
        };

        let raw = match token {
            Token::Text(text) => return Ok(Some(Node::Text(text))),
            Token::Tag(raw) => raw,
        };

        if raw.starts_with("</") {
            return Ok(None);
        }

        let captures = NAME_PATTERN.captures(&raw).ok_or_else(|| {
            ParseError::new(ParseErrorKind::Syntax(SyntaxError::MalformedTag(
                raw.clone(),
            )))
        })?;

        let name = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
        let mut element = Element::new(name);
        element.set_prefix(captures.get(1).map(|m| m.as_str()));

        for capture in ATTRIBUTE_PATTERN.captures_iter(&raw) {
            let name = capture.get(1).map(|m| m.as_str()).unwrap_or_default();
            let value = capture.get(2).map(|m| m.as_str()).unwrap_or_default();
            element.add_attribute(name, value);
        }

        if raw.ends_with("/>") {
            return Ok(Some(Node::Element(element)));
        }

        self.parse_children(&mut element)?;
        Ok(Some(Node::Element(element)))
    }

    /// Appends parsed nodes to `element` until a closing tag or the end of
    /// the stream. Terminates because the token cursor strictly advances on
    /// every call.
    fn parse_children(&mut self, element: &mut Element) -> Result<()> {
        self.context.enter_nested(&self.config)?;
        while let Some(child) = self.parse_element()? {
            element.add_child(child);
        }
        self.context.exit_nested();
        Ok(())
    }
}
