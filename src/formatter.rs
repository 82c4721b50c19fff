//! Pretty printer for parsed documents.
//!
//! Walks the node tree and produces an indented multi-line rendering, one
//! added tab per nesting level. Dispatch over node variants is plain pattern
//! matching; the variant set is closed and small.

use crate::{
    error::{ParseError, ParseErrorKind, Result, SemanticError},
    parser::{Document, Element, Node},
};

/// Renders a document tree as tab-indented multi-line markup
pub struct XmlFormatter;

impl XmlFormatter {
    /// Formats a whole document by joining the root node's line sequence
    /// with newlines.
    ///
    /// # Errors
    /// Returns [`SemanticError::EmptyDocument`] when the document has no
    /// root; an empty document never silently renders as empty output.
    pub fn format(&self, document: &Document) -> Result<String> {
        let root = document.root().ok_or_else(|| {
            ParseError::new(ParseErrorKind::Semantic(SemanticError::EmptyDocument))
        })?;
        Ok(Self::node_lines(root).join("\n"))
    }

    /// One entry per output line. Indentation of child lines is applied by
    /// the parent when splicing them in.
    fn node_lines(node: &Node) -> Vec<String> {
        match node {
            Node::Text(text) => vec![text.clone()],
            Node::Element(element) => Self::element_lines(element),
        }
    }

    fn element_lines(element: &Element) -> Vec<String> {
        // A childless element collapses to a single line with its inline
        // text; one with children renders the nested form and ignores any
        // directly-set text.
        if element.children().is_empty() {
            return vec![format!(
                "{}{}{}",
                Self::start_tag(element),
                element.text(),
                Self::end_tag(element)
            )];
        }

        let mut lines = vec![Self::start_tag(element)];
        for child in element.children() {
            lines.extend(
                Self::node_lines(child)
                    .into_iter()
                    .map(|line| format!("\t{}", line)),
            );
        }
        lines.push(Self::end_tag(element));
        lines
    }

    /// Always one space between the name and the attribute block, even when
    /// there are no attributes.
    fn start_tag(element: &Element) -> String {
        let attributes = element
            .attributes()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        format!("<{}{} {}>", element.prefix(), element.name(), attributes)
    }

    fn end_tag(element: &Element) -> String {
        format!("</{}{}>", element.prefix(), element.name())
    }
}
