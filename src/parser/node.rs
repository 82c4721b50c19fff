//! Tree data model produced by the parser.
//!
//! A document owns at most one root [`Node`]; the tree is strictly acyclic
//! with no parent pointers, so traversal is top-down only.

use std::fmt;

use indexmap::IndexMap;

use crate::error::Result;
use crate::formatter::XmlFormatter;
use crate::utils::write_file;

/// A single `name="value"` pair owned by an element
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

/// A node in the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Character data; a leaf with no children or attributes
    Text(String),
    /// A named element with attributes and children
    Element(Element),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }
}

/// A named element with attributes, children and optional inline text
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    prefix: String,
    attributes: IndexMap<String, Attribute>,
    children: Vec<Node>,
    text: String,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: String::new(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The syntactic namespace prefix including its trailing colon, or the
    /// empty string when the element has none. The prefix is retained, not
    /// resolved.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Applies a fresh prefix only when one is supplied; `None` preserves
    /// any previously set value.
    pub fn set_prefix(&mut self, prefix: Option<&str>) {
        if let Some(prefix) = prefix {
            self.prefix = prefix.to_string();
        }
    }

    /// Inserts or overwrites an attribute. A duplicate name overwrites the
    /// value but keeps the original position in the output order.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let attribute = Attribute::new(name.clone(), value);
        self.attributes.insert(name, attribute);
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|attribute| attribute.value.as_str())
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Appends a child; children keep their insertion order.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Inline text content. Only rendered for elements without children.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Owns the root of a parsed tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Option<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_root(&mut self, root: Node) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Pretty-prints the tree.
    ///
    /// # Errors
    /// A document without a root node does not render; see
    /// [`XmlFormatter::format`].
    pub fn render(&self) -> Result<String> {
        XmlFormatter.format(self)
    }

    /// Renders the document and writes it to `path`.
    pub fn save(&self, path: &str) -> Result<()> {
        let rendered = self.render()?;
        write_file(path, &rendered)
    }
}
