//! zxml: a parser and pretty printer for a small XML subset
//!
//! This crate provides functionality to:
//! - Parse markup documents into an owned node tree
//! - Pretty print parsed trees with tab indentation
//! - Save rendered documents to disk
//! - Handle errors with detailed context
//!
//! The supported subset covers elements with optional namespace prefixes,
//! key/value attributes, nested children, self-closing tags and plain text
//! content. Comments, CDATA, processing instructions, entity decoding and
//! namespace resolution are out of scope.
//!
//! # Examples
//! ```
//! use zxml::{parse_file, Result};
//!
//! fn example() -> Result<()> {
//!     let document = parse_file("feed.xml")?;
//!     println!("{}", document.render()?);
//!     Ok(())
//! }
//! ```

use tracing::{debug, info, instrument};

pub mod error;
pub mod formatter;
pub mod parser;
pub mod test_utils;
pub mod utils;

// Re-exports
pub use error::{ParseError, ParseErrorKind, Result};
pub use formatter::XmlFormatter;
pub use parser::{Document, Element, Node, XmlParser};
use utils::parse_xml;

#[instrument]
pub fn parse_file(path: &str) -> Result<Document> {
    debug!("Starting to parse file: {}", path);

    let content = utils::read_file(path)?;

    info!("File read successfully");

    let document = parse_xml(&content)?;

    debug!("Parsing completed");
    Ok(document)
}
