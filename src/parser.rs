pub mod config;
pub mod node;
pub mod token;
pub mod tokenizer;
pub mod xml;

pub use config::ParserConfig;
pub use node::{Attribute, Document, Element, Node};
pub use token::Token;
pub use tokenizer::Tokenizer;
pub use xml::XmlParser;
