//! Helpers shared by the integration test suites.

use std::{env, fs, path::PathBuf};

/// Path for a throwaway file under the system temp directory.
pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("zxml_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

// Re-export common test types
pub use crate::{
    error::{
        IOError, ParseError, ParseErrorKind, Result, SecurityError, SemanticError, SyntaxError,
    },
    formatter::XmlFormatter,
    parse_file,
    parser::{
        config::{ParserConfig, DEFAULT_MAX_DEPTH},
        Attribute, Document, Element, Node, Token, Tokenizer, XmlParser,
    },
    utils::{format_xml, parse_xml, read_file, write_file},
};
