//! Error handling types for the parser
//!
//! This module provides custom error types that give detailed information about
//! parsing, rendering and file access failures.

use std::{error::Error, fmt};

/// Main error type for parsing and rendering operations
#[derive(Debug)]
pub struct ParseError {
    /// The specific kind of error
    kind: ParseErrorKind,
    /// Source error that caused this error
    source: Option<Box<dyn Error>>,
}

/// Top-level error categories
#[derive(Debug, Clone)]
pub enum ParseErrorKind {
    IO(IOError),
    Security(SecurityError),
    Semantic(SemanticError),
    Syntax(SyntaxError),
}

/// Tag syntax errors
#[derive(Debug, Clone)]
pub enum SyntaxError {
    /// Opening tag whose name could not be extracted
    MalformedTag(String),
}

/// Limits that protect the parser from hostile input
#[derive(Debug, Clone)]
pub enum SecurityError {
    /// Exceeded maximum depth of nesting
    MaxDepthExceeded,
}

/// Errors about the shape of a document rather than its syntax
#[derive(Debug, Clone)]
pub enum SemanticError {
    /// The document has no root node to render
    EmptyDocument,
}

/// IO operation errors
#[derive(Debug, Clone)]
pub enum IOError {
    /// File not found
    FileNotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// Error reading from a file
    ReadError(String),
    /// Error writing to a file
    WriteError(String),
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self { kind, source: None }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::IO(err) => write!(f, "{}", err),
            ParseErrorKind::Security(err) => write!(f, "{}", err),
            ParseErrorKind::Semantic(err) => write!(f, "{}", err),
            ParseErrorKind::Syntax(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTag(tag) => write!(f, "Malformed tag: {}", tag),
        }
    }
}

impl fmt::Display for SecurityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDepthExceeded => write!(f, "Maximum nesting depth exceeded"),
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDocument => write!(f, "Document has no root node"),
        }
    }
}

impl fmt::Display for IOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path),
            Self::PermissionDenied(path) => write!(f, "Permission denied: {}", path),
            Self::ReadError(msg) => write!(f, "Error reading file: {}", msg),
            Self::WriteError(msg) => write!(f, "Error writing file: {}", msg),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(Box::as_ref)
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
