use std::fmt;

/// One lexical unit of the input: a whole tag marker or a run of character
/// data between tags.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A tag marker, `<...>`
    Tag(String),
    /// A run of character data containing no `<`
    Text(String),
}

impl Token {
    /// The trimmed source text of the token.
    pub fn raw(&self) -> &str {
        match self {
            Self::Tag(raw) | Self::Text(raw) => raw,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}
