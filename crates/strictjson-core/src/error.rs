//! Error types for value access and parsing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the value model and, through [`JsonError::Parse`], by the parser.
#[derive(Error, Debug)]
pub enum JsonError {
    /// An accessor or mutator was invoked on a node of the wrong variant
    /// (e.g. `keys()` on an array).
    #[error("unexpected type: {0}")]
    UnexpectedType(String),

    /// A missing object key, or an array index past the end.
    #[error("unexpected key: {0}")]
    UnexpectedKey(String),

    /// The input text could not be turned into a node.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl JsonError {
    /// Returns the parse error if this is one.
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            JsonError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors produced while tokenizing or structurally parsing JSON text.
///
/// `offset` fields are byte offsets into the input: the start of the offending
/// token, or the input length when the input ran out.
#[derive(Error, Debug)]
pub enum ParseError {
    /// An invariant of the parser itself was violated.
    #[error("internal parser error: {0}")]
    Internal(String),

    #[error("unexpected end of input at offset {offset}: {message}")]
    UnexpectedEof { message: String, offset: usize },

    #[error("unexpected {found} at offset {offset}: {message}")]
    UnexpectedChar {
        message: String,
        found: String,
        offset: usize,
    },

    #[error("cannot parse number '{literal}' at offset {offset}")]
    CannotParseNumber { literal: String, offset: usize },

    #[error("cannot read file '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("duplicated key '{key}' at offset {offset}")]
    DuplicatedKey { key: String, offset: usize },
}

/// Convenience alias used throughout strictjson-core.
pub type Result<T> = std::result::Result<T, JsonError>;
