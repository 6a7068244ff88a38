//! Error types for the textgraph library.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use super::vertex::VertexId;

/// All errors that can occur in the textgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Positional access or removal outside `[0, len)`.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// No vertex with this id is stored.
    #[error("Vertex ID {0} not found")]
    VertexNotFound(VertexId),

    /// The file to read does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The file could not be read or created.
    #[error("Cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A set-notation file whose structure could not be parsed.
    #[error("\"{}\" is not a graph file", .path.display())]
    MalformedGraphFile {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// Set-notation text (not backed by a file) could not be parsed.
    #[error("Not a graph: {0}")]
    Parse(#[from] ParseError),

    /// A pair-stream token is not an integer.
    #[error("Invalid integer: {0}")]
    InvalidInteger(#[from] ParseIntError),

    /// A pair stream ended in the middle of a pair, or held no pair at all.
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Map an IO error on `path` to `FileNotFound` or `FileAccess`.
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileAccess {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Structural problems found in set-notation text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The vertex or edge line is absent.
    #[error("missing {0} line")]
    MissingLine(&'static str),

    /// A line does not start with its `X = {` prefix or end with `}`.
    #[error("{0} line is not wrapped in `{1} = {{...}}`")]
    MissingWrapper(&'static str, char),

    /// Opening and closing brackets of one kind do not pair up.
    #[error("unbalanced `{0}` brackets")]
    UnbalancedBrackets(char),

    /// A vertex id is not an integer.
    #[error("invalid vertex id {0:?}")]
    InvalidId(String),

    /// Edge set text that is neither a bracket literal nor a `", "` separator.
    #[error("unexpected text {0:?} in edge set")]
    UnexpectedText(String),

    /// An edge literal is not two comma-separated ids.
    #[error("invalid edge pair {0:?}")]
    InvalidPair(String),
}

/// Convenience result type for textgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
