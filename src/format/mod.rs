//! Plain-text graph file I/O.

pub mod reader;
pub mod text;
pub mod writer;

pub use reader::GraphReader;
pub use text::substrings_between;
pub use writer::GraphWriter;

/// Text encodings a graph can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphFormat {
    /// Two lines, `V = {1, 2}` then `E = {[1, 2], (2, 1)}`. Also the only
    /// format written.
    #[default]
    SetNotation,
    /// Whitespace-separated id pairs, each an undirected edge.
    PairStream,
}

impl GraphFormat {
    /// Return a short name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetNotation => "sets",
            Self::PairStream => "pairs",
        }
    }

    /// Parse a format from its short name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "sets" | "set" | "set_notation" => Some(Self::SetNotation),
            "pairs" | "pair" | "pair_stream" => Some(Self::PairStream),
            _ => None,
        }
    }
}

impl std::fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
