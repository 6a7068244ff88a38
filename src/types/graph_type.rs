//! Classification of a graph by the kinds of edges it holds.

use serde::Serialize;

/// The kind of graph, determined from its edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphType {
    /// No edges.
    Unknown,
    /// Only undirected edges.
    Undirected,
    /// Both directed and undirected edges.
    Mixed,
    /// Only directed edges.
    Directed,
}

impl GraphType {
    /// Fold one more edge's directedness into the classification.
    pub fn with_edge(self, directed: bool) -> Self {
        match (self, directed) {
            (Self::Unknown | Self::Directed, true) => Self::Directed,
            (Self::Unknown | Self::Undirected, false) => Self::Undirected,
            _ => Self::Mixed,
        }
    }

    /// Return a human-readable name for this graph type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Undirected => "undirected",
            Self::Mixed => "mixed",
            Self::Directed => "directed",
        }
    }
}

impl std::fmt::Display for GraphType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
