//! textgraph — an in-memory graph of integer-keyed vertices and mixed
//! directed/undirected edges, with a plain-text set notation format.
//!
//! Vertices are unique by id, edges are unique by their kind-specific
//! equality, and removing a vertex removes every edge touching it.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{substrings_between, GraphFormat, GraphReader, GraphWriter};
pub use graph::{Graph, GraphBuilder};
pub use types::{
    Edge, GraphError, GraphResult, GraphType, ParseError, Vertex, VertexId, LINE_ENDING,
};
