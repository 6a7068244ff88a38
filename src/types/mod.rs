//! All data types for the textgraph library.

pub mod edge;
pub mod error;
pub mod graph_type;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult, ParseError};
pub use graph_type::GraphType;
pub use vertex::{Vertex, VertexId};

/// Line separator used when writing graph files.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Line separator used when writing graph files.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";
