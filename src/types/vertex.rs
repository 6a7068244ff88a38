//! The vertex struct.

use std::hash::{Hash, Hasher};

use serde::Serialize;

/// Integer key identifying a vertex.
pub type VertexId = i32;

/// A graph vertex: an id plus an integer payload.
///
/// Identity is the id alone. Two vertices with the same id and different
/// values compare equal, which is what lets a [`Graph`](crate::Graph)
/// deduplicate by id.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Vertex {
    id: VertexId,
    value: i32,
}

impl Vertex {
    /// Create a vertex with a value of 0.
    pub fn new(id: VertexId) -> Self {
        Self { id, value: 0 }
    }

    /// Create a vertex with an explicit value.
    pub fn with_value(id: VertexId, value: i32) -> Self {
        Self { id, value }
    }

    /// The vertex id.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The payload value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Replace the payload value. The id is untouched.
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<VertexId> for Vertex {
    fn from(id: VertexId) -> Self {
        Self::new(id)
    }
}

impl From<Vertex> for VertexId {
    fn from(vertex: Vertex) -> Self {
        vertex.id
    }
}

impl From<&Vertex> for VertexId {
    fn from(vertex: &Vertex) -> Self {
        vertex.id
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
