//! Fluent API for building Graph instances.

use crate::types::{Edge, Vertex, VertexId};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Every element goes through the graph's own `add_*` methods, so the
/// usual deduplication applies in call order.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Create a new builder for an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex with a value of 0.
    pub fn vertex(&mut self, id: VertexId) -> &mut Self {
        self.graph.add_vertex(Vertex::new(id));
        self
    }

    /// Add a vertex with a value.
    pub fn vertex_with_value(&mut self, id: VertexId, value: i32) -> &mut Self {
        self.graph.add_vertex(Vertex::with_value(id, value));
        self
    }

    /// Add a directed edge `(origin, destination)`.
    pub fn directed(&mut self, origin: VertexId, destination: VertexId) -> &mut Self {
        self.graph.add_edge(Edge::directed(origin, destination));
        self
    }

    /// Add an undirected edge `[a, b]`.
    pub fn undirected(&mut self, a: VertexId, b: VertexId) -> &mut Self {
        self.graph.add_edge(Edge::undirected(a, b));
        self
    }

    /// Build the final Graph.
    pub fn build(&mut self) -> Graph {
        std::mem::take(&mut self.graph)
    }
}
