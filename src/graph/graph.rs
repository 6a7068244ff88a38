//! Core graph structure — a vertex arena plus an edge list.

use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::format::{writer::join_elements, GraphFormat, GraphReader, GraphWriter};
use crate::types::{Edge, GraphError, GraphResult, GraphType, Vertex, VertexId};

/// An in-memory graph of unique vertices and unique edges.
///
/// Vertices live in an insertion-ordered arena and are the only place a
/// vertex value is stored. Edges refer to vertices by id. Every edge
/// endpoint is present in the arena, and removing a vertex removes every
/// edge touching it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    /// All vertices, in insertion order, unique by id.
    vertices: Vec<Vertex>,
    /// All edges, in insertion order, unique by edge equality.
    edges: Vec<Edge>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph holding the given vertices, duplicates dropped.
    pub fn from_vertices(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        let mut graph = Self::new();
        graph.add_vertices(vertices);
        graph
    }

    /// Create a graph holding the given edges and their endpoints.
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut graph = Self::new();
        graph.add_edges(edges);
        graph
    }

    /// Read a graph from a set-notation file.
    pub fn from_file(path: impl AsRef<Path>) -> GraphResult<Self> {
        GraphReader::read_from_file(path.as_ref(), GraphFormat::SetNotation)
    }

    /// Read a graph from a file in the given format.
    pub fn from_file_as(path: impl AsRef<Path>, format: GraphFormat) -> GraphResult<Self> {
        GraphReader::read_from_file(path.as_ref(), format)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get the vertex at `index`.
    pub fn vertex(&self, index: usize) -> GraphResult<&Vertex> {
        let len = self.vertices.len();
        self.vertices
            .get(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    /// Get the vertex at `index` (mutable, for updating its value).
    pub fn vertex_mut(&mut self, index: usize) -> GraphResult<&mut Vertex> {
        let len = self.vertices.len();
        self.vertices
            .get_mut(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    /// Get the edge at `index`.
    pub fn edge(&self, index: usize) -> GraphResult<&Edge> {
        let len = self.edges.len();
        self.edges
            .get(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    /// Find a vertex by id.
    pub fn vertex_with_id(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id() == id)
    }

    /// Find a vertex by id (mutable).
    pub fn vertex_with_id_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.iter_mut().find(|v| v.id() == id)
    }

    /// Get all vertices (immutable slice).
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get all edges (immutable slice).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Add a vertex unless one with the same id is already stored.
    ///
    /// Returns `true` if the vertex was inserted. A rejected duplicate does
    /// not overwrite the stored vertex's value.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.vertices.contains(&vertex) {
            debug!("vertex {} already stored", vertex);
            return false;
        }
        self.vertices.push(vertex);
        true
    }

    /// Add an edge unless an equal edge is already stored.
    ///
    /// Missing endpoints are added as vertices with a value of 0; endpoints
    /// already stored keep their value. Returns `true` if the edge was
    /// inserted.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if self.edges.contains(&edge) {
            debug!("edge {} already stored", edge);
            return false;
        }
        self.edges.push(edge);
        for id in edge.vertices() {
            self.add_vertex(Vertex::new(id));
        }
        true
    }

    /// Add several vertices in order. Returns how many were inserted.
    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = Vertex>) -> usize {
        vertices
            .into_iter()
            .filter(|&vertex| self.add_vertex(vertex))
            .count()
    }

    /// Add several edges in order. Returns how many were inserted.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge>) -> usize {
        edges
            .into_iter()
            .filter(|&edge| self.add_edge(edge))
            .count()
    }

    /// Remove the edge at `index`.
    pub fn remove_edge(&mut self, index: usize) -> GraphResult<Edge> {
        let len = self.edges.len();
        if index >= len {
            return Err(GraphError::IndexOutOfRange { index, len });
        }
        Ok(self.edges.remove(index))
    }

    /// Remove the vertex at `index` and every edge touching it.
    pub fn remove_vertex(&mut self, index: usize) -> GraphResult<Vertex> {
        let len = self.vertices.len();
        if index >= len {
            return Err(GraphError::IndexOutOfRange { index, len });
        }
        let id = self.vertices[index].id();

        let edges_before = self.edges.len();
        self.edges.retain(|e| !e.contains(id));
        debug!(
            "removing vertex {} drops {} edge(s)",
            id,
            edges_before - self.edges.len()
        );

        Ok(self.vertices.remove(index))
    }

    /// Classify the graph by the kinds of edges it holds.
    pub fn graph_type(&self) -> GraphType {
        self.edges
            .iter()
            .fold(GraphType::Unknown, |kind, e| kind.with_edge(e.is_directed()))
    }

    /// Replace this graph's content with a set-notation file.
    ///
    /// On failure the graph is left unchanged.
    pub fn read_from_file(&mut self, path: impl AsRef<Path>) -> GraphResult<()> {
        self.read_from_file_as(path, GraphFormat::SetNotation)
    }

    /// Replace this graph's content with a file in the given format.
    pub fn read_from_file_as(
        &mut self,
        path: impl AsRef<Path>,
        format: GraphFormat,
    ) -> GraphResult<()> {
        *self = GraphReader::read_from_file(path.as_ref(), format)?;
        Ok(())
    }

    /// Write this graph to a file in set notation.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> GraphResult<()> {
        GraphWriter::write_to_file(self, path.as_ref())
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "V = {{{}}}\nE = {{{}}}",
            join_elements(&self.vertices),
            join_elements(&self.edges)
        )
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GraphReader::parse_set_notation(s)?)
    }
}
