//! Edge kinds and the core edge enum.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::vertex::VertexId;

/// A relationship between two vertices, referenced by id.
///
/// The two kinds share one collection inside a graph but never compare
/// equal to each other, whatever their endpoints.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Edge {
    /// Ordered pair, rendered `(origin, destination)`.
    Directed {
        origin: VertexId,
        destination: VertexId,
    },
    /// Unordered pair, rendered `[a, b]`.
    Undirected { a: VertexId, b: VertexId },
}

impl Edge {
    /// Create a directed edge from `origin` to `destination`.
    ///
    /// Endpoints may be ids or `&Vertex`; only the id is kept, so a vertex
    /// value does not travel with the edge. Add the vertex to the graph
    /// first to keep its value.
    pub fn directed(origin: impl Into<VertexId>, destination: impl Into<VertexId>) -> Self {
        Self::Directed {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Create an undirected edge between `a` and `b`.
    ///
    /// As with [`Edge::directed`], only the endpoint ids are kept.
    pub fn undirected(a: impl Into<VertexId>, b: impl Into<VertexId>) -> Self {
        Self::Undirected {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Both endpoints, in construction order.
    pub fn vertices(&self) -> [VertexId; 2] {
        match *self {
            Self::Directed {
                origin,
                destination,
            } => [origin, destination],
            Self::Undirected { a, b } => [a, b],
        }
    }

    /// Whether this edge has a direction.
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed { .. })
    }

    /// Origin of a directed edge.
    pub fn origin(&self) -> Option<VertexId> {
        match *self {
            Self::Directed { origin, .. } => Some(origin),
            Self::Undirected { .. } => None,
        }
    }

    /// Destination of a directed edge.
    pub fn destination(&self) -> Option<VertexId> {
        match *self {
            Self::Directed { destination, .. } => Some(destination),
            Self::Undirected { .. } => None,
        }
    }

    /// Whether `id` is one of the two endpoints.
    pub fn contains(&self, id: impl Into<VertexId>) -> bool {
        let id = id.into();
        let [first, second] = self.vertices();
        first == id || second == id
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (
                Self::Directed {
                    origin,
                    destination,
                },
                Self::Directed {
                    origin: other_origin,
                    destination: other_destination,
                },
            ) => origin == other_origin && destination == other_destination,
            (Self::Undirected { a, b }, Self::Undirected { a: c, b: d }) => {
                (a == c && b == d) || (a == d && b == c)
            }
            _ => false,
        }
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_directed().hash(state);
        match *self {
            Self::Directed {
                origin,
                destination,
            } => (origin, destination).hash(state),
            // Normalized so that [a, b] and [b, a] hash alike.
            Self::Undirected { a, b } => (a.min(b), a.max(b)).hash(state),
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directed {
                origin,
                destination,
            } => write!(f, "({}, {})", origin, destination),
            Self::Undirected { a, b } => write!(f, "[{}, {}]", a, b),
        }
    }
}
