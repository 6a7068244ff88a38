//! In-memory graph — the core data structure.

pub mod builder;
#[allow(clippy::module_inception)]
pub mod graph;

pub use builder::GraphBuilder;
pub use graph::Graph;
