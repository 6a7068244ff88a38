//! Writes an in-memory graph as set-notation text.

use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::LINE_ENDING;

/// Writer for set-notation graph files.
pub struct GraphWriter;

impl GraphWriter {
    /// Write a graph to a file, creating or truncating it.
    pub fn write_to_file(graph: &Graph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path).map_err(|source| GraphError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer).map_err(|e| match e {
            GraphError::Io(source) => GraphError::FileAccess {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        debug!(
            "wrote {} vertices and {} edges to {}",
            graph.vertex_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(())
    }

    /// Write a graph to any writer.
    ///
    /// The two lines are separated by the platform line ending; there is no
    /// trailing newline.
    pub fn write_to(graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        write!(
            writer,
            "V = {{{}}}{}E = {{{}}}",
            join_elements(graph.vertices()),
            LINE_ENDING,
            join_elements(graph.edges())
        )?;
        writer.flush()?;
        Ok(())
    }
}

/// Render elements separated by `", "`.
pub(crate) fn join_elements<T: Display>(elements: &[T]) -> String {
    elements
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
