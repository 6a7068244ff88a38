//! CLI command implementations.

use std::path::Path;

use crate::format::GraphFormat;
use crate::graph::Graph;
use crate::types::{Edge, GraphError, GraphResult, Vertex, VertexId};

/// Create a new empty graph file.
pub fn cmd_create(path: &Path) -> GraphResult<()> {
    Graph::new().write_to_file(path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Print a graph file in canonical set notation.
pub fn cmd_show(path: &Path, format: GraphFormat) -> GraphResult<()> {
    let graph = Graph::from_file_as(path, format)?;
    println!("{}", graph);
    Ok(())
}

/// Display information about a graph file.
pub fn cmd_info(path: &Path, format: GraphFormat, json: bool) -> GraphResult<()> {
    let graph = Graph::from_file_as(path, format)?;
    let file_size = std::fs::metadata(path)
        .map_err(|e| GraphError::from_io(path, e))?
        .len();
    let directed = graph.edges().iter().filter(|e| e.is_directed()).count();
    let undirected = graph.edge_count() - directed;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "format": format.name(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "directed_edges": directed,
            "undirected_edges": undirected,
            "type": graph.graph_type(),
            "file_size": file_size,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Format: {}", format);
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("  Directed: {}", directed);
        println!("  Undirected: {}", undirected);
        println!("Type: {}", graph.graph_type());
        println!("File size: {} B", file_size);
    }
    Ok(())
}

/// Read a graph in any format and write it out in set notation.
pub fn cmd_convert(input: &Path, format: GraphFormat, output: &Path) -> GraphResult<()> {
    let graph = Graph::from_file_as(input, format)?;
    graph.write_to_file(output)?;
    println!(
        "Converted {} ({}) to {}: {} vertices, {} edges",
        input.display(),
        format,
        output.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(())
}

/// Add a vertex to a graph file.
pub fn cmd_add_vertex(path: &Path, id: VertexId, json: bool) -> GraphResult<()> {
    let mut graph = Graph::from_file(path)?;
    let added = graph.add_vertex(Vertex::new(id));
    graph.write_to_file(path)?;

    if json {
        println!("{}", serde_json::json!({"id": id, "added": added}));
    } else if added {
        println!("Added vertex {} to {}", id, path.display());
    } else {
        println!("Vertex {} already in {}", id, path.display());
    }
    Ok(())
}

/// Add an edge (and any missing endpoints) to a graph file.
pub fn cmd_add_edge(
    path: &Path,
    a: VertexId,
    b: VertexId,
    directed: bool,
    json: bool,
) -> GraphResult<()> {
    let mut graph = Graph::from_file(path)?;
    let edge = if directed {
        Edge::directed(a, b)
    } else {
        Edge::undirected(a, b)
    };
    let added = graph.add_edge(edge);
    graph.write_to_file(path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"edge": edge.to_string(), "added": added})
        );
    } else if added {
        println!("Added edge {} to {}", edge, path.display());
    } else {
        println!("Edge {} already in {}", edge, path.display());
    }
    Ok(())
}

/// Remove the vertex at an index, together with its edges.
pub fn cmd_remove_vertex(path: &Path, index: usize, json: bool) -> GraphResult<()> {
    let mut graph = Graph::from_file(path)?;
    let edges_before = graph.edge_count();
    let removed = graph.remove_vertex(index)?;
    let dropped = edges_before - graph.edge_count();
    graph.write_to_file(path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"id": removed.id(), "edges_removed": dropped})
        );
    } else {
        println!("Removed vertex {} and {} edge(s)", removed, dropped);
    }
    Ok(())
}

/// Remove the edge at an index.
pub fn cmd_remove_edge(path: &Path, index: usize, json: bool) -> GraphResult<()> {
    let mut graph = Graph::from_file(path)?;
    let removed = graph.remove_edge(index)?;
    graph.write_to_file(path)?;

    if json {
        println!("{}", serde_json::json!({"edge": removed.to_string()}));
    } else {
        println!("Removed edge {}", removed);
    }
    Ok(())
}

/// Look up a vertex by id.
pub fn cmd_get(path: &Path, format: GraphFormat, id: VertexId, json: bool) -> GraphResult<()> {
    let graph = Graph::from_file_as(path, format)?;
    let vertex = graph
        .vertex_with_id(id)
        .ok_or(GraphError::VertexNotFound(id))?;
    let incident: Vec<String> = graph
        .edges()
        .iter()
        .filter(|e| e.contains(vertex))
        .map(|e| e.to_string())
        .collect();

    if json {
        let info = serde_json::json!({
            "id": vertex.id(),
            "value": vertex.value(),
            "edges": incident,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Vertex {}", vertex);
        println!("  Value: {}", vertex.value());
        println!("  Edges: {}", incident.join(", "));
    }
    Ok(())
}

/// Export the graph as JSON.
pub fn cmd_export(path: &Path, format: GraphFormat, pretty: bool) -> GraphResult<()> {
    let graph = Graph::from_file_as(path, format)?;
    let output = if pretty {
        serde_json::to_string_pretty(&graph)
    } else {
        serde_json::to_string(&graph)
    };
    println!("{}", output.unwrap_or_default());
    Ok(())
}
