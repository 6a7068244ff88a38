//! Reads graph text files into an in-memory graph.

use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult, ParseError};
use crate::types::{Edge, Vertex, VertexId};

use super::text::substrings_between;
use super::GraphFormat;

/// Reader for set-notation and pair-stream graph files.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph file in the given format.
    ///
    /// Set-notation failures are reported as `MalformedGraphFile` naming
    /// `path`. Pair-stream failures come back as the underlying
    /// `InvalidInteger` or `UnexpectedEndOfInput`.
    pub fn read_from_file(path: &Path, format: GraphFormat) -> GraphResult<Graph> {
        let text = std::fs::read_to_string(path).map_err(|e| GraphError::from_io(path, e))?;
        debug!("read {} bytes from {} as {}", text.len(), path.display(), format);

        match format {
            GraphFormat::SetNotation => Self::parse_set_notation(&text).map_err(|source| {
                warn!("{} rejected: {}", path.display(), source);
                GraphError::MalformedGraphFile {
                    path: path.to_path_buf(),
                    source,
                }
            }),
            GraphFormat::PairStream => Self::parse_pair_stream(&text),
        }
    }

    /// Read from any reader in the given format.
    pub fn read_from(reader: &mut impl Read, format: GraphFormat) -> GraphResult<Graph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        match format {
            GraphFormat::SetNotation => Ok(Self::parse_set_notation(&text)?),
            GraphFormat::PairStream => Self::parse_pair_stream(&text),
        }
    }

    /// Parse set-notation text.
    ///
    /// Undirected edges are inserted before directed ones, each group in
    /// the order it appears. Vertex values are not part of the format, so
    /// every parsed vertex has a value of 0.
    pub fn parse_set_notation(text: &str) -> Result<Graph, ParseError> {
        let mut lines = text.lines();
        let vertex_line = lines.next().ok_or(ParseError::MissingLine("vertex"))?;
        let edge_line = lines.next().ok_or(ParseError::MissingLine("edge"))?;

        let vertex_set =
            unwrap_set(vertex_line, "V = {").ok_or(ParseError::MissingWrapper("vertex", 'V'))?;
        let edge_set =
            unwrap_set(edge_line, "E = {").ok_or(ParseError::MissingWrapper("edge", 'E'))?;

        let mut graph = Graph::new();

        for element in split_elements(vertex_set) {
            let id = element
                .parse::<VertexId>()
                .map_err(|_| ParseError::InvalidId(element.to_string()))?;
            graph.add_vertex(Vertex::new(id));
        }

        check_edge_literals(edge_set)?;

        for (a, b) in bracketed_pairs(edge_set, "[", "]")? {
            graph.add_edge(Edge::undirected(a, b));
        }

        for (origin, destination) in bracketed_pairs(edge_set, "(", ")")? {
            graph.add_edge(Edge::directed(origin, destination));
        }

        Ok(graph)
    }

    /// Parse a whitespace-separated stream of undirected id pairs.
    pub fn parse_pair_stream(text: &str) -> GraphResult<Graph> {
        let mut tokens = text.split_whitespace();
        let mut graph = Graph::new();
        let mut pairs = 0usize;

        while let Some(first) = tokens.next() {
            let a: VertexId = first.parse()?;
            let b: VertexId = tokens
                .next()
                .ok_or(GraphError::UnexpectedEndOfInput)?
                .parse()?;
            graph.add_edge(Edge::undirected(a, b));
            pairs += 1;
        }

        if pairs == 0 {
            return Err(GraphError::UnexpectedEndOfInput);
        }
        Ok(graph)
    }
}

/// Strip a `X = {` prefix and the closing `}` from a line.
fn unwrap_set<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix)?.strip_suffix('}')
}

/// Split a set body on `", "`. An empty body has no elements.
fn split_elements(set: &str) -> impl Iterator<Item = &str> {
    set.split(", ").filter(move |_| !set.is_empty())
}

/// Check that an edge set body is bracket literals joined by `", "` and
/// nothing else.
fn check_edge_literals(set: &str) -> Result<(), ParseError> {
    let mut rest = set;

    while !rest.is_empty() {
        let (open, close) = match rest.chars().next() {
            Some('[') => ('[', ']'),
            Some('(') => ('(', ')'),
            Some(']') => return Err(ParseError::UnbalancedBrackets('[')),
            Some(')') => return Err(ParseError::UnbalancedBrackets('(')),
            _ => return Err(ParseError::UnexpectedText(rest.to_string())),
        };
        let end = rest
            .find(close)
            .ok_or(ParseError::UnbalancedBrackets(open))?;
        rest = &rest[end + close.len_utf8()..];

        if rest.is_empty() {
            break;
        }
        if rest.starts_with(close) {
            return Err(ParseError::UnbalancedBrackets(open));
        }
        rest = rest
            .strip_prefix(", ")
            .filter(|next| !next.is_empty())
            .ok_or_else(|| ParseError::UnexpectedText(rest.to_string()))?;
    }

    Ok(())
}

/// Collect every `open a, b close` literal in `set` as an id pair.
fn bracketed_pairs(
    set: &str,
    open: &str,
    close: &str,
) -> Result<Vec<(VertexId, VertexId)>, ParseError> {
    let literals = substrings_between(set, open, close);

    // Any stray or unclosed bracket leaves the counts mismatched.
    let opens = set.matches(open).count();
    let closes = set.matches(close).count();
    if opens != literals.len() || closes != literals.len() {
        let bracket = open.chars().next().unwrap_or_default();
        return Err(ParseError::UnbalancedBrackets(bracket));
    }

    literals.into_iter().map(parse_pair).collect()
}

/// Parse `a, b` into two ids.
fn parse_pair(literal: &str) -> Result<(VertexId, VertexId), ParseError> {
    let invalid = || ParseError::InvalidPair(literal.to_string());

    let mut parts = literal.split(", ");
    let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let a = first.parse().map_err(|_| invalid())?;
    let b = second.parse().map_err(|_| invalid())?;
    Ok((a, b))
}
