use crate::{Edge, GraphDescription};
use thiserror::Error;

/// Error types for structurally invalid graph descriptions.
///
/// Any of these is fatal to the current invocation; no partial graph is
/// returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("Expected integer for {expected}, found {token:?}")]
    InvalidToken {
        /// What the token was supposed to encode.
        expected: &'static str,
        /// The offending token.
        token: String,
    },

    #[error("Description ended early, expected {expected}")]
    TruncatedDescription { expected: &'static str },

    #[error("Negative vertex count {0}")]
    NegativeVertexCount(i64),

    #[error("Negative edge count {0}")]
    NegativeEdgeCount(i64),

    #[error("Edge {edge} endpoint {endpoint} outside vertex range 0..{vertex_count}")]
    EndpointOutOfRange {
        /// Zero-based position of the edge record in the description.
        edge: usize,
        /// The endpoint value as written.
        endpoint: i64,
        /// Number of vertices declared by the description.
        vertex_count: usize,
    },
}

/// Parses a textual graph description into a [`GraphDescription`].
///
/// The description is consumed as a whitespace-separated stream of integers:
/// the vertex count V and edge count E, then V vertex weights, then E edge
/// records `u_idx v_idx w_e`. Line boundaries are not significant, and any
/// content after the final edge record is ignored.
///
/// # Arguments
///
/// * `input` - The complete textual description.
///
/// # Returns
///
/// The parsed graph, or a [`DescriptionError`] naming the first structural
/// violation encountered: a negative count, a non-integer token, a truncated
/// description, or an edge endpoint outside `[0, V)`.
pub fn parse_description(input: &str) -> Result<GraphDescription, DescriptionError> {
    let mut tokens = input.split_whitespace();

    let vertex_count = next_integer(&mut tokens, "vertex count")?;
    if vertex_count < 0 {
        return Err(DescriptionError::NegativeVertexCount(vertex_count));
    }
    let vertex_count = vertex_count as usize;

    let edge_count = next_integer(&mut tokens, "edge count")?;
    if edge_count < 0 {
        return Err(DescriptionError::NegativeEdgeCount(edge_count));
    }
    let edge_count = edge_count as usize;

    let mut vertex_weights = Vec::with_capacity(vertex_count);
    for _ in 0..vertex_count {
        vertex_weights.push(next_integer(&mut tokens, "vertex weight")?);
    }

    let mut edges = Vec::with_capacity(edge_count);
    for edge in 0..edge_count {
        let u = next_endpoint(&mut tokens, edge, vertex_count)?;
        let v = next_endpoint(&mut tokens, edge, vertex_count)?;
        let weight = next_integer(&mut tokens, "edge weight")?;
        edges.push(Edge { u, v, weight });
    }

    Ok(GraphDescription {
        vertex_weights,
        edges,
    })
}

fn next_integer<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: &'static str,
) -> Result<i64, DescriptionError> {
    let token = tokens
        .next()
        .ok_or(DescriptionError::TruncatedDescription { expected })?;
    token.parse().map_err(|_| DescriptionError::InvalidToken {
        expected,
        token: token.to_string(),
    })
}

fn next_endpoint<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    edge: usize,
    vertex_count: usize,
) -> Result<usize, DescriptionError> {
    let endpoint = next_integer(tokens, "edge endpoint")?;
    if endpoint < 0 || endpoint as usize >= vertex_count {
        return Err(DescriptionError::EndpointOutOfRange {
            edge,
            endpoint,
            vertex_count,
        });
    }
    Ok(endpoint as usize)
}
