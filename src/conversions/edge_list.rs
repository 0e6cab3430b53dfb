use core::fmt;

use hashbrown::HashSet;

use crate::Edge;

/// Reasons an edge-list text fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeListError {
    /// Token at `index` is not a non-negative integer.
    NonIntegerToken { index: usize },
    /// The token count is odd, so the last edge lacks an endpoint.
    DanglingEndpoint,
    /// An edge joins a vertex to itself.
    SelfLoop { index: usize },
    /// The same edge appears twice.
    DuplicateEdge { index: usize },
}

impl fmt::Display for EdgeListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeListError::NonIntegerToken { index } => {
                write!(f, "token {index} is not a non-negative integer")
            }
            EdgeListError::DanglingEndpoint => f.write_str("odd number of vertex tokens"),
            EdgeListError::SelfLoop { index } => write!(f, "self-loop at token {index}"),
            EdgeListError::DuplicateEdge { index } => write!(f, "duplicate edge at token {index}"),
        }
    }
}

impl std::error::Error for EdgeListError {}

/// Parse whitespace-separated vertex-id pairs into an edge list.
///
/// Returns the edges and the vertex count, which is one past the largest
/// id observed.
pub fn parse_edge_list(text: &str) -> Result<(Vec<Edge>, usize), EdgeListError> {
    let mut edges = Vec::new();
    let mut seen: HashSet<Edge> = HashSet::new();
    let mut n = 0;
    let mut pending: Option<usize> = None;
    for (index, tok) in text.split_whitespace().enumerate() {
        let value: usize = tok
            .parse()
            .map_err(|_| EdgeListError::NonIntegerToken { index })?;
        n = n.max(value + 1);
        match pending.take() {
            None => {
                pending = Some(value);
            }
            Some(u) => {
                if u == value {
                    return Err(EdgeListError::SelfLoop { index });
                }
                let e = (u.min(value), u.max(value));
                if !seen.insert(e) {
                    return Err(EdgeListError::DuplicateEdge { index });
                }
                edges.push((u, value));
            }
        }
    }
    if pending.is_some() {
        return Err(EdgeListError::DanglingEndpoint);
    }
    Ok((edges, n))
}
