use core::fmt;

use crate::graph::{GraphView, RootedTree, TreeError};
use crate::Node;

/// Reasons a head vector fails to describe a rooted tree.
///
/// A head vector of a tree with `n` vertices has exactly `n` entries;
/// the `i`-th entry is the 1-indexed parent of vertex `i`, with 0
/// marking the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadVectorError {
    /// Token at `index` is not a non-negative integer.
    NonIntegerToken { index: usize },
    /// Head value at `index` is outside `0..=n`.
    OutOfRange { index: usize, value: usize },
    /// The number of zero entries is not exactly one.
    WrongNumberOfRoots { found: usize },
    /// Entry at `index` names the vertex itself as its head.
    SelfLoop { index: usize },
    /// The parent pointers close a cycle.
    Cycle,
    /// The vertex at `index` has no incident edge at all.
    IsolatedVertex { index: usize },
    /// Some vertex is not connected to the root.
    Disconnected,
}

impl fmt::Display for HeadVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadVectorError::NonIntegerToken { index } => {
                write!(f, "token {index} is not a non-negative integer")
            }
            HeadVectorError::OutOfRange { index, value } => {
                write!(f, "head value {value} at entry {index} is out of range")
            }
            HeadVectorError::WrongNumberOfRoots { found } => {
                write!(f, "expected exactly one root mark, found {found}")
            }
            HeadVectorError::SelfLoop { index } => {
                write!(f, "entry {index} points at itself")
            }
            HeadVectorError::Cycle => f.write_str("head vector contains a cycle"),
            HeadVectorError::IsolatedVertex { index } => {
                write!(f, "vertex {index} has no incident edge")
            }
            HeadVectorError::Disconnected => {
                f.write_str("head vector describes a disconnected graph")
            }
        }
    }
}

impl std::error::Error for HeadVectorError {}

/// Parse a whitespace-separated head vector.
///
/// Only tokenization and per-entry range checks happen here; structural
/// validation is done by
/// [`rooted_tree_from_head_vector`].
pub fn parse_head_vector(text: &str) -> Result<Vec<usize>, HeadVectorError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let n = tokens.len();
    let mut heads = Vec::with_capacity(n);
    for (index, tok) in tokens.iter().enumerate() {
        let value: usize = tok
            .parse()
            .map_err(|_| HeadVectorError::NonIntegerToken { index })?;
        if value > n {
            return Err(HeadVectorError::OutOfRange { index, value });
        }
        heads.push(value);
    }
    Ok(heads)
}

/// Build a rooted tree from a head vector.
///
/// ```
/// use linarr::conversions::{parse_head_vector, rooted_tree_from_head_vector};
///
/// let heads = parse_head_vector("0 1 1 2").unwrap();
/// let t = rooted_tree_from_head_vector(&heads).unwrap();
/// assert_eq!(t.root(), 0);
/// assert_eq!(t.parent(3), Some(1));
/// ```
pub fn rooted_tree_from_head_vector(heads: &[usize]) -> Result<RootedTree, HeadVectorError> {
    let n = heads.len();
    let mut root = None;
    let mut num_roots = 0;
    for (index, &h) in heads.iter().enumerate() {
        if h > n {
            return Err(HeadVectorError::OutOfRange { index, value: h });
        }
        if h == 0 {
            num_roots += 1;
            root = Some(index);
        } else if h - 1 == index {
            return Err(HeadVectorError::SelfLoop { index });
        }
    }
    if num_roots != 1 {
        return Err(HeadVectorError::WrongNumberOfRoots { found: num_roots });
    }
    let root = root.unwrap_or(0);
    // every non-root vertex touches its head edge, so only a root that
    // nothing points at can end up with no edge
    if n > 1 && !heads.iter().any(|&h| h != 0 && h - 1 == root) {
        return Err(HeadVectorError::IsolatedVertex { index: root });
    }
    let edges: Vec<_> = heads
        .iter()
        .enumerate()
        .filter(|&(_, &h)| h != 0)
        .map(|(i, &h)| (h - 1, i))
        .collect();
    RootedTree::from_edges(n, root, &edges).map_err(|e| match e {
        TreeError::Cycle | TreeError::NotAnArborescence | TreeError::DuplicateEdge => {
            HeadVectorError::Cycle
        }
        _ => HeadVectorError::Disconnected,
    })
}

/// The head vector of a rooted tree.
pub fn head_vector_of(t: &RootedTree) -> Vec<usize> {
    (0..t.num_nodes())
        .map(|u: Node| t.parent(u).map_or(0, |p| p + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let heads = vec![5, 3, 0, 3, 3, 3];
        let t = rooted_tree_from_head_vector(&heads).unwrap();
        assert_eq!(t.root(), 2);
        assert_eq!(head_vector_of(&t), heads);
    }

    #[test]
    fn two_roots_rejected() {
        // scenario S6
        let heads = parse_head_vector("0 0 1 2 3").unwrap();
        assert_eq!(
            rooted_tree_from_head_vector(&heads).err(),
            Some(HeadVectorError::WrongNumberOfRoots { found: 2 })
        );
    }

    #[test]
    fn error_kinds() {
        assert_eq!(
            parse_head_vector("0 x 1"),
            Err(HeadVectorError::NonIntegerToken { index: 1 })
        );
        assert_eq!(
            parse_head_vector("0 9 1"),
            Err(HeadVectorError::OutOfRange { index: 1, value: 9 })
        );
        assert_eq!(
            rooted_tree_from_head_vector(&[0, 2, 3]).err(),
            Some(HeadVectorError::SelfLoop { index: 1 })
        );
        // vertices 2, 3, 4 point at each other in a cycle beside the
        // root's own edge
        assert_eq!(
            rooted_tree_from_head_vector(&[0, 1, 4, 5, 3]).err(),
            Some(HeadVectorError::Cycle)
        );
        // vertices 1 and 2 head at each other, leaving the root bare
        assert_eq!(
            rooted_tree_from_head_vector(&[0, 3, 2, 3]).err(),
            Some(HeadVectorError::IsolatedVertex { index: 0 })
        );
    }
}
