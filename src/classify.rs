//! Structural classification of free trees.

use crate::graph::{FreeTree, GraphView};

/// The structural type of a free tree.
///
/// Some classes overlap (every star is a caterpillar); the classifier
/// reports the most specific one in the order of the variants below.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TreeType {
    /// No vertices.
    Empty,
    /// One vertex.
    Singleton,
    /// One center adjacent to every other vertex.
    Star,
    /// A star with exactly one edge subdivided.
    Quasistar,
    /// Two adjacent hubs, every other vertex a leaf of one of them.
    Bistar,
    /// A path.
    Linear,
    /// Removing all leaves yields a path.
    Caterpillar,
    /// Exactly one vertex of degree three or more.
    Spider,
    /// Exactly two vertices of degree three or more.
    TwoLinear,
    /// None of the above.
    Unknown,
}

/// Classify a free tree by degree invariants and leaf-deletion tests.
///
/// ```
/// use linarr::classify::{tree_type, TreeType};
/// use linarr::graph::FreeTree;
///
/// let star = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
/// assert_eq!(tree_type(&star), TreeType::Star);
/// ```
pub fn tree_type(t: &FreeTree) -> TreeType {
    let n = t.num_nodes();
    if n == 0 {
        return TreeType::Empty;
    }
    debug_assert!(t.is_tree());
    if n == 1 {
        return TreeType::Singleton;
    }
    if n == 2 {
        return TreeType::Linear;
    }
    let deg = |u: usize| t.degree(u);
    let hubs: Vec<usize> = (0..n).filter(|&u| deg(u) >= 3).collect();

    if (0..n).any(|u| deg(u) == n - 1) {
        return TreeType::Star;
    }
    if is_quasistar(t) {
        return TreeType::Quasistar;
    }
    if is_bistar(t) {
        return TreeType::Bistar;
    }
    if hubs.is_empty() {
        // all degrees at most 2 and connected
        return TreeType::Linear;
    }
    if is_caterpillar(t) {
        return TreeType::Caterpillar;
    }
    match hubs.len() {
        1 => TreeType::Spider,
        2 => TreeType::TwoLinear,
        _ => TreeType::Unknown,
    }
}

/// One vertex of degree `n - 2`, one of degree 2 joining it to a leaf.
fn is_quasistar(t: &FreeTree) -> bool {
    let n = t.num_nodes();
    if n < 4 {
        return false;
    }
    let center = match (0..n).find(|&u| t.degree(u) == n - 2) {
        Some(c) => c,
        None => return false,
    };
    let middle = match (0..n).find(|&u| t.degree(u) == 2 && u != center) {
        Some(m) => m,
        None => return false,
    };
    (0..n)
        .filter(|&u| u != center && u != middle)
        .all(|u| t.degree(u) == 1)
        && t.graph().has_edge(center, middle)
}

/// Two adjacent hubs, everything else a leaf.
fn is_bistar(t: &FreeTree) -> bool {
    let n = t.num_nodes();
    let non_leaves: Vec<usize> = (0..n).filter(|&u| t.degree(u) >= 2).collect();
    non_leaves.len() == 2 && t.graph().has_edge(non_leaves[0], non_leaves[1])
}

/// Removing all leaves leaves a path: every internal vertex keeps at
/// most two internal neighbors.
fn is_caterpillar(t: &FreeTree) -> bool {
    let n = t.num_nodes();
    (0..n).filter(|&u| t.degree(u) >= 2).all(|u| {
        t.neighbors(u).iter().filter(|&&v| t.degree(v) >= 2).count() <= 2
    })
}
