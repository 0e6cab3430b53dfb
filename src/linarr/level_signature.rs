//! Level signatures of arrangements.
//!
//! The level of a vertex is the number of its neighbors placed after it
//! minus the number placed before it. Level signatures characterize
//! maximum arrangements: in a maximum arrangement the per-position level
//! sequence is non-increasing and no two adjacent vertices share a
//! level.

use crate::arrangement::Arrangement;
use crate::graph::GraphView;
use crate::iterators::EdgeIter;
use crate::Node;

/// The level of every vertex, indexed by vertex.
pub fn per_vertex<G: GraphView>(g: &G, arr: &Arrangement) -> Vec<i64> {
    let n = g.num_nodes();
    let mut levels = vec![0i64; n];
    for (u, v) in EdgeIter::new(g) {
        let (pu, pv) = (arr.position(u), arr.position(v));
        if pu < pv {
            levels[u] += 1;
            levels[v] -= 1;
        } else {
            levels[u] -= 1;
            levels[v] += 1;
        }
    }
    levels
}

/// The level of every vertex, indexed by position.
pub fn per_position<G: GraphView>(g: &G, arr: &Arrangement) -> Vec<i64> {
    let levels = per_vertex(g, arr);
    (0..g.num_nodes())
        .map(|p| levels[arr.node_at(p)])
        .collect()
}

/// Whether the per-position level sequence is non-increasing.
pub fn is_non_increasing(levels_per_position: &[i64]) -> bool {
    levels_per_position.windows(2).all(|w| w[0] >= w[1])
}

/// Whether no two adjacent vertices share a level value.
pub fn no_adjacent_equal_levels<G: GraphView>(g: &G, levels_per_vertex: &[i64]) -> bool {
    EdgeIter::new(g).all(|(u, v): (Node, Node)| levels_per_vertex[u] != levels_per_vertex[v])
}

/// Whether `arr` satisfies both necessary conditions of a maximum
/// arrangement.
pub fn is_maximum_candidate<G: GraphView>(g: &G, arr: &Arrangement) -> bool {
    let levels = per_vertex(g, arr);
    let by_pos: Vec<i64> = (0..g.num_nodes()).map(|p| levels[arr.node_at(p)]).collect();
    is_non_increasing(&by_pos) && no_adjacent_equal_levels(g, &levels)
}

/// `D` recovered from levels: `D = Σ_p p · (−lv(p))`.
///
/// Useful as a cross-check; agrees with
/// [`sum_edge_lengths`](crate::linarr::sum_edge_lengths).
pub fn sum_edge_lengths_from_levels(levels_per_position: &[i64]) -> i64 {
    levels_per_position
        .iter()
        .enumerate()
        .map(|(p, &lv)| -(p as i64) * lv)
        .sum()
}
