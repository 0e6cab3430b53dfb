use crate::arrangement::Arrangement;
use crate::bibliography;
use crate::graph::{GraphView, RootedTree};
use crate::linarr::dopt::{embed_min_projective, SortedRooting};
use crate::linarr::sum_edge_lengths;

/// Minimum projective `D` of a rooted tree, with a witnessing
/// arrangement.
///
/// A projective arrangement has no crossings and leaves the root
/// uncovered; equivalently, every subtree occupies a contiguous
/// interval. The optimum places the children of each vertex on
/// alternating sides in non-increasing size order, lighter side toward
/// the parent. Θ(n).
///
/// ```
/// use linarr::graph::RootedTree;
/// use linarr::linarr::dmin::min_sum_edge_lengths_projective;
///
/// // a star rooted at its center is already optimal
/// let t = RootedTree::from_edges(4, 0, &[(0, 1), (0, 2), (0, 3)]).unwrap();
/// assert_eq!(min_sum_edge_lengths_projective(&t), 1 + 1 + 2);
/// ```
pub fn min_sum_edge_lengths_projective_arrangement(t: &RootedTree) -> (u64, Arrangement) {
    bibliography::register_entry("Alemany2022a");
    debug_assert!(t.is_arborescence());
    let n = t.num_nodes();
    if n <= 1 {
        return (0, Arrangement::identity(n));
    }
    let rooting = SortedRooting::of_rooted_tree(t);
    let arr = embed_min_projective(&rooting, n);
    (sum_edge_lengths(t, &arr), arr)
}

/// Minimum projective `D`; see
/// [`min_sum_edge_lengths_projective_arrangement`].
pub fn min_sum_edge_lengths_projective(t: &RootedTree) -> u64 {
    min_sum_edge_lengths_projective_arrangement(t).0
}
