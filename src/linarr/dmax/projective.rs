use crate::arrangement::Arrangement;
use crate::bibliography;
use crate::graph::{GraphView, RootedTree};
use crate::linarr::dopt::{embed_max_projective, SortedRooting};
use crate::linarr::sum_edge_lengths;

/// Maximum projective `D` of a rooted tree, with a witnessing
/// arrangement.
///
/// In a maximum projective arrangement every vertex sits at the end of
/// its subtree's interval away from its parent, and child blocks are
/// laid out on the remaining side sorted non-increasingly by size, the
/// largest adjacent to the vertex. Θ(n).
pub fn max_sum_edge_lengths_projective_arrangement(t: &RootedTree) -> (u64, Arrangement) {
    bibliography::register_entry("Alemany2024a");
    debug_assert!(t.is_arborescence());
    let n = t.num_nodes();
    if n <= 1 {
        return (0, Arrangement::identity(n));
    }
    let rooting = SortedRooting::of_rooted_tree(t);
    let arr = embed_max_projective(&rooting, n);
    (sum_edge_lengths(t, &arr), arr)
}

/// Maximum projective `D`; see
/// [`max_sum_edge_lengths_projective_arrangement`].
pub fn max_sum_edge_lengths_projective(t: &RootedTree) -> u64 {
    max_sum_edge_lengths_projective_arrangement(t).0
}
