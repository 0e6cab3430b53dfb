use crate::arrangement::Arrangement;
use crate::bibliography;
use crate::graph::{FreeTree, GraphView};
use crate::linarr::dopt::{centroid, embed_min_projective, SortedRooting};
use crate::linarr::sum_edge_lengths;

/// Minimum planar `D` of a free tree, with a witnessing arrangement.
///
/// Any planar arrangement of a tree is a projective arrangement of the
/// tree rooted at one of its centroidal vertices, so the planar optimum
/// is the projective optimum at a centroid. Θ(n).
pub fn min_sum_edge_lengths_planar_arrangement(t: &FreeTree) -> (u64, Arrangement) {
    bibliography::register_entry("Alemany2022a");
    debug_assert!(t.is_tree());
    let n = t.num_nodes();
    if n <= 1 {
        return (0, Arrangement::identity(n));
    }
    let (c, _) = centroid(t);
    let rooting = SortedRooting::of_free_tree(t, c);
    let arr = embed_min_projective(&rooting, n);
    (sum_edge_lengths(t.graph(), &arr), arr)
}

/// Minimum planar `D`; see
/// [`min_sum_edge_lengths_planar_arrangement`].
pub fn min_sum_edge_lengths_planar(t: &FreeTree) -> u64 {
    min_sum_edge_lengths_planar_arrangement(t).0
}
