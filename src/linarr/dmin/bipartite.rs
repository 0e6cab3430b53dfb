use crate::arrangement::Arrangement;
use crate::bibliography;
use crate::graph::{FreeTree, GraphView};
use crate::linarr::sum_edge_lengths;
use crate::properties::{bipartite_coloring, Color};

/// Minimum bipartite `D` of a free tree, with a witnessing arrangement.
///
/// A bipartite arrangement places one color class entirely to the left
/// of the other. The optimum orders each class by degree so that
/// high-degree vertices hug the class boundary. Θ(n log n).
pub fn min_sum_edge_lengths_bipartite_arrangement(t: &FreeTree) -> (u64, Arrangement) {
    bibliography::register_entry("Alemany2024a");
    arrange(t, false)
}

/// Minimum bipartite `D`; see
/// [`min_sum_edge_lengths_bipartite_arrangement`].
pub fn min_sum_edge_lengths_bipartite(t: &FreeTree) -> u64 {
    min_sum_edge_lengths_bipartite_arrangement(t).0
}

pub(crate) fn arrange(t: &FreeTree, maximize: bool) -> (u64, Arrangement) {
    debug_assert!(t.is_tree());
    let n = t.num_nodes();
    if n <= 1 {
        return (0, Arrangement::identity(n));
    }
    let coloring = bipartite_coloring(t.graph());
    let mut left = coloring.class_of(Color::Red);
    let mut right = coloring.class_of(Color::Blue);
    // min: degrees grow toward the class boundary; max: mirrored
    left.sort_unstable_by_key(|&u| (t.degree(u), u));
    right.sort_unstable_by_key(|&u| (core::cmp::Reverse(t.degree(u)), u));
    if maximize {
        left.reverse();
        right.reverse();
    }
    let mut inverse = left;
    inverse.extend_from_slice(&right);
    let arr = Arrangement::from_inverse(inverse);
    (sum_edge_lengths(t.graph(), &arr), arr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_p4() {
        // classes {0, 2} and {1, 3}; the best class-separated order is
        // 0,2 | 1,3 with D = 2 + 1 + 2, worse than the unconstrained 3
        let t = FreeTree::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(min_sum_edge_lengths_bipartite(&t), 5);
    }

    #[test]
    fn star_is_insensitive_to_class_order() {
        let t = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        // the center is alone in its class: D = 1 + 2 + 3 + 4
        assert_eq!(min_sum_edge_lengths_bipartite(&t), 10);
    }
}
