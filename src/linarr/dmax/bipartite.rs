use crate::arrangement::Arrangement;
use crate::bibliography;
use crate::graph::FreeTree;
use crate::linarr::dmin::bipartite::arrange;

/// Maximum bipartite `D` of a free tree, with a witnessing arrangement.
///
/// The mirror of the bipartite minimum: each color class is ordered so
/// that high-degree vertices sit at the outer ends. Θ(n log n).
pub fn max_sum_edge_lengths_bipartite_arrangement(t: &FreeTree) -> (u64, Arrangement) {
    bibliography::register_entry("Alemany2024a");
    arrange(t, true)
}

/// Maximum bipartite `D`; see
/// [`max_sum_edge_lengths_bipartite_arrangement`].
pub fn max_sum_edge_lengths_bipartite(t: &FreeTree) -> u64 {
    max_sum_edge_lengths_bipartite_arrangement(t).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p5_reaches_the_unconstrained_maximum() {
        let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        assert_eq!(max_sum_edge_lengths_bipartite(&t), 11);
    }
}
