//! Numerical properties of graphs under linear arrangements: the sum of
//! edge lengths *D*, the number of crossings *C* and its four
//! algorithms, the exact *D* optimizers, level signatures, and the
//! classification of syntactic dependency structures.

pub mod crossings;
pub mod dmax;
pub mod dmin;
pub mod level_signature;
pub mod syntactic;

pub(crate) mod dopt;

use crate::arrangement::Arrangement;
use crate::graph::GraphView;
use crate::iterators::EdgeIter;
use crate::numeric::{rational_from, Rational};

pub use crossings::CrossingsAlgorithm;

/// The sum of edge lengths `D = Σ |π(u) − π(v)|`.
///
/// ```
/// use linarr::graph::UndirectedGraph;
/// use linarr::{linarr::sum_edge_lengths, Arrangement};
///
/// let g = UndirectedGraph::from_edges(3, &[(0, 1), (1, 2)]);
/// assert_eq!(sum_edge_lengths(&g, &Arrangement::identity(3)), 2);
/// ```
pub fn sum_edge_lengths<G: GraphView>(g: &G, arr: &Arrangement) -> u64 {
    debug_assert!(arr.is_arrangement(g.num_nodes()));
    EdgeIter::new(g)
        .map(|(u, v)| {
            let (pu, pv) = (arr.position(u), arr.position(v));
            pu.abs_diff(pv) as u64
        })
        .sum()
}

/// The number of crossings `C`, computed with `algorithm`.
pub fn num_crossings<G: GraphView>(
    g: &G,
    arr: &Arrangement,
    algorithm: CrossingsAlgorithm,
) -> u64 {
    crossings::num_crossings(g, arr, algorithm)
}

/// Decide whether `C <= upper_bound`: returns `C` when it does and
/// `upper_bound + 1` as soon as the excess is proven.
pub fn is_num_crossings_lesseq_than<G: GraphView>(
    g: &G,
    arr: &Arrangement,
    upper_bound: u64,
    algorithm: CrossingsAlgorithm,
) -> u64 {
    crossings::num_crossings_upper_bound(g, arr, upper_bound, algorithm)
}

/// The mean dependency distance `D / (n - 1)` of a graph with `n >= 2`
/// vertices under `arr`.
pub fn mean_dependency_distance<G: GraphView>(g: &G, arr: &Arrangement) -> Rational {
    debug_assert!(g.num_nodes() >= 2);
    rational_from(sum_edge_lengths(g, arr)) / rational_from(g.num_nodes() as u64 - 1)
}

/// Fraction of directed edges `(u, v)` with `π(u) < π(v)`.
///
/// The graph must be directed and have at least one edge.
pub fn head_initial<G: GraphView>(g: &G, arr: &Arrangement) -> Rational {
    debug_assert!(g.is_directed() && g.num_edges() > 0);
    let forward = EdgeIter::new(g)
        .filter(|&(u, v)| arr.position(u) < arr.position(v))
        .count() as u64;
    rational_from(forward) / rational_from(g.num_edges() as u64)
}

/// Mean dependency distance averaged over a collection, tree by tree
/// (each pair weighs the same regardless of its size).
pub fn mean_dependency_distance_1level<G: GraphView>(sample: &[(&G, &Arrangement)]) -> Rational {
    debug_assert!(!sample.is_empty());
    let sum: Rational = sample
        .iter()
        .map(|(g, arr)| mean_dependency_distance(*g, arr))
        .sum();
    sum / rational_from(sample.len() as u64)
}

/// Mean dependency distance over a collection, edge-weighted: the total
/// `D` over the total `n - 1`.
pub fn mean_dependency_distance_2level<G: GraphView>(sample: &[(&G, &Arrangement)]) -> Rational {
    debug_assert!(!sample.is_empty());
    let total_d: u64 = sample.iter().map(|(g, arr)| sum_edge_lengths(*g, arr)).sum();
    let total_m: u64 = sample.iter().map(|(g, _)| g.num_nodes() as u64 - 1).sum();
    debug_assert!(total_m > 0);
    rational_from(total_d) / rational_from(total_m)
}
