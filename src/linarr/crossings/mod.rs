//! The crossing-number engine: four algorithms computing `C(G, π)`,
//! each with an early-terminating upper-bound mode.
//!
//! Two edges cross when their endpoint positions interleave. Each
//! algorithm returns the same value; they differ in complexity:
//!
//! | algorithm | time | space |
//! |---|---|---|
//! | brute force | Θ(m²) | O(1) |
//! | dynamic programming | Θ(n²) | Θ(n²) |
//! | ladder | Θ(n²) | Θ(n) |
//! | stack based | Θ(m log n) | O(m) |

mod avl;
mod brute_force;
mod dynamic_programming;
mod ladder;
mod stack_based;

use crate::arrangement::Arrangement;
use crate::graph::GraphView;
use crate::iterators::EdgeIter;
use crate::{bibliography, Position};

pub use brute_force::{num_crossings_brute_force, num_crossings_brute_force_upper_bound};
pub use dynamic_programming::{
    num_crossings_dynamic_programming, num_crossings_dynamic_programming_upper_bound,
};
pub use ladder::{num_crossings_ladder, num_crossings_ladder_upper_bound};
pub use stack_based::{num_crossings_stack_based, num_crossings_stack_based_upper_bound};

/// Choice of crossing-counting algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CrossingsAlgorithm {
    /// Pairwise interleaving tests over `Q`. Θ(m²) time, O(1) space.
    BruteForce,
    /// Full n×n prefix table. Θ(n²) time and space.
    DynamicProgramming,
    /// The same recurrence with one length-n array. Θ(n²) time, Θ(n) space.
    Ladder,
    /// Sweep with an order-statistics tree of open edges. Θ(m log n).
    StackBased,
}

/// Compute `C(G, π)` with the chosen algorithm.
pub fn num_crossings<G: GraphView>(
    g: &G,
    arr: &Arrangement,
    algorithm: CrossingsAlgorithm,
) -> u64 {
    bibliography::register_entry("Alemany2019a");
    debug_assert!(arr.is_arrangement(g.num_nodes()));
    if trivially_zero(g) {
        return 0;
    }
    match algorithm {
        CrossingsAlgorithm::BruteForce => num_crossings_brute_force(g, arr),
        CrossingsAlgorithm::DynamicProgramming => num_crossings_dynamic_programming(g, arr),
        CrossingsAlgorithm::Ladder => num_crossings_ladder(g, arr),
        CrossingsAlgorithm::StackBased => num_crossings_stack_based(g, arr),
    }
}

/// Compute `min(C, upper_bound + 1)` with the chosen algorithm,
/// short-circuiting as soon as `C > upper_bound` is certain.
pub fn num_crossings_upper_bound<G: GraphView>(
    g: &G,
    arr: &Arrangement,
    upper_bound: u64,
    algorithm: CrossingsAlgorithm,
) -> u64 {
    bibliography::register_entry("Alemany2019a");
    debug_assert!(arr.is_arrangement(g.num_nodes()));
    if trivially_zero(g) {
        return 0;
    }
    match algorithm {
        CrossingsAlgorithm::BruteForce => num_crossings_brute_force_upper_bound(g, arr, upper_bound),
        CrossingsAlgorithm::DynamicProgramming => {
            num_crossings_dynamic_programming_upper_bound(g, arr, upper_bound)
        }
        CrossingsAlgorithm::Ladder => num_crossings_ladder_upper_bound(g, arr, upper_bound),
        CrossingsAlgorithm::StackBased => num_crossings_stack_based_upper_bound(g, arr, upper_bound),
    }
}

fn trivially_zero<G: GraphView>(g: &G) -> bool {
    g.num_nodes() < 4 || g.num_edges() < 2
}

/// Every edge as a `(left, right)` position pair under `arr`.
pub(crate) fn edge_positions<G: GraphView>(g: &G, arr: &Arrangement) -> Vec<(Position, Position)> {
    EdgeIter::new(g)
        .map(|(u, v)| {
            let (pu, pv) = (arr.position(u), arr.position(v));
            (pu.min(pv), pu.max(pv))
        })
        .collect()
}
