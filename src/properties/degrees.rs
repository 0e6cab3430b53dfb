use num_bigint::BigInt;

use crate::graph::{FreeTree, GraphView};
use crate::numeric::{rational_from, Rational};

/// The p-th moment of degree, `⟨k^p⟩ = Σ_u deg(u)^p / n`.
pub fn moment_degree<G: GraphView>(g: &G, p: u32) -> Rational {
    debug_assert!(g.num_nodes() > 0);
    let total: BigInt = (0..g.num_nodes())
        .map(|u| num_traits::pow(BigInt::from(g.degree(u) as u64), p as usize))
        .sum();
    Rational::from(total) / rational_from(g.num_nodes() as u64)
}

/// Hubiness of a tree: the second moment of degree rescaled so that a
/// path scores 0 and a star scores 1. Defined for `n >= 4` only.
pub fn hubiness(t: &FreeTree) -> Rational {
    debug_assert!(t.is_tree());
    let n = t.num_nodes() as u64;
    debug_assert!(n >= 4, "hubiness requires at least 4 vertices");
    let k2 = moment_degree(t, 2);
    // ⟨k²⟩ of the path: (4n - 6)/n; of the star: n - 1
    let linear = rational_from(4 * n - 6) / rational_from(n);
    let star = rational_from(n - 1);
    (k2 - &linear) / (star - linear)
}

/// Number of vertices of degree one.
pub fn num_leaves<G: GraphView>(g: &G) -> usize {
    (0..g.num_nodes()).filter(|&u| g.degree(u) == 1).count()
}

/// Largest degree.
pub fn max_degree<G: GraphView>(g: &G) -> usize {
    (0..g.num_nodes()).map(|u| g.degree(u)).max().unwrap_or(0)
}

/// Sum of squared degrees, a cheap isomorphism invariant.
pub fn sum_squared_degrees<G: GraphView>(g: &G) -> u64 {
    (0..g.num_nodes())
        .map(|u| {
            let d = g.degree(u) as u64;
            d * d
        })
        .sum()
}
