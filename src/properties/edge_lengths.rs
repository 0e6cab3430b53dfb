use num_bigint::BigInt;

use crate::bibliography;
use crate::graph::{FreeTree, GraphView, RootedTree, UndirectedGraph};
use crate::linarr::dopt::SortedRooting;
use crate::numeric::{rational, rational_from, Rational};

fn big(x: u64) -> BigInt {
    BigInt::from(x)
}

/// Expected sum of edge lengths over uniformly random arrangements:
/// each edge has expected length `(n + 1) / 3`, so
/// `E[D] = m (n + 1) / 3`.
pub fn exp_sum_edge_lengths<G: GraphView>(g: &G) -> Rational {
    bibliography::register_entry("Ferrer2019a");
    let m = g.num_edges() as u64;
    let n = g.num_nodes() as u64;
    rational_from(m * (n + 1)) / rational_from(3)
}

/// Variance of the sum of edge lengths over uniformly random
/// arrangements of a general graph.
///
/// Pairs of edges are classified by how many endpoints they share; the
/// moment kernels over 2, 3 and 4 distinct positions are exact integer
/// sums computed in O(n).
pub fn var_sum_edge_lengths(g: &UndirectedGraph) -> Rational {
    bibliography::register_entry("Ferrer2019a");
    let n = g.num_nodes();
    let m = g.num_edges() as u64;
    if m == 0 || n < 2 {
        return rational(0, 1);
    }
    let nn = n as u64;

    // A_i = Σ_j |i - j|, B_i = Σ_j (i - j)²; their sums give the
    // kernels for identical, sharing and disjoint edge pairs
    let mut s1 = BigInt::from(0);
    let mut s2 = BigInt::from(0);
    let mut t_sum = BigInt::from(0);
    for i in 0..nn {
        let left = i;
        let right = nn - 1 - i;
        let a_i = big(left * (left + 1) / 2 + right * (right + 1) / 2);
        let b_i = sum_squares(left) + sum_squares(right);
        s1 += &a_i;
        s2 += &b_i;
        t_sum += &a_i * &a_i - &b_i;
    }
    let u_sum = &s1 * &s1 - big(2) * &s2 - big(4) * &t_sum;

    let mu = rational_from(nn + 1) / rational_from(3);
    let mu2 = &mu * &mu;
    let pairs2 = big(nn) * big(nn - 1);
    let k_same = Rational::new(s2, pairs2.clone());

    let p2: u64 = (0..n)
        .map(|u| {
            let d = g.degree(u) as u64;
            d.saturating_sub(1) * d
        })
        .sum();
    let q2 = m * (m - 1) - p2; // twice the size of Q

    let mut variance = (k_same - &mu2) * Rational::from(big(m));
    if p2 > 0 {
        let pairs3 = pairs2.clone() * big(nn - 2);
        let k_shared = Rational::new(t_sum, pairs3);
        variance += (k_shared - &mu2) * Rational::from(big(p2));
    }
    if q2 > 0 {
        let pairs4 = pairs2 * big(nn - 2) * big(nn - 3);
        let k_disjoint = Rational::new(u_sum, pairs4);
        variance += (k_disjoint - &mu2) * Rational::from(big(q2));
    }
    variance
}

fn sum_squares(k: u64) -> BigInt {
    big(k) * big(k + 1) * big(2 * k + 1) / big(6)
}

/// Expected sum of edge lengths over uniformly random projective
/// arrangements of a rooted tree.
///
/// For the edge to a child `c` of `v`: one step to enter the child's
/// interval, each sibling interval lies in between with probability
/// 1/3, and the child sits past half of its own interval on average.
pub fn exp_sum_edge_lengths_projective(t: &RootedTree) -> Rational {
    bibliography::register_entry("Alemany2021a");
    debug_assert!(t.is_arborescence());
    let n = t.num_nodes();
    if n <= 1 {
        return rational(0, 1);
    }
    let rooting = SortedRooting::of_rooted_tree(t);
    let mut expectation = rational(0, 1);
    for v in 0..n {
        let siblings_total: u64 = rooting.children[v].iter().map(|&c| rooting.size[c] as u64).sum();
        for &c in &rooting.children[v] {
            let sc = rooting.size[c] as u64;
            expectation += rational(1, 1)
                + rational_from(siblings_total - sc) / rational_from(3)
                + rational_from(sc - 1) / rational_from(2);
        }
    }
    expectation
}

/// Expected sum of edge lengths over uniformly random planar
/// arrangements of a free tree.
///
/// Every planar arrangement is a projective arrangement whose root is
/// the leftmost vertex, and each vertex is the leftmost in the same
/// number of planar arrangements, so the expectation averages the
/// root-pinned projective expectations over all n roots. The average
/// collapses to per-edge neighbor-component sums, computed in
/// O(n + m).
pub fn exp_sum_edge_lengths_planar(t: &FreeTree) -> Rational {
    bibliography::register_entry("Alemany2022b");
    debug_assert!(t.is_tree());
    let n = t.num_nodes();
    if n <= 1 {
        return rational(0, 1);
    }
    let nn = n as u64;

    // component sizes per directed edge, from one rooting
    let mut parent = vec![usize::MAX; n];
    let mut order = Vec::with_capacity(n);
    let mut seen = vec![false; n];
    seen[0] = true;
    let mut stack = vec![0usize];
    while let Some(u) = stack.pop() {
        order.push(u);
        for &v in t.neighbors(u) {
            if !seen[v] {
                seen[v] = true;
                parent[v] = u;
                stack.push(v);
            }
        }
    }
    let mut size = vec![1u64; n];
    for &u in order.iter().rev() {
        if parent[u] != usize::MAX {
            size[parent[u]] += size[u];
        }
    }
    let comp = |u: usize, w: usize| -> u64 {
        if parent[w] == u {
            size[w]
        } else {
            nn - size[u]
        }
    };
    let mut g1 = vec![0u64; n];
    let mut g2 = vec![0u64; n];
    for u in 0..n {
        for &w in t.neighbors(u) {
            let c = comp(u, w);
            g1[u] += c;
            g2[u] += c * c;
        }
    }

    let mut total = rational(0, 1);
    for (u, v) in t.edges() {
        let b = comp(u, v);
        for (x, bb) in [(u, b), (v, nn - b)] {
            let aa = nn - bb;
            // roots on x's side: the child interval offset term
            total += rational_from(aa) * (rational(1, 1) + rational_from(bb - 1) / rational_from(2));
            // gap terms: root at x uses probability 1/2, deeper roots 1/3
            total += rational_from(nn - 1 - bb) / rational_from(2);
            let s1 = g1[x] - bb;
            let s2 = g2[x] - bb * bb;
            total += (rational_from((nn - 1 - bb) * s1) - rational_from(s2)) / rational_from(3);
        }
    }
    total / rational_from(nn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RootedTree;

    #[test]
    fn s1_projective_expectation() {
        let t = RootedTree::from_edges(
            10,
            4,
            &[
                (4, 1),
                (1, 0),
                (1, 2),
                (4, 3),
                (4, 9),
                (9, 8),
                (8, 7),
                (8, 6),
                (8, 5),
            ],
        )
        .unwrap();
        assert_eq!(exp_sum_edge_lengths_projective(&t), rational(133, 6));
    }

    #[test]
    fn expectation_of_p3() {
        // all 6 arrangements of the path on 3 vertices are planar
        let t = FreeTree::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(exp_sum_edge_lengths(t.graph()), rational(8, 3));
        assert_eq!(exp_sum_edge_lengths_planar(&t), rational(8, 3));
    }

    #[test]
    fn variance_of_single_edge() {
        // n = 2: D is always 1, variance 0
        let g = UndirectedGraph::from_edges(2, &[(0, 1)]);
        assert_eq!(var_sum_edge_lengths(&g), rational(0, 1));
    }

    #[test]
    fn star_projective_expectation() {
        // K_{1,2} from the center: E[D] = 8/3 by enumeration
        let t = RootedTree::from_edges(3, 0, &[(0, 1), (0, 2)]).unwrap();
        assert_eq!(exp_sum_edge_lengths_projective(&t), rational(8, 3));
    }
}
