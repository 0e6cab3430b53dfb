use num_bigint::BigInt;

use crate::bibliography;
use crate::graph::{FreeTree, GraphView, UndirectedGraph};
use crate::iterators::EdgeIter;
use crate::numeric::{rational, rational_from, Rational};
use crate::{Edge, Node};

/// Expected number of crossings over uniformly random arrangements:
/// every pair of independent edges crosses with probability 1/3, so
/// `E[C] = |Q| / 3`.
pub fn exp_num_crossings<G: GraphView>(g: &G) -> Rational {
    bibliography::register_entry("Alemany2020a");
    debug_assert!(!g.is_directed());
    let m = g.num_edges() as u64;
    let sharing: u64 = (0..g.num_nodes())
        .map(|u| {
            let d = g.degree(u) as u64;
            d.saturating_sub(1) * d
        })
        .sum();
    let q = m * m.saturating_sub(1) / 2 - sharing / 2;
    rational_from(q) / rational_from(3)
}

/// The joint-crossing probability of a pair of `Q` elements depends
/// only on how they share vertices; the variance adds the resulting
/// covariances over all ordered pairs. Pairs sharing at most one vertex
/// are uncorrelated and drop out.
struct OverlapCounts {
    q: u64,
    /// ordered pairs sharing one edge, the other two edges disjoint
    shared_edge_disjoint: u64,
    /// ordered pairs sharing one edge, the other two edges adjacent
    shared_edge_adjacent: u64,
    /// unordered configurations with two shared vertices inside one
    /// edge of the first element, split across the second
    two_in_one_edge: u64,
    /// ordered pairs with two shared vertices split across edges of
    /// both elements
    two_split_both: u64,
    /// ordered pairs sharing three vertices
    three_shared: u64,
    /// ordered pairs on the same four vertices with different pairings
    four_shared: u64,
}

impl OverlapCounts {
    fn variance(&self) -> Rational {
        let term = |count: u64, joint: Rational| {
            (joint - rational(1, 9)) * Rational::from(BigInt::from(count))
        };
        term(self.q, rational(1, 3))
            + term(self.shared_edge_adjacent, rational(1, 6))
            + term(self.shared_edge_disjoint, rational(2, 15))
            + term(2 * self.two_in_one_edge, rational(1, 10))
            + term(self.two_split_both, rational(7, 60))
            + term(self.three_shared, rational(1, 12))
            + term(self.four_shared, rational(0, 1))
    }
}

/// Variance of the number of crossings over uniformly random
/// arrangements of a general graph.
///
/// Classifies the ordered pairs of independent edge pairs by their
/// vertex-sharing pattern and counts each class through neighborhood
/// sums. The graph must have at least one edge. Runs in
/// O(Σ_{(x,y)} deg(x)·deg(y)) over adjacent and vertex pairs.
pub fn var_num_crossings(g: &UndirectedGraph) -> Rational {
    bibliography::register_entry("Alemany2020a");
    debug_assert!(g.num_edges() > 0);
    let counts = count_overlaps(g, false);
    counts.variance()
}

/// Variance of the number of crossings of a tree; the acyclic structure
/// removes the four-shared class and all common-neighbor corrections.
pub fn var_num_crossings_tree(t: &FreeTree) -> Rational {
    bibliography::register_entry("Alemany2020a");
    debug_assert!(t.is_tree() && t.num_edges() > 0);
    let counts = count_overlaps(t.graph(), true);
    counts.variance()
}

fn count_overlaps(g: &UndirectedGraph, acyclic: bool) -> OverlapCounts {
    let n = g.num_nodes();
    let m = g.num_edges() as u64;
    let edges: Vec<Edge> = EdgeIter::new(g).collect();
    let deg = |u: Node| g.degree(u) as u64;
    let adj: Vec<Vec<Node>> = (0..n)
        .map(|u| {
            let mut list = g.neighbors(u).to_vec();
            list.sort_unstable();
            list
        })
        .collect();
    let has = |u: Node, v: Node| adj[u].binary_search(&v).is_ok();
    let common = |u: Node, v: Node| -> Vec<Node> {
        let (mut i, mut j) = (0, 0);
        let mut out = Vec::new();
        while i < adj[u].len() && j < adj[v].len() {
            match adj[u][i].cmp(&adj[v][j]) {
                core::cmp::Ordering::Less => i += 1,
                core::cmp::Ordering::Greater => j += 1,
                core::cmp::Ordering::Equal => {
                    out.push(adj[u][i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        out
    };

    let p2: i64 = (0..n)
        .map(|u| {
            let d = deg(u) as i64;
            d * (d - 1)
        })
        .sum();
    let q = m * m.saturating_sub(1) / 2 - (p2 as u64) / 2;

    let mut shared_edge_disjoint = 0u64;
    let mut shared_edge_adjacent = 0u64;
    for &(x, y) in &edges {
        let disjoint = m as i64 - deg(x) as i64 - deg(y) as i64 + 1;
        // ordered pairs of adjacent edges avoiding x and y entirely
        let mut s: i64 = p2
            - (deg(x) * (deg(x) - 1)) as i64
            - (deg(y) * (deg(y) - 1)) as i64;
        for &z in &adj[x] {
            if z == y {
                continue;
            }
            let dz = deg(z) as i64;
            let reduced = dz - 1 - i64::from(!acyclic && has(z, y));
            s += reduced * (reduced - 1) - dz * (dz - 1);
        }
        for &z in &adj[y] {
            if z == x || (!acyclic && has(z, x)) {
                continue;
            }
            let dz = deg(z) as i64;
            s += (dz - 1) * (dz - 2) - dz * (dz - 1);
        }
        shared_edge_adjacent += s as u64;
        shared_edge_disjoint += (disjoint * (disjoint - 1) - s) as u64;
    }

    // three shared vertices: paths a-x-y-z-w anchored on the edge (y, z)
    // of the first element and (x, y) of the second
    let mut three_shared = 0u64;
    for &(ex, ey) in &edges {
        for (x, y) in [(ex, ey), (ey, ex)] {
            for &z in &adj[y] {
                if z == x {
                    continue;
                }
                let chord = !acyclic && has(x, z);
                let na = deg(x) - 1 - u64::from(chord);
                let nw = deg(z) - 1 - u64::from(chord);
                let shared_third = if acyclic {
                    0
                } else {
                    common(x, z).iter().filter(|&&c| c != y).count() as u64
                };
                three_shared += na * nw - shared_third;
            }
        }
    }

    // two shared vertices lying inside one edge of the first element
    let mut two_in_one_edge = 0u64;
    for &(x, y) in &edges {
        for &u in &adj[x] {
            if u == y {
                continue;
            }
            for &w in &adj[y] {
                if w == x || w == u {
                    continue;
                }
                let inside = 3
                    + u64::from(!acyclic && has(x, w))
                    + u64::from(!acyclic && has(y, u))
                    + u64::from(!acyclic && has(u, w));
                let incident = deg(x) + deg(y) + deg(u) + deg(w) - inside;
                two_in_one_edge += m - incident;
            }
        }
    }

    // two shared vertices split across the edges of both elements; even
    // in a tree the pair (x, y) can share one neighbor, so the
    // corrections stay
    let mut two_split_both = 0u64;
    for x in 0..n {
        for y in x + 1..n {
            let adjacent = has(x, y);
            let na = adj[x].len() - usize::from(adjacent);
            let nb = adj[y].len() - usize::from(adjacent);
            if na == 0 || nb == 0 {
                continue;
            }
            let both: Vec<Node> = common(x, y);
            for &a in &adj[x] {
                if a == y {
                    continue;
                }
                for &b in &adj[y] {
                    if b == x || b == a {
                        continue;
                    }
                    let b_in_a = has(x, b);
                    let a_in_b = has(y, a);
                    let nu = na as u64 - 1 - u64::from(b_in_a);
                    let nw = nb as u64 - 1 - u64::from(a_in_b);
                    let com = both.iter().filter(|&&c| c != a && c != b).count() as u64;
                    two_split_both += nu * nw - com;
                }
            }
        }
    }

    // four shared vertices: one pair of matchings per 4-cycle
    let mut four_shared = 0u64;
    if !acyclic {
        for x in 0..n {
            for y in x + 1..n {
                let cn = common(x, y).len() as u64;
                if cn >= 2 {
                    four_shared += cn * (cn - 1) / 2;
                }
            }
        }
    }

    OverlapCounts {
        q,
        shared_edge_disjoint,
        shared_edge_adjacent,
        two_in_one_edge,
        two_split_both,
        three_shared,
        four_shared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s1_tree() -> FreeTree {
        FreeTree::from_edges(
            10,
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
        .unwrap()
    }

    #[test]
    fn s1_expectation_and_variance() {
        let t = s1_tree();
        assert_eq!(exp_num_crossings(&t), rational(23, 3));
        assert_eq!(var_num_crossings_tree(&t), rational(193, 15));
        // the general-graph path agrees on trees
        assert_eq!(var_num_crossings(t.graph()), rational(193, 15));
    }

    #[test]
    fn cycle_graph_variance_is_defined() {
        // C4 exercises the four-shared class: both matchings are in Q
        let g = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        // Q = {(01,23), (12,30)}; E[C] = 2/3
        assert_eq!(exp_num_crossings(&g), rational(2, 3));
        let v = var_num_crossings(&g);
        // by enumeration over the 24 arrangements: C is 0 in 8 of them,
        // 1 in 16, never 2, so V = 2/3 - 4/9 = 2/9
        assert_eq!(v, rational(2, 9));
    }
}
