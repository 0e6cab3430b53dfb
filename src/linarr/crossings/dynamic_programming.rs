use crate::arrangement::Arrangement;
use crate::graph::GraphView;
use crate::linarr::crossings::edge_positions;

/// Crossings by dynamic programming over an n×n prefix table.
///
/// `table[l][r]` counts the edges with left endpoint at a position
/// `<= l` and right endpoint at a position `<= r`; edge `(l, r)` then
/// crosses exactly `table[l-1][r-1] - table[l-1][l]` edges that enter it
/// from the left, so every crossing is charged once to its
/// rightmost-closing edge.
pub fn num_crossings_dynamic_programming<G: GraphView>(g: &G, arr: &Arrangement) -> u64 {
    run(g, arr, None)
}

/// Upper-bounded variant of the dynamic-programming count.
pub fn num_crossings_dynamic_programming_upper_bound<G: GraphView>(
    g: &G,
    arr: &Arrangement,
    upper_bound: u64,
) -> u64 {
    run(g, arr, Some(upper_bound))
}

fn run<G: GraphView>(g: &G, arr: &Arrangement, upper_bound: Option<u64>) -> u64 {
    let n = g.num_nodes();
    let edges = edge_positions(g, arr);

    // one flat n*n table, filled cell-per-edge then prefix-summed
    let mut table = vec![0u64; n * n];
    for &(l, r) in &edges {
        table[l * n + r] += 1;
    }
    for l in 0..n {
        for r in 1..n {
            table[l * n + r] += table[l * n + r - 1];
        }
    }
    for l in 1..n {
        for r in 0..n {
            table[l * n + r] += table[(l - 1) * n + r];
        }
    }

    let mut crossings = 0u64;
    for &(l, r) in &edges {
        if l >= 1 {
            crossings += table[(l - 1) * n + (r - 1)] - table[(l - 1) * n + l];
            if let Some(ub) = upper_bound {
                if crossings > ub {
                    return ub + 1;
                }
            }
        }
    }
    crossings
}
