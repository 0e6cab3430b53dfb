use crate::arrangement::Arrangement;
use crate::graph::GraphView;
use crate::linarr::crossings::edge_positions;
use crate::Position;

/// Crossings by the ladder refactoring of the dynamic-programming
/// recurrence: a single length-n prefix array is rebuilt per position
/// instead of materializing the whole table.
pub fn num_crossings_ladder<G: GraphView>(g: &G, arr: &Arrangement) -> u64 {
    run(g, arr, None)
}

/// Upper-bounded variant of the ladder count.
pub fn num_crossings_ladder_upper_bound<G: GraphView>(
    g: &G,
    arr: &Arrangement,
    upper_bound: u64,
) -> u64 {
    run(g, arr, Some(upper_bound))
}

fn run<G: GraphView>(g: &G, arr: &Arrangement, upper_bound: Option<u64>) -> u64 {
    let n = g.num_nodes();
    let mut by_left: Vec<Vec<(Position, Position)>> = vec![Vec::new(); n];
    for (l, r) in edge_positions(g, arr) {
        by_left[l].push((l, r));
    }

    // closed[q]: edges with left < p and right endpoint exactly q;
    // prefix[q]: its running prefix sums, rebuilt once per position
    let mut closed = vec![0u64; n];
    let mut prefix = vec![0u64; n];
    let mut crossings = 0u64;
    for p in 0..n {
        for &(l, r) in &by_left[p] {
            crossings += prefix[r - 1] - prefix[l];
            if let Some(ub) = upper_bound {
                if crossings > ub {
                    return ub + 1;
                }
            }
        }
        for &(_, r) in &by_left[p] {
            closed[r] += 1;
        }
        let mut acc = 0u64;
        for q in 0..n {
            acc += closed[q];
            prefix[q] = acc;
        }
    }
    crossings
}
