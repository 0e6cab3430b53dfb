use crate::arrangement::Arrangement;
use crate::graph::GraphView;
use crate::linarr::crossings::avl::AvlMultiset;
use crate::linarr::crossings::edge_positions;
use crate::Position;

/// Crossings by a sweep over positions with an order-statistics tree of
/// open edges.
///
/// When an edge closes, the edges that cross it and close later are
/// exactly the still-open edges whose left endpoint lies strictly inside
/// it; the tree answers that as a rank query. Edges closing at the same
/// position share that vertex and are removed before counting so they
/// are never charged against each other.
pub fn num_crossings_stack_based<G: GraphView>(g: &G, arr: &Arrangement) -> u64 {
    run(g, arr, None)
}

/// Upper-bounded variant of the stack-based count.
pub fn num_crossings_stack_based_upper_bound<G: GraphView>(
    g: &G,
    arr: &Arrangement,
    upper_bound: u64,
) -> u64 {
    run(g, arr, Some(upper_bound))
}

fn run<G: GraphView>(g: &G, arr: &Arrangement, upper_bound: Option<u64>) -> u64 {
    let n = g.num_nodes();
    let mut open_at: Vec<Vec<Position>> = vec![Vec::new(); n]; // left endpoints opening here
    let mut close_at: Vec<Vec<Position>> = vec![Vec::new(); n]; // left endpoints of edges closing here
    for (l, r) in edge_positions(g, arr) {
        open_at[l].push(l);
        close_at[r].push(l);
    }

    let mut open = AvlMultiset::new();
    let mut crossings = 0u64;
    for p in 0..n {
        for &l in &close_at[p] {
            open.remove(l);
        }
        for &l in &close_at[p] {
            crossings += open.count_greater(l);
            if let Some(ub) = upper_bound {
                if crossings > ub {
                    return ub + 1;
                }
            }
        }
        for &l in &open_at[p] {
            open.insert(l);
        }
    }
    crossings
}
