use hashbrown::HashMap;

use crate::graph::{DirectedGraph, GraphView, UndirectedGraph};
use crate::iterators::EdgeIter;

/// Size of `Q(G)` for an undirected graph: the number of unordered
/// pairs of edges sharing no endpoint,
/// `C(m, 2) − ½ Σ_u deg(u)(deg(u) − 1)`.
pub fn size_q(g: &UndirectedGraph) -> u64 {
    let m = g.num_edges() as u64;
    let sharing: u64 = (0..g.num_nodes())
        .map(|u| {
            let d = g.degree(u) as u64;
            d.saturating_sub(1) * d
        })
        .sum();
    m * m.saturating_sub(1) / 2 - sharing / 2
}

/// Size of `Q(G)` for a directed graph.
///
/// Arc pairs sharing a vertex are subtracted per endpoint; a reciprocal
/// arc pair shares both endpoints and is added back once.
pub fn size_q_directed(g: &DirectedGraph) -> u64 {
    let m = g.num_edges() as u64;
    let sharing: u64 = (0..g.num_nodes())
        .map(|u| {
            let d = g.degree(u) as u64;
            d.saturating_sub(1) * d / 2
        })
        .sum();
    let mut seen: HashMap<(usize, usize), u64> = HashMap::new();
    let mut reciprocal = 0u64;
    for (u, v) in EdgeIter::new(g) {
        if seen.contains_key(&(v, u)) {
            reciprocal += 1;
        }
        seen.insert((u, v), 1);
    }
    m * m.saturating_sub(1) / 2 - sharing + reciprocal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_path() {
        // path 0-1-2-3: only {01, 23}
        let g = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(size_q(&g), 1);
    }

    #[test]
    fn directed_with_reciprocal_pair() {
        let g = DirectedGraph::from_edges(4, &[(0, 1), (1, 0), (2, 3)]);
        assert_eq!(size_q_directed(&g), 2);
    }
}
