//! Iteration over the edge set `E` and the set `Q` of unordered pairs of
//! independent (vertex-disjoint) edges.

use crate::graph::GraphView;
use crate::{Edge, Node};

/// Iterator over the edges of a graph.
///
/// Undirected edges are yielded once each, as `(u, v)` with `u < v`;
/// directed edges as `(source, target)`.
#[derive(Clone)]
pub struct EdgeIter<'a, G: GraphView> {
    g: &'a G,
    u: Node,
    i: usize,
}

impl<'a, G: GraphView> EdgeIter<'a, G> {
    pub fn new(g: &'a G) -> Self {
        EdgeIter { g, u: 0, i: 0 }
    }
}

impl<G: GraphView> Iterator for EdgeIter<'_, G> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let n = self.g.num_nodes();
        while self.u < n {
            let nbrs = self.g.neighbors(self.u);
            while self.i < nbrs.len() {
                let v = nbrs[self.i];
                self.i += 1;
                if self.g.is_directed() || self.u < v {
                    return Some((self.u, v));
                }
            }
            self.u += 1;
            self.i = 0;
        }
        None
    }
}

/// Iterator over `Q(G)`: unordered pairs of edges that share no endpoint.
#[derive(Clone)]
pub struct PairIter {
    edges: Vec<Edge>,
    i: usize,
    j: usize,
}

impl PairIter {
    pub fn new<G: GraphView>(g: &G) -> Self {
        PairIter {
            edges: EdgeIter::new(g).collect(),
            i: 0,
            j: 1,
        }
    }
}

impl Iterator for PairIter {
    type Item = (Edge, Edge);

    fn next(&mut self) -> Option<(Edge, Edge)> {
        let m = self.edges.len();
        while self.i + 1 < m {
            while self.j < m {
                let e = self.edges[self.i];
                let f = self.edges[self.j];
                self.j += 1;
                if e.0 != f.0 && e.0 != f.1 && e.1 != f.0 && e.1 != f.1 {
                    return Some((e, f));
                }
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }
}
