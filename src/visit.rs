//! Graph traversal: a generic breadth-first driver with caller hooks,
//! plus connectivity, reachability and cycle checks built on it.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::graph::{DirectedGraph, DirectedView, FreeTree, GraphView, RootedTree, UndirectedGraph};
use crate::Node;

/// Flow control returned by traversal hooks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    /// Keep traversing.
    Continue,
    /// Terminate the traversal early.
    Stop,
}

/// Neighbor expansion, the one point where directed and undirected
/// graphs differ during traversal.
///
/// With `reverse` set, directed graphs also relax in-neighbors, so an
/// arborescence can be traversed as if undirected.
pub trait Expand: GraphView {
    fn for_each_neighbor<F: FnMut(Node)>(&self, u: Node, reverse: bool, f: F);
}

impl Expand for UndirectedGraph {
    fn for_each_neighbor<F: FnMut(Node)>(&self, u: Node, _reverse: bool, mut f: F) {
        for &v in self.neighbors(u) {
            f(v);
        }
    }
}

impl Expand for FreeTree {
    fn for_each_neighbor<F: FnMut(Node)>(&self, u: Node, _reverse: bool, mut f: F) {
        for &v in self.neighbors(u) {
            f(v);
        }
    }
}

impl Expand for DirectedGraph {
    fn for_each_neighbor<F: FnMut(Node)>(&self, u: Node, reverse: bool, mut f: F) {
        for &v in self.neighbors(u) {
            f(v);
        }
        if reverse {
            for &v in self.in_neighbors(u) {
                f(v);
            }
        }
    }
}

impl Expand for RootedTree {
    fn for_each_neighbor<F: FnMut(Node)>(&self, u: Node, reverse: bool, mut f: F) {
        for &v in self.neighbors(u) {
            f(v);
        }
        if reverse {
            for &v in self.in_neighbors(u) {
                f(v);
            }
        }
    }
}

/// A breadth-first traversal of a graph.
///
/// `BfsTraversal` does not take hooks at construction time; pass them to
/// [`run`](BfsTraversal::run), or drive the traversal manually with
/// [`next`](BfsTraversal::next).
///
/// ```
/// use linarr::graph::UndirectedGraph;
/// use linarr::visit::BfsTraversal;
///
/// let g = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
/// let mut bfs = BfsTraversal::new(&g);
/// bfs.add_source(0);
/// let order: Vec<_> = std::iter::from_fn(|| bfs.next()).collect();
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct BfsTraversal<'a, G: Expand> {
    graph: &'a G,
    queue: VecDeque<Node>,
    visited: FixedBitSet,
    reverse: bool,
}

impl<'a, G: Expand> BfsTraversal<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        BfsTraversal {
            graph,
            queue: VecDeque::new(),
            visited: FixedBitSet::with_capacity(graph.num_nodes()),
            reverse: false,
        }
    }

    /// Also relax predecessors of directed graphs.
    pub fn set_use_reverse_edges(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// Enqueue a start vertex.
    pub fn add_source(&mut self, s: Node) {
        if !self.visited.put(s) {
            self.queue.push_back(s);
        }
    }

    /// Whether `u` has been discovered.
    pub fn is_visited(&self, u: Node) -> bool {
        self.visited.contains(u)
    }

    /// Clear the visit state.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.visited.clear();
    }

    /// The next vertex in breadth-first order, or `None` when done.
    pub fn next(&mut self) -> Option<Node> {
        let u = self.queue.pop_front()?;
        let (visited, queue) = (&mut self.visited, &mut self.queue);
        self.graph.for_each_neighbor(u, self.reverse, |v| {
            if !visited.put(v) {
                queue.push_back(v);
            }
        });
        Some(u)
    }

    /// Drive the whole traversal through three hooks:
    ///
    /// * `should_enqueue(u, v)` — whether to enqueue the undiscovered
    ///   neighbor `v` reached from `u`;
    /// * `process_current(u)` — called when `u` is dequeued;
    /// * `process_neighbor(u, v, discovered)` — called for every
    ///   neighbor of `u`, discovered or not.
    ///
    /// Returns `true` if a hook stopped the traversal early.
    pub fn run<FQ, FC, FN>(
        &mut self,
        mut should_enqueue: FQ,
        mut process_current: FC,
        mut process_neighbor: FN,
    ) -> bool
    where
        FQ: FnMut(Node, Node) -> bool,
        FC: FnMut(Node) -> Control,
        FN: FnMut(Node, Node, bool) -> Control,
    {
        while let Some(u) = self.queue.pop_front() {
            if process_current(u) == Control::Stop {
                return true;
            }
            let mut stopped = false;
            let (visited, queue) = (&mut self.visited, &mut self.queue);
            self.graph.for_each_neighbor(u, self.reverse, |v| {
                if stopped {
                    return;
                }
                let discovered = visited.contains(v);
                if process_neighbor(u, v, discovered) == Control::Stop {
                    stopped = true;
                    return;
                }
                if !discovered && should_enqueue(u, v) {
                    visited.put(v);
                    queue.push_back(v);
                }
            });
            if stopped {
                return true;
            }
        }
        false
    }
}

/// Number of vertices reachable from `s`, traversing directed graphs as
/// if undirected.
pub fn num_reachable<G: Expand>(g: &G, s: Node) -> usize {
    let mut bfs = BfsTraversal::new(g);
    bfs.set_use_reverse_edges(true);
    bfs.add_source(s);
    let mut count = 0;
    while bfs.next().is_some() {
        count += 1;
    }
    count
}

/// Whether `target` is reachable from `source` following edge
/// orientations.
pub fn is_reachable<G: Expand>(g: &G, source: Node, target: Node) -> bool {
    let mut bfs = BfsTraversal::new(g);
    bfs.add_source(source);
    while let Some(u) = bfs.next() {
        if u == target {
            return true;
        }
    }
    false
}

/// Whether the graph is connected (directed graphs: weakly).
pub fn is_connected<G: Expand>(g: &G) -> bool {
    g.num_nodes() == 0 || num_reachable(g, 0) == g.num_nodes()
}

/// Whether the graph is a tree: connected and `m = n - 1`, established
/// by a single BFS from vertex 0 that must visit all `n` vertices.
pub fn is_tree<G: Expand>(g: &G) -> bool {
    g.num_nodes() == 0 || (g.num_edges() == g.num_nodes() - 1 && is_connected(g))
}

/// Whether the undirected graph has a cycle: a BFS that reaches an
/// already-visited neighbor through an edge other than the one that
/// discovered the current vertex has found one.
pub fn is_cyclic_undirected(g: &UndirectedGraph) -> bool {
    let n = g.num_nodes();
    let mut parent = vec![usize::MAX; n];
    let mut visited = FixedBitSet::with_capacity(n);
    let mut queue = VecDeque::new();
    for s in 0..n {
        if visited.contains(s) {
            continue;
        }
        visited.put(s);
        queue.push_back(s);
        while let Some(u) = queue.pop_front() {
            for &v in g.neighbors(u) {
                if !visited.put(v) {
                    parent[v] = u;
                    queue.push_back(v);
                } else if parent[u] != v {
                    return true;
                }
            }
        }
    }
    false
}

/// Whether the directed graph has a (directed) cycle, by three-color
/// depth-first search.
pub fn is_cyclic_directed(g: &DirectedGraph) -> bool {
    #[derive(Copy, Clone, PartialEq)]
    enum Color {
        White,
        Gray,
        Black,
    }
    let n = g.num_nodes();
    let mut color = vec![Color::White; n];
    // (vertex, next-neighbor index); the stack replaces recursion
    let mut stack: Vec<(Node, usize)> = Vec::new();
    for s in 0..n {
        if color[s] != Color::White {
            continue;
        }
        color[s] = Color::Gray;
        stack.push((s, 0));
        while let Some(&mut (u, ref mut i)) = stack.last_mut() {
            let nbrs = g.neighbors(u);
            if *i < nbrs.len() {
                let v = nbrs[*i];
                *i += 1;
                match color[v] {
                    Color::Gray => return true,
                    Color::White => {
                        color[v] = Color::Gray;
                        stack.push((v, 0));
                    }
                    Color::Black => {}
                }
            } else {
                color[u] = Color::Black;
                stack.pop();
            }
        }
    }
    false
}
