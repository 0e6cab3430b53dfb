use core::fmt;

use crate::graph::{DirectedGraph, DirectedView, FreeTree, GraphView, TreeError};
use crate::{Edge, Node};

/// A rooted tree: an arborescence with every edge oriented away from the
/// root.
///
/// Subtree sizes are computed on demand and cached; any mutation
/// invalidates the cache.
#[derive(Clone)]
pub struct RootedTree {
    g: DirectedGraph,
    root: Node,
    subtree_sizes: Option<Vec<usize>>,
}

impl RootedTree {
    /// Build a rooted tree from `(parent, child)` edges.
    pub fn from_edges(n: usize, root: Node, edges: &[Edge]) -> Result<Self, TreeError> {
        if root >= n {
            return Err(TreeError::NodeOutOfBounds);
        }
        // validate the undirected structure first
        FreeTree::from_edges(n, edges)?;
        let g = DirectedGraph::from_edges(n, edges);
        let t = RootedTree {
            g,
            root,
            subtree_sizes: None,
        };
        if !t.is_arborescence() {
            return Err(TreeError::NotAnArborescence);
        }
        Ok(t)
    }

    /// Orient a free tree away from `root`.
    pub fn from_free_tree(t: &FreeTree, root: Node) -> Self {
        debug_assert!(t.is_tree());
        debug_assert!(root < t.num_nodes());
        let n = t.num_nodes();
        let mut g = DirectedGraph::new(n);
        let mut seen = vec![false; n];
        let mut stack = vec![root];
        seen[root] = true;
        while let Some(u) = stack.pop() {
            for &v in t.neighbors(u) {
                if !seen[v] {
                    seen[v] = true;
                    g.add_edge(u, v);
                    stack.push(v);
                }
            }
        }
        g.normalize();
        RootedTree {
            g,
            root,
            subtree_sizes: None,
        }
    }

    /// The root vertex.
    pub fn root(&self) -> Node {
        self.root
    }

    /// Re-root the tree at `r`, re-orienting every edge away from the
    /// new root. O(n).
    pub fn set_root(&mut self, r: Node) {
        debug_assert!(r < self.num_nodes());
        if r != self.root {
            *self = RootedTree::from_free_tree(&self.to_free_tree(), r);
        }
    }

    /// The parent of `u`, or `None` for the root.
    pub fn parent(&self, u: Node) -> Option<Node> {
        self.g.in_neighbors(u).first().copied()
    }

    /// The children of `u`.
    pub fn children(&self, u: Node) -> &[Node] {
        self.g.neighbors(u)
    }

    /// The underlying directed graph.
    pub fn graph(&self) -> &DirectedGraph {
        &self.g
    }

    /// Forget the orientation.
    pub fn to_free_tree(&self) -> FreeTree {
        let edges: Vec<_> = self.g.edges().collect();
        FreeTree::from_edges(self.num_nodes(), &edges).expect("arborescence is a tree")
    }

    /// Whether every vertex other than the root has exactly one parent,
    /// the root has none, and all vertices hang from the root.
    pub fn is_arborescence(&self) -> bool {
        let n = self.num_nodes();
        if n == 0 {
            return true;
        }
        if self.g.num_edges() != n - 1 || self.g.in_degree(self.root) != 0 {
            return false;
        }
        if (0..n).any(|u| u != self.root && self.g.in_degree(u) != 1) {
            return false;
        }
        // reachability from the root
        let mut seen = vec![false; n];
        let mut stack = vec![self.root];
        seen[self.root] = true;
        let mut count = 1;
        while let Some(u) = stack.pop() {
            for &v in self.g.neighbors(u) {
                if !seen[v] {
                    seen[v] = true;
                    count += 1;
                    stack.push(v);
                }
            }
        }
        count == n
    }

    /// The size of the subtree rooted at `u`.
    ///
    /// The sizes must have been computed since the last mutation; see
    /// [`recompute_subtree_sizes`](RootedTree::recompute_subtree_sizes).
    pub fn subtree_size(&self, u: Node) -> usize {
        debug_assert!(
            self.has_valid_subtree_sizes(),
            "subtree sizes are stale; call recompute_subtree_sizes()"
        );
        self.subtree_sizes.as_ref().map_or(1, |s| s[u])
    }

    /// Whether the subtree-size cache is valid.
    pub fn has_valid_subtree_sizes(&self) -> bool {
        self.subtree_sizes.is_some()
    }

    /// Recompute the subtree-size cache in O(n).
    pub fn recompute_subtree_sizes(&mut self) {
        let n = self.num_nodes();
        let mut sizes = vec![1usize; n];
        if n > 0 {
            // children are finished before their parent in reverse
            // preorder
            let mut order = Vec::with_capacity(n);
            let mut stack = vec![self.root];
            while let Some(u) = stack.pop() {
                order.push(u);
                stack.extend_from_slice(self.children(u));
            }
            for &u in order.iter().skip(1).rev() {
                if let Some(p) = self.parent(u) {
                    sizes[p] += sizes[u];
                }
            }
        }
        self.subtree_sizes = Some(sizes);
    }

    /// Add the edge `(parent, child)`; invalidates the size cache.
    pub fn add_edge(&mut self, u: Node, v: Node) {
        self.g.add_edge(u, v);
        self.subtree_sizes = None;
    }

    /// Remove the edge `(parent, child)`; invalidates the size cache.
    pub fn remove_edge(&mut self, u: Node, v: Node) {
        self.g.remove_edge(u, v);
        self.subtree_sizes = None;
    }

    /// Iterate over the edges as `(parent, child)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.g.edges()
    }
}

impl GraphView for RootedTree {
    fn num_nodes(&self) -> usize {
        self.g.num_nodes()
    }

    fn num_edges(&self) -> usize {
        self.g.num_edges()
    }

    fn degree(&self, u: Node) -> usize {
        self.g.degree(u)
    }

    fn neighbors(&self, u: Node) -> &[Node] {
        self.g.neighbors(u)
    }

    fn is_directed(&self) -> bool {
        true
    }
}

impl DirectedView for RootedTree {
    fn in_neighbors(&self, u: Node) -> &[Node] {
        self.g.in_neighbors(u)
    }
}

impl fmt::Debug for RootedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("RootedTree");
        s.field("root", &self.root);
        s.field("node_count", &self.num_nodes());
        s.field("edges", &self.edges().collect::<Vec<_>>());
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RootedTree {
        // S1 tree: root 4
        RootedTree::from_edges(
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
        .unwrap()
    }

    #[test]
    fn subtree_sizes() {
        let mut t = sample();
        assert!(t.is_arborescence());
        t.recompute_subtree_sizes();
        assert_eq!(t.subtree_size(4), 10);
        assert_eq!(t.subtree_size(1), 3);
        assert_eq!(t.subtree_size(9), 5);
        assert_eq!(t.subtree_size(8), 4);
        assert_eq!(t.subtree_size(5), 1);
    }

    #[test]
    fn parents() {
        let t = sample();
        assert_eq!(t.parent(4), None);
        assert_eq!(t.parent(8), Some(9));
        assert_eq!(t.parent(0), Some(1));
    }

    #[test]
    fn rejects_wrong_orientation() {
        // edge (2, 1) points toward the root's side
        let r = RootedTree::from_edges(3, 0, &[(0, 1), (2, 1)]);
        assert_eq!(r.err(), Some(TreeError::NotAnArborescence));
    }

    #[test]
    fn reroot() {
        let mut t = sample();
        t.set_root(8);
        assert!(t.is_arborescence());
        assert_eq!(t.root(), 8);
        assert_eq!(t.parent(9), Some(8));
        assert_eq!(t.parent(4), Some(9));
    }
}
