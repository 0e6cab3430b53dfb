//! Shared machinery of the D optimizers: size-sorted rooted adjacency
//! lists, the interval embedders for projective arrangements, and
//! centroid location.

use crate::arrangement::Arrangement;
use crate::graph::{FreeTree, GraphView, RootedTree};
use crate::{Node, Position};

/// A rooting of a tree with every child list sorted by subtree size,
/// largest first. Built in linear time with a counting sort over sizes.
pub(crate) struct SortedRooting {
    pub root: Node,
    pub children: Vec<Vec<Node>>,
    pub size: Vec<usize>,
}

impl SortedRooting {
    pub(crate) fn of_free_tree(t: &FreeTree, root: Node) -> Self {
        debug_assert!(t.is_tree());
        let n = t.num_nodes();
        let mut parent = vec![usize::MAX; n];
        let mut order = Vec::with_capacity(n);
        let mut stack = vec![root];
        let mut seen = vec![false; n];
        seen[root] = true;
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
        let mut size = vec![1usize; n];
        for &u in order.iter().rev() {
            if parent[u] != usize::MAX {
                size[parent[u]] += size[u];
            }
        }
        Self::sort_children(n, root, &parent, &size)
    }

    pub(crate) fn of_rooted_tree(t: &RootedTree) -> Self {
        let n = t.num_nodes();
        let mut parent = vec![usize::MAX; n];
        let mut order = Vec::with_capacity(n);
        let mut stack = vec![t.root()];
        while let Some(u) = stack.pop() {
            order.push(u);
            for &v in t.children(u) {
                parent[v] = u;
                stack.push(v);
            }
        }
        let mut size = vec![1usize; n];
        for &u in order.iter().rev() {
            if parent[u] != usize::MAX {
                size[parent[u]] += size[u];
            }
        }
        Self::sort_children(n, t.root(), &parent, &size)
    }

    fn sort_children(n: usize, root: Node, parent: &[usize], size: &[usize]) -> Self {
        // counting sort of all (parent, child) pairs by subtree size
        let mut buckets: Vec<Vec<Node>> = vec![Vec::new(); n + 1];
        for v in 0..n {
            if parent[v] != usize::MAX {
                buckets[size[v]].push(v);
            }
        }
        let mut children: Vec<Vec<Node>> = vec![Vec::new(); n];
        for s in (1..=n).rev() {
            for &v in &buckets[s] {
                children[parent[v]].push(v);
            }
        }
        SortedRooting {
            root,
            children,
            size: size.to_vec(),
        }
    }
}

/// Side of a vertex's interval its parent lies on.
#[derive(Copy, Clone, PartialEq)]
enum ParentSide {
    None,
    Left,
    Right,
}

/// Minimum projective embedding: children alternate sides in
/// non-increasing size order, starting on the side away from the parent,
/// and on each side smaller blocks sit nearer the vertex.
pub(crate) fn embed_min_projective(r: &SortedRooting, n: usize) -> Arrangement {
    let mut direct = vec![0 as Position; n];
    let mut stack: Vec<(Node, Position, ParentSide)> = vec![(r.root, 0, ParentSide::None)];
    let mut left: Vec<Node> = Vec::new();
    let mut right: Vec<Node> = Vec::new();
    while let Some((v, lo, pside)) = stack.pop() {
        left.clear();
        right.clear();
        // the largest child goes on the side away from the parent
        let away_is_left = pside != ParentSide::Left;
        let mut to_left = away_is_left;
        for &c in &r.children[v] {
            if to_left {
                left.push(c);
            } else {
                right.push(c);
            }
            to_left = !to_left;
        }
        // left side: largest block outermost
        let mut pos = lo;
        for &c in &left {
            stack.push((c, pos, ParentSide::Right));
            pos += r.size[c];
        }
        direct[v] = pos;
        pos += 1;
        // right side: smaller blocks nearer the vertex
        for &c in right.iter().rev() {
            stack.push((c, pos, ParentSide::Left));
            pos += r.size[c];
        }
    }
    Arrangement::from_direct(direct)
}

/// Maximum projective embedding: every vertex sits at the end of its
/// interval away from its parent; child blocks fill the other side with
/// larger blocks nearer the vertex.
pub(crate) fn embed_max_projective(r: &SortedRooting, n: usize) -> Arrangement {
    let mut direct = vec![0 as Position; n];
    // the root is treated as having its (absent) parent on the left
    let mut stack: Vec<(Node, Position, Position, bool)> = vec![(r.root, 0, n - 1, true)];
    while let Some((v, lo, hi, parent_left)) = stack.pop() {
        if parent_left {
            direct[v] = hi;
            let mut pos = hi;
            for &c in &r.children[v] {
                stack.push((c, pos - r.size[c], pos - 1, false));
                pos -= r.size[c];
            }
        } else {
            direct[v] = lo;
            let mut pos = lo + 1;
            for &c in &r.children[v] {
                stack.push((c, pos, pos + r.size[c] - 1, true));
                pos += r.size[c];
            }
        }
    }
    Arrangement::from_direct(direct)
}

/// The centroidal vertices of a free tree: the one or two vertices
/// minimizing the maximum size of the components left by their removal.
pub(crate) fn centroid(t: &FreeTree) -> (Node, Option<Node>) {
    debug_assert!(t.is_tree() && t.num_nodes() > 0);
    let n = t.num_nodes();
    let r = SortedRooting::of_free_tree(t, 0);
    let mut best = usize::MAX;
    let mut first = 0;
    let mut second = None;
    for u in 0..n {
        let mut largest = n - r.size[u];
        if let Some(&c) = r.children[u].first() {
            largest = largest.max(r.size[c]);
        }
        match largest.cmp(&best) {
            core::cmp::Ordering::Less => {
                best = largest;
                first = u;
                second = None;
            }
            core::cmp::Ordering::Equal => second = Some(u),
            core::cmp::Ordering::Greater => {}
        }
    }
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linarr::sum_edge_lengths;

    fn path(n: usize) -> FreeTree {
        let edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1)).collect();
        FreeTree::from_edges(n, &edges).unwrap()
    }

    #[test]
    fn centroid_of_path() {
        assert_eq!(centroid(&path(5)), (2, None));
        let (a, b) = centroid(&path(4));
        assert_eq!((a, b), (1, Some(2)));
    }

    #[test]
    fn min_embedding_of_star_is_tight() {
        let t = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let r = SortedRooting::of_free_tree(&t, 0);
        let arr = embed_min_projective(&r, 5);
        assert_eq!(sum_edge_lengths(t.graph(), &arr), 1 + 1 + 2 + 2);
    }

    #[test]
    fn max_embedding_of_star_stretches() {
        let t = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let r = SortedRooting::of_free_tree(&t, 0);
        let arr = embed_max_projective(&r, 5);
        assert_eq!(sum_edge_lengths(t.graph(), &arr), 1 + 2 + 3 + 4);
    }
}
