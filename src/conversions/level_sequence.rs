use crate::graph::{GraphView, RootedTree};
use crate::Node;

/// The level sequence of a rooted tree: the depth of every vertex in
/// preorder, with the root at level 1.
///
/// Children are visited in neighbor-list order, so normalized trees
/// produce a deterministic sequence.
pub fn level_sequence_of(t: &RootedTree) -> Vec<usize> {
    let n = t.num_nodes();
    let mut seq = Vec::with_capacity(n);
    let mut stack = vec![(t.root(), 1usize)];
    while let Some((u, level)) = stack.pop() {
        seq.push(level);
        // reversed so the first child is emitted first
        for &c in t.children(u).iter().rev() {
            stack.push((c, level + 1));
        }
    }
    seq
}

/// Rebuild a rooted tree from a preorder level sequence.
///
/// Vertex `i` is the `i`-th vertex in preorder; the parent of a vertex
/// at level `l` is the most recent vertex at level `l - 1`. The sequence
/// must start with 1 and never jump by more than one level, which is
/// debug-asserted.
pub fn rooted_tree_from_level_sequence(seq: &[usize]) -> RootedTree {
    let n = seq.len();
    debug_assert!(n > 0 && seq[0] == 1, "preorder sequence starts at level 1");
    let mut edges: Vec<(Node, Node)> = Vec::with_capacity(n.saturating_sub(1));
    // last vertex seen at each level
    let mut last_at = vec![usize::MAX; n + 2];
    last_at[1] = 0;
    for (i, &level) in seq.iter().enumerate().skip(1) {
        debug_assert!(level >= 2 && level <= seq[i - 1] + 1, "level jump in sequence");
        edges.push((last_at[level - 1], i));
        last_at[level] = i;
    }
    RootedTree::from_edges(n, 0, &edges).expect("preorder sequence describes a tree")
}
