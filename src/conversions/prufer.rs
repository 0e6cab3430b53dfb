use crate::graph::{FreeTree, GraphView};
use crate::Node;

/// Decode a Prüfer sequence into the labeled free tree it encodes.
///
/// The sequence must have length `n - 2` with entries in `0..n`, for
/// `n >= 2`. Runs in linear time by keeping a moving pointer to the
/// smallest unconsumed leaf.
///
/// ```
/// use linarr::conversions::free_tree_from_prufer;
/// use linarr::graph::GraphView;
///
/// // scenario S5: [0, 0, 0] decodes to a star with center 0
/// let t = free_tree_from_prufer(&[0, 0, 0], 5);
/// assert_eq!(t.degree(0), 4);
/// ```
pub fn free_tree_from_prufer(seq: &[Node], n: usize) -> FreeTree {
    debug_assert!(n >= 2 && seq.len() == n - 2);
    debug_assert!(seq.iter().all(|&x| x < n));
    let mut t = FreeTree::new(n);
    if n == 2 {
        t.add_edge(0, 1);
        return t;
    }
    let mut deg = vec![1usize; n];
    for &x in seq {
        deg[x] += 1;
    }
    let mut ptr = (0..n).find(|&i| deg[i] == 1).unwrap_or(0);
    let mut leaf = ptr;
    for &x in seq {
        t.add_edge(leaf, x);
        deg[x] -= 1;
        if deg[x] == 1 && x < ptr {
            leaf = x;
        } else {
            ptr += 1;
            while deg[ptr] != 1 {
                ptr += 1;
            }
            leaf = ptr;
        }
    }
    t.add_edge(leaf, n - 1);
    t.normalize();
    t
}

/// Encode a labeled free tree with `n >= 2` vertices as its Prüfer
/// sequence, repeatedly deleting the smallest leaf.
pub fn prufer_sequence_of(t: &FreeTree) -> Vec<Node> {
    let n = t.num_nodes();
    debug_assert!(t.is_tree() && n >= 2);
    let mut deg: Vec<usize> = (0..n).map(|u| t.degree(u)).collect();
    let mut seq = Vec::with_capacity(n.saturating_sub(2));
    if n == 2 {
        return seq;
    }
    let mut removed = vec![false; n];
    let mut ptr = (0..n).find(|&i| deg[i] == 1).unwrap_or(0);
    let mut leaf = ptr;
    for _ in 0..n - 2 {
        // the unique remaining neighbor of the current leaf; every vertex
        // is scanned as the removed leaf at most once, so this stays
        // linear overall
        let x = t
            .neighbors(leaf)
            .iter()
            .copied()
            .find(|&v| !removed[v])
            .expect("leaf of the remaining tree has one neighbor");
        seq.push(x);
        removed[leaf] = true;
        deg[x] -= 1;
        if deg[x] == 1 && x < ptr {
            leaf = x;
        } else {
            ptr += 1;
            while ptr < n && deg[ptr] != 1 {
                ptr += 1;
            }
            leaf = ptr;
        }
    }
    seq
}
