//! Tree isomorphism: cheap structural rejection followed by AHU
//! canonical names.

use crate::graph::{FreeTree, GraphView, RootedTree};
use crate::linarr::dopt;
use crate::properties::{max_degree, num_leaves, sum_squared_degrees};
use crate::Node;

/// Whether the cheap invariants already separate the two trees: vertex
/// count, leaf count, maximum degree and sum of squared degrees.
///
/// A `false` here proves non-isomorphism; `true` decides nothing.
pub fn fast_invariants_agree<G: GraphView>(a: &G, b: &G) -> bool {
    a.num_nodes() == b.num_nodes()
        && num_leaves(a) == num_leaves(b)
        && max_degree(a) == max_degree(b)
        && sum_squared_degrees(a) == sum_squared_degrees(b)
}

/// The AHU canonical name of the subtree below each vertex: a leaf is
/// `10`; an internal vertex wraps the sorted names of its children in
/// `1…0`. Two rooted trees are isomorphic exactly when their roots'
/// names match.
pub fn ahu_name(t: &RootedTree) -> String {
    debug_assert!(t.is_arborescence());
    let n = t.num_nodes();
    if n == 0 {
        return String::new();
    }
    let mut names: Vec<String> = vec![String::new(); n];
    let mut order = Vec::with_capacity(n);
    let mut stack = vec![t.root()];
    while let Some(u) = stack.pop() {
        order.push(u);
        stack.extend_from_slice(t.children(u));
    }
    for &u in order.iter().rev() {
        let mut child_names: Vec<String> = t
            .children(u)
            .iter()
            .map(|&c| core::mem::take(&mut names[c]))
            .collect();
        child_names.sort_unstable();
        let mut name = String::with_capacity(2 + child_names.iter().map(String::len).sum::<usize>());
        name.push('1');
        for c in child_names {
            name.push_str(&c);
        }
        name.push('0');
        names[u] = name;
    }
    core::mem::take(&mut names[t.root()])
}

/// Whether two rooted trees are isomorphic as unlabeled arborescences.
pub fn are_trees_isomorphic_rooted(a: &RootedTree, b: &RootedTree) -> bool {
    if !fast_invariants_agree(a, b) {
        return false;
    }
    ahu_name(a) == ahu_name(b)
}

/// Whether two free trees are isomorphic as unlabeled trees.
///
/// Each tree is rooted at its centroid; with two centroids both
/// rootings of the second tree are compared.
pub fn are_trees_isomorphic(a: &FreeTree, b: &FreeTree) -> bool {
    debug_assert!(a.is_tree() && b.is_tree());
    if !fast_invariants_agree(a, b) {
        return false;
    }
    if a.num_nodes() == 0 {
        return true;
    }
    let name_at = |t: &FreeTree, r: Node| ahu_name(&RootedTree::from_free_tree(t, r));
    let (ca, _) = dopt::centroid(a);
    let (cb1, cb2) = dopt::centroid(b);
    let name_a = name_at(a, ca);
    if name_a == name_at(b, cb1) {
        return true;
    }
    match cb2 {
        Some(c) => name_a == name_at(b, c),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflexive() {
        let t = FreeTree::from_edges(6, &[(0, 1), (1, 2), (1, 3), (3, 4), (3, 5)]).unwrap();
        assert!(are_trees_isomorphic(&t, &t));
    }

    #[test]
    fn relabeled_trees_match() {
        let a = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let b = FreeTree::from_edges(5, &[(4, 2), (2, 0), (0, 1), (1, 3)]).unwrap();
        assert!(are_trees_isomorphic(&a, &b));
    }

    #[test]
    fn different_shapes_reject() {
        let path = FreeTree::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let star = FreeTree::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        assert!(!are_trees_isomorphic(&path, &star));
        // same degree multiset, different shape, caught by AHU
        let a = FreeTree::from_edges(
            7,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (2, 5), (5, 6)],
        )
        .unwrap();
        let b = FreeTree::from_edges(
            7,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (1, 5), (5, 6)],
        )
        .unwrap();
        assert!(!are_trees_isomorphic(&a, &b));
    }

    #[test]
    fn rooted_orientation_matters() {
        let chain = RootedTree::from_edges(3, 0, &[(0, 1), (1, 2)]).unwrap();
        let fork = RootedTree::from_edges(3, 0, &[(0, 1), (0, 2)]).unwrap();
        assert!(!are_trees_isomorphic_rooted(&chain, &fork));
        assert_eq!(ahu_name(&fork), "110100");
        assert_eq!(ahu_name(&chain), "111000");
    }
}
