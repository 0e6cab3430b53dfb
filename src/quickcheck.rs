//! `Arbitrary` implementations for property-based tests.
//!
//! Random labeled trees are drawn through uniformly random Prüfer
//! sequences, so every labeled tree on `n` vertices is equally likely.
//!
//! Requires crate feature `"quickcheck"`.

use quickcheck::{Arbitrary, Gen};

use crate::conversions::free_tree_from_prufer;
use crate::graph::{FreeTree, GraphView, RootedTree};

impl Arbitrary for FreeTree {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = 2 + usize::arbitrary(g) % g.size().max(2);
        if n == 2 {
            return free_tree_from_prufer(&[], 2);
        }
        let seq: Vec<usize> = (0..n - 2).map(|_| usize::arbitrary(g) % n).collect();
        free_tree_from_prufer(&seq, n)
    }
}

impl Arbitrary for RootedTree {
    fn arbitrary(g: &mut Gen) -> Self {
        let t = FreeTree::arbitrary(g);
        let root = usize::arbitrary(g) % t.num_nodes();
        RootedTree::from_free_tree(&t, root)
    }
}
