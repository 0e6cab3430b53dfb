//! Property-based tests over random labeled trees.

use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};

use linarr::conversions::{
    free_tree_from_prufer, head_vector_of, prufer_sequence_of, rooted_tree_from_head_vector,
};
use linarr::graph::{FreeTree, GraphView, RootedTree};
use linarr::isomorphism::are_trees_isomorphic;
use linarr::linarr::{dmax, dmin, num_crossings, sum_edge_lengths, CrossingsAlgorithm};
use linarr::Arrangement;

/// A random labeled tree drawn through a uniform Prüfer sequence.
#[derive(Clone, Debug)]
struct Tree(FreeTree);

impl Arbitrary for Tree {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = 2 + usize::arbitrary(g) % 14;
        if n == 2 {
            return Tree(free_tree_from_prufer(&[], 2));
        }
        let seq: Vec<usize> = (0..n - 2).map(|_| usize::arbitrary(g) % n).collect();
        Tree(free_tree_from_prufer(&seq, n))
    }
}

/// A random arrangement of `0..n`, produced by uniform swaps.
fn shuffled_arrangement(g: &mut Gen, n: usize) -> Arrangement {
    let mut inverse: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = usize::arbitrary(g) % (i + 1);
        inverse.swap(i, j);
    }
    Arrangement::from_inverse(inverse)
}

#[derive(Clone, Debug)]
struct Arranged {
    tree: Tree,
    arr: Arrangement,
}

impl Arbitrary for Arranged {
    fn arbitrary(g: &mut Gen) -> Self {
        let tree = Tree::arbitrary(g);
        let n = tree.0.num_nodes();
        Arranged {
            tree,
            arr: shuffled_arrangement(g, n),
        }
    }
}

quickcheck! {
    fn crossings_are_algorithm_independent(input: Arranged) -> bool {
        let g = input.tree.0.graph();
        let reference = num_crossings(g, &input.arr, CrossingsAlgorithm::BruteForce);
        [
            CrossingsAlgorithm::DynamicProgramming,
            CrossingsAlgorithm::Ladder,
            CrossingsAlgorithm::StackBased,
        ]
        .into_iter()
        .all(|alg| num_crossings(g, &input.arr, alg) == reference)
    }

    fn crossings_invariant_under_reversal(input: Arranged) -> bool {
        let g = input.tree.0.graph();
        num_crossings(g, &input.arr, CrossingsAlgorithm::StackBased)
            == num_crossings(g, &input.arr.mirror(), CrossingsAlgorithm::StackBased)
    }

    fn edge_lengths_at_least_edge_count(input: Arranged) -> bool {
        let g = input.tree.0.graph();
        sum_edge_lengths(g, &input.arr) >= g.num_edges() as u64
    }

    fn minimum_arrangements_are_planar(t: Tree) -> bool {
        let (_, arr) = dmin::min_sum_edge_lengths_shiloach_arrangement(&t.0);
        num_crossings(t.0.graph(), &arr, CrossingsAlgorithm::StackBased) == 0
    }

    fn minimum_algorithms_agree(t: Tree) -> bool {
        let planar = dmin::min_sum_edge_lengths_planar(&t.0);
        dmin::min_sum_edge_lengths_shiloach(&t.0) == planar
            && dmin::min_sum_edge_lengths_chung(&t.0) == planar
    }

    fn optimum_chain_orders_hold(t: Tree) -> bool {
        let n = t.0.num_nodes();
        if n > 11 {
            // keep the branch and bound fast in the property run
            return true;
        }
        let planar_min = dmin::min_sum_edge_lengths_planar(&t.0);
        let unc_min = dmin::min_sum_edge_lengths_shiloach(&t.0);
        let planar_max = dmax::max_sum_edge_lengths_planar(&t.0);
        let unc_max = dmax::max_sum_edge_lengths(&t.0);
        let bip_max = dmax::max_sum_edge_lengths_bipartite(&t.0);
        unc_min <= planar_min && planar_max <= unc_max && bip_max <= unc_max
    }

    fn projective_bounds_planar(t: Tree) -> bool {
        let planar_min = dmin::min_sum_edge_lengths_planar(&t.0);
        let planar_max = dmax::max_sum_edge_lengths_planar(&t.0);
        (0..t.0.num_nodes()).all(|root| {
            let rt = RootedTree::from_free_tree(&t.0, root);
            planar_min <= dmin::min_sum_edge_lengths_projective(&rt)
                && dmax::max_sum_edge_lengths_projective(&rt) <= planar_max
        })
    }

    fn prufer_round_trip(t: Tree) -> TestResult {
        let n = t.0.num_nodes();
        if n < 3 {
            return TestResult::discard();
        }
        let seq = prufer_sequence_of(&t.0);
        let back = free_tree_from_prufer(&seq, n);
        let mut a: Vec<_> = t.0.edges().collect();
        let mut b: Vec<_> = back.edges().collect();
        a.sort_unstable();
        b.sort_unstable();
        TestResult::from_bool(a == b)
    }

    fn head_vector_round_trip(t: Tree) -> bool {
        let rt = RootedTree::from_free_tree(&t.0, 0);
        let heads = head_vector_of(&rt);
        match rooted_tree_from_head_vector(&heads) {
            Ok(back) => {
                let mut a: Vec<_> = rt.edges().collect();
                let mut b: Vec<_> = back.edges().collect();
                a.sort_unstable();
                b.sort_unstable();
                a == b && back.root() == rt.root()
            }
            Err(_) => false,
        }
    }

    fn isomorphic_to_itself(t: Tree) -> bool {
        are_trees_isomorphic(&t.0, &t.0)
    }
}
