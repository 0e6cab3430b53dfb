mod common;

use common::{c_of, d_of, for_each_permutation, is_planar, root_covered, tree_sample};
use linarr::graph::{GraphView, RootedTree, UndirectedGraph};
use linarr::linarr::head_initial;
use linarr::numeric::{rational, rational_from, Rational};
use linarr::properties::{
    exp_num_crossings, exp_sum_edge_lengths, exp_sum_edge_lengths_planar,
    exp_sum_edge_lengths_projective, size_q, size_q_directed, var_num_crossings,
    var_num_crossings_tree, var_sum_edge_lengths,
};
use linarr::Arrangement;

/// Mean and variance of `f` over all arrangements of `0..n`.
fn enumerate_moments<F: FnMut(&[usize]) -> u64>(n: usize, mut f: F) -> (Rational, Rational) {
    let mut sum = 0u64;
    let mut sum_sq = 0u64;
    let mut count = 0u64;
    for_each_permutation(n, |inv| {
        let v = f(inv);
        sum += v;
        sum_sq += v * v;
        count += 1;
    });
    let mean = rational_from(sum) / rational_from(count);
    let var = rational_from(sum_sq) / rational_from(count) - mean.clone() * mean.clone();
    (mean, var)
}

fn fixed_graphs() -> Vec<UndirectedGraph> {
    vec![
        UndirectedGraph::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]),
        UndirectedGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]),
        UndirectedGraph::from_edges(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 3)]),
        UndirectedGraph::from_edges(5, &[(0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4)]),
    ]
}

#[test]
fn crossing_moments_match_enumeration() {
    for g in fixed_graphs() {
        let n = g.num_nodes();
        let (mean, var) = enumerate_moments(n, |inv| c_of(&g, inv));
        assert_eq!(exp_num_crossings(&g), mean);
        assert_eq!(var_num_crossings(&g), var);
    }
    for n in [4, 5, 6, 7] {
        for t in tree_sample(n, 5) {
            let (mean, var) = enumerate_moments(n, |inv| c_of(t.graph(), inv));
            assert_eq!(exp_num_crossings(&t), mean);
            assert_eq!(var_num_crossings_tree(&t), var);
            assert_eq!(var_num_crossings(t.graph()), var);
        }
    }
}

#[test]
fn edge_length_moments_match_enumeration() {
    for g in fixed_graphs() {
        let n = g.num_nodes();
        let (mean, var) = enumerate_moments(n, |inv| d_of(&g, inv));
        assert_eq!(exp_sum_edge_lengths(&g), mean);
        assert_eq!(var_sum_edge_lengths(&g), var);
    }
    for n in [4, 5, 6] {
        for t in tree_sample(n, 5) {
            let (mean, var) = enumerate_moments(n, |inv| d_of(t.graph(), inv));
            assert_eq!(exp_sum_edge_lengths(t.graph()), mean);
            assert_eq!(var_sum_edge_lengths(t.graph()), var);
        }
    }
}

#[test]
fn projective_expectation_matches_enumeration() {
    for n in [3, 4, 5, 6] {
        for t in tree_sample(n, 4) {
            for root in 0..n {
                let rt = RootedTree::from_free_tree(&t, root);
                let mut sum = 0u64;
                let mut count = 0u64;
                for_each_permutation(n, |inv| {
                    if is_planar(t.graph(), inv) && !root_covered(t.graph(), inv, root) {
                        sum += d_of(t.graph(), inv);
                        count += 1;
                    }
                });
                let expected = rational_from(sum) / rational_from(count);
                assert_eq!(exp_sum_edge_lengths_projective(&rt), expected);
            }
        }
    }
}

#[test]
fn planar_expectation_matches_enumeration() {
    for n in [3, 4, 5, 6] {
        for t in tree_sample(n, 4) {
            let mut sum = 0u64;
            let mut count = 0u64;
            for_each_permutation(n, |inv| {
                if is_planar(t.graph(), inv) {
                    sum += d_of(t.graph(), inv);
                    count += 1;
                }
            });
            let expected = rational_from(sum) / rational_from(count);
            assert_eq!(exp_sum_edge_lengths_planar(&t), expected);
        }
    }
}

#[test]
fn q_sizes() {
    // K4 has three pairs of opposite edges
    let k4 = &fixed_graphs()[0];
    assert_eq!(size_q(k4), 3);
    // directed two-cycle plus detached arc
    let d = linarr::graph::DirectedGraph::from_edges(4, &[(0, 1), (1, 0), (2, 3)]);
    assert_eq!(size_q_directed(&d), 2);
}

#[test]
fn head_initial_fraction() {
    let t = RootedTree::from_edges(4, 0, &[(0, 1), (1, 2), (2, 3)]).unwrap();
    let identity = Arrangement::identity(4);
    assert_eq!(head_initial(&t, &identity), rational(1, 1));
    assert_eq!(head_initial(&t, &identity.mirror()), rational(0, 1));
}
