mod common;

use common::{for_each_permutation, tree_sample};
use linarr::graph::{GraphView, UndirectedGraph};
use linarr::linarr::{is_num_crossings_lesseq_than, num_crossings, CrossingsAlgorithm};
use linarr::Arrangement;

const ALGORITHMS: [CrossingsAlgorithm; 4] = [
    CrossingsAlgorithm::BruteForce,
    CrossingsAlgorithm::DynamicProgramming,
    CrossingsAlgorithm::Ladder,
    CrossingsAlgorithm::StackBased,
];

fn fixed_graphs() -> Vec<UndirectedGraph> {
    vec![
        // K4
        UndirectedGraph::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]),
        // C5
        UndirectedGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]),
        // K{2,3}
        UndirectedGraph::from_edges(5, &[(0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4)]),
        // a dense 6-vertex graph
        UndirectedGraph::from_edges(
            6,
            &[
                (0, 1),
                (0, 3),
                (0, 4),
                (1, 2),
                (1, 5),
                (2, 3),
                (2, 4),
                (3, 5),
                (4, 5),
            ],
        ),
    ]
}

#[test]
fn algorithms_agree_on_all_arrangements() {
    for g in fixed_graphs() {
        let n = g.num_nodes();
        for_each_permutation(n, |inv| {
            let arr = Arrangement::from_inverse(inv.to_vec());
            let reference = num_crossings(&g, &arr, CrossingsAlgorithm::BruteForce);
            for alg in ALGORITHMS {
                assert_eq!(num_crossings(&g, &arr, alg), reference, "{alg:?} on {inv:?}");
            }
        });
    }
}

#[test]
fn algorithms_agree_on_trees() {
    for n in [5, 6, 7] {
        for t in tree_sample(n, 12) {
            for_each_permutation(n, |inv| {
                let arr = Arrangement::from_inverse(inv.to_vec());
                let reference = num_crossings(t.graph(), &arr, CrossingsAlgorithm::BruteForce);
                for alg in ALGORITHMS {
                    assert_eq!(num_crossings(t.graph(), &arr, alg), reference);
                }
            });
        }
    }
}

#[test]
fn reversal_leaves_crossings_unchanged() {
    for g in fixed_graphs() {
        let n = g.num_nodes();
        for_each_permutation(n, |inv| {
            let arr = Arrangement::from_inverse(inv.to_vec());
            let mirrored = arr.mirror();
            assert_eq!(
                num_crossings(&g, &arr, CrossingsAlgorithm::StackBased),
                num_crossings(&g, &mirrored, CrossingsAlgorithm::StackBased),
            );
        });
    }
}

#[test]
fn upper_bound_mode_matches_exact_or_caps() {
    for g in fixed_graphs() {
        let n = g.num_nodes();
        let arr = Arrangement::identity(n);
        let exact = num_crossings(&g, &arr, CrossingsAlgorithm::BruteForce);
        for alg in ALGORITHMS {
            for ub in 0..exact + 2 {
                let got = is_num_crossings_lesseq_than(&g, &arr, ub, alg);
                if exact <= ub {
                    assert_eq!(got, exact);
                } else {
                    assert_eq!(got, ub + 1);
                }
            }
        }
    }
}
