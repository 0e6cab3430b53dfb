mod common;

use common::{brute_max, brute_min, is_planar, root_covered, tree_sample};
use linarr::graph::{FreeTree, GraphView, RootedTree};
use linarr::linarr::{dmax, dmin, num_crossings, sum_edge_lengths, CrossingsAlgorithm};

#[test]
fn projective_optima_match_brute_force() {
    for n in [4, 5, 6] {
        for t in tree_sample(n, 8) {
            for root in 0..n {
                let rt = RootedTree::from_free_tree(&t, root);
                let expect_min = brute_min(t.graph(), n, |inv| {
                    is_planar(t.graph(), inv) && !root_covered(t.graph(), inv, root)
                });
                let (dmin_got, arr_min) = dmin::min_sum_edge_lengths_projective_arrangement(&rt);
                assert_eq!(dmin_got, expect_min, "min, root {root}");
                assert_eq!(sum_edge_lengths(t.graph(), &arr_min), dmin_got);

                let expect_max = brute_max(t.graph(), n, |inv| {
                    is_planar(t.graph(), inv) && !root_covered(t.graph(), inv, root)
                });
                let (dmax_got, arr_max) = dmax::max_sum_edge_lengths_projective_arrangement(&rt);
                assert_eq!(dmax_got, expect_max, "max, root {root}");
                assert_eq!(sum_edge_lengths(t.graph(), &arr_max), dmax_got);
            }
        }
    }
}

#[test]
fn planar_optima_match_brute_force() {
    for n in [4, 5, 6, 7] {
        for t in tree_sample(n, 8) {
            let expect_min = brute_min(t.graph(), n, |inv| is_planar(t.graph(), inv));
            assert_eq!(dmin::min_sum_edge_lengths_planar(&t), expect_min);
            let expect_max = brute_max(t.graph(), n, |inv| is_planar(t.graph(), inv));
            let (got, arr) = dmax::max_sum_edge_lengths_planar_arrangement(&t);
            assert_eq!(got, expect_max);
            assert_eq!(num_crossings(t.graph(), &arr, CrossingsAlgorithm::Ladder), 0);
        }
    }
}

#[test]
fn bipartite_optima_match_brute_force() {
    use linarr::properties::{bipartite_coloring, Color};
    for n in [4, 5, 6, 7] {
        for t in tree_sample(n, 8) {
            let coloring = bipartite_coloring(t.graph());
            let separated = |inv: &[usize]| {
                // one color class strictly left of the other
                let mut switches = 0;
                let mut last = None;
                for &u in inv {
                    let c = coloring.color(u);
                    if last != Some(c) {
                        switches += 1;
                        last = Some(c);
                    }
                }
                switches <= 2
            };
            let expect_min = brute_min(t.graph(), n, separated);
            assert_eq!(dmin::min_sum_edge_lengths_bipartite(&t), expect_min);
            let expect_max = brute_max(t.graph(), n, separated);
            assert_eq!(dmax::max_sum_edge_lengths_bipartite(&t), expect_max);
        }
    }
}

#[test]
fn unconstrained_minimum_is_planar_and_exact() {
    for n in [4, 5, 6, 7] {
        for t in tree_sample(n, 8) {
            let expect = brute_min(t.graph(), n, |_| true);
            let (ys, arr_ys) = dmin::min_sum_edge_lengths_shiloach_arrangement(&t);
            let (fc, arr_fc) = dmin::min_sum_edge_lengths_chung_arrangement(&t);
            assert_eq!(ys, expect);
            assert_eq!(fc, expect);
            // a minimum arrangement of a tree is planar
            assert_eq!(num_crossings(t.graph(), &arr_ys, CrossingsAlgorithm::Ladder), 0);
            assert_eq!(num_crossings(t.graph(), &arr_fc, CrossingsAlgorithm::Ladder), 0);
        }
    }
}

#[test]
fn unconstrained_maximum_matches_brute_force() {
    for n in [4, 5, 6, 7] {
        for t in tree_sample(n, 8) {
            let expect = brute_max(t.graph(), n, |_| true);
            let (got, arr) = dmax::max_sum_edge_lengths_arrangement(&t);
            assert_eq!(got, expect);
            assert_eq!(sum_edge_lengths(t.graph(), &arr), got);
        }
    }
}

#[test]
fn optimum_chains_hold() {
    for n in [5, 6, 7, 8] {
        for t in tree_sample(n, 10) {
            let planar_min = dmin::min_sum_edge_lengths_planar(&t);
            let unc_min = dmin::min_sum_edge_lengths_shiloach(&t);
            let planar_max = dmax::max_sum_edge_lengths_planar(&t);
            let unc_max = dmax::max_sum_edge_lengths(&t);
            let bip_max = dmax::max_sum_edge_lengths_bipartite(&t);
            assert!(unc_min <= planar_min);
            assert!(planar_max <= unc_max);
            assert!(bip_max <= unc_max);
            for root in 0..n {
                let rt = RootedTree::from_free_tree(&t, root);
                assert!(planar_min <= dmin::min_sum_edge_lengths_projective(&rt));
                assert!(dmax::max_sum_edge_lengths_projective(&rt) <= planar_max);
            }
        }
    }
}

#[test]
fn star_with_long_leg() {
    // hand-checked spider: center 0, leaves 1 and 2, leg 0-3-4
    let t = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (3, 4)]).unwrap();
    let rt = RootedTree::from_free_tree(&t, 0);
    assert_eq!(dmin::min_sum_edge_lengths_projective(&rt), 1 + 1 + 2 + 1);
    assert_eq!(dmax::max_sum_edge_lengths_projective(&rt), 10);
}
