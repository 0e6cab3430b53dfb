#![allow(dead_code)]

//! Brute-force oracles shared by the integration tests.

use linarr::graph::{FreeTree, GraphView};
use linarr::Arrangement;

/// Call `f` with every permutation of `0..n` (as position -> vertex).
pub fn for_each_permutation<F: FnMut(&[usize])>(n: usize, mut f: F) {
    let mut items: Vec<usize> = (0..n).collect();
    // Heap's algorithm, iterative
    let mut c = vec![0usize; n];
    f(&items);
    let mut i = 0;
    while i < n {
        if c[i] < i {
            if i % 2 == 0 {
                items.swap(0, i);
            } else {
                items.swap(c[i], i);
            }
            f(&items);
            c[i] += 1;
            i = 0;
        } else {
            c[i] = 0;
            i += 1;
        }
    }
}

pub fn d_of<G: GraphView>(g: &G, inverse: &[usize]) -> u64 {
    let arr = Arrangement::from_inverse(inverse.to_vec());
    linarr::linarr::sum_edge_lengths(g, &arr)
}

pub fn c_of<G: GraphView>(g: &G, inverse: &[usize]) -> u64 {
    let arr = Arrangement::from_inverse(inverse.to_vec());
    linarr::linarr::num_crossings(g, &arr, linarr::linarr::CrossingsAlgorithm::BruteForce)
}

pub fn is_planar<G: GraphView>(g: &G, inverse: &[usize]) -> bool {
    c_of(g, inverse) == 0
}

pub fn root_covered<G: GraphView>(g: &G, inverse: &[usize], root: usize) -> bool {
    let arr = Arrangement::from_inverse(inverse.to_vec());
    let rp = arr.position(root);
    g_edges(g).into_iter().any(|(u, v)| {
        let (a, b) = (
            arr.position(u).min(arr.position(v)),
            arr.position(u).max(arr.position(v)),
        );
        a < rp && rp < b
    })
}

fn g_edges<G: GraphView>(g: &G) -> Vec<(usize, usize)> {
    linarr::iterators::EdgeIter::new(g).collect()
}

/// Minimum D over arrangements satisfying `pred`.
pub fn brute_min<G: GraphView, P: FnMut(&[usize]) -> bool>(
    g: &G,
    n: usize,
    mut pred: P,
) -> u64 {
    let mut best = u64::MAX;
    for_each_permutation(n, |inv| {
        if pred(inv) {
            best = best.min(d_of(g, inv));
        }
    });
    best
}

/// Maximum D over arrangements satisfying `pred`.
pub fn brute_max<G: GraphView, P: FnMut(&[usize]) -> bool>(
    g: &G,
    n: usize,
    mut pred: P,
) -> u64 {
    let mut best = 0u64;
    for_each_permutation(n, |inv| {
        if pred(inv) {
            best = best.max(d_of(g, inv));
        }
    });
    best
}

/// A deterministic sample of labeled trees on `n` vertices, decoded
/// from stride-generated Prüfer sequences.
pub fn tree_sample(n: usize, count: usize) -> Vec<FreeTree> {
    let mut trees = Vec::new();
    if n == 2 {
        return vec![linarr::conversions::free_tree_from_prufer(&[], 2)];
    }
    let mut state = 0x9e37_79b9_7f4a_7c15u64;
    for _ in 0..count {
        let seq: Vec<usize> = (0..n - 2)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                (state >> 33) as usize % n
            })
            .collect();
        trees.push(linarr::conversions::free_tree_from_prufer(&seq, n));
    }
    trees
}
