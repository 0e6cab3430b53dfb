use crate::arrangement::Arrangement;
use crate::graph::GraphView;
use crate::iterators::PairIter;

fn interleave(arr: &Arrangement, e: (usize, usize), f: (usize, usize)) -> bool {
    let (a, b) = order(arr.position(e.0), arr.position(e.1));
    let (c, d) = order(arr.position(f.0), arr.position(f.1));
    (a < c && c < b && b < d) || (c < a && a < d && d < b)
}

fn order(p: usize, q: usize) -> (usize, usize) {
    if p < q {
        (p, q)
    } else {
        (q, p)
    }
}

/// Count crossings by testing every independent edge pair from `Q`.
pub fn num_crossings_brute_force<G: GraphView>(g: &G, arr: &Arrangement) -> u64 {
    PairIter::new(g)
        .filter(|&(e, f)| interleave(arr, e, f))
        .count() as u64
}

/// Brute-force count that stops as soon as `upper_bound` is exceeded.
pub fn num_crossings_brute_force_upper_bound<G: GraphView>(
    g: &G,
    arr: &Arrangement,
    upper_bound: u64,
) -> u64 {
    let mut count = 0u64;
    for (e, f) in PairIter::new(g) {
        if interleave(arr, e, f) {
            count += 1;
            if count > upper_bound {
                return upper_bound + 1;
            }
        }
    }
    count
}
