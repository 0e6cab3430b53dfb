use crate::arrangement::Arrangement;
use crate::bibliography;
use crate::graph::{FreeTree, GraphView};
use crate::linarr::dopt::{embed_max_projective, SortedRooting};
use crate::linarr::sum_edge_lengths;
use crate::Node;

/// Maximum planar `D` of a free tree, with a witnessing arrangement.
///
/// Every planar arrangement is projective with respect to rooting the
/// tree at its leftmost vertex, so the planar maximum is the best
/// projective maximum over all n rootings. Centroidal rootings alone do
/// not suffice. The scan is done with a rerooting sweep: the projective
/// maximum of a rooting decomposes into per-vertex block sums, and
/// moving the root across an edge changes only the two endpoint terms.
/// O(n log n).
pub fn max_sum_edge_lengths_planar_arrangement(t: &FreeTree) -> (u64, Arrangement) {
    bibliography::register_entry("Alemany2024a");
    debug_assert!(t.is_tree());
    let n = t.num_nodes();
    if n <= 1 {
        return (0, Arrangement::identity(n));
    }

    // subtree sizes under the rooting at 0, then per-neighbor component
    // sizes comp[u][i] for the i-th neighbor of u
    let mut parent = vec![usize::MAX; n];
    let mut order = Vec::with_capacity(n);
    let mut seen = vec![false; n];
    seen[0] = true;
    let mut stack = vec![0usize];
    while let Some(u) = stack.pop() {
        order.push(u);
        for &v in t.neighbors(u) {
            if !seen[v] {
                seen[v] = true;
                parent[v] = u;
                stack.push(v);
            }
        }
    }
    let mut size = vec![1usize; n];
    for &u in order.iter().rev() {
        if parent[u] != usize::MAX {
            size[parent[u]] += size[u];
        }
    }
    let comp: Vec<Vec<usize>> = (0..n)
        .map(|u| {
            t.neighbors(u)
                .iter()
                .map(|&w| if parent[w] == u { size[w] } else { n - size[u] })
                .collect()
        })
        .collect();

    // per-vertex sorted component lists, prefix sums, and the block sum
    // h_none(u) = sum_s c_s * (k - s) over the descending list
    let mut hnone = vec![0u64; n];
    let mut prefix: Vec<Vec<u64>> = Vec::with_capacity(n);
    let mut sorted: Vec<Vec<u64>> = Vec::with_capacity(n);
    let mut sorted_index: Vec<Vec<usize>> = Vec::with_capacity(n);
    for u in 0..n {
        let k = comp[u].len();
        let mut by_size: Vec<(usize, usize)> =
            comp[u].iter().enumerate().map(|(i, &c)| (c, i)).collect();
        by_size.sort_unstable_by(|a, b| b.cmp(a));
        let mut idx = vec![0usize; k];
        let mut cs = Vec::with_capacity(k);
        let mut pre = Vec::with_capacity(k + 1);
        pre.push(0u64);
        for (j, &(c, i)) in by_size.iter().enumerate() {
            idx[i] = j;
            cs.push(c as u64);
            pre.push(pre[j] + c as u64);
            hnone[u] += (c as u64) * (k - j) as u64;
        }
        sorted.push(cs);
        prefix.push(pre);
        sorted_index.push(idx);
    }
    // h with the component toward neighbor index i removed
    let h_excl = |u: Node, i: usize| -> u64 {
        let j = sorted_index[u][i];
        let k = sorted[u].len();
        hnone[u] - sorted[u][j] * (k - j) as u64 - prefix[u][j]
    };
    let neighbor_index = |u: Node, w: Node| -> usize {
        t.neighbors(u)
            .iter()
            .position(|&x| x == w)
            .expect("tree edge")
    };

    // total for the rooting at 0
    let mut total0 = hnone[0];
    for v in 1..n {
        let p = parent[v];
        total0 += h_excl(v, neighbor_index(v, p));
    }

    // reroot across every edge: moving the root from u to its neighbor v
    // replaces u's full block sum by the one without v's component, and
    // vice versa for v
    let mut total = vec![0u64; n];
    total[0] = total0;
    let mut best_root = 0;
    let mut best = total0;
    // `order` is a preorder of the rooting at 0, so parents come first
    for &v in order.iter().skip(1) {
        let u = parent[v];
        total[v] = total[u] - hnone[u] + h_excl(u, neighbor_index(u, v))
            - h_excl(v, neighbor_index(v, u))
            + hnone[v];
        if total[v] > best {
            best = total[v];
            best_root = v;
        }
    }

    let rooting = SortedRooting::of_free_tree(t, best_root);
    let arr = embed_max_projective(&rooting, n);
    let d = sum_edge_lengths(t.graph(), &arr);
    debug_assert_eq!(d, best);
    (d, arr)
}

/// Maximum planar `D`; see
/// [`max_sum_edge_lengths_planar_arrangement`].
pub fn max_sum_edge_lengths_planar(t: &FreeTree) -> u64 {
    max_sum_edge_lengths_planar_arrangement(t).0
}
