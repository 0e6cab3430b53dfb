//! Classification of syntactic dependency structures: the classes a
//! rooted tree with an arrangement belongs to.

use core::fmt;

use crate::arrangement::Arrangement;
use crate::bibliography;
use crate::graph::{GraphView, RootedTree};
use crate::iterators::EdgeIter;
use crate::{Edge, Node, Position};

/// The set of syntactic dependency classes a (tree, arrangement) pair
/// belongs to.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct SyntacticClasses {
    bits: u8,
}

impl SyntacticClasses {
    const PROJECTIVE: u8 = 1;
    const PLANAR: u8 = 2;
    const WG1: u8 = 4;
    const EC1: u8 = 8;

    /// No crossings and the root is not covered.
    pub fn is_projective(self) -> bool {
        self.bits & Self::PROJECTIVE != 0
    }

    /// No crossings.
    pub fn is_planar(self) -> bool {
        self.bits & Self::PLANAR != 0
    }

    /// Well-nested with gap degree at most 1, and not projective.
    pub fn is_wg1(self) -> bool {
        self.bits & Self::WG1 != 0
    }

    /// Every edge's crossing set is incident to one common vertex.
    pub fn is_ec1(self) -> bool {
        self.bits & Self::EC1 != 0
    }

    /// None of the known classes apply.
    pub fn is_unknown(self) -> bool {
        self.bits == 0
    }
}

impl fmt::Debug for SyntacticClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        if self.is_projective() {
            list.entry(&"projective");
        }
        if self.is_planar() {
            list.entry(&"planar");
        }
        if self.is_wg1() {
            list.entry(&"WG1");
        }
        if self.is_ec1() {
            list.entry(&"EC1");
        }
        if self.is_unknown() {
            list.entry(&"unknown");
        }
        list.finish()
    }
}

/// Classify the (tree, arrangement) pair.
pub fn classify(t: &RootedTree, arr: &Arrangement) -> SyntacticClasses {
    bibliography::register_entry("Gomez2011a");
    bibliography::register_entry("Pitler2013a");
    debug_assert!(t.is_arborescence());
    debug_assert!(arr.is_arrangement(t.num_nodes()));
    let n = t.num_nodes();
    let mut classes = SyntacticClasses::default();
    if n == 0 {
        return classes;
    }

    let edges: Vec<Edge> = EdgeIter::new(t).collect();
    let spans: Vec<(Position, Position)> = edges
        .iter()
        .map(|&(u, v)| span(arr, u, v))
        .collect();

    // pairwise crossings once, reused by the planar and EC1 tests
    let m = edges.len();
    let mut crossing_lists: Vec<Vec<usize>> = vec![Vec::new(); m];
    let mut crossings = 0usize;
    for i in 0..m {
        for j in i + 1..m {
            if interleave(spans[i], spans[j]) {
                crossing_lists[i].push(j);
                crossing_lists[j].push(i);
                crossings += 1;
            }
        }
    }

    if crossings == 0 {
        classes.bits |= SyntacticClasses::PLANAR;
        if !covered(&spans, arr.position(t.root())) {
            classes.bits |= SyntacticClasses::PROJECTIVE;
        }
    }

    // EC1: the edges crossing any fixed edge share a common vertex
    let ec1 = (0..m).all(|i| {
        let crossing = &crossing_lists[i];
        if crossing.len() <= 1 {
            return true;
        }
        let (a, b) = edges[crossing[0]];
        [a, b].iter().any(|&p| {
            crossing
                .iter()
                .all(|&j| edges[j].0 == p || edges[j].1 == p)
        })
    });
    if ec1 {
        classes.bits |= SyntacticClasses::EC1;
    }

    if !classes.is_projective() && is_well_nested_gap1(t, arr) {
        classes.bits |= SyntacticClasses::WG1;
    }
    classes
}

fn span(arr: &Arrangement, u: Node, v: Node) -> (Position, Position) {
    let (pu, pv) = (arr.position(u), arr.position(v));
    (pu.min(pv), pu.max(pv))
}

fn interleave(e: (Position, Position), f: (Position, Position)) -> bool {
    (e.0 < f.0 && f.0 < e.1 && e.1 < f.1) || (f.0 < e.0 && e.0 < f.1 && f.1 < e.1)
}

fn covered(spans: &[(Position, Position)], p: Position) -> bool {
    spans.iter().any(|&(a, b)| a < p && p < b)
}

/// Well-nestedness with gap degree at most one.
fn is_well_nested_gap1(t: &RootedTree, arr: &Arrangement) -> bool {
    let n = t.num_nodes();
    // positions of each subtree, sorted
    let mut subtree_positions: Vec<Vec<Position>> = vec![Vec::new(); n];
    let mut order = Vec::with_capacity(n);
    let mut stack = vec![t.root()];
    while let Some(u) = stack.pop() {
        order.push(u);
        stack.extend_from_slice(t.children(u));
    }
    let mut is_desc = vec![vec![false; n]; n];
    for &u in order.iter().rev() {
        subtree_positions[u].push(arr.position(u));
        is_desc[u][u] = true;
        let children: Vec<Node> = t.children(u).to_vec();
        for c in children {
            let sub = core::mem::take(&mut subtree_positions[c]);
            subtree_positions[u].extend_from_slice(&sub);
            subtree_positions[c] = sub;
            for w in 0..n {
                if is_desc[c][w] {
                    is_desc[u][w] = true;
                }
            }
        }
        subtree_positions[u].sort_unstable();
    }

    // gap degree: maximal runs of consecutive positions, minus one
    for u in 0..n {
        let runs = subtree_positions[u]
            .windows(2)
            .filter(|w| w[1] != w[0] + 1)
            .count()
            + 1;
        if runs > 2 {
            return false;
        }
    }

    // well-nestedness: disjoint subtrees never interleave
    for u in 0..n {
        for v in u + 1..n {
            if is_desc[u][v] || is_desc[v][u] {
                continue;
            }
            if interleaved_sets(&subtree_positions[u], &subtree_positions[v]) {
                return false;
            }
        }
    }
    true
}

/// Whether the two sorted disjoint position sets alternate
/// a < b < a' < b' in some order, i.e. form four or more blocks when
/// merged.
fn interleaved_sets(a: &[Position], b: &[Position]) -> bool {
    let mut blocks = 0;
    let mut last_from_a = None;
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        let from_a = j >= b.len() || (i < a.len() && a[i] < b[j]);
        if last_from_a != Some(from_a) {
            blocks += 1;
            last_from_a = Some(from_a);
        }
        if from_a {
            i += 1;
        } else {
            j += 1;
        }
    }
    blocks >= 4
}
