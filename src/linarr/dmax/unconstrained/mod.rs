//! Maximum unconstrained `D` of a free tree by branch and bound.
//!
//! The search places one vertex per position, leftmost first. Partial
//! states are pruned through level-signature reasoning: the per-position
//! level sequence of a maximum arrangement never increases and adjacent
//! vertices never share a level, so once the sequence reaches zero every
//! remaining leaf's level is forced, once it goes negative every
//! remaining chain vertex is forced, and unplaced chains alternate
//! between the two feasible chain levels. Forced levels are recorded as
//! per-vertex predictions with an origin tag and rolled back
//! symmetrically on backtrack. The completion bound combines the
//! per-vertex level caps with the identity that the remaining levels sum
//! to the negated count of edges already cut. Once the unplaced vertices
//! form an independent set the optimum completion is closed-form. The
//! incumbent is seeded with the bipartite maximum, itself a valid
//! arrangement.

mod paths;

use crate::arrangement::Arrangement;
use crate::bibliography;
use crate::graph::{FreeTree, GraphView};
use crate::linarr::dmax::max_sum_edge_lengths_bipartite_arrangement;
use crate::{Node, Position};

use paths::{decompose, PathDecomposition, PathKind};

/// Maximum unconstrained `D` of a free tree, with a witnessing
/// arrangement. Exact; worst-case exponential with tight pruning in
/// practice.
pub fn max_sum_edge_lengths_arrangement(t: &FreeTree) -> (u64, Arrangement) {
    bibliography::register_entry("Nurse2018a");
    bibliography::register_entry("Nurse2019a");
    debug_assert!(t.is_tree());
    let n = t.num_nodes();
    if n <= 1 {
        return (0, Arrangement::identity(n));
    }
    if n == 2 {
        return (1, Arrangement::identity(2));
    }
    let (seed_d, seed_arr) = max_sum_edge_lengths_bipartite_arrangement(t);
    let mut solver = Solver::new(t, seed_d, seed_arr);
    solver.run();
    let Solver {
        best, best_direct, ..
    } = solver;
    (best, Arrangement::from_direct(best_direct))
}

/// Maximum unconstrained `D`; see
/// [`max_sum_edge_lengths_arrangement`].
pub fn max_sum_edge_lengths(t: &FreeTree) -> u64 {
    max_sum_edge_lengths_arrangement(t).0
}

const NO_PREDICTION: i64 = i64::MIN;

/// Where a forced level value came from, for symmetric rollback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PredictionOrigin {
    None,
    /// A leaf forced to level −1 once the sequence reached zero.
    Leaf { trigger: Node },
    /// An antenna chain vertex forced to level −2 once the sequence
    /// went negative.
    Antenna { trigger: Node },
    /// A bridge chain vertex forced to level −2 once the sequence went
    /// negative.
    Bridge { trigger: Node },
}

/// What to do after placing one more vertex.
enum NextAction {
    /// The bound or a forced-level contradiction proves no improvement
    /// is possible below this state.
    Bound,
    /// Keep branching.
    ContinueNormally,
    /// The remaining vertices are independent; finish in closed form.
    ContinueIndependentSet,
    /// The remaining vertices are independent leaves; any completion
    /// order attains the same optimum.
    ContinueIndependentSetLeaves,
}

/// One element of the explicit search stack: the candidate vertices for
/// the next position, how far we got through them, and the predictions
/// fired by the applied candidate (to be rolled back before the next
/// one).
struct Frame {
    candidates: Vec<Node>,
    next: usize,
    applied: Option<Node>,
    predictions: Vec<Node>,
}

struct Solver<'a> {
    t: &'a FreeTree,
    n: usize,
    deg: Vec<usize>,
    decomposition: PathDecomposition,

    placed: Vec<bool>,
    pos: Vec<Position>,
    placed_order: Vec<Node>,
    level_of: Vec<i64>,
    /// number of already-placed neighbors of each vertex
    anchors: Vec<usize>,
    /// forced level of an unplaced vertex, `NO_PREDICTION` if free
    predicted: Vec<i64>,
    origin: Vec<PredictionOrigin>,
    /// D over edges with both endpoints placed
    partial_d: u64,
    /// Σ over placed u of π(u) · (unplaced neighbors of u)
    pending: u64,

    best: u64,
    best_direct: Vec<Position>,
}

impl<'a> Solver<'a> {
    fn new(t: &'a FreeTree, seed_d: u64, seed_arr: Arrangement) -> Self {
        let n = t.num_nodes();
        Solver {
            t,
            n,
            deg: (0..n).map(|u| t.degree(u)).collect(),
            decomposition: decompose(t),
            placed: vec![false; n],
            pos: vec![0; n],
            placed_order: Vec::with_capacity(n),
            level_of: vec![0; n],
            anchors: vec![0; n],
            predicted: vec![NO_PREDICTION; n],
            origin: vec![PredictionOrigin::None; n],
            partial_d: 0,
            pending: 0,
            best: seed_d,
            best_direct: seed_arr.direct().to_vec(),
        }
    }

    fn run(&mut self) {
        let mut stack = vec![self.make_frame()];
        while let Some(frame) = stack.last_mut() {
            if let Some(prev) = frame.applied.take() {
                let made = core::mem::take(&mut frame.predictions);
                self.roll_back_predictions(prev, &made);
                self.unplace(prev);
            }
            if frame.next >= frame.candidates.len() {
                stack.pop();
                continue;
            }
            let v = frame.candidates[frame.next];
            frame.next += 1;
            if !self.admissible(v) {
                continue;
            }
            self.place(v);
            frame.applied = Some(v);
            frame.predictions = self.fire_predictions(v);
            match self.next_action() {
                NextAction::Bound => {}
                NextAction::ContinueIndependentSet
                | NextAction::ContinueIndependentSetLeaves => self.complete_independent(),
                NextAction::ContinueNormally => {
                    let next_frame = self.make_frame();
                    stack.push(next_frame);
                }
            }
        }
    }

    /// Candidates for the next position, most promising first: continue
    /// the path of the last placed vertex, antennas before bridges, then
    /// hubs by degree.
    fn make_frame(&self) -> Frame {
        let last = self.placed_order.last().copied();
        let mut candidates: Vec<Node> = (0..self.n).filter(|&v| !self.placed[v]).collect();
        let decomposition = &self.decomposition;
        candidates.sort_by_key(|&v| {
            let frontier = match last {
                Some(l) if self.t.neighbors(l).contains(&v) => 0u8,
                _ if self.anchors[v] > 0 => 1,
                _ => 2,
            };
            let path_of = &decomposition.path_of;
            // walking along the chain of the last placed vertex first
            // keeps levels locally consistent and fails fast
            let (same_path, locality) = match last {
                Some(l) if path_of[l] != usize::MAX && path_of[l] == path_of[v] => (
                    0u8,
                    decomposition.index_in_path[l].abs_diff(decomposition.index_in_path[v]),
                ),
                _ => (1, 0),
            };
            let path_kind = match path_of[v] {
                usize::MAX => 0u8,
                p => match decomposition.paths[p].kind {
                    PathKind::Antenna => 1,
                    PathKind::Bridge => 2,
                },
            };
            (
                frontier,
                same_path,
                locality,
                path_kind,
                core::cmp::Reverse(self.deg[v]),
                v,
            )
        });
        Frame {
            candidates,
            next: 0,
            applied: None,
            predictions: Vec::new(),
        }
    }

    /// The final level of `v` if placed now: all its placed neighbors
    /// end up left of it, the rest right.
    fn level_if_placed(&self, v: Node) -> i64 {
        self.deg[v] as i64 - 2 * self.anchors[v] as i64
    }

    /// The level-signature conditions every maximum arrangement
    /// satisfies: per-position levels never increase, a vertex with a
    /// forced level must realize it, and no two adjacent vertices share
    /// a level.
    fn admissible(&self, v: Node) -> bool {
        let lv = self.level_if_placed(v);
        if let Some(&last) = self.placed_order.last() {
            if lv > self.level_of[last] {
                return false;
            }
        }
        if self.predicted[v] != NO_PREDICTION && self.predicted[v] != lv {
            return false;
        }
        self.t
            .neighbors(v)
            .iter()
            .all(|&x| !self.placed[x] || self.level_of[x] != lv)
    }

    fn place(&mut self, v: Node) {
        let k = self.placed_order.len();
        self.level_of[v] = self.level_if_placed(v);
        let mut gained = 0u64;
        for &x in self.t.neighbors(v) {
            if self.placed[x] {
                gained += (k - self.pos[x]) as u64;
                self.pending -= self.pos[x] as u64;
            }
            self.anchors[x] += 1;
        }
        self.partial_d += gained;
        self.pending += (k * (self.deg[v] - self.anchors[v])) as u64;
        self.placed[v] = true;
        self.pos[v] = k;
        self.placed_order.push(v);
    }

    fn unplace(&mut self, v: Node) {
        let k = self.pos[v];
        self.placed_order.pop();
        self.placed[v] = false;
        self.pending -= (k * (self.deg[v] - self.anchors[v])) as u64;
        let mut gained = 0u64;
        for &x in self.t.neighbors(v) {
            self.anchors[x] -= 1;
            if self.placed[x] {
                gained += (k - self.pos[x]) as u64;
                self.pending += self.pos[x] as u64;
            }
        }
        self.partial_d -= gained;
    }

    /// Infer the levels forced by placing `v`. Every vertex placed later
    /// has a level at most `level(v)`, so at zero the leaves lose their
    /// +1 option and below zero the chain vertices lose 0 and +2.
    /// Returns the predicted vertices so the caller can roll them back.
    fn fire_predictions(&mut self, v: Node) -> Vec<Node> {
        let level = self.level_of[v];
        let mut made = Vec::new();
        if level <= 0 {
            for w in 0..self.n {
                if !self.placed[w] && self.deg[w] == 1 && self.predicted[w] == NO_PREDICTION {
                    self.predicted[w] = -1;
                    self.origin[w] = PredictionOrigin::Leaf { trigger: v };
                    made.push(w);
                }
            }
        }
        if level <= -1 {
            for w in 0..self.n {
                if !self.placed[w] && self.deg[w] == 2 && self.predicted[w] == NO_PREDICTION {
                    self.predicted[w] = -2;
                    let path = self.decomposition.path_of[w];
                    self.origin[w] = if path != usize::MAX
                        && self.decomposition.paths[path].kind == PathKind::Antenna
                    {
                        PredictionOrigin::Antenna { trigger: v }
                    } else {
                        PredictionOrigin::Bridge { trigger: v }
                    };
                    made.push(w);
                }
            }
        }
        made
    }

    /// Reverse the propagation of one trigger vertex.
    fn roll_back_predictions(&mut self, trigger: Node, made: &[Node]) {
        for &w in made {
            debug_assert!(matches!(
                self.origin[w],
                PredictionOrigin::Leaf { trigger: t }
                | PredictionOrigin::Antenna { trigger: t }
                | PredictionOrigin::Bridge { trigger: t } if t == trigger
            ));
            self.predicted[w] = NO_PREDICTION;
            self.origin[w] = PredictionOrigin::None;
        }
    }

    /// A forced-level contradiction: some unplaced vertex can never get
    /// below the current level, or two adjacent unplaced vertices are
    /// forced onto the same level.
    fn has_contradiction(&self) -> bool {
        let last = match self.placed_order.last() {
            Some(&l) => self.level_of[l],
            None => return false,
        };
        for w in 0..self.n {
            if self.placed[w] {
                continue;
            }
            if -(self.deg[w] as i64) > last {
                return true;
            }
            if self.predicted[w] != NO_PREDICTION
                && self.t.neighbors(w).iter().any(|&x| {
                    !self.placed[x]
                        && self.predicted[x] != NO_PREDICTION
                        && self.predicted[x] == self.predicted[w]
                })
            {
                return true;
            }
        }
        false
    }

    fn next_action(&mut self) -> NextAction {
        let k = self.placed_order.len();
        if k == self.n {
            if self.partial_d > self.best {
                self.best = self.partial_d;
                self.best_direct.copy_from_slice(&self.pos);
            }
            return NextAction::Bound;
        }
        let mut independent = true;
        let mut all_leaves = true;
        for w in 0..self.n {
            if self.placed[w] {
                continue;
            }
            if self.deg[w] != 1 {
                all_leaves = false;
            }
            if self.deg[w] != self.anchors[w] {
                independent = false;
                break;
            }
        }
        if independent {
            return if all_leaves {
                NextAction::ContinueIndependentSetLeaves
            } else {
                NextAction::ContinueIndependentSet
            };
        }
        if self.has_contradiction() {
            return NextAction::Bound;
        }
        if self.upper_bound(k) <= self.best {
            NextAction::Bound
        } else {
            NextAction::ContinueNormally
        }
    }

    /// Level caps of the unplaced vertices, ascending. A vertex
    /// contributes at most its degree, except that once the level
    /// sequence is at most 1 the chain vertices of every unplaced run
    /// alternate between −2 and 0, so a run of length r contributes
    /// ⌈r/2⌉ caps of 2 and ⌊r/2⌋ of 0.
    fn level_caps(&self) -> Vec<u64> {
        let below_two = self
            .placed_order
            .last()
            .map_or(false, |&l| self.level_of[l] <= 1);
        let mut caps: Vec<u64> = Vec::with_capacity(self.n - self.placed_order.len());
        if below_two {
            for path in &self.decomposition.paths {
                let interior = &path.vertices[1..path.vertices.len() - 1];
                let mut run = 0usize;
                for &w in interior {
                    if !self.placed[w] {
                        run += 1;
                    } else {
                        push_run_caps(&mut caps, run);
                        run = 0;
                    }
                }
                push_run_caps(&mut caps, run);
            }
            for w in 0..self.n {
                if !self.placed[w] && self.deg[w] != 2 {
                    caps.push(self.deg[w] as u64);
                }
            }
        } else {
            caps.extend(
                (0..self.n)
                    .filter(|&w| !self.placed[w])
                    .map(|w| self.deg[w] as u64),
            );
        }
        caps.sort_unstable();
        caps
    }

    /// Admissible completion bound from level-signature arithmetic.
    ///
    /// In any completion the per-position coefficients are the negated
    /// levels, non-decreasing and bounded by the caps, and they sum to
    /// the number of edges already cut by the placed prefix. Pairing
    /// sorted caps with ascending positions and charging the cap
    /// surplus at the earliest position never under-estimates.
    fn upper_bound(&self, k: usize) -> u64 {
        let caps = self.level_caps();
        let mut optimistic = 0i64;
        let mut cap_sum = 0i64;
        for (j, &c) in caps.iter().enumerate() {
            optimistic += (k + j) as i64 * c as i64;
            cap_sum += c as i64;
        }
        let cut_edges: i64 = (0..self.n)
            .filter(|&w| !self.placed[w])
            .map(|w| self.anchors[w] as i64)
            .sum();
        let slack = cap_sum - cut_edges;
        debug_assert!(slack >= 0);
        let bound =
            self.partial_d as i64 + optimistic - k as i64 * slack - self.pending as i64;
        bound.max(0) as u64
    }

    /// Exact closed-form completion once the unplaced vertices form an
    /// independent set: every remaining edge goes to a placed vertex,
    /// so vertices with more placed neighbors belong further right.
    /// When all of them are leaves the coefficients tie and any order
    /// is optimal.
    fn complete_independent(&mut self) {
        let k = self.placed_order.len();
        let mut rest: Vec<Node> = (0..self.n).filter(|&w| !self.placed[w]).collect();
        rest.sort_unstable_by_key(|&w| (self.anchors[w], w));
        let extra: u64 = rest
            .iter()
            .enumerate()
            .map(|(j, &w)| ((k + j) * self.anchors[w]) as u64)
            .sum();
        let total = self.partial_d + extra - self.pending;
        if total > self.best {
            self.best = total;
            self.best_direct.copy_from_slice(&self.pos);
            for (j, &w) in rest.iter().enumerate() {
                self.best_direct[w] = k + j;
            }
        }
    }
}

fn push_run_caps(caps: &mut Vec<u64>, run: usize) {
    for _ in 0..(run + 1) / 2 {
        caps.push(2);
    }
    for _ in 0..run / 2 {
        caps.push(0);
    }
}
