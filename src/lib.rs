//! **linarr** is a library for linear arrangements of graphs.
//!
//! A linear arrangement of a graph on *n* vertices is a bijection between
//! its vertices and the positions `0..n`. The library provides graph and
//! tree types tailored to arrangement computations, four algorithms for
//! the number of edge crossings *C*, exact minimizers and maximizers of
//! the sum of edge lengths *D* under projective, planar, bipartite and
//! unconstrained regimes, bijective tree encodings (head vectors, Prüfer
//! sequences, level sequences), moments of *C* and *D* over uniformly
//! random arrangements, and tree isomorphism.
//!
//! The most prominent types are [`graph::FreeTree`] and
//! [`graph::RootedTree`] together with [`Arrangement`].
//!
//! ```
//! use linarr::graph::FreeTree;
//! use linarr::Arrangement;
//! use linarr::linarr::{num_crossings, sum_edge_lengths, CrossingsAlgorithm};
//!
//! // the path 0 - 1 - 2 - 3 - 4
//! let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
//! let arr = Arrangement::identity(5);
//! assert_eq!(sum_edge_lengths(t.graph(), &arr), 4);
//! assert_eq!(num_crossings(t.graph(), &arr, CrossingsAlgorithm::StackBased), 0);
//! ```

pub mod arrangement;
pub mod bibliography;
pub mod classify;
pub mod conversions;
pub mod graph;
pub mod isomorphism;
pub mod iterators;
pub mod linarr;
pub mod numeric;
pub mod prelude;
pub mod properties;
pub mod unionfind;
pub mod visit;

#[cfg(feature = "quickcheck")]
pub mod quickcheck;

pub use crate::arrangement::Arrangement;

/// A vertex identifier: an integer in `0..n`.
pub type Node = usize;

/// A position in a linear arrangement: an integer in `0..n`.
pub type Position = usize;

/// An edge of a graph. Unordered for undirected graphs, `(source, target)`
/// for directed graphs.
pub type Edge = (Node, Node);
