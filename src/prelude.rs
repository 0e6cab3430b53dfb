//! Commonly used items.
//!
//! ```
//! use linarr::prelude::*;
//! ```

pub use crate::arrangement::Arrangement;
pub use crate::classify::{tree_type, TreeType};
pub use crate::graph::{DirectedGraph, FreeTree, GraphView, RootedTree, UndirectedGraph};
pub use crate::linarr::{num_crossings, sum_edge_lengths, CrossingsAlgorithm};
pub use crate::{Edge, Node, Position};
