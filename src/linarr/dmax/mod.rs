//! Exact maximizers of the sum of edge lengths over trees, under the
//! projective, planar, bipartite and unconstrained regimes.

mod bipartite;
mod planar;
mod projective;
mod unconstrained;

pub use bipartite::{max_sum_edge_lengths_bipartite, max_sum_edge_lengths_bipartite_arrangement};
pub use planar::{max_sum_edge_lengths_planar, max_sum_edge_lengths_planar_arrangement};
pub use projective::{
    max_sum_edge_lengths_projective, max_sum_edge_lengths_projective_arrangement,
};
pub use unconstrained::{max_sum_edge_lengths, max_sum_edge_lengths_arrangement};
