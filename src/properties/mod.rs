//! Numerical properties of graphs and trees: the size of `Q`, moments
//! of crossings and edge lengths over random arrangements, degree
//! moments, distances, and bipartite colorings.

mod coloring;
mod crossings;
mod degrees;
mod distances;
mod edge_lengths;
mod q;

pub use coloring::{bipartite_coloring, BipartiteColoring, Color};
pub use crossings::{exp_num_crossings, var_num_crossings, var_num_crossings_tree};
pub use degrees::{hubiness, max_degree, moment_degree, num_leaves, sum_squared_degrees};
pub use distances::{
    mean_hierarchical_distance, tree_centre, tree_centroid, tree_diameter,
};
pub use edge_lengths::{
    exp_sum_edge_lengths, exp_sum_edge_lengths_planar, exp_sum_edge_lengths_projective,
    var_sum_edge_lengths,
};
pub use q::{size_q, size_q_directed};
