//! Bijective tree encodings and the text formats that carry them:
//! head vectors, Prüfer sequences, level sequences and edge lists.

mod edge_list;
mod head_vector;
mod level_sequence;
mod prufer;

pub use edge_list::{parse_edge_list, EdgeListError};
pub use head_vector::{
    head_vector_of, parse_head_vector, rooted_tree_from_head_vector, HeadVectorError,
};
pub use level_sequence::{level_sequence_of, rooted_tree_from_level_sequence};
pub use prufer::{free_tree_from_prufer, prufer_sequence_of};
