// Public API exports
pub mod cli;
pub mod partition;

// Re-export main types for convenience
pub use partition::{
    AverageChunks, InvalidArgument, average_assign, average_chunks, group_sizes, has_elements,
    is_empty, partition,
};
