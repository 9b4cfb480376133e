//! Block-level structure: splitting a document into blocks and naming
//! each block's shape.

mod classify;
mod segment;

pub use classify::{BlockType, classify_block};
pub use segment::segment_blocks;
