pub mod mst;
pub mod types;

pub use mst::SpanningTreeAlgorithms;
pub use types::*;
