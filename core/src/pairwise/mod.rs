pub mod engine;
pub mod score;

pub use engine::PairwiseEngine;
pub use score::{hscore, hscore_parallel, hscore_rows, HScore};
