pub mod ai;
pub mod common;

pub use ai::{run_match, MatchResult};
