//! Static position scoring for the search.

pub mod heuristic;

pub use heuristic::{evaluate, evaluate_with, path_or_worst, EvalWeights};
