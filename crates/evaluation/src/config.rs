//! Evaluation run settings.

use serde::{Deserialize, Serialize};

/// How many synthetic queries to draw, and from which seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    pub n_queries: usize,
    pub seed: u64,
}

impl EvalConfig {
    pub fn new(n_queries: usize, seed: u64) -> Self {
        Self { n_queries, seed }
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            n_queries: 3,
            seed: 42,
        }
    }
}
