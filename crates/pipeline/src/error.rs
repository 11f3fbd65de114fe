//! Error types for the recommendation engine.

use thiserror::Error;

/// Errors returned by [`recommend`](crate::recommend).
///
/// An empty result is not an error; only invalid input is.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// `top_n` must be at least 1
    #[error("Invalid top_n: {0} (must be >= 1)")]
    InvalidTopN(usize),

    /// A filter in the pipeline failed
    #[error("Filter failed: {0}")]
    Filter(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RecommendError>;
