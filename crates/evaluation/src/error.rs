//! Error types for the evaluation harness.

use pipeline::RecommendError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvaluationError {
    /// More queries were requested than distinct combinations exist
    #[error(
        "Insufficient data: requested {requested} sample queries but only {available} distinct (cuisine, city, budget) combinations exist"
    )]
    InsufficientData { requested: usize, available: usize },

    /// A query could not be run through the recommendation engine
    #[error("Recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
