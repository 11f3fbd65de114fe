//! # Evaluation Crate
//!
//! Offline evaluation harness for the recommendation engine.
//!
//! ## Components
//!
//! ### Sampling
//! Draws distinct (cuisine, city, budget) combinations from the dataset
//! with a seeded RNG and turns each into a single-filter-per-field query.
//!
//! ### Metrics
//! Replays each query through `pipeline::recommend` and aggregates:
//! - Average Precision@10 (rating >= 4.0 counts as relevant)
//! - Coverage (rows returned / dataset size)
//!
//! ## Example Usage
//!
//! ```ignore
//! use evaluation::{build_sample_queries, evaluate};
//!
//! let queries = build_sample_queries(&dataset, 3, 42)?;
//! let report = evaluate(&dataset, &queries)?;
//!
//! println!("Average Precision@10: {:.2}", report.average_precision_at_k);
//! println!("Recommendation Coverage: {:.2}%", report.coverage * 100.0);
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod sampling;

pub use config::EvalConfig;
pub use error::{EvaluationError, Result};
pub use metrics::{evaluate, precision_at_k, EvaluationReport, QueryOutcome, RELEVANCE_THRESHOLD};
pub use sampling::{build_sample_queries, distinct_combinations, Combination};

use data_loader::Dataset;

/// Sample queries according to `config` and evaluate them.
pub fn run(dataset: &Dataset, config: &EvalConfig) -> Result<EvaluationReport> {
    let queries = build_sample_queries(dataset, config.n_queries, config.seed)?;
    evaluate(dataset, &queries)
}
