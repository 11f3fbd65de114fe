//! Offline quality metrics for the recommendation engine.
//!
//! - **Precision@K**: fraction of returned restaurants rated at or above
//!   [`RELEVANCE_THRESHOLD`], averaged over queries that returned anything
//! - **Coverage**: total rows returned across all queries divided by the
//!   dataset size. Overlapping queries count twice, so this can exceed 1.0.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use data_loader::Dataset;
use pipeline::{recommend, Query, RankedResult};

/// Minimum rating for a returned restaurant to count as relevant
pub const RELEVANCE_THRESHOLD: f32 = 4.0;

/// Result of running one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub query: Query,
    pub results: RankedResult,
    /// `None` when the query returned nothing
    pub precision: Option<f64>,
}

/// Aggregate metrics over a batch of queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub average_precision_at_k: f64,
    pub coverage: f64,
    pub queries_run: usize,
    pub queries_with_results: usize,
    pub total_returned: usize,
    pub dataset_size: usize,
    pub outcomes: Vec<QueryOutcome>,
}

/// Precision of one result list, or `None` for an empty list.
pub fn precision_at_k(results: &RankedResult) -> Option<f64> {
    if results.is_empty() {
        return None;
    }
    let relevant = results
        .iter()
        .filter(|r| r.rating >= RELEVANCE_THRESHOLD)
        .count();
    Some(relevant as f64 / results.len() as f64)
}

/// Run every query through `recommend` and aggregate precision and coverage.
///
/// Queries with no results contribute to coverage but not to the precision
/// average. With no non-empty results at all the average is 0.
pub fn evaluate(dataset: &Dataset, queries: &[Query]) -> Result<EvaluationReport> {
    let mut outcomes = Vec::with_capacity(queries.len());
    let mut total_returned = 0;
    let mut precisions = Vec::new();

    for (i, query) in queries.iter().enumerate() {
        let results = recommend(dataset, query)?;
        total_returned += results.len();

        let precision = precision_at_k(&results);
        if let Some(p) = precision {
            precisions.push(p);
        }

        info!(
            "Test case {}: cuisines={:?} city={:?} budget={:?} -> {} results, precision={}",
            i + 1,
            query.cuisines,
            query.city_filter().unwrap_or(""),
            query.cost_bucket_filter().unwrap_or(""),
            results.len(),
            precision
                .map(|p| format!("{:.2}", p))
                .unwrap_or_else(|| "n/a".to_string())
        );

        outcomes.push(QueryOutcome {
            query: query.clone(),
            results,
            precision,
        });
    }

    let average_precision_at_k = if precisions.is_empty() {
        0.0
    } else {
        precisions.iter().sum::<f64>() / precisions.len() as f64
    };
    let coverage = total_returned as f64 / dataset.len() as f64;

    info!(
        "Evaluation complete: Precision@K={:.2}, coverage={:.2}%",
        average_precision_at_k,
        coverage * 100.0
    );

    Ok(EvaluationReport {
        average_precision_at_k,
        coverage,
        queries_run: queries.len(),
        queries_with_results: precisions.len(),
        total_returned,
        dataset_size: dataset.len(),
        outcomes,
    })
}
