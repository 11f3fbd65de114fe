//! Filtering and ranking of restaurant listings.
//!
//! This crate provides:
//! - Query type describing what the user asked for
//! - Filter trait and implementations for cuisine, city and budget
//! - FilterPipeline for composing filters
//! - The popularity-adjusted score and the `recommend` entry point
//!
//! ## Architecture
//! A query is processed in stages:
//! 1. Filters remove rows that don't match the query (logical AND)
//! 2. Rows without a rating or vote count are dropped
//! 3. Survivors are scored and stable-sorted, highest first
//! 4. The first `top_n` are projected into `Recommendation`s
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{recommend, Query};
//!
//! let query = Query::new()
//!     .with_cuisines(["North Indian"])
//!     .with_city("Bangalore")
//!     .with_cost_bucket("low");
//!
//! let results = recommend(&dataset, &query)?;
//! for rec in &results {
//!     println!("{} ({:.2})", rec.name, rec.score);
//! }
//! ```

pub mod error;
pub mod query;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod scoring;
pub mod recommender;

// Re-export main types
pub use error::RecommendError;
pub use query::{Query, DEFAULT_TOP_N};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use scoring::{score, score_row, SCORE_VOTE_EXPONENT};
pub use recommender::{recommend, recommend_with, RankedResult, Recommendation, Recommender};
