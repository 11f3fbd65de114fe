//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{CityFilter, CostBucketFilter, CuisineFilter};
use crate::query::Query;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::Row;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CuisineFilter)
///     .add_filter(CityFilter)
///     .add_filter(CostBucketFilter);
///
/// let filtered = pipeline.apply(dataset.rows().iter().collect(), &query)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The cuisine, city and budget filters used by `recommend`.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(CuisineFilter)
            .add_filter(CityFilter)
            .add_filter(CostBucketFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the rows.
    ///
    /// ## Algorithm
    /// 1. Start with the input rows
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    ///
    /// Stops early once nothing is left to filter.
    pub fn apply<'a>(&self, rows: Vec<&'a Row>, query: &Query) -> Result<Vec<&'a Row>> {
        tracing::debug!("Running filters: {:?}", self.filter_names());
        let mut current = rows;
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, query)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
