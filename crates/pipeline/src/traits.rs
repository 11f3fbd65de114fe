//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a dataset's rows.

use crate::query::Query;
use anyhow::Result;
use data_loader::Row;

/// Core trait for filtering rows.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// Filters are predicates over a single row, so the surviving set does not
/// depend on the order in which filters are applied.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared between callers
/// - Filters take ownership of the Vec of row references and return a filtered Vec
/// - Input order must be preserved; ranking ties fall back to it
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of rows.
    ///
    /// # Arguments
    /// * `rows` - The rows to filter (takes ownership of the Vec)
    /// * `query` - The query holding the filter values
    ///
    /// # Returns
    /// * `Ok(Vec<&Row>)` - The rows that passed, in input order
    /// * `Err` - If filtering fails
    fn apply<'a>(&self, rows: Vec<&'a Row>, query: &Query) -> Result<Vec<&'a Row>>;
}
