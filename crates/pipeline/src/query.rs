//! Recommendation queries.

use crate::error::{RecommendError, Result};
use serde::{Deserialize, Serialize};

/// Number of results returned when the caller does not ask for a specific count.
pub const DEFAULT_TOP_N: usize = 10;

/// A user or evaluator request.
///
/// Empty filters mean "don't filter on this field". `Some("")` for `city` or
/// `cost_bucket` behaves the same as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Acceptable cuisines; empty means any cuisine
    pub cuisines: Vec<String>,
    pub city: Option<String>,
    pub cost_bucket: Option<String>,
    /// Maximum number of results, must be >= 1
    pub top_n: usize,
}

impl Query {
    /// A query with no filters and the default result cap.
    pub fn new() -> Self {
        Self {
            cuisines: Vec::new(),
            city: None,
            cost_bucket: None,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_cost_bucket(mut self, cost_bucket: impl Into<String>) -> Self {
        self.cost_bucket = Some(cost_bucket.into());
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// City filter, if one is active
    pub fn city_filter(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }

    /// Budget filter, if one is active
    pub fn cost_bucket_filter(&self) -> Option<&str> {
        self.cost_bucket.as_deref().filter(|b| !b.is_empty())
    }

    /// Reject queries that can never be answered.
    pub fn validate(&self) -> Result<()> {
        if self.top_n < 1 {
            return Err(RecommendError::InvalidTopN(self.top_n));
        }
        Ok(())
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}
