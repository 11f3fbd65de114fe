//! Core domain types for the restaurant dataset.
//!
//! This module defines the data structures shared by every consumer:
//! - `Row`: one immutable restaurant listing
//! - `CuisineColumn`: which cuisine field was resolved at load time
//! - `Dataset`: the immutable handle passed to the engine and evaluator

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{DataLoadError, Result};

// =============================================================================
// Row
// =============================================================================

/// Represents one restaurant listing.
///
/// `rating` and `votes` are optional because unrated listings exist in the
/// source data. Rows missing either one are kept in the dataset but are never
/// ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub name: String,
    /// Value of the resolved cuisine column (see [`CuisineColumn`])
    pub cuisine: String,
    pub city: String,
    /// Coarse budget label such as "low", "medium" or "high"
    pub cost_bucket: String,
    /// Cost for two people
    pub cost: f64,
    /// Aggregate rating in [0.0, 5.0]
    pub rating: Option<f32>,
    /// Number of ratings behind `rating`
    pub votes: Option<u32>,
}

impl Row {
    /// True when the row carries everything needed to compute a score.
    pub fn is_rankable(&self) -> bool {
        matches!(self.rating, Some(r) if !r.is_nan()) && self.votes.is_some()
    }
}

// =============================================================================
// Cuisine column selection
// =============================================================================

/// The cuisine field a dataset was loaded from.
///
/// Resolved once from the CSV header. The engine, the evaluator and the
/// display layer all read `Row::cuisine`, so they agree on the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CuisineColumn {
    /// Engineered single-cuisine field (`primary_cuisine`)
    PrimaryCuisine,
    /// Raw, possibly multi-valued field (`cuisines`)
    Cuisines,
}

impl CuisineColumn {
    /// Pick the authoritative cuisine column from a header row.
    ///
    /// Prefers `primary_cuisine`; falls back to `cuisines`.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let has = |name: &str| {
            headers
                .iter()
                .any(|h| h.as_ref().trim().eq_ignore_ascii_case(name))
        };

        if has(Self::PrimaryCuisine.header()) {
            Ok(Self::PrimaryCuisine)
        } else if has(Self::Cuisines.header()) {
            Ok(Self::Cuisines)
        } else {
            Err(DataLoadError::MissingColumn {
                column: format!(
                    "{} or {}",
                    Self::PrimaryCuisine.header(),
                    Self::Cuisines.header()
                ),
            })
        }
    }

    /// Column name as it appears in the CSV header
    pub fn header(&self) -> &'static str {
        match self {
            CuisineColumn::PrimaryCuisine => "primary_cuisine",
            CuisineColumn::Cuisines => "cuisines",
        }
    }
}

impl fmt::Display for CuisineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

// =============================================================================
// Dataset - immutable in-memory table
// =============================================================================

/// Immutable snapshot of the cleaned restaurant table.
///
/// Constructed once at startup and shared by reference (or `Arc`) with the
/// recommendation engine and the evaluation harness. There is no mutating
/// API after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub(crate) rows: Vec<Row>,
    pub(crate) cuisine_column: CuisineColumn,

    // Secondary indices: sorted distinct values for selector widgets
    pub(crate) cuisines: Vec<String>,
    pub(crate) cities: Vec<String>,
    pub(crate) cost_buckets: Vec<String>,
}

impl Dataset {
    /// Build a dataset from already-parsed rows.
    ///
    /// Fails with [`DataLoadError::EmptyDataset`] when `rows` is empty, since
    /// no query could ever be answered.
    pub fn new(rows: Vec<Row>, cuisine_column: CuisineColumn) -> Result<Self> {
        if rows.is_empty() {
            return Err(DataLoadError::EmptyDataset);
        }

        let mut dataset = Self {
            rows,
            cuisine_column,
            cuisines: Vec::new(),
            cities: Vec::new(),
            cost_buckets: Vec::new(),
        };
        dataset.build_secondary_indices();
        Ok(dataset)
    }

    /// All rows, in file order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The cuisine column resolved at load time
    pub fn cuisine_column(&self) -> CuisineColumn {
        self.cuisine_column
    }

    /// Sorted distinct cuisines
    pub fn cuisines(&self) -> &[String] {
        &self.cuisines
    }

    /// Sorted distinct cities
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Sorted distinct cost buckets
    pub fn cost_buckets(&self) -> &[String] {
        &self.cost_buckets
    }

    /// Get counts for debugging/validation: (total rows, rankable rows)
    pub fn counts(&self) -> (usize, usize) {
        let rankable = self.rows.iter().filter(|r| r.is_rankable()).count();
        (self.rows.len(), rankable)
    }

    /// Populate the distinct-value lists from `rows`.
    pub(crate) fn build_secondary_indices(&mut self) {
        let mut cuisines = BTreeSet::new();
        let mut cities = BTreeSet::new();
        let mut cost_buckets = BTreeSet::new();

        for row in &self.rows {
            if !row.cuisine.is_empty() {
                cuisines.insert(row.cuisine.as_str());
            }
            if !row.city.is_empty() {
                cities.insert(row.city.as_str());
            }
            if !row.cost_bucket.is_empty() {
                cost_buckets.insert(row.cost_bucket.as_str());
            }
        }

        self.cuisines = cuisines.into_iter().map(String::from).collect();
        self.cities = cities.into_iter().map(String::from).collect();
        self.cost_buckets = cost_buckets.into_iter().map(String::from).collect();
    }
}
