//! # Recommendation Engine
//!
//! Filter, score and rank restaurants for a single query:
//! 1. Validate the query
//! 2. Apply the cuisine, city and budget filters
//! 3. Drop rows without a rating or vote count
//! 4. Score survivors and stable-sort by descending score
//! 5. Return the top N as projected recommendations
//!
//! Every call is a pure function of the dataset and the query.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::filter_pipeline::FilterPipeline;
use crate::query::Query;
use crate::scoring::score_row;
use data_loader::{Dataset, Row};

/// One ranked restaurant, projected for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub cuisine: String,
    pub cost: f64,
    pub rating: f32,
    pub votes: u32,
    pub city: String,
    pub score: f64,
}

impl Recommendation {
    fn from_row(row: &Row, score: f64) -> Self {
        Self {
            name: row.name.clone(),
            cuisine: row.cuisine.clone(),
            cost: row.cost,
            // Only rankable rows reach projection
            rating: row.rating.unwrap_or_default(),
            votes: row.votes.unwrap_or_default(),
            city: row.city.clone(),
            score,
        }
    }
}

/// Ordered recommendations, highest score first, at most `top_n` long
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub items: Vec<Recommendation>,
}

impl RankedResult {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recommendation> {
        self.items.iter()
    }

    /// Scores in rank order
    pub fn scores(&self) -> Vec<f64> {
        self.items.iter().map(|r| r.score).collect()
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a Recommendation;
    type IntoIter = std::slice::Iter<'a, Recommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Recommend restaurants for `query` using the standard filter pipeline.
///
/// An empty result is returned (not an error) when nothing matches. Fails
/// only when `query.top_n` is 0.
pub fn recommend(dataset: &Dataset, query: &Query) -> Result<RankedResult> {
    recommend_with(&FilterPipeline::standard(), dataset, query)
}

/// Same as [`recommend`], with a caller-supplied filter pipeline.
pub fn recommend_with(
    pipeline: &FilterPipeline,
    dataset: &Dataset,
    query: &Query,
) -> Result<RankedResult> {
    query.validate()?;

    let filtered = pipeline.apply(dataset.rows().iter().collect(), query)?;

    let mut scored: Vec<(&Row, f64)> = filtered
        .into_iter()
        .filter_map(|row| score_row(row).map(|score| (row, score)))
        .collect();

    // sort_by is stable: equal scores keep dataset order
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(query.top_n);

    debug!(
        "Ranked {} restaurants for query (top_n: {})",
        scored.len(),
        query.top_n
    );

    Ok(RankedResult {
        items: scored
            .into_iter()
            .map(|(row, score)| Recommendation::from_row(row, score))
            .collect(),
    })
}

/// Recommendation engine bound to one shared dataset.
#[derive(Clone)]
pub struct Recommender {
    dataset: Arc<Dataset>,
    pipeline: Arc<FilterPipeline>,
}

impl Recommender {
    /// Create a recommender using the standard filter pipeline
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_pipeline(dataset, FilterPipeline::standard())
    }

    pub fn with_pipeline(dataset: Arc<Dataset>, pipeline: FilterPipeline) -> Self {
        Self {
            dataset,
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Recommend restaurants for `query`.
    pub fn recommend(&self, query: &Query) -> Result<RankedResult> {
        recommend_with(&self.pipeline, &self.dataset, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecommendError;
    use data_loader::CuisineColumn;

    fn row(name: &str, cuisine: &str, rating: Option<f32>, votes: Option<u32>) -> Row {
        Row {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            city: "X".to_string(),
            cost_bucket: "low".to_string(),
            cost: 250.0,
            rating,
            votes,
        }
    }

    fn dataset(rows: Vec<Row>) -> Dataset {
        Dataset::new(rows, CuisineColumn::PrimaryCuisine).unwrap()
    }

    #[test]
    fn test_unrankable_rows_excluded() {
        let ds = dataset(vec![
            row("Rated", "Thai", Some(3.0), Some(1)),
            row("NoRating", "Thai", None, Some(500)),
            row("NoVotes", "Thai", Some(5.0), None),
        ]);

        let result = recommend(&ds, &Query::new()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.items[0].name, "Rated");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ds = dataset(vec![
            row("First", "Thai", Some(4.0), Some(15)),
            row("Best", "Thai", Some(5.0), Some(15)),
            row("Second", "Thai", Some(4.0), Some(15)),
            row("Third", "Thai", Some(4.0), Some(15)),
        ]);

        let result = recommend(&ds, &Query::new()).unwrap();
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Best", "First", "Second", "Third"]);
    }

    #[test]
    fn test_top_n_truncates() {
        let ds = dataset(
            (0..25)
                .map(|i| row(&format!("R{}", i), "Thai", Some(3.0 + (i % 3) as f32 * 0.5), Some(i)))
                .collect(),
        );

        let result = recommend(&ds, &Query::new().with_top_n(5)).unwrap();
        assert_eq!(result.len(), 5);

        let all = recommend(&ds, &Query::new().with_top_n(100)).unwrap();
        assert_eq!(all.len(), 25);
    }

    #[test]
    fn test_invalid_top_n() {
        let ds = dataset(vec![row("A", "Thai", Some(4.0), Some(1))]);
        let err = recommend(&ds, &Query::new().with_top_n(0)).unwrap_err();
        assert!(matches!(err, RecommendError::InvalidTopN(0)));
    }

    #[test]
    fn test_recommender_matches_free_function() {
        let ds = Arc::new(dataset(vec![
            row("A", "Thai", Some(4.0), Some(1)),
            row("B", "Thai", Some(4.5), Some(9)),
        ]));
        let recommender = Recommender::new(ds.clone());
        let query = Query::new().with_cuisines(["Thai"]);

        assert_eq!(
            recommender.recommend(&query).unwrap(),
            recommend(&ds, &query).unwrap()
        );
    }
}
