//! Synthetic query generation.
//!
//! Queries are drawn from the (cuisine, city, budget) combinations that
//! actually occur in the dataset, so every sampled query matches at least
//! one row before the rankability check.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use tracing::debug;

use crate::error::{EvaluationError, Result};
use data_loader::Dataset;
use pipeline::{Query, DEFAULT_TOP_N};

/// One observed (cuisine, city, cost_bucket) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination<'a> {
    pub cuisine: &'a str,
    pub city: &'a str,
    pub cost_bucket: &'a str,
}

impl Combination<'_> {
    /// Single-cuisine, single-city, single-budget query for this triple
    pub fn to_query(&self) -> Query {
        Query::new()
            .with_cuisines([self.cuisine])
            .with_city(self.city)
            .with_cost_bucket(self.cost_bucket)
            .with_top_n(DEFAULT_TOP_N)
    }
}

/// Distinct combinations in first-occurrence order.
///
/// Rows with an empty cuisine, city or budget are skipped.
pub fn distinct_combinations(dataset: &Dataset) -> Vec<Combination<'_>> {
    let mut seen = HashSet::new();
    let mut combinations = Vec::new();

    for row in dataset.rows() {
        if row.cuisine.is_empty() || row.city.is_empty() || row.cost_bucket.is_empty() {
            continue;
        }
        let combination = Combination {
            cuisine: &row.cuisine,
            city: &row.city,
            cost_bucket: &row.cost_bucket,
        };
        if seen.insert(combination) {
            combinations.push(combination);
        }
    }
    combinations
}

/// Draw `n` distinct combinations with a seeded RNG and turn each into a query.
///
/// The same dataset and seed always produce the same queries in the same
/// order. Asking for more queries than there are combinations fails with
/// [`EvaluationError::InsufficientData`] instead of returning fewer.
pub fn build_sample_queries(dataset: &Dataset, n: usize, seed: u64) -> Result<Vec<Query>> {
    let combinations = distinct_combinations(dataset);
    if n > combinations.len() {
        return Err(EvaluationError::InsufficientData {
            requested: n,
            available: combinations.len(),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let picked = index::sample(&mut rng, combinations.len(), n);

    debug!(
        "Sampled {} of {} distinct combinations (seed: {})",
        n,
        combinations.len(),
        seed
    );

    Ok(picked
        .into_iter()
        .map(|i| combinations[i].to_query())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{CuisineColumn, Row};

    fn row(cuisine: &str, city: &str, bucket: &str) -> Row {
        Row {
            name: format!("{} in {}", cuisine, city),
            cuisine: cuisine.to_string(),
            city: city.to_string(),
            cost_bucket: bucket.to_string(),
            cost: 300.0,
            rating: Some(4.0),
            votes: Some(10),
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                row("Italian", "X", "low"),
                row("Italian", "X", "low"),
                row("Chinese", "X", "low"),
                row("Italian", "Y", "high"),
                row("", "Y", "high"),
                row("Thai", "", "low"),
            ],
            CuisineColumn::PrimaryCuisine,
        )
        .unwrap()
    }

    #[test]
    fn test_distinct_combinations() {
        let ds = dataset();
        let combos = distinct_combinations(&ds);

        assert_eq!(combos.len(), 3);
        assert_eq!(combos[0].cuisine, "Italian");
        assert_eq!(combos[1].cuisine, "Chinese");
        assert_eq!(combos[2].city, "Y");
    }

    #[test]
    fn test_sample_queries_shape() {
        let ds = dataset();
        let queries = build_sample_queries(&ds, 3, 7).unwrap();

        assert_eq!(queries.len(), 3);
        for query in &queries {
            assert_eq!(query.cuisines.len(), 1);
            assert!(query.city_filter().is_some());
            assert!(query.cost_bucket_filter().is_some());
            assert_eq!(query.top_n, 10);
        }
        // All three combinations drawn, none twice
        let unique: HashSet<_> = queries
            .iter()
            .map(|q| q.cuisines[0].clone() + q.city_filter().unwrap())
            .collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_too_many_queries() {
        let ds = dataset();
        let err = build_sample_queries(&ds, 4, 42).unwrap_err();
        assert!(matches!(
            err,
            EvaluationError::InsufficientData { requested: 4, available: 3 }
        ));
    }

    #[test]
    fn test_zero_queries() {
        let ds = dataset();
        assert!(build_sample_queries(&ds, 0, 42).unwrap().is_empty());
    }
}
