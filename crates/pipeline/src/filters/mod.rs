//! Filter implementations for the recommendation pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod city;
pub mod cost_bucket;
pub mod cuisine;

// Re-export for convenience
pub use city::CityFilter;
pub use cost_bucket::CostBucketFilter;
pub use cuisine::CuisineFilter;

#[cfg(test)]
pub(crate) mod test_rows {
    use data_loader::Row;

    pub fn row(name: &str, cuisine: &str, city: &str, bucket: &str) -> Row {
        Row {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            city: city.to_string(),
            cost_bucket: bucket.to_string(),
            cost: 300.0,
            rating: Some(4.0),
            votes: Some(10),
        }
    }
}
