//! Filter to keep only restaurants in the requested budget bucket.

use crate::query::Query;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::Row;

/// Keeps rows whose cost bucket equals `query.cost_bucket` exactly.
pub struct CostBucketFilter;

impl Filter for CostBucketFilter {
    fn name(&self) -> &str {
        "CostBucketFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a Row>, query: &Query) -> Result<Vec<&'a Row>> {
        let Some(bucket) = query.cost_bucket_filter() else {
            return Ok(rows);
        };
        Ok(rows.into_iter().filter(|row| row.cost_bucket == bucket).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_rows::row;

    #[test]
    fn test_cost_bucket_filter() {
        let rows = vec![
            row("A", "Italian", "X", "low"),
            row("B", "Italian", "X", "high"),
            row("C", "Italian", "X", "low"),
        ];
        let query = Query::new().with_cost_bucket("low");

        let filtered = CostBucketFilter.apply(rows.iter().collect(), &query).unwrap();

        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }
}
