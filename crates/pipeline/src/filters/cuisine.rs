//! Filter to keep only restaurants serving one of the requested cuisines.

use crate::query::Query;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::Row;

/// Keeps rows whose cuisine is one of `query.cuisines`.
///
/// ## Algorithm
/// Exact, case-sensitive membership test against the resolved cuisine
/// column. "Italian" does not match "Italian, Pizza". Rows with no cuisine
/// never match an active filter. An empty cuisine list keeps every row.
pub struct CuisineFilter;

impl Filter for CuisineFilter {
    fn name(&self) -> &str {
        "CuisineFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a Row>, query: &Query) -> Result<Vec<&'a Row>> {
        if query.cuisines.is_empty() {
            return Ok(rows);
        }
        let filtered = rows
            .into_iter()
            .filter(|row| {
                !row.cuisine.is_empty() && query.cuisines.iter().any(|c| *c == row.cuisine)
            })
            .collect();
        Ok(filtered)
    }
}
