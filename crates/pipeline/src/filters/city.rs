//! Filter to keep only restaurants in the requested city.

use crate::query::Query;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::Row;

/// Keeps rows whose city equals `query.city` exactly (case-sensitive).
pub struct CityFilter;

impl Filter for CityFilter {
    fn name(&self) -> &str {
        "CityFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a Row>, query: &Query) -> Result<Vec<&'a Row>> {
        let Some(city) = query.city_filter() else {
            return Ok(rows);
        };
        Ok(rows.into_iter().filter(|row| row.city == city).collect())
    }
}
