//! Dataset building and validation.
//!
//! Turns parsed rows into a validated [`Dataset`]:
//! - Resolve the cuisine column from the header
//! - Parse rows (in parallel, order preserved)
//! - Build the distinct-value option lists
//! - Validate row invariants

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

impl Dataset {
    /// Load the cleaned restaurant CSV from disk.
    ///
    /// This is the main entry point for loading data. An empty file, or one
    /// with a header and no data rows, fails with
    /// [`DataLoadError::EmptyDataset`].
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading restaurant dataset from {}", path.display());

        let content = parser::read_file(path)?;
        let file = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self::parse_csv(&content, &file)
    }

    /// Build a dataset from CSV text already held in memory.
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::parse_csv(content, "<memory>")
    }

    fn parse_csv(content: &str, file: &str) -> Result<Self> {
        let (rows, cuisine_column) = parser::parse_rows(content, file)?;
        let dataset = Dataset::new(rows, cuisine_column)?;
        dataset.validate()?;

        let (total, rankable) = dataset.counts();
        info!(
            "Loaded {} restaurants ({} rankable), cuisine column: {}",
            total, rankable, dataset.cuisine_column
        );
        Ok(dataset)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Every cost is finite and non-negative
    /// - Every present rating is within 0.0 - 5.0
    pub fn validate(&self) -> Result<()> {
        for row in &self.rows {
            if !row.cost.is_finite() || row.cost < 0.0 {
                return Err(DataLoadError::InvalidValue {
                    field: "cost".to_string(),
                    value: row.cost.to_string(),
                });
            }
            if let Some(rating) = row.rating {
                if !(0.0..=5.0).contains(&rating) {
                    return Err(DataLoadError::ValidationError(format!(
                        "rating {} for '{}' is outside 0.0 - 5.0",
                        rating, row.name
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
restaurant_name,cuisines,primary_cuisine,city,cost_bucket,cost,rating,votes
Trattoria,\"Italian, Pizza\",Italian,Bangalore,low,400,4.5,10
Wok Inn,Chinese,Chinese,Bangalore,medium,\"1,200\",3.9,120
Fresh Start,Cafe,Cafe,Mumbai,low,300,NEW,0
";

    #[test]
    fn test_load_prefers_primary_cuisine() {
        let dataset = Dataset::from_csv_str(SAMPLE).unwrap();

        assert_eq!(dataset.cuisine_column(), CuisineColumn::PrimaryCuisine);
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.rows()[0].cuisine, "Italian");
        assert_eq!(dataset.rows()[1].cost, 1200.0);
        assert_eq!(dataset.rows()[2].rating, None);
        assert_eq!(dataset.counts(), (3, 2));
    }

    #[test]
    fn test_load_falls_back_to_raw_cuisines() {
        let csv = "\
restaurant_name,cuisines,city,cost_bucket,cost,rating,votes
Trattoria,\"Italian, Pizza\",Bangalore,low,400,4.5,10
";
        let dataset = Dataset::from_csv_str(csv).unwrap();

        assert_eq!(dataset.cuisine_column(), CuisineColumn::Cuisines);
        assert_eq!(dataset.rows()[0].cuisine, "Italian, Pizza");
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let csv = "restaurant_name,cuisines,city,cost_bucket,cost,rating,votes\n";
        let err = Dataset::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, DataLoadError::EmptyDataset));
    }

    #[test]
    fn test_rating_out_of_range_fails_validation() {
        let csv = "\
restaurant_name,cuisines,city,cost_bucket,cost,rating,votes
Odd,Thai,Pune,low,200,7.5,3
";
        let err = Dataset::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, DataLoadError::ValidationError(_)));
    }

    #[test]
    fn test_load_with_bom_and_multiline_review() {
        let csv = "\u{feff}restaurant_name,cuisines,city,cost_bucket,cost,rating,votes,reviews
Trattoria,Italian,Bangalore,low,400,4.5,10,\"great
food\"
Wok Inn,Chinese,Bangalore,medium,350,4.0,50,fine
";
        let dataset = Dataset::from_csv_str(csv).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[0].name, "Trattoria");
        assert_eq!(dataset.rows()[1].votes, Some(50));
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::load_from_file(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_dataset() {
        // This test requires the actual dataset file
        // Place the cleaned export at ../../data/zomato_cleaned.csv
        let path = Path::new("../../data/zomato_cleaned.csv");

        if path.exists() {
            let dataset = Dataset::load_from_file(path).unwrap();
            assert!(!dataset.is_empty());
            assert!(!dataset.cities().is_empty());
        }
    }
}
