//! Parser for the cleaned restaurant CSV export.
//!
//! Expected header (column order is free, extra columns are ignored):
//! `restaurant_name,primary_cuisine|cuisines,city,cost_bucket,cost,rating,votes`
//!
//! Record splitting is delegated to the `csv` crate, so quoted fields may
//! contain commas, `""` escapes and line breaks. A leading UTF-8 byte order
//! mark is ignored.

use crate::error::{DataLoadError, Result};
use crate::types::{CuisineColumn, Row};
use csv::StringRecord;
use rayon::prelude::*;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Cell values the cleaning step leaves behind for "no rating".
const MISSING_MARKERS: &[&str] = &["", "nan", "new", "-", "null", "none"];

/// Read a whole file into a String.
///
/// Invalid UTF-8 sequences are replaced rather than rejected; restaurant
/// names in scraped exports are not always clean.
pub fn read_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Positions of the columns we care about within a record.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    name: usize,
    cuisine: usize,
    city: usize,
    cost_bucket: usize,
    cost: usize,
    rating: usize,
    votes: usize,
    width: usize,
}

impl ColumnLayout {
    fn from_header(headers: &[String], cuisine_column: CuisineColumn) -> Result<Self> {
        // Names are tried in order, so an alias never shadows the canonical column
        let find = |names: &[&str]| -> Result<usize> {
            names
                .iter()
                .find_map(|n| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(n)))
                .ok_or_else(|| DataLoadError::MissingColumn {
                    column: names[0].to_string(),
                })
        };

        Ok(Self {
            name: find(&["restaurant_name", "name"])?,
            cuisine: find(&[cuisine_column.header()])?,
            city: find(&["city"])?,
            cost_bucket: find(&["cost_bucket"])?,
            cost: find(&["cost"])?,
            rating: find(&["rating"])?,
            votes: find(&["votes"])?,
            width: headers.len(),
        })
    }
}

/// Parse CSV text into rows plus the resolved cuisine column.
///
/// `file` is only used to label parse errors. Records are split
/// sequentially, then converted to rows in parallel; the returned rows keep
/// file order.
pub fn parse_rows(content: &str, file: &str) -> Result<(Vec<Row>, CuisineColumn)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(e, file))?
        .iter()
        .map(String::from)
        .collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(DataLoadError::EmptyDataset);
    }

    let cuisine_column = CuisineColumn::resolve(headers.as_slice())?;
    let layout = ColumnLayout::from_header(&headers, cuisine_column)?;

    let records = reader
        .records()
        .map(|record| {
            let record = record.map_err(|e| csv_error(e, file))?;
            let line_no = record.position().map(|p| p.line() as usize).unwrap_or(0);
            Ok((line_no, record))
        })
        .collect::<Result<Vec<(usize, StringRecord)>>>()?;

    let rows = records
        .par_iter()
        .map(|(line_no, record)| parse_row(record, *line_no, file, &layout))
        .collect::<Result<Vec<Row>>>()?;

    Ok((rows, cuisine_column))
}

/// Map a `csv` reader error onto the crate's error type.
fn csv_error(err: csv::Error, file: &str) -> DataLoadError {
    let line = err.position().map(|p| p.line() as usize).unwrap_or(0);
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => DataLoadError::FieldCountMismatch {
            expected: *expected_len as usize,
            found: *len as usize,
            line,
        },
        _ => DataLoadError::ParseError {
            file: file.to_string(),
            line,
            reason: err.to_string(),
        },
    }
}

/// Convert a single record according to `layout`.
fn parse_row(record: &StringRecord, line_no: usize, file: &str, layout: &ColumnLayout) -> Result<Row> {
    let parse_error = |reason: String| DataLoadError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason,
    };

    if record.len() != layout.width {
        return Err(DataLoadError::FieldCountMismatch {
            expected: layout.width,
            found: record.len(),
            line: line_no,
        });
    }

    let field = |idx: usize| record.get(idx).unwrap_or_default().trim();

    let name = field(layout.name);
    if name.is_empty() {
        return Err(parse_error("Missing restaurant name".to_string()));
    }

    Ok(Row {
        name: name.to_string(),
        cuisine: field(layout.cuisine).to_string(),
        city: field(layout.city).to_string(),
        cost_bucket: field(layout.cost_bucket).to_string(),
        cost: parse_cost(field(layout.cost)).map_err(parse_error)?,
        rating: parse_rating(field(layout.rating)).map_err(parse_error)?,
        votes: parse_votes(field(layout.votes)).map_err(parse_error)?,
    })
}

fn is_missing(s: &str) -> bool {
    MISSING_MARKERS.iter().any(|m| s.eq_ignore_ascii_case(m))
}

/// Parse cost for two.
///
/// Example: "1,200" -> Ok(1200.0)
fn parse_cost(s: &str) -> std::result::Result<f64, String> {
    if s.is_empty() {
        return Err("Missing cost".to_string());
    }
    let cleaned: String = s.chars().filter(|c| *c != ',').collect();
    let cost: f64 = cleaned
        .trim()
        .parse()
        .map_err(|e| format!("Invalid cost '{}': {}", s, e))?;
    if !cost.is_finite() || cost < 0.0 {
        return Err(format!("Invalid cost '{}': must be a non-negative number", s));
    }
    Ok(cost)
}

/// Parse an aggregate rating.
///
/// Example: "4.1"   -> Ok(Some(4.1))
///          "4.1/5" -> Ok(Some(4.1))
///          "NEW"   -> Ok(None)
fn parse_rating(s: &str) -> std::result::Result<Option<f32>, String> {
    if is_missing(s) {
        return Ok(None);
    }
    let value = s.strip_suffix("/5").unwrap_or(s).trim();
    let rating: f32 = value
        .parse()
        .map_err(|e| format!("Invalid rating '{}': {}", s, e))?;
    if rating.is_nan() {
        return Ok(None);
    }
    Ok(Some(rating))
}

/// Parse a vote count.
///
/// Pandas exports integer columns containing NaN as floats, so "12.0" is
/// accepted as 12.
fn parse_votes(s: &str) -> std::result::Result<Option<u32>, String> {
    if is_missing(s) {
        return Ok(None);
    }
    if let Ok(votes) = s.parse::<u32>() {
        return Ok(Some(votes));
    }
    match s.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 && v >= 0.0 && v <= u32::MAX as f64 => Ok(Some(v as u32)),
        _ => Err(format!("Invalid votes '{}': expected a non-negative integer", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "restaurant_name,cuisines,city,cost_bucket,cost,rating,votes";

    #[test]
    fn test_parse_rows_quoted_fields() {
        let csv = format!(
            "{}\n\"Say \"\"hi\"\"\",\"North Indian, Chinese\",Pune,low,\"1,200\",4.0,3\n",
            HEADER
        );
        let (rows, _) = parse_rows(&csv, "test.csv").unwrap();

        assert_eq!(rows[0].name, r#"Say "hi""#);
        assert_eq!(rows[0].cuisine, "North Indian, Chinese");
        assert_eq!(rows[0].cost, 1200.0);
    }

    #[test]
    fn test_parse_rows_multiline_field() {
        let csv = format!(
            "{},reviews\nTrattoria,Italian,Bangalore,low,400,4.5,10,\"great\nfood\"\nWok Inn,Chinese,Pune,low,300,3.9,8,ok\n",
            HEADER
        );
        let (rows, _) = parse_rows(&csv, "test.csv").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Trattoria");
        assert_eq!(rows[1].name, "Wok Inn");
    }

    #[test]
    fn test_parse_rows_strips_bom() {
        let csv = format!("\u{feff}{}\nTrattoria,Italian,Bangalore,low,400,4.5,10\n", HEADER);
        let (rows, _) = parse_rows(&csv, "test.csv").unwrap();

        assert_eq!(rows[0].name, "Trattoria");
    }

    #[test]
    fn test_canonical_name_column_wins_over_alias() {
        let csv = "name,restaurant_name,cuisines,city,cost_bucket,cost,rating,votes\n\
                   short,Trattoria Roma,Italian,Bangalore,low,400,4.5,10\n";
        let (rows, _) = parse_rows(csv, "test.csv").unwrap();

        assert_eq!(rows[0].name, "Trattoria Roma");
    }

    #[test]
    fn test_parse_cost() {
        assert_eq!(parse_cost("1,200").unwrap(), 1200.0);
        assert_eq!(parse_cost("400").unwrap(), 400.0);
        assert!(parse_cost("").is_err());
        assert!(parse_cost("-5").is_err());
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("4.1").unwrap(), Some(4.1));
        assert_eq!(parse_rating("3.9/5").unwrap(), Some(3.9));
        assert_eq!(parse_rating("NEW").unwrap(), None);
        assert_eq!(parse_rating("NaN").unwrap(), None);
        assert_eq!(parse_rating("").unwrap(), None);
        assert!(parse_rating("great").is_err());
    }

    #[test]
    fn test_parse_votes() {
        assert_eq!(parse_votes("12").unwrap(), Some(12));
        assert_eq!(parse_votes("12.0").unwrap(), Some(12));
        assert_eq!(parse_votes("nan").unwrap(), None);
        assert!(parse_votes("1.5").is_err());
        assert!(parse_votes("-3").is_err());
    }

    #[test]
    fn test_parse_rows_field_count_mismatch() {
        let csv = "restaurant_name,cuisines,city,cost_bucket,cost,rating,votes\n\
                   Cafe,Italian,X,low,400\n";
        let err = parse_rows(csv, "test.csv").unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch { expected: 7, found: 5, line: 2 }
        ));
    }

    #[test]
    fn test_parse_rows_missing_column() {
        let csv = "restaurant_name,cuisines,city,cost,rating,votes\n";
        let err = parse_rows(csv, "test.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn { ref column } if column == "cost_bucket"));
    }
}
