//! # Data Loader Crate
//!
//! This crate loads the cleaned restaurant table into an immutable,
//! in-memory [`Dataset`].
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Row, CuisineColumn, Dataset)
//! - **parser**: Parse the CSV export into rows
//! - **index**: Build and validate the Dataset
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_file(Path::new("data/zomato_cleaned.csv"))?;
//!
//! println!("{} restaurants, cuisine column: {}", dataset.len(), dataset.cuisine_column());
//! for city in dataset.cities() {
//!     println!("  {}", city);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{CuisineColumn, Dataset, Row};
