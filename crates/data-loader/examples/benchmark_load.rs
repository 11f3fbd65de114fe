use anyhow::{Context, Result};
use data_loader::Dataset;
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    let path = Path::new("data/zomato_cleaned.csv");

    println!("Loading restaurant dataset...\n");

    let start = Instant::now();
    let dataset = Dataset::load_from_file(path).context("Failed to load dataset")?;
    let elapsed = start.elapsed();

    let (rows, rankable) = dataset.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Restaurants: {}", rows);
    println!("Rankable: {}", rankable);
    println!("Cuisine column: {}", dataset.cuisine_column());
    println!(
        "Cuisines: {}, Cities: {}, Budgets: {}",
        dataset.cuisines().len(),
        dataset.cities().len(),
        dataset.cost_buckets().len()
    );
    println!("\nPerformance: {:.0} rows/second",
             rows as f64 / elapsed.as_secs_f64());
    Ok(())
}
