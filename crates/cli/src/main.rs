use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Dataset;
use evaluation::{EvalConfig, EvaluationReport};
use pipeline::{Query, RankedResult, Recommender, DEFAULT_TOP_N};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// DineRecs - Knowledge-based restaurant recommender
#[derive(Parser)]
#[command(name = "dine-recs")]
#[command(about = "Restaurant recommendations by cuisine, city and budget", long_about = None)]
struct Cli {
    /// Path to the cleaned restaurant CSV
    #[arg(short, long, default_value = "data/zomato_cleaned.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get restaurant recommendations
    Recommend {
        /// Cuisine to include (repeat for several)
        #[arg(long = "cuisine")]
        cuisines: Vec<String>,

        /// City to search in
        #[arg(long)]
        city: Option<String>,

        /// Budget bucket (e.g. low, medium, high)
        #[arg(long)]
        budget: Option<String>,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the cuisines, cities and budgets that can be selected
    Options,

    /// Evaluate the recommender on sampled queries
    Evaluate {
        /// Number of distinct (cuisine, city, budget) combinations to sample
        #[arg(long, default_value_t = EvalConfig::default().n_queries)]
        queries: usize,

        /// Random seed for sampling
        #[arg(long, default_value_t = EvalConfig::default().seed)]
        seed: u64,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // An unusable dataset is fatal before any query runs
    let start = Instant::now();
    let dataset = Arc::new(
        Dataset::load_from_file(&cli.data)
            .with_context(|| format!("Failed to load dataset from {}", cli.data.display()))?,
    );
    info!("Loaded dataset in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            cuisines,
            city,
            budget,
            limit,
            json,
        } => {
            let mut query = Query::new().with_cuisines(cuisines).with_top_n(limit);
            query.city = city;
            query.cost_bucket = budget;
            handle_recommend(dataset, &query, json)?
        }
        Commands::Options => handle_options(&dataset),
        Commands::Evaluate { queries, seed, json } => {
            handle_evaluate(&dataset, EvalConfig::new(queries, seed), json)?
        }
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(dataset: Arc<Dataset>, query: &Query, json: bool) -> Result<()> {
    let recommender = Recommender::new(dataset);
    let results = recommender
        .recommend(query)
        .context("Invalid recommendation query")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_recommendations(&results);
    }
    Ok(())
}

/// Handle the 'options' command
fn handle_options(dataset: &Dataset) {
    println!(
        "{} (cuisine column: {})",
        "Filter your preferences".bold().blue(),
        dataset.cuisine_column()
    );
    print_option_list("Cuisines", dataset.cuisines());
    print_option_list("Cities", dataset.cities());
    print_option_list("Budgets", dataset.cost_buckets());
}

fn print_option_list(heading: &str, values: &[String]) {
    println!("\n{} ({}):", heading.bold(), values.len());
    for value in values {
        println!("  {} {}", "•".green(), value);
    }
}

/// Handle the 'evaluate' command
fn handle_evaluate(dataset: &Dataset, config: EvalConfig, json: bool) -> Result<()> {
    let report = evaluation::run(dataset, &config).context("Evaluation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(results: &RankedResult) {
    println!("{}", "Recommended Restaurants".bold().blue());

    if results.is_empty() {
        println!("{}", "No restaurants match your preferences.".yellow());
        return;
    }

    for rec in results {
        println!("\n{}", rec.name.bold());
        println!("- Cuisine: {}", title_case(&rec.cuisine));
        println!("- Cost for two: ₹{}", rec.cost as i64);
        println!("- Rating: {} ⭐ ({} votes)", rec.rating, rec.votes);
        println!("- City: {}", rec.city);
        println!("---");
    }
}

fn print_report(report: &EvaluationReport) {
    for (i, outcome) in report.outcomes.iter().enumerate() {
        let query = &outcome.query;
        println!("\n{}", format!("Test Case {}:", i + 1).bold());
        println!(
            "Cuisine: {:?}, City: {}, Budget: {}",
            query.cuisines,
            query.city_filter().unwrap_or("-"),
            query.cost_bucket_filter().unwrap_or("-")
        );
        if outcome.results.is_empty() {
            println!("  (no results)");
        }
        for (rank, rec) in outcome.results.iter().enumerate() {
            println!(
                "  {}. {} [{}] rating {} ({} votes)",
                (rank + 1).to_string().green(),
                rec.name,
                rec.cuisine,
                rec.rating,
                rec.votes
            );
        }
    }

    println!("\n{}", "------ Final Evaluation ------".bold().blue());
    println!("Average Precision@10: {:.2}", report.average_precision_at_k);
    println!("Recommendation Coverage: {:.2}%", report.coverage * 100.0);
}

/// Capitalize the first letter of each word: "north indian" -> "North Indian"
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
