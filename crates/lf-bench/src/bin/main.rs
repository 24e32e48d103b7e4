//! Standalone range-query benchmark runner.

use std::fs;
use std::path::PathBuf;

use lf_bench::{load_records, run_benchmark, BenchConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Repo root is two levels up from this crate.
    let crate_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = crate_path
        .parent()
        .and_then(|p| p.parent())
        .ok_or("Could not determine repo root")?
        .to_path_buf();

    println!("Range-Query Index Benchmark");
    println!("===========================\n");

    let data_path = repo_root.join("benchmarks").join("items.csv");
    let records = load_records(&data_path)?;
    println!("Loaded {} records.", records.len());

    let config = BenchConfig::default();
    println!(
        "Querying prices {:.2}..={:.2}, {} repetitions per index.\n",
        config.min_price, config.max_price, config.repetitions
    );

    let result = run_benchmark(&records, &config)
        .ok_or("Ordered and hash indexes disagree on the query result")?;

    println!("Matches in range: {}", result.matches);
    println!(
        "Total range_query time for OrderedIndex: {:.6} seconds",
        result.ordered_total_time_s
    );
    println!(
        "Total range_query time for HashIndex:    {:.6} seconds",
        result.hash_total_time_s
    );
    println!(
        "\nHashIndex is {:.2}x slower than OrderedIndex.",
        result.slowdown_ratio
    );
    if result.slowdown_ratio > 1.0 {
        println!("The ordered index wins on range queries, as expected.");
    } else {
        println!("Unexpectedly, the full scan kept up with the ordered index.");
    }

    // Write JSON baseline.
    let baseline_path = repo_root.join("benchmarks").join("baseline.json");
    fs::create_dir_all(baseline_path.parent().ok_or("no parent directory")?)?;
    fs::write(&baseline_path, serde_json::to_string_pretty(&result)?)?;
    println!("\nBaseline saved to: {}", baseline_path.display());

    Ok(())
}
