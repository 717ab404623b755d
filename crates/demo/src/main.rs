// File: crates/demo/src/main.rs
// Summary: Demo loads a long-format CSV, summarizes it, and prints the scale
// configuration a chart assembly would consume, before and after rotation.

use anyhow::{Context, Result};
use chart_data::{rotate, summarize, Data, Summary};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crates/demo/data/fruit_exports.csv".to_string());
    let path = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());

    let list = chart_data::ingest::multi_from_csv_path(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!(
        "Loaded {} series, {} leaves",
        list.len(),
        list.iter().map(|s| s.values.len()).sum::<usize>()
    );
    if list.is_empty() {
        anyhow::bail!("no series loaded - check headers/delimiter.");
    }

    let data = Data::Multi(list.clone());
    println!("\n== as loaded ==");
    print_scale_config(&summarize(&data));

    // Swap rows and columns the way a rotated line chart would.
    let rotated = Data::Multi(rotate(&list));
    println!("\n== rotated ==");
    print_scale_config(&summarize(&rotated));

    Ok(())
}

fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    // Allow running from the crate directory as well as the workspace root.
    if let Some(name) = p.file_name() {
        let fallback = Path::new("data").join(name);
        if fallback.exists() {
            return Ok(fallback);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn print_scale_config(summary: &Summary) {
    println!("rows:    {:?}", summary.row_keys.as_deref().unwrap_or_default());
    println!("columns: {:?}", summary.column_keys);
    if let Some([lo, hi]) = summary.value_extent {
        println!("value domain:   [{lo}, {hi}]");
    }
    if let Some([lo, hi]) = summary.value_extent_stacked {
        println!("stacked domain: [{lo}, {hi}]");
    }
    if let Some(thresholds) = summary.thresholds {
        println!("thresholds:     {thresholds:?}");
    }
    if let Some([lo, hi]) = summary.coordinates_extent.x {
        println!("x domain:       [{lo}, {hi}]");
    }
}
