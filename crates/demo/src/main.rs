// File: crates/demo/src/main.rs
// Summary: Demo fetches the temperature dataset and renders the heat map to a PNG.

use anyhow::{Context, Result};
use heatgrid_core::{HeatMap, RenderOptions};
use heatgrid_data::{fetch_dataset, DATASET_URL};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Accept dataset URL from CLI or fall back to the published endpoint
    let url = std::env::args().nth(1).unwrap_or_else(|| DATASET_URL.to_string());

    let dataset = fetch_dataset(&url)
        .await
        .with_context(|| format!("failed to load dataset from '{url}'"))?;
    info!(
        observations = dataset.len(),
        base_temperature = dataset.base_temperature,
        "dataset loaded"
    );

    let chart = HeatMap::new(dataset);
    let opts = RenderOptions::default();

    let out = PathBuf::from("target/out/heatmap.png");
    chart.render_to_png(&opts, &out)?;
    info!("wrote {}", out.display());

    Ok(())
}
