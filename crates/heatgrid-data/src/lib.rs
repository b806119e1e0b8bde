// File: crates/heatgrid-data/src/lib.rs
// Summary: Data crate entry point; exports the dataset model and fetch routine.

pub mod fetch;
pub mod model;

pub use fetch::{fetch_dataset, FetchError, DATASET_URL};
pub use model::{Dataset, Observation};
