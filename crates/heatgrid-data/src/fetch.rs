// File: crates/heatgrid-data/src/fetch.rs
// Summary: One-shot HTTP fetch of the published dataset. No retry, no cache.

use thiserror::Error;
use tracing::debug;

use crate::model::Dataset;

/// Published location of the dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Errors from fetching or decoding the dataset.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("dataset request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed dataset payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetch and decode the dataset from `url`. Awaited once at startup; a
/// failure halts the run, there is no retry policy.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, FetchError> {
    let body = reqwest::get(url).await?.error_for_status()?.text().await?;
    debug!(bytes = body.len(), url, "dataset payload received");
    Ok(Dataset::from_json(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_is_reported_as_such() {
        let err = Dataset::from_json("{ not json").map(|_| ()).unwrap_err();
        let err: FetchError = err.into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
