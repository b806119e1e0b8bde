// File: crates/heatgrid-data/src/model.rs
// Summary: Serde model for the global land-surface temperature dataset.

use serde::{Deserialize, Serialize};

/// One monthly observation: deviation in degrees C from the base temperature.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Observation {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    pub variance: f64,
}

/// The full dataset as published: a reference temperature plus one variance
/// entry per year-month pair present in the source. Immutable once loaded.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<Observation>,
}

impl Dataset {
    /// Decode a dataset from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Absolute temperature for an observation (base + variance).
    #[inline]
    pub fn absolute(&self, obs: &Observation) -> f64 {
        self.base_temperature + obs.variance
    }

    /// Observed (min, max) year, or None for an empty dataset.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        for obs in &self.monthly_variance {
            min = min.min(obs.year);
            max = max.max(obs.year);
        }
        if self.monthly_variance.is_empty() {
            None
        } else {
            Some((min, max))
        }
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            { "year": 1753, "month": 1, "variance": -1.366 },
            { "year": 1753, "month": 2, "variance": -2.223 },
            { "year": 2015, "month": 12, "variance": 0.746 }
        ]
    }"#;

    #[test]
    fn decodes_camel_case_payload() {
        let ds = Dataset::from_json(SAMPLE).expect("decode");
        assert_eq!(ds.base_temperature, 8.66);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.monthly_variance[0].year, 1753);
        assert_eq!(ds.monthly_variance[0].month, 1);
        assert_eq!(ds.monthly_variance[2].variance, 0.746);
    }

    #[test]
    fn year_range_spans_observations() {
        let ds = Dataset::from_json(SAMPLE).expect("decode");
        assert_eq!(ds.year_range(), Some((1753, 2015)));
    }

    #[test]
    fn year_range_empty_is_none() {
        let ds = Dataset { base_temperature: 8.66, monthly_variance: Vec::new() };
        assert_eq!(ds.year_range(), None);
    }

    #[test]
    fn absolute_adds_variance_to_base() {
        let ds = Dataset::from_json(SAMPLE).expect("decode");
        let obs = Observation { year: 1890, month: 3, variance: -1.2 };
        assert!((ds.absolute(&obs) - 7.46).abs() < 1e-9);
    }

    #[test]
    fn missing_field_is_an_error() {
        assert!(Dataset::from_json(r#"{ "baseTemperature": 8.66 }"#).is_err());
    }
}
