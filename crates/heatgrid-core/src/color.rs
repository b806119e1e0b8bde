// File: crates/heatgrid-core/src/color.rs
// Summary: RGB color type and the threshold scale binning temperatures into buckets.

use skia_safe as skia;
use thiserror::Error;

/// Errors constructing a threshold scale.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    #[error("color count must be cut count + 1")]
    ColorCount,

    #[error("cut points must be strictly ascending")]
    UnsortedCuts,
}

/// Plain 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style `rgb(r, g, b)` form.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_skia(&self) -> skia::Color {
        skia::Color::from_argb(255, self.r, self.g, self.b)
    }
}

/// Discrete color scale over ascending cut points.
///
/// Holds `cuts.len() + 1` colors: a value maps to the first bucket whose cut
/// it is strictly less than; values at or above the last cut take the final
/// color. Total over all finite inputs.
#[derive(Clone, Debug)]
pub struct ThresholdScale {
    cuts: Vec<f64>,
    colors: Vec<Rgb>,
}

impl ThresholdScale {
    /// Try to construct a scale enforcing the bucket invariants:
    /// cuts strictly ascending and colors.len() == cuts.len() + 1.
    pub fn try_new(cuts: Vec<f64>, colors: Vec<Rgb>) -> Result<Self, ScaleError> {
        if colors.len() != cuts.len() + 1 {
            return Err(ScaleError::ColorCount);
        }
        if cuts.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ScaleError::UnsortedCuts);
        }
        Ok(Self { cuts, colors })
    }

    /// The fixed 11-bucket temperature palette, coldest to hottest.
    pub fn temperature() -> Self {
        Self {
            cuts: vec![2.8, 3.9, 5.0, 6.1, 7.2, 8.3, 9.5, 10.6, 11.7, 12.8],
            colors: vec![
                Rgb::new(69, 25, 228),
                Rgb::new(25, 89, 228),
                Rgb::new(25, 120, 228),
                Rgb::new(25, 228, 228),
                Rgb::new(25, 228, 103),
                Rgb::new(123, 228, 25),
                Rgb::new(228, 225, 25),
                Rgb::new(228, 174, 25),
                Rgb::new(228, 116, 25),
                Rgb::new(228, 72, 25),
                Rgb::new(228, 25, 25),
            ],
        }
    }

    /// Index of the bucket `v` falls into.
    #[inline]
    pub fn bucket_index(&self, v: f64) -> usize {
        for (i, cut) in self.cuts.iter().enumerate() {
            if v < *cut {
                return i;
            }
        }
        self.cuts.len()
    }

    /// Color for a value.
    #[inline]
    pub fn color_for(&self, v: f64) -> Rgb {
        self.colors[self.bucket_index(v)]
    }

    /// (lower, upper) bounds of a bucket; None at the open ends.
    /// Out-of-range indices return (None, None).
    pub fn invert_extent(&self, bucket: usize) -> (Option<f64>, Option<f64>) {
        if bucket >= self.colors.len() {
            return (None, None);
        }
        let lower = bucket.checked_sub(1).map(|i| self.cuts[i]);
        let upper = self.cuts.get(bucket).copied();
        (lower, upper)
    }

    pub fn cuts(&self) -> &[f64] {
        &self.cuts
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
