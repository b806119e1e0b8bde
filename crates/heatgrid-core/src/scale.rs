// File: crates/heatgrid-core/src/scale.rs
// Summary: Linear domain-to-pixel scales plus the chart's fixed scale builders.

use heatgrid_data::Dataset;

use crate::types::Insets;

/// Month axis domain: half-month offsets so buckets center on integer months.
pub const MONTH_DOMAIN: (f64, f64) = (0.5, 12.5);
/// Legend axis domain: one bucket span beyond the outermost cut points.
pub const LEGEND_DOMAIN: (f64, f64) = (1.8, 13.8);

/// Linear interpolation from a numeric domain to a pixel range.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub domain_start: f64,
    pub domain_end: f64,
    pub range_start: f32,
    pub range_end: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.domain_end - self.domain_start).max(1e-12);
        self.range_start
            + ((v - self.domain_start) / span) as f32 * (self.range_end - self.range_start)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = (self.range_end - self.range_start).max(1e-12);
        self.domain_start
            + ((px - self.range_start) / span) as f64
                * (self.domain_end - self.domain_start)
    }
}

/// Year scale over the observed range, inset horizontally.
/// Falls back to a unit domain for an empty dataset.
pub fn year_scale(dataset: &Dataset, width: i32, insets: &Insets) -> LinearScale {
    let (min, max) = match dataset.year_range() {
        Some((min, max)) if min != max => (min as f64, max as f64),
        Some((min, _)) => (min as f64, min as f64 + 1.0),
        None => (0.0, 1.0),
    };
    LinearScale::new(
        (min, max),
        (insets.left as f32, (width - insets.right as i32) as f32),
    )
}

/// Month scale with the fixed half-offset domain, inset vertically.
pub fn month_scale(height: i32, insets: &Insets) -> LinearScale {
    LinearScale::new(
        MONTH_DOMAIN,
        (insets.top as f32, (height - insets.bottom as i32) as f32),
    )
}

/// Secondary scale for the legend strip: a quarter of the surface width.
pub fn legend_scale(width: i32) -> LinearScale {
    LinearScale::new(LEGEND_DOMAIN, (0.0, width as f32 / 4.0))
}
