// File: crates/heatgrid-core/src/legend.rs
// Summary: Legend strip segmentation: bucket extents mapped through the legend scale.

use crate::axis::Tick;
use crate::color::{Rgb, ThresholdScale};
use crate::scale::LinearScale;

/// One legend rectangle, positioned in the legend's local pixel space.
#[derive(Clone, Copy, Debug)]
pub struct LegendSegment {
    pub x: f32,
    pub width: f32,
    pub color: Rgb,
    /// Domain bounds after clamping the open ends to the legend domain.
    pub from: f64,
    pub to: f64,
}

/// One segment per bucket; open-ended extents are clamped to the legend
/// domain so the outer segments get a drawable span.
pub fn segments(colors: &ThresholdScale, scale: &LinearScale) -> Vec<LegendSegment> {
    (0..colors.len())
        .map(|i| {
            let (lower, upper) = colors.invert_extent(i);
            let from = lower.unwrap_or(scale.domain_start);
            let to = upper.unwrap_or(scale.domain_end);
            let x = scale.to_px(from);
            LegendSegment {
                x,
                width: scale.to_px(to) - x,
                color: colors.colors()[i],
                from,
                to,
            }
        })
        .collect()
}

/// Legend ticks sit at the cut points, labeled to one decimal.
pub fn ticks(colors: &ThresholdScale) -> Vec<Tick> {
    colors
        .cuts()
        .iter()
        .map(|&c| Tick { value: c, label: format!("{c:.1}") })
        .collect()
}
