// File: crates/heatgrid-core/src/layout.rs
// Summary: Cell grid layout (one rect per observation) and pointer hit-testing.

use heatgrid_data::Dataset;

use crate::scale::{month_scale, year_scale, LinearScale};
use crate::types::Insets;

/// Fixed cell width in pixels.
pub const CELL_WIDTH: f32 = 3.0;

/// One observation placed on the surface.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub year: i32,
    pub month: u32,
    pub variance: f64,
    /// Absolute temperature (base + variance).
    pub temperature: f64,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Cell {
    #[inline]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// All cells for a dataset, plus the scales they were placed with.
pub struct CellGrid {
    pub cells: Vec<Cell>,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub cell_height: f32,
}

impl CellGrid {
    /// Position every observation: x by year, y by month (half-offset so
    /// buckets center on integer months), height = plot height / 12.
    pub fn layout(dataset: &Dataset, width: i32, height: i32, insets: &Insets) -> Self {
        let x_scale = year_scale(dataset, width, insets);
        let y_scale = month_scale(height, insets);
        let cell_height = (height - insets.vsum() as i32) as f32 / 12.0;

        let cells = dataset
            .monthly_variance
            .iter()
            .map(|obs| Cell {
                year: obs.year,
                month: obs.month,
                variance: obs.variance,
                temperature: dataset.absolute(obs),
                x: x_scale.to_px(obs.year as f64),
                y: y_scale.to_px(obs.month as f64 - 0.5),
                width: CELL_WIDTH,
                height: cell_height,
            })
            .collect();

        Self { cells, x_scale, y_scale, cell_height }
    }

    /// Cell under a pointer position, if any.
    pub fn hit_test(&self, px: f32, py: f32) -> Option<&Cell> {
        self.cells.iter().find(|c| c.contains(px, py))
    }
}
