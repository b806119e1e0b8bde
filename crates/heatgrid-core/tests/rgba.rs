// File: crates/heatgrid-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and hover tooltip effect.

use heatgrid_core::layout::CellGrid;
use heatgrid_core::types::{HEIGHT, WIDTH};
use heatgrid_core::{HeatMap, RenderOptions};
use heatgrid_data::{Dataset, Observation};

fn dataset() -> Dataset {
    Dataset {
        base_temperature: 8.66,
        monthly_variance: vec![
            Observation { year: 1753, month: 1, variance: -1.366 },
            Observation { year: 1890, month: 3, variance: -1.2 },
            Observation { year: 2015, month: 12, variance: 0.746 },
        ],
    }
}

#[test]
fn render_rgba8_buffer() {
    let chart = HeatMap::new(dataset());

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}

#[test]
fn hover_over_a_cell_draws_the_tooltip() {
    let chart = HeatMap::new(dataset());
    let grid = CellGrid::layout(&chart.dataset, WIDTH, HEIGHT, &RenderOptions::default().insets);
    let cell = grid.cells[1];
    let cursor = (cell.x + cell.width / 2.0, cell.y + cell.height / 2.0);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (plain, _, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");

    opts.hover = Some(cursor);
    let (hovered, _, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_ne!(plain, hovered, "tooltip should change the frame");

    // Hovering empty space leaves the frame untouched
    opts.hover = Some((1.0, 1.0));
    let (missed, _, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(plain, missed);
}
