// File: crates/heatgrid-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use heatgrid_core::{HeatMap, RenderOptions};
use heatgrid_data::{Dataset, Observation};

#[test]
fn render_smoke_png() {
    // Minimal data: a handful of observations across the grid
    let dataset = Dataset {
        base_temperature: 8.66,
        monthly_variance: vec![
            Observation { year: 1753, month: 1, variance: -1.366 },
            Observation { year: 1800, month: 6, variance: 0.1 },
            Observation { year: 1890, month: 3, variance: -1.2 },
            Observation { year: 2015, month: 12, variance: 0.746 },
        ],
    };
    let chart = HeatMap::new(dataset);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
