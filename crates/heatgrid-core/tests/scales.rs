// File: crates/heatgrid-core/tests/scales.rs
// Purpose: Validate scale endpoints against the default surface geometry.

use heatgrid_core::scale::{legend_scale, month_scale, year_scale, LinearScale};
use heatgrid_core::types::{Insets, HEIGHT, WIDTH};
use heatgrid_data::{Dataset, Observation};

fn dataset() -> Dataset {
    Dataset {
        base_temperature: 8.66,
        monthly_variance: vec![
            Observation { year: 1753, month: 1, variance: -1.366 },
            Observation { year: 1900, month: 6, variance: 0.2 },
            Observation { year: 2015, month: 12, variance: 0.746 },
        ],
    }
}

#[test]
fn year_scale_endpoints_hit_the_insets() {
    let insets = Insets::default();
    let scale = year_scale(&dataset(), WIDTH, &insets);
    assert_eq!(scale.to_px(1753.0), 75.0);
    assert_eq!(scale.to_px(2015.0), (WIDTH - 75) as f32);
}

#[test]
fn month_scale_endpoints_hit_the_insets() {
    let insets = Insets::default();
    let scale = month_scale(HEIGHT, &insets);
    assert_eq!(scale.to_px(0.5), 75.0);
    assert_eq!(scale.to_px(12.5), (HEIGHT - 75) as f32);
}

#[test]
fn legend_scale_spans_a_quarter_width() {
    let scale = legend_scale(WIDTH);
    assert_eq!(scale.to_px(1.8), 0.0);
    assert_eq!(scale.to_px(13.8), WIDTH as f32 / 4.0);
}

#[test]
fn from_px_inverts_to_px() {
    let scale = LinearScale::new((1753.0, 2015.0), (75.0, 825.0));
    for v in [1753.0, 1800.0, 1999.5, 2015.0] {
        assert!((scale.from_px(scale.to_px(v)) - v).abs() < 1e-3);
    }
}

#[test]
fn empty_dataset_falls_back_to_unit_domain() {
    let empty = Dataset { base_temperature: 8.66, monthly_variance: Vec::new() };
    let scale = year_scale(&empty, WIDTH, &Insets::default());
    assert_eq!(scale.domain_start, 0.0);
    assert_eq!(scale.domain_end, 1.0);
}

#[test]
fn single_year_dataset_keeps_a_nonzero_span() {
    let one = Dataset {
        base_temperature: 8.66,
        monthly_variance: vec![Observation { year: 1900, month: 1, variance: 0.0 }],
    };
    let scale = year_scale(&one, WIDTH, &Insets::default());
    assert!(scale.domain_end > scale.domain_start);
}
