// File: crates/heatgrid-core/tests/tooltip.rs
// Purpose: Validate hover tooltip text formatting.

use heatgrid_core::axis::month_name;
use heatgrid_core::layout::Cell;
use heatgrid_core::tooltip;

fn cell(year: i32, month: u32, variance: f64, base: f64) -> Cell {
    Cell {
        year,
        month,
        variance,
        temperature: base + variance,
        x: 0.0,
        y: 0.0,
        width: 3.0,
        height: 29.0,
    }
}

#[test]
fn lines_round_to_one_decimal() {
    let lines = tooltip::lines(&cell(1890, 3, -1.2, 8.66));
    assert_eq!(lines[0], "1890 March");
    assert_eq!(lines[1], "7.5\u{2103}");
    assert_eq!(lines[2], "-1.2\u{2103}");
}

#[test]
fn positive_variance_keeps_no_sign_prefix() {
    let lines = tooltip::lines(&cell(2015, 12, 0.746, 8.66));
    assert_eq!(lines[0], "2015 December");
    assert_eq!(lines[1], "9.4\u{2103}");
    assert_eq!(lines[2], "0.7\u{2103}");
}

#[test]
fn month_names_are_full_and_total() {
    assert_eq!(month_name(1), "January");
    assert_eq!(month_name(12), "December");
    assert_eq!(month_name(0), "");
    assert_eq!(month_name(13), "");
}
