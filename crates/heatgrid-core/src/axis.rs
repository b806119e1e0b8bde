// File: crates/heatgrid-core/src/axis.rs
// Summary: Tick generation for the year and month axes.

use chrono::Month;

/// One axis tick: domain value plus its rendered label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Full month name for a 1-12 month number; empty string out of range.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

/// Step size from the 1/2/5 ladder so ~`count` ticks cover [start, stop].
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start) / count.max(1) as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    if error >= 50f64.sqrt() {
        base * 10.0
    } else if error >= 10f64.sqrt() {
        base * 5.0
    } else if error >= 2f64.sqrt() {
        base * 2.0
    } else {
        base
    }
}

/// Round tick values covering [start, stop], inclusive of round endpoints.
pub fn tick_values(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !(stop > start) || count == 0 {
        return Vec::new();
    }
    let step = tick_step(start, stop, count);
    let mut v = (start / step).ceil() * step;
    let mut out = Vec::new();
    while v <= stop + step * 1e-9 {
        out.push(v);
        v += step;
    }
    out
}

/// Year ticks with integer labels.
pub fn year_ticks(min_year: f64, max_year: f64) -> Vec<Tick> {
    tick_values(min_year, max_year, 10)
        .into_iter()
        .map(|v| Tick { value: v, label: format!("{}", v.round() as i64) })
        .collect()
}

/// Month ticks at integer month centers, labeled with full month names.
pub fn month_ticks() -> Vec<Tick> {
    (1..=12)
        .map(|m| Tick { value: m as f64, label: month_name(m).to_string() })
        .collect()
}
