// File: crates/heatgrid-core/src/tooltip.rs
// Summary: Hover tooltip text for a cell: year + month, absolute temp, variance.

use crate::axis::month_name;
use crate::layout::Cell;

/// Vertical offset between the pointer and the tooltip box.
pub const POINTER_OFFSET_Y: f32 = 30.0;

/// The three tooltip lines for a hovered cell, e.g.
/// `["1890 March", "7.5℃", "-1.2℃"]`. Values are rounded to one decimal.
pub fn lines(cell: &Cell) -> [String; 3] {
    [
        format!("{} {}", cell.year, month_name(cell.month)),
        format!("{:.1}℃", cell.temperature),
        format!("{:.1}℃", cell.variance),
    ]
}
