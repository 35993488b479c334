//! Build grid snapping.

use island_core::constants::GROUND_HEIGHT;
use island_core::types::Position;

/// Snap a single coordinate to the nearest multiple of `grid`.
/// Halfway values round up (toward +infinity).
pub fn snap_axis(value: f64, grid: f64) -> f64 {
    (value / grid + 0.5).floor() * grid
}

/// Snap a raw ground point onto the build grid. Only the horizontal
/// components are snapped; buildings always sit at ground height.
pub fn snap_to_grid(raw: Position, grid: f64) -> Position {
    Position::new(snap_axis(raw.x, grid), GROUND_HEIGHT, snap_axis(raw.z, grid))
}
