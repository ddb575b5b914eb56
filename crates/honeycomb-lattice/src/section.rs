//! Angular section policy.
//!
//! The disk is partitioned into six 60° sectors around the origin,
//! with the first sector straddling the positive x axis (330° through
//! 30°). Opposite sectors share a palette slot, so three colors cover
//! all six sectors with 6-fold symmetry.

/// Number of angular sectors.
pub const SECTOR_COUNT: usize = 6;

/// Number of distinct palette slots; opposite sectors share one.
pub const PALETTE_COLORS: usize = 3;

// Opposite-sector reuse requires the sector count to be twice the slot count.
const _: () = assert!(SECTOR_COUNT == 2 * PALETTE_COLORS);

/// Direction of `(x, y)` from the origin in degrees, normalised to `[0, 360)`.
pub fn direction_degrees(x: f64, y: f64) -> f64 {
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Sector containing a direction in `[0, 360)` degrees.
///
/// Each sector is lower-inclusive, upper-exclusive on its angular
/// bounds; sector 0 covers `≥330° or <30°`.
fn sector_of_degrees(degrees: f64) -> usize {
    ((degrees + 30.0) % 360.0 / 60.0) as usize
}

/// Sector containing `(x, y)`: `0..6`, counter-clockwise from the
/// sector straddling the positive x axis.
pub fn sector_index(x: f64, y: f64) -> usize {
    sector_of_degrees(direction_degrees(x, y))
}

/// Palette slot for `(x, y)`: `0..3`, with sectors 180° apart mapping
/// to the same slot.
pub fn palette_slot(x: f64, y: f64) -> usize {
    sector_index(x, y) % PALETTE_COLORS
}
