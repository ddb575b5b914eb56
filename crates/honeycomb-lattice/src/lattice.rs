//! Candidate enumeration within a bounded window.
//!
//! Candidates are enumerated row-major over the inclusive window
//! `[-range, range]²` and filtered against the disk radius and the
//! optional centre gap. The enumeration order is deterministic but
//! carries no meaning of its own: identifiers are assigned only after
//! selection and renumbering.

use crate::config::{GridConfig, Measurements};
use crate::coord::OffsetCoord;

/// A lattice point considered for inclusion before selection.
///
/// Created during enumeration, immutable afterwards, discarded once
/// selection has produced the final tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Logical grid position.
    pub coord: OffsetCoord,
    /// Cartesian x of the hexagon centre.
    pub x: f64,
    /// Cartesian y of the hexagon centre.
    pub y: f64,
    /// Euclidean distance of the centre from the origin.
    pub distance: f64,
}

impl Candidate {
    /// Place a candidate at a grid position under the given measurements.
    pub fn at(coord: OffsetCoord, m: &Measurements) -> Self {
        let (x, y) = coord.to_cartesian(m);
        let distance = (x * x + y * y).sqrt();
        Self { coord, x, y, distance }
    }

    /// Whether the centre falls inside the square exclusion box.
    ///
    /// Both comparisons are strict: a centre exactly on the threshold
    /// is outside the box.
    pub fn in_center_box(&self, threshold: f64) -> bool {
        self.x.abs() < threshold && self.y.abs() < threshold
    }
}

/// Number of lattice points in a window of the given half-width.
///
/// A window of half-width `r` spans `2r + 1` rows and columns.
#[inline]
pub const fn window_size(range: u32) -> u64 {
    let side = 2 * range as u64 + 1;
    side * side
}

/// Row-major iterator over the enumeration window.
pub struct Window {
    range: i64,
    row: i64,
    column: i64,
}

impl Window {
    /// Iterate the inclusive window `[-range, range]²`, rows outermost.
    pub fn new(range: u32) -> Self {
        let range = i64::from(range);
        Self {
            range,
            row: -range,
            column: -range,
        }
    }
}

impl Iterator for Window {
    type Item = OffsetCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row > self.range {
            return None;
        }

        let coord = OffsetCoord::new(self.column, self.row);
        if self.column == self.range {
            self.column = -self.range;
            self.row += 1;
        } else {
            self.column += 1;
        }
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.row > self.range {
            return (0, Some(0));
        }
        let side = (2 * self.range + 1) as u64;
        let full_rows_left = (self.range - self.row) as u64;
        let rest_of_row = (self.range - self.column + 1) as u64;
        let remaining = (full_rows_left * side + rest_of_row) as usize;
        (remaining, Some(remaining))
    }
}

/// Enumerate every candidate inside the disk.
///
/// Pure and deterministic: the same config always yields the same
/// candidates in the same row-major order. An empty result is valid
/// output, not an error.
pub fn generate(config: &GridConfig) -> Vec<Candidate> {
    let m = config.measurements();
    let threshold = config.center_threshold();

    Window::new(config.window_range)
        .map(|coord| Candidate::at(coord, &m))
        .filter(|c| c.distance < config.disk_radius)
        .filter(|c| !(config.center_gap && c.in_center_box(threshold)))
        .collect()
}
