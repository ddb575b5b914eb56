//! Radial selection and reading-order numbering.
//!
//! Selection is two-phase. Taking the nearest candidates first shapes
//! the output into a filled disk; renumbering the survivors by
//! (row, column) afterwards gives identifiers that are reproducible
//! and independent of floating-point distance comparisons.

use crate::config::{ConfigError, GridConfig};
use crate::coord::OffsetCoord;
use crate::lattice::{generate, Candidate};

/// Identifier of a selected tile: 1-based, sequential, no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(pub u64);

impl TileId {
    /// Identifier of the first tile in reading order.
    pub const FIRST: Self = Self(1);

    /// Create from a raw identifier.
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<TileId> for u64 {
    fn from(id: TileId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A finally-selected, numbered hexagon with resolved coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    /// Reading-order identifier, assigned after the final sort.
    pub id: TileId,
    /// Logical grid position the tile was selected from.
    pub coord: OffsetCoord,
    /// Cartesian x of the hexagon centre.
    pub x: f64,
    /// Cartesian y of the hexagon centre.
    pub y: f64,
}

/// Truncate candidates to the nearest `tile_count` and number the
/// survivors in reading order.
///
/// Distance ties break by (row, column) ascending, so the selected set
/// never depends on the enumeration order. Returns exactly
/// `min(tile_count, candidates.len())` tiles; a shortfall is a valid
/// outcome, not an error.
pub fn select(mut candidates: Vec<Candidate>, tile_count: usize) -> Vec<Tile> {
    candidates.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| a.coord.reading_order(&b.coord))
    });
    candidates.truncate(tile_count);

    candidates.sort_by(|a, b| a.coord.reading_order(&b.coord));

    candidates
        .into_iter()
        .enumerate()
        .map(|(index, c)| Tile {
            id: TileId(index as u64 + 1),
            coord: c.coord,
            x: c.x,
            y: c.y,
        })
        .collect()
}

/// Run the full pipeline: validate, enumerate, select, number.
///
/// Validation errors surface here, before any layout work begins.
pub fn layout(config: &GridConfig) -> Result<Vec<Tile>, ConfigError> {
    config.validate()?;
    Ok(select(generate(config), config.tile_count))
}
