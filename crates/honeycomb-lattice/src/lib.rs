//! Honeycomb disk layout.
//!
//! Lays out a bounded, roughly circular tiling of regular hexagons on
//! a 2D plane. Candidates are enumerated on an offset lattice inside a
//! square window, truncated to an exact count by nearest-distance-first
//! selection, then renumbered in row-major reading order so that tile
//! identifiers are reproducible and independent of the selection pass.
//!
//! # Pipeline
//!
//! ```text
//! GridConfig → generate → Vec<Candidate> → select → Vec<Tile>
//! ```
//!
//! Both stages are pure and synchronous: the same config always yields
//! bit-identical tiles. Rendering, hover metadata and theming live in
//! consumer crates; this crate only produces data.
//!
//! # Determinism
//!
//! Many lattice points share a distance from the origin (the window is
//! symmetric), so nearest-first truncation alone would depend on sort
//! stability. Distance ties therefore break by (row, column), which
//! makes the selected set, not just its numbering, reproducible.

mod config;
mod coord;
mod lattice;
mod section;
mod select;

pub use config::{ConfigError, GridConfig, Measurements};
pub use coord::OffsetCoord;
pub use lattice::{generate, window_size, Candidate, Window};
pub use section::{direction_degrees, palette_slot, sector_index, PALETTE_COLORS, SECTOR_COUNT};
pub use select::{layout, select, Tile, TileId};
