//! Honeycomb scene assembly.
//!
//! Turns the layout core's tile list into everything an external
//! renderer needs: a section color per tile resolved from a named
//! theme, hover payloads, and a JSON snapshot of the whole tile set.
//!
//! # Architecture
//!
//! - **Themes**: named 3-color palettes, validated configuration data
//! - **TileInfo**: per-tile hover payload (labels, direction, distance)
//! - **Scene**: the assembled render list with atomic regeneration
//!
//! The renderer itself (DOM elements, popups, the theme dropdown)
//! lives outside this workspace; this crate only produces data, and
//! tile statuses are injected by the caller rather than generated
//! here, so everything a scene contains is reproducible.

mod error;
mod metadata;
mod scene;
mod theme;

pub use error::{Result, SceneError};
pub use metadata::{TileInfo, TileStatus, DEFAULT_LABEL_DIVISOR};
pub use scene::{Scene, SceneConfig, SceneTile};
pub use theme::{Palette, Themes};
