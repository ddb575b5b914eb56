//! Scene assembly for an external renderer.
//!
//! A scene is the complete, ordered tile set plus everything the host
//! UI needs per tile: the section color resolved from a named theme
//! and the hover payload. Scenes are plain data; the renderer that
//! consumes them owns all presentation state.

use honeycomb_lattice::{layout, GridConfig, Tile};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::metadata::{TileInfo, TileStatus, DEFAULT_LABEL_DIVISOR};
use crate::theme::Themes;

/// Configuration for one scene build.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Layout configuration passed through to the core.
    pub grid: GridConfig,
    /// Name of the theme to resolve against the registry.
    pub theme: String,
    /// Divisor for the popup row/column labels.
    pub label_divisor: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            theme: "classic".to_string(),
            label_divisor: DEFAULT_LABEL_DIVISOR,
        }
    }
}

/// One renderable tile: geometry, section color, hover payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneTile {
    /// The numbered tile from the layout core.
    pub tile: Tile,
    /// Resolved section color.
    pub color: String,
    /// Hover payload.
    pub info: TileInfo,
}

/// A fully assembled tile set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    theme: String,
    tiles: Vec<SceneTile>,
}

impl Scene {
    /// Build a scene from scratch.
    ///
    /// Theme resolution and grid validation both happen before any
    /// layout work; an error leaves nothing half-built.
    pub fn build(config: &SceneConfig, themes: &Themes) -> Result<Self> {
        let palette = themes.resolve(&config.theme)?;
        debug!(theme = %config.theme, "resolved theme");

        let tiles: Vec<SceneTile> = layout(&config.grid)?
            .into_iter()
            .map(|tile| SceneTile {
                color: palette.color_for(tile.x, tile.y).to_string(),
                info: TileInfo::for_tile(&tile, config.label_divisor),
                tile,
            })
            .collect();

        info!(tiles = tiles.len(), theme = %config.theme, "generated scene");
        Ok(Self {
            theme: config.theme.clone(),
            tiles,
        })
    }

    /// Replace this scene with a freshly built one.
    ///
    /// The replacement is fully built before the old tile set is
    /// dropped; on error the current scene is left untouched, so a
    /// caller never observes a mixed tile set.
    pub fn regenerate(&mut self, config: &SceneConfig, themes: &Themes) -> Result<()> {
        *self = Self::build(config, themes)?;
        Ok(())
    }

    /// Stamp a status on every tile, visiting them in id order.
    pub fn with_statuses<F>(mut self, mut assign: F) -> Self
    where
        F: FnMut(&Tile) -> TileStatus,
    {
        for scene_tile in &mut self.tiles {
            scene_tile.info.status = Some(assign(&scene_tile.tile));
        }
        self
    }

    /// Tiles in reading order.
    pub fn tiles(&self) -> &[SceneTile] {
        &self.tiles
    }

    /// Number of tiles in the scene.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the scene holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Name of the theme the scene was built with.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// JSON snapshot of the full render list.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
