//! Error types for scene assembly.

use thiserror::Error;

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors that can occur while assembling a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Grid configuration rejected by the layout core
    #[error("invalid grid configuration: {0}")]
    Config(#[from] honeycomb_lattice::ConfigError),

    /// Palette with the wrong number of colors
    #[error("palette needs exactly 3 colors, got {0}")]
    PaletteSize(usize),

    /// Theme name not present in the registry
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
