//! Layout configuration and derived spacing measurements.

use thiserror::Error;

/// Errors raised by configuration validation.
///
/// Validation runs before any layout work begins. Once a config has
/// been accepted, generation and selection cannot fail.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Edge length must be a positive, finite number.
    #[error("hexagon edge length must be positive and finite, got {0}")]
    EdgeLength(f64),

    /// Disk radius must be a positive, finite number.
    #[error("grid radius must be positive and finite, got {0}")]
    DiskRadius(f64),
}

/// Immutable layout configuration.
///
/// `window_range` is unsigned: a negative or fractional enumeration
/// half-width is unrepresentable rather than silently coerced.
/// A `tile_count` of zero is valid and yields an empty tile set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Number of tiles to keep after radial selection.
    pub tile_count: usize,
    /// Hexagon edge length; doubles as the horizontal centre spacing.
    pub edge_length: f64,
    /// Strict Euclidean cutoff for candidate centres.
    pub disk_radius: f64,
    /// Half-width of the (column, row) enumeration window.
    pub window_range: u32,
    /// Exclude the small cluster of candidates around the origin.
    pub center_gap: bool,
}

impl GridConfig {
    /// Validate and build a configuration.
    pub fn new(
        tile_count: usize,
        edge_length: f64,
        disk_radius: f64,
        window_range: u32,
        center_gap: bool,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            tile_count,
            edge_length,
            disk_radius,
            window_range,
            center_gap,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric fields.
    ///
    /// Exposed separately so configs built as struct literals can be
    /// checked at the same boundary as constructed ones.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.edge_length.is_finite() || self.edge_length <= 0.0 {
            return Err(ConfigError::EdgeLength(self.edge_length));
        }
        if !self.disk_radius.is_finite() || self.disk_radius <= 0.0 {
            return Err(ConfigError::DiskRadius(self.disk_radius));
        }
        Ok(())
    }

    /// Spacing measurements derived from the current edge length.
    pub fn measurements(&self) -> Measurements {
        Measurements::for_edge_length(self.edge_length)
    }

    /// Half-width of the square exclusion box around the origin.
    pub fn center_threshold(&self) -> f64 {
        self.edge_length / 2.0
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_count: 492,
            edge_length: 30.0,
            disk_radius: 400.0,
            window_range: 20,
            center_gap: true,
        }
    }
}

/// Spacing measurements derived from the hexagon edge length.
///
/// Always recomputed from the config on demand, never cached next to a
/// potentially stale edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Centre-to-centre spacing within a row.
    pub horizontal_spacing: f64,
    /// Centre-to-centre spacing between adjacent rows.
    pub vertical_spacing: f64,
    /// Horizontal shift applied to odd rows.
    pub row_offset: f64,
}

impl Measurements {
    /// Derive the measurements for a given edge length.
    pub fn for_edge_length(edge_length: f64) -> Self {
        Self {
            horizontal_spacing: edge_length,
            vertical_spacing: edge_length * 3f64.sqrt() / 2.0,
            row_offset: edge_length / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GridConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_nonpositive_edge_length() {
        assert_eq!(
            GridConfig::new(10, 0.0, 400.0, 5, false),
            Err(ConfigError::EdgeLength(0.0))
        );
        assert_eq!(
            GridConfig::new(10, -3.0, 400.0, 5, false),
            Err(ConfigError::EdgeLength(-3.0))
        );
        assert!(GridConfig::new(10, f64::NAN, 400.0, 5, false).is_err());
        assert!(GridConfig::new(10, f64::INFINITY, 400.0, 5, false).is_err());
    }

    #[test]
    fn rejects_nonpositive_disk_radius() {
        assert_eq!(
            GridConfig::new(10, 30.0, 0.0, 5, false),
            Err(ConfigError::DiskRadius(0.0))
        );
        assert!(GridConfig::new(10, 30.0, f64::NAN, 5, false).is_err());
    }

    #[test]
    fn zero_tile_count_is_valid() {
        assert!(GridConfig::new(0, 30.0, 400.0, 5, false).is_ok());
    }

    #[test]
    fn measurements_follow_edge_length() {
        let m = Measurements::for_edge_length(30.0);
        assert_eq!(m.horizontal_spacing, 30.0);
        assert_eq!(m.row_offset, 15.0);
        assert!((m.vertical_spacing - 25.980762113533157).abs() < 1e-12);

        // Derived, never stored: a different edge length gives fresh values
        let m2 = GridConfig { edge_length: 10.0, ..GridConfig::default() }.measurements();
        assert_eq!(m2.horizontal_spacing, 10.0);
        assert_eq!(m2.row_offset, 5.0);
    }

    #[test]
    fn center_threshold_is_half_edge() {
        let config = GridConfig::default();
        assert_eq!(config.center_threshold(), 15.0);
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = GridConfig::new(10, -1.0, 400.0, 5, false).unwrap_err();
        assert!(err.to_string().contains("edge length"));
    }
}
