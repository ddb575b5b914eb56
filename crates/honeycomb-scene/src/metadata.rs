//! Per-tile hover payloads.

use honeycomb_lattice::{direction_degrees, Tile};
use serde::{Deserialize, Serialize};

/// Default divisor for the popup row/column labels.
///
/// Fixed at 30 regardless of the configured edge length, so the labels
/// drift away from the logical grid indices at other edge lengths.
/// Kept as the compatible default; callers that want matching labels
/// set `SceneConfig::label_divisor` to their edge length.
pub const DEFAULT_LABEL_DIVISOR: f64 = 30.0;

/// Presentation status a caller may stamp on a tile.
///
/// Not part of the reproducible layout: the assigner is injected by
/// the caller and may be as random as it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStatus {
    Active,
    Inactive,
}

/// Hover payload for one tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileInfo {
    /// Reading-order tile number.
    pub number: u64,
    /// `round(y / label_divisor)`.
    pub row_index: i64,
    /// `round(x / label_divisor)`.
    pub column_index: i64,
    /// Direction from the grid centre, e.g. `270.0°`.
    pub direction: String,
    /// Distance from the grid centre, e.g. `10.0 units`.
    pub distance: String,
    /// Caller-injected status, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TileStatus>,
}

/// Round halves toward positive infinity: 1.5 → 2, -1.5 → -1.
///
/// Odd rows put centres on exact half-integer label positions, so the
/// tie direction is visible in the output.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

impl TileInfo {
    /// Build the payload for a tile.
    pub fn for_tile(tile: &Tile, label_divisor: f64) -> Self {
        let degrees = direction_degrees(tile.x, tile.y);
        let distance = (tile.x * tile.x + tile.y * tile.y).sqrt();

        Self {
            number: tile.id.value(),
            row_index: round_half_up(tile.y / label_divisor),
            column_index: round_half_up(tile.x / label_divisor),
            direction: format!("{degrees:.1}°"),
            distance: format!("{distance:.1} units"),
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeycomb_lattice::{OffsetCoord, TileId};

    fn tile(id: u64, x: f64, y: f64) -> Tile {
        Tile {
            id: TileId::new(id),
            coord: OffsetCoord::ORIGIN,
            x,
            y,
        }
    }

    #[test]
    fn payload_for_a_tile_straight_below_centre() {
        let info = TileInfo::for_tile(&tile(7, 0.0, -10.0), DEFAULT_LABEL_DIVISOR);

        assert_eq!(info.number, 7);
        assert_eq!(info.direction, "270.0°");
        assert_eq!(info.distance, "10.0 units");
        assert_eq!(info.row_index, 0);
        assert_eq!(info.column_index, 0);
        assert_eq!(info.status, None);
    }

    #[test]
    fn labels_round_halves_up() {
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(-1.5), -1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(-2.51), -3);

        // A shifted-row centre at x = -45 sits exactly between labels.
        let info = TileInfo::for_tile(&tile(1, -45.0, 60.0), DEFAULT_LABEL_DIVISOR);
        assert_eq!(info.column_index, -1);
        assert_eq!(info.row_index, 2);
    }

    #[test]
    fn label_divisor_is_independent_of_geometry() {
        // The default divisor stays 30 whatever the edge length was;
        // a custom divisor realigns the labels.
        let t = tile(1, 90.0, -60.0);

        let fixed = TileInfo::for_tile(&t, DEFAULT_LABEL_DIVISOR);
        assert_eq!(fixed.column_index, 3);
        assert_eq!(fixed.row_index, -2);

        let aligned = TileInfo::for_tile(&t, 15.0);
        assert_eq!(aligned.column_index, 6);
        assert_eq!(aligned.row_index, -4);
    }

    #[test]
    fn direction_and_distance_use_one_decimal() {
        let info = TileInfo::for_tile(&tile(2, 30.0, 0.0), DEFAULT_LABEL_DIVISOR);
        assert_eq!(info.direction, "0.0°");
        assert_eq!(info.distance, "30.0 units");
    }

    #[test]
    fn status_survives_serialization_when_set() {
        let mut info = TileInfo::for_tile(&tile(3, 15.0, 15.0), DEFAULT_LABEL_DIVISOR);
        let json = serde_json::to_string(&info).unwrap();
        assert!(!json.contains("status"));

        info.status = Some(TileStatus::Active);
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("Active"));

        let parsed: TileInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.status, Some(TileStatus::Active));
    }
}
