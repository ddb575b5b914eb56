//! Named theme palettes.
//!
//! A palette is exactly three colors stretched over six sectors by
//! opposite-sector reuse. Themes are plain configuration data: a named
//! registry the host UI can present as a dropdown, validated the same
//! way as any caller-supplied palette.

use honeycomb_lattice::{palette_slot, PALETTE_COLORS};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

/// Three colors reused across six sectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: [String; PALETTE_COLORS],
}

impl Palette {
    /// Validate and build a palette from exactly three colors.
    pub fn new<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        let len = colors.len();
        let colors: [String; PALETTE_COLORS] =
            colors.try_into().map_err(|_| SceneError::PaletteSize(len))?;
        Ok(Self { colors })
    }

    /// Color of the sector containing `(x, y)`.
    pub fn color_for(&self, x: f64, y: f64) -> &str {
        &self.colors[palette_slot(x, y)]
    }

    /// The three palette entries in slot order.
    pub fn colors(&self) -> &[String; PALETTE_COLORS] {
        &self.colors
    }
}

/// Registry of named palettes, iterated in registration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Themes {
    entries: Vec<(String, Palette)>,
}

impl Themes {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in themes; `classic` comes first.
    pub fn builtin() -> Self {
        let mut themes = Self::new();
        for (name, colors) in [
            ("classic", ["#a9def9", "#e4c1f9", "#f9dc5c"]),
            ("dusk", ["#355070", "#6d597a", "#b56576"]),
            ("meadow", ["#d8f3dc", "#95d5b2", "#52b788"]),
        ] {
            let palette = Palette::new(colors).expect("builtin palettes have three colors");
            themes.insert(name, palette);
        }
        themes
    }

    /// Register or replace a named palette.
    pub fn insert(&mut self, name: impl Into<String>, palette: Palette) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = palette,
            None => self.entries.push((name, palette)),
        }
    }

    /// Look up a palette by name.
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    /// Look up a palette by name, failing if it is not registered.
    pub fn resolve(&self, name: &str) -> Result<&Palette> {
        self.get(name)
            .ok_or_else(|| SceneError::UnknownTheme(name.to_string()))
    }

    /// Theme names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of registered themes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_requires_exactly_three_colors() {
        assert!(Palette::new(["#111", "#222", "#333"]).is_ok());

        let err = Palette::new(["#111", "#222"]).unwrap_err();
        assert!(matches!(err, SceneError::PaletteSize(2)));

        let err = Palette::new(["#1", "#2", "#3", "#4"]).unwrap_err();
        assert!(matches!(err, SceneError::PaletteSize(4)));
    }

    #[test]
    fn color_for_follows_the_slot_policy() {
        let palette = Palette::new(["a", "b", "c"]).unwrap();

        assert_eq!(palette.color_for(10.0, 0.0), "a");   // 0° → sector 0
        assert_eq!(palette.color_for(0.0, 10.0), "c");   // 90° → sector 2
        assert_eq!(palette.color_for(-10.0, 0.0), "a");  // 180° → sector 3
        assert_eq!(palette.color_for(0.0, -10.0), "c");  // 270° → sector 5
    }

    #[test]
    fn opposite_points_get_the_same_color() {
        let palette = Palette::new(["a", "b", "c"]).unwrap();
        for deg in (5..360).step_by(15) {
            let rad = f64::from(deg).to_radians();
            let (x, y) = (rad.cos() * 50.0, rad.sin() * 50.0);
            assert_eq!(palette.color_for(x, y), palette.color_for(-x, -y));
        }
    }

    #[test]
    fn builtin_registry_starts_with_classic() {
        let themes = Themes::builtin();
        assert_eq!(themes.names().next(), Some("classic"));
        assert_eq!(
            themes.get("classic").unwrap().colors()[0],
            "#a9def9"
        );
        assert_eq!(themes.len(), 3);
    }

    #[test]
    fn resolve_fails_for_unknown_names() {
        let themes = Themes::builtin();
        assert!(themes.get("classic").is_some());
        let err = themes.resolve("neon").unwrap_err();
        assert!(matches!(err, SceneError::UnknownTheme(name) if name == "neon"));
    }

    #[test]
    fn insert_replaces_existing_entries() {
        let mut themes = Themes::new();
        assert!(themes.is_empty());

        themes.insert("mono", Palette::new(["#000", "#555", "#fff"]).unwrap());
        themes.insert("mono", Palette::new(["#111", "#666", "#eee"]).unwrap());

        assert_eq!(themes.len(), 1);
        assert_eq!(themes.get("mono").unwrap().colors()[0], "#111");
    }
}
