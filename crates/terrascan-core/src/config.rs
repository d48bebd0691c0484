//! Display color configuration.
//!
//! Schemes are plain data injected into export and report calls,
//! never process-wide state. Color strings are CSS-style hex values;
//! `colormap` names a gradient the consuming renderer resolves.

use serde::{Deserialize, Serialize};

/// Named display colors for terrain rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub background: String,
    /// Primary accent: titles, axes, info panel text.
    pub primary: String,
    /// Secondary accent: status banners.
    pub secondary: String,
    pub contour: String,
    pub highlight_contour: String,
    pub grid: String,
    pub scan_line: String,
    /// Elevation gradient name (e.g. "plasma", "viridis").
    pub colormap: String,
}

impl ColorScheme {
    /// Cyan-on-black scan display, the stock look.
    pub fn sci_fi() -> Self {
        Self {
            background: "#000000".into(),
            primary: "#00FFFF".into(),
            secondary: "#FF7F00".into(),
            contour: "#00FFFF".into(),
            highlight_contour: "#FFFFFF".into(),
            grid: "#0000FF".into(),
            scan_line: "#00FFFF".into(),
            colormap: "plasma".into(),
        }
    }

    /// Magenta neon variant.
    pub fn cyberpunk() -> Self {
        Self {
            background: "#000000".into(),
            primary: "#FF00FF".into(),
            secondary: "#00FFFF".into(),
            contour: "#FF00FF".into(),
            highlight_contour: "#FFFFFF".into(),
            grid: "#FF00FF".into(),
            scan_line: "#00FFFF".into(),
            colormap: "inferno".into(),
        }
    }

    /// Green phosphor variant for tactical displays.
    pub fn military() -> Self {
        Self {
            background: "#000000".into(),
            primary: "#00FF00".into(),
            secondary: "#FFFF00".into(),
            contour: "#00FF00".into(),
            highlight_contour: "#FFFFFF".into(),
            grid: "#003300".into(),
            scan_line: "#00FF00".into(),
            colormap: "viridis".into(),
        }
    }

    /// Look up a preset by name. Unknown names return None.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "sci-fi" => Some(Self::sci_fi()),
            "cyberpunk" => Some(Self::cyberpunk()),
            "military" => Some(Self::military()),
            _ => None,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::sci_fi()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        assert_eq!(ColorScheme::preset("sci-fi"), Some(ColorScheme::sci_fi()));
        assert_eq!(
            ColorScheme::preset("military"),
            Some(ColorScheme::military())
        );
        assert_eq!(ColorScheme::preset("sepia"), None);
    }

    #[test]
    fn test_scheme_json_roundtrip() {
        let scheme = ColorScheme::cyberpunk();
        let json = serde_json::to_string(&scheme).expect("serialize scheme");
        let back: ColorScheme = serde_json::from_str(&json).expect("parse scheme");
        assert_eq!(back, scheme);
    }
}
