//! Accent themes — maps an accent identifier to the concrete colors every
//! template draws with.
//!
//! The palette is a static table keyed by a closed enum, so adding an accent is
//! a compile-checked change to `AccentId` and `resolve`. Unknown accent names
//! never fail: they resolve to the neutral gray theme.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

// ────────────────────────────────────────────────────────────────────────────
// Color
// ────────────────────────────────────────────────────────────────────────────

/// An opaque sRGB color stored as `0xRRGGBB`. Serializes as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);

    pub fn hex(&self) -> String {
        format!("#{:06x}", self.0 & 0xff_ffff)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Accent-independent colors shared by all templates.
pub mod neutral {
    use super::Color;

    /// Primary body text.
    pub const TEXT: Color = Color(0x1f2937);
    /// Dates, locations, issuers.
    pub const MUTED: Color = Color(0x6b7280);
    /// Chip and card backgrounds on white pages.
    pub const SURFACE: Color = Color(0xf3f4f6);
}

// ────────────────────────────────────────────────────────────────────────────
// Accent identifiers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentId {
    Blue,
    Purple,
    Green,
    Red,
    Orange,
    Teal,
    Pink,
    Indigo,
    Lime,
    Amber,
}

impl AccentId {
    pub const ALL: [AccentId; 10] = [
        AccentId::Blue,
        AccentId::Purple,
        AccentId::Green,
        AccentId::Red,
        AccentId::Orange,
        AccentId::Teal,
        AccentId::Pink,
        AccentId::Indigo,
        AccentId::Lime,
        AccentId::Amber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccentId::Blue => "blue",
            AccentId::Purple => "purple",
            AccentId::Green => "green",
            AccentId::Red => "red",
            AccentId::Orange => "orange",
            AccentId::Teal => "teal",
            AccentId::Pink => "pink",
            AccentId::Indigo => "indigo",
            AccentId::Lime => "lime",
            AccentId::Amber => "amber",
        }
    }

    /// Case-insensitive parse. Returns `None` for names outside the set.
    pub fn parse(name: &str) -> Option<AccentId> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|accent| accent.as_str().eq_ignore_ascii_case(name))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolved theme
// ────────────────────────────────────────────────────────────────────────────

/// The concrete colors a template draws with for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedTheme {
    /// Section titles, bullets, banner and sidebar fills.
    pub emphasis_color: Color,
    /// Rules, record borders, timeline lines.
    pub border_color: Color,
    /// The person's name in the header.
    pub name_color: Color,
    /// Light wash for tinted sidebars and skill chips.
    pub tint_color: Color,
}

impl ResolvedTheme {
    /// Gray theme used for any accent outside the enumerated set.
    pub const NEUTRAL: ResolvedTheme = ResolvedTheme {
        emphasis_color: Color(0x4b5563),
        border_color: Color(0xd1d5db),
        name_color: Color(0x1f2937),
        tint_color: Color(0xf3f4f6),
    };

    const fn of(emphasis: u32, border: u32, name: u32, tint: u32) -> ResolvedTheme {
        ResolvedTheme {
            emphasis_color: Color(emphasis),
            border_color: Color(border),
            name_color: Color(name),
            tint_color: Color(tint),
        }
    }
}

/// Resolves an accent to its palette.
pub fn resolve(accent: AccentId) -> ResolvedTheme {
    match accent {
        AccentId::Blue => ResolvedTheme::of(0x2563eb, 0x93c5fd, 0x1d4ed8, 0xeff6ff),
        AccentId::Purple => ResolvedTheme::of(0x9333ea, 0xd8b4fe, 0x7e22ce, 0xfaf5ff),
        AccentId::Green => ResolvedTheme::of(0x16a34a, 0x86efac, 0x15803d, 0xf0fdf4),
        AccentId::Red => ResolvedTheme::of(0xdc2626, 0xfca5a5, 0xb91c1c, 0xfef2f2),
        AccentId::Orange => ResolvedTheme::of(0xea580c, 0xfdba74, 0xc2410c, 0xfff7ed),
        AccentId::Teal => ResolvedTheme::of(0x0d9488, 0x5eead4, 0x0f766e, 0xf0fdfa),
        AccentId::Pink => ResolvedTheme::of(0xdb2777, 0xf9a8d4, 0xbe185d, 0xfdf2f8),
        AccentId::Indigo => ResolvedTheme::of(0x4f46e5, 0xa5b4fc, 0x4338ca, 0xeef2ff),
        AccentId::Lime => ResolvedTheme::of(0x65a30d, 0xbef264, 0x4d7c0f, 0xf7fee7),
        AccentId::Amber => ResolvedTheme::of(0xd97706, 0xfcd34d, 0xb45309, 0xfffbeb),
    }
}

/// Resolves an accent by name, falling back to [`ResolvedTheme::NEUTRAL`].
pub fn resolve_name(name: &str) -> ResolvedTheme {
    match AccentId::parse(name) {
        Some(accent) => resolve(accent),
        None => {
            debug!(accent = name, "Unknown accent, using neutral theme");
            ResolvedTheme::NEUTRAL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_accent_resolves_to_distinct_non_neutral_theme() {
        for accent in AccentId::ALL {
            let theme = resolve(accent);
            assert_ne!(theme, ResolvedTheme::NEUTRAL, "{accent:?} fell through");
            assert_ne!(theme.emphasis_color, Color::WHITE);
        }
        let mut emphasis: Vec<u32> = AccentId::ALL
            .iter()
            .map(|a| resolve(*a).emphasis_color.0)
            .collect();
        emphasis.sort_unstable();
        emphasis.dedup();
        assert_eq!(emphasis.len(), AccentId::ALL.len());
    }

    #[test]
    fn test_unknown_accent_resolves_to_neutral() {
        assert_eq!(resolve_name("chartreuse"), ResolvedTheme::NEUTRAL);
        assert_eq!(resolve_name(""), ResolvedTheme::NEUTRAL);
    }

    #[test]
    fn test_accent_names_parse_case_insensitively() {
        assert_eq!(AccentId::parse("Teal"), Some(AccentId::Teal));
        assert_eq!(AccentId::parse(" AMBER "), Some(AccentId::Amber));
        assert_eq!(resolve_name("blue"), resolve(AccentId::Blue));
    }

    #[test]
    fn test_color_serializes_as_hex() {
        assert_eq!(Color(0x2563eb).hex(), "#2563eb");
        assert_eq!(Color(0x00000a).hex(), "#00000a");
        let json = serde_json::to_string(&resolve(AccentId::Red)).unwrap();
        assert!(json.contains("\"emphasis_color\":\"#dc2626\""), "{json}");
    }
}
