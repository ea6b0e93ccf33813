// File: crates/interact-core/src/controller.rs
// Summary: Host-side controller settings (crosshair toggles, colors, gesture and layout knobs), loadable from TOML.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;
use crate::gesture::DEFAULT_CLICK_SLOP;

/// Renderer-agnostic color. Parsed from `#rrggbb` or `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl FromStr for Rgba {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::Color(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(bad)?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Settings the host hands to the interaction layer and renderer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartController {
    /// Full-height guide line through the hovered candle.
    pub vertical_selection_line: bool,
    /// Full-width guide line through the hovered candle's close.
    pub horizontal_selection_line: bool,
    pub selection_line_color: Rgba,
    pub line_width: f32,
    pub click_slop: i32,
    pub scroll_height: i32,
    pub bar_width: i32,
}

impl Default for ChartController {
    fn default() -> Self {
        Self {
            vertical_selection_line: true,
            horizontal_selection_line: true,
            selection_line_color: Rgba::opaque(255, 230, 70),
            line_width: 1.0,
            click_slop: DEFAULT_CLICK_SLOP,
            scroll_height: 16,
            bar_width: 8,
        }
    }
}

impl ChartController {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let controller = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?controller, "loaded controller config");
        Ok(controller)
    }

    pub fn crosshair_enabled(&self) -> bool {
        self.vertical_selection_line || self.horizontal_selection_line
    }
}
