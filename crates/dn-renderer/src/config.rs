//! Renderer configuration structures
//!
//! Colors and tessellation quality for the switch artwork. Both structures
//! serialize with defaults so partial config files stay valid.

use dn_core::Rgba;
use serde::{Deserialize, Serialize};

/// Colors of the switch artwork
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SwitchPalette {
    /// Sky at fraction 0
    pub sky_day: Rgba,
    /// Sky at fraction 1
    pub sky_night: Rgba,
    /// Sun disc
    pub sun: Rgba,
    /// Moon disc
    pub moon: Rgba,
    /// Moon craters
    pub moon_hole: Rgba,
    /// Stars
    pub star: Rgba,
    /// Front cloud layer
    pub cloud: Rgba,
    /// Back cloud layer
    pub cloud_secondary: Rgba,
    /// Concentric halo around the disc
    pub ripple: Rgba,
    /// Drop shadow under the disc
    pub sun_shadow: Rgba,
    /// Inset shadow along the switch border
    pub border_shadow: Rgba,
    /// Rim highlight on the disc
    pub highlight: Rgba,
}

impl Default for SwitchPalette {
    fn default() -> Self {
        Self {
            sky_day: Rgba::rgb(0x3B, 0x76, 0xAA),
            sky_night: Rgba::rgb(0x1D, 0x1E, 0x2B),
            sun: Rgba::rgb(0xF1, 0xC4, 0x29),
            moon: Rgba::rgb(0xC2, 0xC8, 0xD4),
            moon_hole: Rgba::rgb(0x95, 0x9C, 0xAF),
            star: Rgba::rgb(0xFB, 0xFD, 0xFE),
            cloud: Rgba::rgb(0xF2, 0xFB, 0xFE),
            cloud_secondary: Rgba::rgb(0xA0, 0xC6, 0xE4),
            ripple: Rgba::new(0xFF, 0xFF, 0xFF, 0x1A),
            sun_shadow: Rgba::new(0, 0, 0, 0x80),
            border_shadow: Rgba::new(0, 0, 0, 0xCC),
            highlight: Rgba::WHITE,
        }
    }
}

/// Tessellation and layering quality
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Line segments per quadratic curve
    pub curve_segments: u32,
    /// Columns used to sample a region across the full switch width
    pub columns: u32,
    /// Stacked layers forming the inset border shadow and the disc shadow edge
    pub shadow_layers: u32,
    /// Stacked layers forming the disc highlight
    pub highlight_layers: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            curve_segments: 12,
            columns: 120,
            shadow_layers: 4,
            highlight_layers: 4,
        }
    }
}

impl SceneConfig {
    /// Low-cost settings for small or software-rendered switches
    pub fn low() -> Self {
        Self {
            curve_segments: 6,
            columns: 48,
            shadow_layers: 2,
            highlight_layers: 2,
        }
    }
}
