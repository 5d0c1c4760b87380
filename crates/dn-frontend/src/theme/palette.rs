//! Color palette for the UI theme
//!
//! Day colors follow the daytime sky of the switch, night colors its
//! midnight blue, so the chrome around the switch matches whichever end
//! the switch sits on.

use dn_core::{Fraction, Rgba};
use egui::Color32;

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    /// Panel background
    pub bg_panel: Color32,
    /// Elevated surfaces (windows, popups)
    pub bg_elevated: Color32,
    /// Input field background
    pub bg_input: Color32,
    /// Hover state background
    pub bg_hover: Color32,
    /// Divider lines
    pub border: Color32,
    /// Primary text
    pub text_primary: Color32,
    /// Labels and hints
    pub text_secondary: Color32,
    /// Selection and active widgets
    pub accent: Color32,
    /// Text drawn on the accent color
    pub on_accent: Color32,
}

// =============================================================================
// Day
// =============================================================================

pub const DAY: ThemeColors = ThemeColors {
    bg_panel: Color32::from_rgb(246, 249, 252),
    bg_elevated: Color32::from_rgb(255, 255, 255),
    bg_input: Color32::from_rgb(234, 241, 248),
    bg_hover: Color32::from_rgb(220, 232, 244),
    border: Color32::from_rgb(196, 212, 228),
    text_primary: Color32::from_rgb(24, 36, 52),
    text_secondary: Color32::from_rgb(88, 104, 124),
    accent: Color32::from_rgb(59, 118, 170),
    on_accent: Color32::WHITE,
};

// =============================================================================
// Night
// =============================================================================

pub const NIGHT: ThemeColors = ThemeColors {
    bg_panel: Color32::from_rgb(29, 30, 43),
    bg_elevated: Color32::from_rgb(38, 40, 56),
    bg_input: Color32::from_rgb(46, 48, 66),
    bg_hover: Color32::from_rgb(58, 61, 82),
    border: Color32::from_rgb(70, 74, 98),
    text_primary: Color32::from_rgb(226, 230, 240),
    text_secondary: Color32::from_rgb(149, 156, 175),
    accent: Color32::from_rgb(194, 200, 212),
    on_accent: Color32::from_rgb(29, 30, 43),
};

// =============================================================================
// Helper functions
// =============================================================================

/// Convert a switch color for painting
pub fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Per-channel blend between two opaque colors
pub fn mix(day: Color32, night: Color32, fraction: Fraction) -> Color32 {
    let channel = |a: u8, b: u8| fraction.mix(a as f32, b as f32).round() as u8;
    Color32::from_rgb(
        channel(day.r(), night.r()),
        channel(day.g(), night.g()),
        channel(day.b(), night.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(DAY.bg_panel, NIGHT.bg_panel, Fraction::DAY), DAY.bg_panel);
        assert_eq!(mix(DAY.bg_panel, NIGHT.bg_panel, Fraction::NIGHT), NIGHT.bg_panel);
        assert_eq!(
            mix(Color32::BLACK, Color32::WHITE, Fraction::new(0.5)),
            Color32::from_rgb(128, 128, 128)
        );
    }

    #[test]
    fn test_to_color32_keeps_alpha() {
        let color = to_color32(Rgba::new(255, 255, 255, 0x1A));
        assert_eq!(color.a(), 0x1A);
    }
}
