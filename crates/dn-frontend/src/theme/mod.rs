//! Theme module for UI styling
//!
//! Day and night visuals are registered once for egui's light and dark
//! themes; switching between them is then just a theme preference change.

pub mod palette;

use egui::{CornerRadius, Shadow, Stroke, Theme, Visuals, style};

use palette::ThemeColors;

/// Register day visuals as the light theme and night visuals as the dark one
pub fn install_visuals(ctx: &egui::Context) {
    ctx.set_visuals_of(Theme::Light, visuals(Visuals::light(), &palette::DAY));
    ctx.set_visuals_of(Theme::Dark, visuals(Visuals::dark(), &palette::NIGHT));
}

/// Build visuals from a base and a color set
pub fn visuals(mut v: Visuals, c: &ThemeColors) -> Visuals {
    v.panel_fill = c.bg_panel;
    v.window_fill = c.bg_elevated;
    v.extreme_bg_color = c.bg_input;
    v.faint_bg_color = c.bg_input;

    v.selection.bg_fill = palette_alpha(c.accent, 60);
    v.selection.stroke = Stroke::new(1.0, c.accent);
    v.hyperlink_color = c.accent;
    v.override_text_color = Some(c.text_primary);

    let widgets = [
        (&mut v.widgets.noninteractive, c.bg_input, c.text_secondary),
        (&mut v.widgets.inactive, c.bg_input, c.text_primary),
        (&mut v.widgets.hovered, c.bg_hover, c.text_primary),
        (&mut v.widgets.open, c.bg_elevated, c.text_primary),
    ];
    for (widget, fill, text) in widgets {
        widget.bg_fill = fill;
        widget.weak_bg_fill = fill;
        widget.bg_stroke = Stroke::new(1.0, c.border);
        widget.fg_stroke = Stroke::new(1.0, text);
        widget.corner_radius = CornerRadius::same(6);
    }
    v.widgets.active.bg_fill = c.accent;
    v.widgets.active.weak_bg_fill = c.bg_hover;
    v.widgets.active.bg_stroke = Stroke::new(1.0, c.accent);
    v.widgets.active.fg_stroke = Stroke::new(2.0, c.on_accent);
    v.widgets.active.corner_radius = CornerRadius::same(6);

    v.window_corner_radius = CornerRadius::same(10);
    v.window_shadow = Shadow {
        offset: [0, 4],
        blur: 16,
        spread: 0,
        color: egui::Color32::from_black_alpha(60),
    };
    v.window_stroke = Stroke::new(1.0, c.border);
    v.menu_corner_radius = CornerRadius::same(6);
    v.slider_trailing_fill = true;
    v.handle_shape = style::HandleShape::Circle;
    v
}

fn palette_alpha(color: egui::Color32, alpha: u8) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
