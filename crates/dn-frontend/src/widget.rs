//! egui widget wrapping a [`DayNightSwitch`]

use std::borrow::Cow;
use std::time::Duration;

use dn_core::{Constraint, DEFAULT_WIDTH, DayNightSwitch, TouchEvent};
use dn_renderer::{SceneConfig, SwitchPalette, build_scene};
use egui::{Pos2, Rect, Sense};

use crate::paint::paint_scene;

/// Longest frame step fed to the transition, in seconds
const MAX_FRAME_STEP: f32 = 0.1;

/// Draws a switch, feeds it pointer input and advances its transition.
///
/// ```ignore
/// ui.add(SwitchView::new(&mut switch).width(200.0));
/// ```
pub struct SwitchView<'a> {
    switch: &'a mut DayNightSwitch,
    width: f32,
    palette: Cow<'a, SwitchPalette>,
    scene: Cow<'a, SceneConfig>,
}

impl<'a> SwitchView<'a> {
    pub fn new(switch: &'a mut DayNightSwitch) -> Self {
        Self {
            switch,
            width: DEFAULT_WIDTH,
            palette: Cow::Owned(SwitchPalette::default()),
            scene: Cow::Owned(SceneConfig::default()),
        }
    }

    /// Width in logical points; height follows the aspect ratio
    pub fn width(mut self, width: f32) -> Self {
        self.width = width.max(1.0);
        self
    }

    pub fn palette(mut self, palette: &'a SwitchPalette) -> Self {
        self.palette = Cow::Borrowed(palette);
        self
    }

    pub fn scene_config(mut self, scene: &'a SceneConfig) -> Self {
        self.scene = Cow::Borrowed(scene);
        self
    }
}

impl egui::Widget for SwitchView<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let Self {
            switch,
            width,
            palette,
            scene,
        } = self;

        let layout = switch.measure(Constraint::Exact(width), Constraint::Unspecified);
        let (rect, mut response) =
            ui.allocate_exact_size(egui::vec2(layout.size.x, layout.size.y), Sense::click_and_drag());
        let was_checked = switch.is_checked();

        if ui.is_enabled() {
            feed_pointer(switch, ui, &response, rect);
        } else if switch.is_pressed() {
            switch.on_touch(TouchEvent::Cancel);
        }

        let dt = ui.input(|i| i.stable_dt).clamp(0.0, MAX_FRAME_STEP);
        if switch.tick(Duration::from_secs_f32(dt)) || switch.is_pressed() {
            ui.ctx().request_repaint();
        }

        if switch.is_checked() != was_checked {
            response.mark_changed();
        }
        let checked = switch.is_checked();
        response.widget_info(|| {
            egui::WidgetInfo::selected(egui::WidgetType::Checkbox, ui.is_enabled(), checked, "Night mode")
        });

        if ui.is_rect_visible(rect) {
            let scene = build_scene(switch.fraction(), layout.bounds, &palette, &scene);
            let painter = ui.painter().with_clip_rect(rect.intersect(ui.clip_rect()));
            paint_scene(&painter, &scene, rect.min);
        }
        response
    }
}

/// Translate egui pointer state into switch touch events
fn feed_pointer(switch: &mut DayNightSwitch, ui: &egui::Ui, response: &egui::Response, rect: Rect) {
    let (pressed, down, released, moved, pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
            i.pointer.delta() != egui::Vec2::ZERO,
            i.pointer.interact_pos(),
        )
    });
    let local = |p: Pos2| glam::Vec2::new(p.x - rect.min.x, p.y - rect.min.y);

    if pressed && !switch.is_pressed() && response.contains_pointer() {
        // Only presses on the switch body start a gesture
        let layout = switch.layout();
        let inside = |p: &glam::Vec2| layout.is_some_and(|l| l.bounds.contains(*p));
        if let Some(p) = pos.map(local).filter(inside) {
            switch.on_touch(TouchEvent::Down(p));
        }
    }
    if !switch.is_pressed() {
        return;
    }

    match pos {
        None => {
            switch.on_touch(TouchEvent::Cancel);
        }
        Some(p) if released || !down => {
            switch.on_touch(TouchEvent::Up(local(p)));
        }
        Some(p) if moved => {
            switch.on_touch(TouchEvent::Move(local(p)));
        }
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(ctx: &egui::Context, switch: &mut DayNightSwitch, events: Vec<egui::Event>) -> Rect {
        let mut rect = Rect::NOTHING;
        let _ = ctx.run(
            egui::RawInput {
                events,
                ..Default::default()
            },
            |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    rect = ui.add(SwitchView::new(&mut *switch)).rect;
                });
            },
        );
        rect
    }

    fn button(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_measures_to_aspect_ratio() {
        let ctx = egui::Context::default();
        let mut switch = DayNightSwitch::new(false);
        let rect = run_frame(&ctx, &mut switch, Vec::new());
        assert!((rect.width() - DEFAULT_WIDTH).abs() < 1e-3);
        assert!((rect.width() / rect.height() - dn_core::ASPECT_RATIO).abs() < 1e-3);
        assert!(switch.layout().is_some());
    }

    #[test]
    fn test_tap_toggles_and_animates() {
        let ctx = egui::Context::default();
        let mut switch = DayNightSwitch::new(false);
        let rect = run_frame(&ctx, &mut switch, Vec::new());
        let center = rect.center();

        run_frame(
            &ctx,
            &mut switch,
            vec![egui::Event::PointerMoved(center), button(center, true)],
        );
        assert!(switch.is_pressed());
        run_frame(&ctx, &mut switch, vec![button(center, false)]);
        assert!(switch.is_checked());

        for _ in 0..600 {
            if !switch.is_animating() {
                break;
            }
            run_frame(&ctx, &mut switch, Vec::new());
        }
        assert!(!switch.is_animating());
        assert_eq!(switch.fraction(), dn_core::Fraction::NIGHT);
    }
}
