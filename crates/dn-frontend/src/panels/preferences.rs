//! Preferences window for application settings

use dn_core::Easing;
use dn_renderer::SceneConfig;

use crate::config::{SharedConfig, UiConfig};

/// Current tab in the preferences window
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum PreferencesTab {
    #[default]
    Switch,
    Interface,
}

/// Preferences window panel
#[derive(Default)]
pub struct PreferencesPanel {
    current_tab: PreferencesTab,
}

impl PreferencesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the preferences window.
    ///
    /// Returns true when switch behavior settings changed this frame.
    pub fn show(&mut self, ctx: &egui::Context, config: &SharedConfig, open: &mut bool) -> bool {
        let mut switch_changed = false;

        egui::Window::new("Preferences")
            .open(open)
            .resizable(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.current_tab, PreferencesTab::Switch, "Switch");
                    ui.selectable_value(
                        &mut self.current_tab,
                        PreferencesTab::Interface,
                        "Interface",
                    );
                });

                ui.separator();

                match self.current_tab {
                    PreferencesTab::Switch => switch_changed |= switch_tab(ui, config),
                    PreferencesTab::Interface => interface_tab(ui, config),
                }

                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Reset to Defaults").clicked() {
                        config.write().reset_to_defaults();
                        ui.ctx().set_zoom_factor(UiConfig::default().scale);
                        switch_changed = true;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Save").clicked()
                            && let Err(e) = config.read().save()
                        {
                            tracing::error!("Failed to save config: {}", e);
                        }
                    });
                });
            });

        switch_changed
    }
}

fn switch_tab(ui: &mut egui::Ui, config: &SharedConfig) -> bool {
    let mut cfg = config.write();
    let mut switch = cfg.config().switch.clone();
    let mut changed = false;

    changed |= ui
        .add(egui::Slider::new(&mut switch.width, 80.0..=480.0).text("Width"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut switch.touch_slop, 0.0..=32.0).text("Drag threshold"))
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut switch.duration_ms, 100..=2000)
                .text("Duration")
                .suffix(" ms"),
        )
        .changed();

    ui.horizontal(|ui| {
        ui.label("Easing:");
        egui::ComboBox::from_id_salt("easing")
            .selected_text(easing_label(switch.easing))
            .show_ui(ui, |ui| {
                for easing in [Easing::EaseInOut, Easing::Linear] {
                    changed |= ui
                        .selectable_value(&mut switch.easing, easing, easing_label(easing))
                        .changed();
                }
            });
    });

    ui.horizontal(|ui| {
        ui.label("Quality:");
        let high = switch.scene == SceneConfig::default();
        egui::ComboBox::from_id_salt("scene_quality")
            .selected_text(if high { "High" } else { "Low" })
            .show_ui(ui, |ui| {
                if ui.selectable_label(high, "High").clicked() {
                    switch.scene = SceneConfig::default();
                    changed = true;
                }
                if ui.selectable_label(!high, "Low").clicked() {
                    switch.scene = SceneConfig::low();
                    changed = true;
                }
            });
    });

    if changed {
        cfg.config_mut().switch = switch;
    }
    changed
}

fn interface_tab(ui: &mut egui::Ui, config: &SharedConfig) {
    let mut cfg = config.write();
    let mut scale = cfg.config().ui.scale;

    let response = ui.add(egui::Slider::new(&mut scale, 0.75..=2.0).text("UI Scale"));
    cfg.config_mut().ui.scale = scale;
    // Zooming mid-drag moves the slider under the pointer
    if response.drag_stopped() || (response.changed() && !response.dragged()) {
        ui.ctx().set_zoom_factor(scale);
    }
}

fn easing_label(easing: Easing) -> &'static str {
    match easing {
        Easing::Linear => "Linear",
        Easing::EaseInOut => "Ease in-out",
    }
}
