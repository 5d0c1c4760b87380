//! Demo pages, one per way of wiring the switch to the night mode

use std::cell::Cell;
use std::rc::Rc;

use dn_core::{
    DayNightSwitch, Fraction, SharedNightMode, SharedSwitchMemory, SwitchMemory,
    toggle_night_mode_on_animation_end, toggle_night_mode_on_animation_start,
};

use crate::config::AppConfig;
use crate::theme::palette;
use crate::widget::SwitchView;

/// Which binding a demo page uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    /// Theme flips as soon as the transition starts
    AtOnce,
    /// Theme flips once the transition ends
    Delay,
    /// Page colors follow the fraction; theme flips at the end
    Smooth,
}

impl DemoKind {
    pub const ALL: [DemoKind; 3] = [DemoKind::AtOnce, DemoKind::Delay, DemoKind::Smooth];

    pub fn title(self) -> &'static str {
        match self {
            DemoKind::AtOnce => "At once",
            DemoKind::Delay => "Delay",
            DemoKind::Smooth => "Smooth",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DemoKind::AtOnce => "Night mode switches when the animation starts.",
            DemoKind::Delay => "Night mode switches when the animation ends.",
            DemoKind::Smooth => "Colors follow the animation, night mode switches at the end.",
        }
    }
}

/// A demo page owning its switch
pub struct DemoPage {
    kind: DemoKind,
    switch: DayNightSwitch,
    /// Last fraction reported by the switch (smooth page)
    fraction: Rc<Cell<Fraction>>,
    /// Outlives the page so an interrupted at-once transition resumes
    memory: SharedSwitchMemory,
}

impl DemoPage {
    pub fn new(
        kind: DemoKind,
        night_mode: &SharedNightMode,
        memory: &SharedSwitchMemory,
        config: &AppConfig,
    ) -> Self {
        let (is_dark, is_night_mode) = {
            let manager = night_mode.lock();
            (manager.is_dark(), manager.is_night_mode())
        };
        let mut switch = DayNightSwitch::new(is_dark);
        config.switch.apply_to(&mut switch);

        let fraction = Rc::new(Cell::new(switch.fraction()));
        match kind {
            DemoKind::AtOnce => {
                // Another page changed the night mode since the interruption
                let stale = memory
                    .lock()
                    .is_night_mode
                    .is_some_and(|saved| saved != is_night_mode);
                if stale {
                    *memory.lock() = SwitchMemory::default();
                }
                toggle_night_mode_on_animation_start(&mut switch, night_mode, memory, |is_night| {
                    tracing::debug!(is_night, "night mode applied at transition start");
                });
            }
            DemoKind::Delay => {
                toggle_night_mode_on_animation_end(&mut switch, night_mode, |is_night| {
                    tracing::debug!(is_night, "night mode pending until transition end");
                });
            }
            DemoKind::Smooth => {
                toggle_night_mode_on_animation_end(&mut switch, night_mode, |_| {});
                let shared = fraction.clone();
                switch.set_on_fraction_changed(move |value| shared.set(value));
            }
        }
        tracing::debug!(?kind, is_dark, "opened demo page");

        Self {
            kind,
            switch,
            fraction,
            memory: memory.clone(),
        }
    }

    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    pub fn switch_mut(&mut self) -> &mut DayNightSwitch {
        &mut self.switch
    }

    /// Stop the switch before the page goes away.
    ///
    /// The switch memory is kept only when an at-once transition was cut
    /// short, so the next at-once page finishes it.
    pub fn leave(&mut self) {
        let interrupted = self.switch.is_animating();
        self.switch.cancel_transition();
        self.switch.clear_listeners();
        if self.kind != DemoKind::AtOnce || !interrupted {
            *self.memory.lock() = SwitchMemory::default();
        }
        tracing::debug!(kind = ?self.kind, interrupted, "left demo page");
    }

    /// Show the page; returns true when the user asked to go back
    pub fn show(&mut self, ctx: &egui::Context, config: &AppConfig) -> bool {
        let mut frame = egui::Frame::central_panel(&ctx.style());
        let mut text_color = None;
        if self.kind == DemoKind::Smooth {
            let fraction = self.fraction.get();
            frame = frame.fill(palette::mix(
                palette::DAY.bg_panel,
                palette::NIGHT.bg_panel,
                fraction,
            ));
            text_color = Some(palette::mix(
                palette::DAY.text_primary,
                palette::NIGHT.text_primary,
                fraction,
            ));
        }

        let mut back = false;
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            if let Some(color) = text_color {
                ui.visuals_mut().override_text_color = Some(color);
            }
            ui.horizontal(|ui| {
                back = ui.button("⬅ Back").clicked();
                ui.heading(self.kind.title());
            });
            ui.label(self.kind.description());
            ui.separator();

            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.heading("Night mode");
                ui.add_space(16.0);
                ui.add(
                    SwitchView::new(&mut self.switch)
                        .width(config.switch.width)
                        .palette(&config.palette)
                        .scene_config(&config.switch.scene),
                );
                ui.add_space(16.0);
                ui.weak(format!("fraction {:.2}", self.switch.fraction().get()));
            });
        });
        back
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use dn_core::{Constraint, NightModeManager, RonFileStore, create_switch_memory};

    use super::*;
    use crate::host::EguiThemeHost;

    const FRAME: Duration = Duration::from_millis(16);

    fn night_mode(path: &Path) -> SharedNightMode {
        NightModeManager::new(RonFileStore::new(path), EguiThemeHost::new(egui::Context::default()))
            .unwrap()
            .into_shared()
    }

    fn open(kind: DemoKind, night_mode: &SharedNightMode, memory: &SharedSwitchMemory) -> DemoPage {
        let mut page = DemoPage::new(kind, night_mode, memory, &AppConfig::default());
        page.switch_mut()
            .measure(Constraint::Exact(260.0), Constraint::Unspecified);
        page
    }

    fn settle(page: &mut DemoPage) {
        for _ in 0..1000 {
            if !page.switch_mut().tick(FRAME) {
                break;
            }
        }
    }

    #[test]
    fn test_leave_drops_pending_night_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("night_mode.ron");
        let night_mode = night_mode(&path);
        let memory = create_switch_memory();

        let mut page = open(DemoKind::Delay, &night_mode, &memory);
        page.switch_mut().toggle();
        assert!(page.switch_mut().tick(Duration::from_millis(100)));
        page.leave();

        assert!(!page.switch_mut().is_animating());
        settle(&mut page);
        assert!(!night_mode.lock().is_night_mode());
        assert!(!path.exists());

        // Listeners are gone too
        page.switch_mut().set_checked(true);
        settle(&mut page);
        assert_eq!(page.switch_mut().fraction(), Fraction::NIGHT);
        assert!(!night_mode.lock().is_night_mode());
        assert!(!path.exists());
        assert_eq!(*memory.lock(), SwitchMemory::default());
    }

    #[test]
    fn test_interrupted_at_once_page_resumes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("night_mode.ron");
        let night_mode = night_mode(&path);
        let memory = create_switch_memory();

        let mut page = open(DemoKind::AtOnce, &night_mode, &memory);
        page.switch_mut().toggle();
        assert!(night_mode.lock().is_night_mode());
        assert!(path.exists());
        page.switch_mut().tick(Duration::from_millis(100));
        let mid = page.switch_mut().fraction();
        assert!(mid.get() > 0.0 && mid.get() < 1.0);
        page.leave();

        let saved = *memory.lock();
        assert_eq!(saved.is_night_mode, Some(true));
        assert_eq!(saved.fraction, Some(mid));

        let mut page = open(DemoKind::AtOnce, &night_mode, &memory);
        assert!(page.switch_mut().is_checked());
        assert!(page.switch_mut().is_animating());
        assert_eq!(page.switch_mut().fraction(), mid);
        settle(&mut page);
        assert_eq!(page.switch_mut().fraction(), Fraction::NIGHT);
        assert!(night_mode.lock().is_night_mode());
    }

    #[test]
    fn test_settled_at_once_page_forgets_memory() {
        let dir = tempfile::tempdir().unwrap();
        let night_mode = night_mode(&dir.path().join("night_mode.ron"));
        let memory = create_switch_memory();

        let mut page = open(DemoKind::AtOnce, &night_mode, &memory);
        page.switch_mut().toggle();
        settle(&mut page);
        page.leave();
        assert_eq!(*memory.lock(), SwitchMemory::default());

        let mut page = open(DemoKind::AtOnce, &night_mode, &memory);
        assert!(page.switch_mut().is_checked());
        assert!(!page.switch_mut().is_animating());
    }

    #[test]
    fn test_stale_memory_is_cleared() {
        let dir = tempfile::tempdir().unwrap();
        let night_mode = night_mode(&dir.path().join("night_mode.ron"));
        let memory = create_switch_memory();

        let mut page = open(DemoKind::AtOnce, &night_mode, &memory);
        page.switch_mut().toggle();
        page.switch_mut().tick(Duration::from_millis(100));
        page.leave();

        // Another page switched back to day in the meantime
        night_mode.lock().set_night_mode(false).unwrap();
        let mut page = open(DemoKind::AtOnce, &night_mode, &memory);
        assert!(!page.switch_mut().is_checked());
        assert!(!page.switch_mut().is_animating());
        assert_eq!(page.switch_mut().fraction(), Fraction::DAY);
        assert!(!night_mode.lock().is_night_mode());
    }
}
