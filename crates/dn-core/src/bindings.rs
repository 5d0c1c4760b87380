//! Wiring a switch to the night-mode manager

use std::sync::Arc;

use parking_lot::Mutex;

use crate::fraction::Fraction;
use crate::manager::SharedNightMode;
use crate::switch::DayNightSwitch;

/// Switch state that outlives the host view showing the switch.
///
/// When the theme flips at transition start the host may rebuild its views;
/// a rebuilt switch restores from here and finishes the animation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwitchMemory {
    /// Last night flag chosen through the switch
    pub is_night_mode: Option<bool>,
    /// Last fraction drawn
    pub fraction: Option<Fraction>,
}

/// Shared [`SwitchMemory`] handle
pub type SharedSwitchMemory = Arc<Mutex<SwitchMemory>>;

/// Create an empty shared memory
pub fn create_switch_memory() -> SharedSwitchMemory {
    Arc::new(Mutex::new(SwitchMemory::default()))
}

/// Apply the night mode as soon as a transition starts.
///
/// Restores an in-flight animation from `memory`, then persists the new
/// state through `manager` on every checked change before calling `block`.
pub fn toggle_night_mode_on_animation_start(
    switch: &mut DayNightSwitch,
    manager: &SharedNightMode,
    memory: &SharedSwitchMemory,
    mut block: impl FnMut(bool) + 'static,
) {
    let saved = *memory.lock();
    if let Some(is_night) = saved.is_night_mode {
        switch.set_default_night_mode(!is_night);
        if let Some(fraction) = saved.fraction {
            switch.set_fraction(fraction);
        }
        switch.set_checked(is_night);
    }

    let fraction_memory = memory.clone();
    switch.set_on_fraction_changed(move |fraction| {
        fraction_memory.lock().fraction = Some(fraction);
    });

    let memory = memory.clone();
    let manager = manager.clone();
    switch.set_on_checked_changed(move |is_checked| {
        memory.lock().is_night_mode = Some(is_checked);
        if let Err(e) = manager.lock().set_night_mode(is_checked) {
            tracing::error!("Failed to save night mode: {}", e);
        }
        block(is_checked);
    });
}

/// Apply the night mode once the transition has finished.
///
/// `block` still runs at transition start, e.g. to restyle chrome early.
pub fn toggle_night_mode_on_animation_end(
    switch: &mut DayNightSwitch,
    manager: &SharedNightMode,
    block: impl FnMut(bool) + 'static,
) {
    let manager = manager.clone();
    switch.set_on_animation_end(move |is_checked| {
        if let Err(e) = manager.lock().set_night_mode(is_checked) {
            tracing::error!("Failed to save night mode: {}", e);
        }
    });
    switch.set_on_checked_changed(block);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use approx::assert_relative_eq;
    use glam::Vec2;

    use super::*;
    use crate::gesture::TouchEvent;
    use crate::layout::Constraint;
    use crate::manager::tests::RecordingHost;
    use crate::manager::{NightModeManager, ThemeMode};
    use crate::settings::{MemoryStore, RonFileStore, SettingsStore};

    const FRAME: Duration = Duration::from_millis(16);

    fn shared_manager(host: &RecordingHost) -> SharedNightMode {
        NightModeManager::new(MemoryStore::new(), host.clone())
            .unwrap()
            .into_shared()
    }

    fn day_switch(manager: &SharedNightMode) -> DayNightSwitch {
        let mut switch = DayNightSwitch::new(manager.lock().is_dark());
        switch.measure(Constraint::Exact(260.0), Constraint::Unspecified);
        switch
    }

    #[test]
    fn test_toggle_persists_night_mode_at_animation_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("night_mode.ron");
        let host = RecordingHost::default();
        let manager = NightModeManager::new(RonFileStore::new(&path), host.clone())
            .unwrap()
            .into_shared();

        let mut switch = day_switch(&manager);
        assert!(!switch.is_default_night_mode());
        assert_eq!(switch.fraction(), Fraction::DAY);

        let ended = Rc::new(RefCell::new(Vec::new()));
        toggle_night_mode_on_animation_end(&mut switch, &manager, |_| {});
        // Observe completion through the fraction slot instead of replacing the end slot
        let e = ended.clone();
        switch.set_on_fraction_changed(move |f| e.borrow_mut().push(f.get()));

        switch.toggle();
        assert!(!manager.lock().is_night_mode());

        let mut elapsed = Duration::ZERO;
        while switch.tick(FRAME) {
            elapsed += FRAME;
        }
        elapsed += FRAME;
        assert!(elapsed >= Duration::from_millis(500));
        assert!(elapsed < Duration::from_millis(500) + FRAME * 2);

        assert!(switch.is_checked());
        assert_eq!(ended.borrow().last().copied(), Some(1.0));
        assert!(manager.lock().is_night_mode());
        assert_eq!(host.applied.lock().last().copied(), Some(ThemeMode::Night));
        assert!(RonFileStore::new(&path).load().unwrap().is_night_mode);
    }

    #[test]
    fn test_on_start_applies_immediately_and_runs_block() {
        let host = RecordingHost::default();
        let manager = shared_manager(&host);
        let memory = create_switch_memory();
        let blocks = Rc::new(RefCell::new(Vec::new()));

        let mut switch = day_switch(&manager);
        let b = blocks.clone();
        toggle_night_mode_on_animation_start(&mut switch, &manager, &memory, move |checked| {
            b.borrow_mut().push(checked)
        });

        switch.toggle();
        assert!(manager.lock().is_night_mode());
        assert_eq!(*blocks.borrow(), vec![true]);
        assert_eq!(memory.lock().is_night_mode, Some(true));
    }

    #[test]
    fn test_rebuilt_switch_resumes_from_memory() {
        let host = RecordingHost::default();
        let manager = shared_manager(&host);
        let memory = create_switch_memory();

        let mut first = day_switch(&manager);
        toggle_night_mode_on_animation_start(&mut first, &manager, &memory, |_| {});
        first.set_easing(crate::transition::Easing::Linear);
        first.toggle();
        first.tick(Duration::from_millis(150));
        let saved = memory.lock().fraction.unwrap();
        assert_relative_eq!(saved.get(), 0.3, epsilon = 1e-4);

        // Host view rebuilt after the theme flipped to night
        first.cancel_transition();
        drop(first);
        let mut second = day_switch(&manager);
        assert!(second.is_checked());
        toggle_night_mode_on_animation_start(&mut second, &manager, &memory, |_| {});

        assert!(second.is_checked());
        assert!(!second.is_default_night_mode());
        assert_relative_eq!(second.fraction().get(), 0.3, epsilon = 1e-4);
        assert!(second.is_animating());
        while second.tick(FRAME) {}
        assert_eq!(second.fraction(), Fraction::NIGHT);
    }

    #[test]
    fn test_drag_release_end_to_end() {
        let host = RecordingHost::default();
        let manager = shared_manager(&host);
        let mut switch = day_switch(&manager);
        toggle_night_mode_on_animation_end(&mut switch, &manager, |_| {});

        switch.on_touch(TouchEvent::Down(Vec2::new(40.0, 50.0)));
        switch.on_touch(TouchEvent::Move(Vec2::new(136.0, 50.0)));
        assert_relative_eq!(switch.fraction().get(), 0.6, epsilon = 1e-5);
        switch.on_touch(TouchEvent::Up(Vec2::new(136.0, 50.0)));
        assert!(switch.is_checked());
        assert!(!manager.lock().is_night_mode());

        while switch.tick(FRAME) {}
        assert_eq!(switch.fraction(), Fraction::NIGHT);
        assert!(manager.lock().is_night_mode());
    }
}
