//! Day/night switch state machine
//!
//! Owns the checked flag and the fraction, turns pointer gestures into
//! fraction updates and drives the settle transition one frame at a time.
//! Drawing lives elsewhere; everything visual is a function of
//! [`DayNightSwitch::fraction`] and [`DayNightSwitch::layout`].

use std::fmt;
use std::time::Duration;

use crate::constants::{BASE_DURATION, DEFAULT_TOUCH_SLOP, SNAP_THRESHOLD};
use crate::fraction::Fraction;
use crate::gesture::{GestureOutcome, GestureTracker, TouchEvent};
use crate::layout::{Constraint, Layout, measure};
use crate::transition::{Easing, Transition};

/// Listener receiving the checked state
pub type CheckedListener = Box<dyn FnMut(bool)>;

/// Listener receiving every fraction update
pub type FractionListener = Box<dyn FnMut(Fraction)>;

/// Animated day/night toggle
pub struct DayNightSwitch {
    checked: bool,
    fraction: Fraction,
    default_night_mode: bool,
    layout: Option<Layout>,
    gesture: GestureTracker,
    transition: Option<Transition>,
    base_duration: Duration,
    easing: Easing,
    on_checked_changed: Option<CheckedListener>,
    on_animation_end: Option<CheckedListener>,
    on_fraction_changed: Option<FractionListener>,
}

impl fmt::Debug for DayNightSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DayNightSwitch")
            .field("checked", &self.checked)
            .field("fraction", &self.fraction)
            .field("default_night_mode", &self.default_night_mode)
            .field("layout", &self.layout)
            .field("transition", &self.transition)
            .finish_non_exhaustive()
    }
}

impl Default for DayNightSwitch {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DayNightSwitch {
    /// Create a switch settled on the current system theme
    pub fn new(is_night: bool) -> Self {
        Self {
            checked: is_night,
            fraction: Fraction::settled(is_night),
            default_night_mode: is_night,
            layout: None,
            gesture: GestureTracker::new(DEFAULT_TOUCH_SLOP),
            transition: None,
            base_duration: BASE_DURATION,
            easing: Easing::default(),
            on_checked_changed: None,
            on_animation_end: None,
            on_fraction_changed: None,
        }
    }

    // ============== Configuration ==============

    /// Drag threshold in logical points
    pub fn set_touch_slop(&mut self, touch_slop: f32) {
        self.gesture.set_touch_slop(touch_slop);
    }

    pub fn touch_slop(&self) -> f32 {
        self.gesture.touch_slop()
    }

    /// Duration of a full 0 -> 1 transition
    pub fn set_base_duration(&mut self, duration: Duration) {
        self.base_duration = duration;
    }

    pub fn base_duration(&self) -> Duration {
        self.base_duration
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    // ============== Listeners ==============

    /// Called as soon as the checked state changes (transition start)
    pub fn set_on_checked_changed(&mut self, listener: impl FnMut(bool) + 'static) {
        self.on_checked_changed = Some(Box::new(listener));
    }

    /// Called when a settle transition completes
    pub fn set_on_animation_end(&mut self, listener: impl FnMut(bool) + 'static) {
        self.on_animation_end = Some(Box::new(listener));
    }

    /// Called on every fraction update
    pub fn set_on_fraction_changed(&mut self, listener: impl FnMut(Fraction) + 'static) {
        self.on_fraction_changed = Some(Box::new(listener));
    }

    /// Drop all listeners
    pub fn clear_listeners(&mut self) {
        self.on_checked_changed = None;
        self.on_animation_end = None;
        self.on_fraction_changed = None;
    }

    // ============== State ==============

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn fraction(&self) -> Fraction {
        self.fraction
    }

    pub fn is_default_night_mode(&self) -> bool {
        self.default_night_mode
    }

    /// Reset to a settled state without animating
    pub fn set_default_night_mode(&mut self, is_night: bool) {
        self.default_night_mode = is_night;
        self.checked = is_night;
        self.set_fraction(Fraction::settled(is_night));
    }

    /// Set the fraction directly (clamped to `[0, 1]`)
    pub fn set_fraction(&mut self, fraction: impl Into<Fraction>) {
        self.fraction = fraction.into();
        if let Some(listener) = self.on_fraction_changed.as_mut() {
            listener(self.fraction);
        }
    }

    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    /// Run a layout pass and keep the result for gesture mapping
    pub fn measure(&mut self, width: Constraint, height: Constraint) -> Layout {
        let layout = measure(width, height);
        self.set_layout(layout);
        layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        if self.layout.is_none() {
            tracing::trace!(?layout, "switch measured");
        }
        self.layout = Some(layout);
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Whether a pointer press is being tracked
    pub fn is_pressed(&self) -> bool {
        self.gesture.is_tracking()
    }

    // ============== Checked transitions ==============

    pub fn toggle(&mut self) {
        self.set_checked(!self.checked);
    }

    /// Move to the checked or unchecked state with an animated transition.
    ///
    /// A no-op when already settled on `checked`. Any in-flight transition
    /// is dropped without its end callback.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked == checked && self.fraction.is_settled_at(checked) {
            return;
        }
        self.cancel_transition();

        let changed = self.checked != checked;
        let target = Fraction::settled(checked);
        self.checked = checked;

        let transition = Transition::towards(self.fraction, target, self.base_duration, self.easing);
        tracing::debug!(
            checked,
            from = self.fraction.get(),
            duration_ms = transition.duration().as_millis() as u64,
            "starting switch transition"
        );
        self.transition = Some(transition);

        if changed {
            self.emit_checked_changed();
        }
    }

    /// Advance the in-flight transition; returns whether it is still running.
    ///
    /// Transitions started before the first layout pass wait for it.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        if self.layout.is_none() {
            return true;
        }
        let step = transition.tick(dt);
        if step.finished {
            self.transition = None;
        }
        self.set_fraction(step.fraction);
        if step.finished {
            self.emit_animation_end();
            return false;
        }
        true
    }

    /// Drop the in-flight transition without firing its end callback
    pub fn cancel_transition(&mut self) {
        if let Some(transition) = self.transition.take() {
            tracing::debug!(
                from = transition.from().get(),
                to = transition.to().get(),
                elapsed_ms = transition.elapsed().as_millis() as u64,
                "switch transition cancelled"
            );
        }
    }

    // ============== Input ==============

    /// Feed a pointer event; returns whether the switch consumed it
    pub fn on_touch(&mut self, event: TouchEvent) -> bool {
        let Some(layout) = self.layout else {
            tracing::warn!(?event, "touch before layout ignored");
            return false;
        };
        if matches!(event, TouchEvent::Down(_)) {
            self.cancel_transition();
        }
        let Some(outcome) = self.gesture.handle(event) else {
            return false;
        };
        match outcome {
            GestureOutcome::Pending => {}
            GestureOutcome::Drag { dx } => {
                let travel = layout.bounds.travel();
                if travel > 0.0 {
                    let offset = dx / travel;
                    let fraction = if self.checked { 1.0 + offset } else { offset };
                    self.set_fraction(fraction);
                }
            }
            GestureOutcome::Click => self.toggle(),
            GestureOutcome::DragEnd => self.set_checked(self.fraction.get() >= SNAP_THRESHOLD),
            GestureOutcome::Cancelled => self.set_checked(self.checked),
        }
        true
    }

    fn emit_checked_changed(&mut self) {
        let checked = self.checked;
        if let Some(listener) = self.on_checked_changed.as_mut() {
            listener(checked);
        }
    }

    fn emit_animation_end(&mut self) {
        let checked = self.checked;
        if let Some(listener) = self.on_animation_end.as_mut() {
            listener(checked);
        }
    }
}
