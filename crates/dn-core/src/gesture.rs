//! Tap vs. drag disambiguation

use glam::Vec2;

/// Pointer input delivered to the switch, in local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// Pointer pressed
    Down(Vec2),
    /// Pointer moved while pressed
    Move(Vec2),
    /// Pointer released
    Up(Vec2),
    /// Gesture aborted by the host
    Cancel,
}

/// What a tracked gesture means for the switch
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing to do yet
    Pending,
    /// Pointer is dragging; horizontal offset from the press point
    Drag { dx: f32 },
    /// Released without crossing the slop
    Click,
    /// Released after a drag
    DragEnd,
    /// Gesture aborted
    Cancelled,
}

/// Tracks a single press from down to up
#[derive(Debug, Clone, PartialEq)]
pub struct GestureTracker {
    touch_slop: f32,
    down: Option<Vec2>,
    is_click: bool,
}

impl GestureTracker {
    /// Create a tracker with the given drag threshold
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop: touch_slop.max(0.0),
            down: None,
            is_click: false,
        }
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    pub fn set_touch_slop(&mut self, touch_slop: f32) {
        self.touch_slop = touch_slop.max(0.0);
    }

    /// Whether a press is being tracked
    pub fn is_tracking(&self) -> bool {
        self.down.is_some()
    }

    /// Feed an event; `None` means the event was not part of a gesture
    pub fn handle(&mut self, event: TouchEvent) -> Option<GestureOutcome> {
        match event {
            TouchEvent::Down(pos) => {
                self.down = Some(pos);
                self.is_click = true;
                Some(GestureOutcome::Pending)
            }
            TouchEvent::Move(pos) => {
                let down = self.down?;
                let delta = pos - down;
                if delta.x.abs() > self.touch_slop || delta.y.abs() > self.touch_slop {
                    self.is_click = false;
                }
                if self.is_click {
                    Some(GestureOutcome::Pending)
                } else {
                    Some(GestureOutcome::Drag { dx: delta.x })
                }
            }
            TouchEvent::Up(_) => {
                self.down.take()?;
                Some(if self.is_click {
                    GestureOutcome::Click
                } else {
                    GestureOutcome::DragEnd
                })
            }
            TouchEvent::Cancel => {
                self.down.take()?;
                self.is_click = false;
                Some(GestureOutcome::Cancelled)
            }
        }
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_TOUCH_SLOP)
    }
}
