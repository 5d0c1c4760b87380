//! Global constants for dn-core

use std::time::Duration;

/// Width to height ratio of the switch (7.8:3)
pub const ASPECT_RATIO: f32 = 7.8 / 3.0;

/// Duration of a full 0 -> 1 transition
pub const BASE_DURATION: Duration = Duration::from_millis(500);

/// Width used when neither axis is constrained (logical points)
pub const DEFAULT_WIDTH: f32 = 180.0;

/// Pointer travel before a press turns into a drag (logical points)
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Fraction at or above which a released drag settles to checked
pub const SNAP_THRESHOLD: f32 = 0.5;
