//! Frame-ticked interpolation of the fraction towards a boundary

use std::f32::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::fraction::Fraction;

/// Timing curve applied to transition progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Slow start and end (cosine curve)
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

/// Result of advancing a transition by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStep {
    /// Interpolated fraction for this frame
    pub fraction: Fraction,
    /// Whether the transition reached its target
    pub finished: bool,
}

/// A single in-flight interpolation from one fraction to another
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: Fraction,
    to: Fraction,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Transition {
    /// Create a transition whose duration scales with the remaining distance
    pub fn towards(from: Fraction, to: Fraction, base: Duration, easing: Easing) -> Self {
        let distance = (to.get() - from.get()).abs();
        Self {
            from,
            to,
            duration: base.mul_f32(distance),
            elapsed: Duration::ZERO,
            easing,
        }
    }

    pub fn from(&self) -> Fraction {
        self.from
    }

    pub fn to(&self) -> Fraction {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whether the transition already reached its target
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` and return the fraction for this frame
    pub fn tick(&mut self, dt: Duration) -> TransitionStep {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.is_finished() {
            return TransitionStep {
                fraction: self.to,
                finished: true,
            };
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let progress = Fraction::new(self.easing.apply(t));
        TransitionStep {
            fraction: Fraction::new(progress.mix(self.from.get(), self.to.get())),
            finished: false,
        }
    }
}
