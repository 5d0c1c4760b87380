//! Normalized animation progress

use serde::{Deserialize, Serialize};

/// Progress between the day (0) and night (1) endpoints.
///
/// Always within `[0, 1]`; out-of-range input is clamped and NaN becomes 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Fraction(f32);

impl Fraction {
    /// Day endpoint
    pub const DAY: Fraction = Fraction(0.0);
    /// Night endpoint
    pub const NIGHT: Fraction = Fraction(1.0);

    /// Create a fraction, clamping into `[0, 1]`
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::DAY;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Boundary matching a checked state
    pub fn settled(checked: bool) -> Self {
        if checked { Self::NIGHT } else { Self::DAY }
    }

    /// Raw value
    pub fn get(self) -> f32 {
        self.0
    }

    /// Whether the value sits exactly on a boundary
    pub fn is_settled(self) -> bool {
        self.0 == 0.0 || self.0 == 1.0
    }

    /// Whether the value sits on the boundary matching `checked`
    pub fn is_settled_at(self, checked: bool) -> bool {
        self == Self::settled(checked)
    }

    /// Linear interpolation between two scalars at this fraction
    pub fn mix(self, start: f32, end: f32) -> f32 {
        start + (end - start) * self.0
    }
}

impl From<f32> for Fraction {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Fraction> for f32 {
    fn from(fraction: Fraction) -> Self {
        fraction.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(Fraction::new(-0.5).get(), 0.0);
        assert_eq!(Fraction::new(1.7).get(), 1.0);
        assert_eq!(Fraction::new(f32::INFINITY).get(), 1.0);
        assert_eq!(Fraction::new(f32::NEG_INFINITY).get(), 0.0);
        assert_eq!(Fraction::new(f32::NAN).get(), 0.0);
        assert_eq!(Fraction::new(0.25).get(), 0.25);
    }

    #[test]
    fn test_settled() {
        assert!(Fraction::DAY.is_settled());
        assert!(Fraction::NIGHT.is_settled());
        assert!(!Fraction::new(0.5).is_settled());
        assert!(Fraction::NIGHT.is_settled_at(true));
        assert!(!Fraction::NIGHT.is_settled_at(false));
    }

    #[test]
    fn test_mix() {
        let f = Fraction::new(0.25);
        assert_eq!(f.mix(0.0, 8.0), 2.0);
        assert_eq!(f.mix(8.0, 0.0), 6.0);
    }
}
