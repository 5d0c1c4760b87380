//! Aspect-preserving layout of the switch

use glam::Vec2;

use crate::constants::{ASPECT_RATIO, DEFAULT_WIDTH};

/// Constraint on one axis of the available space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// The host dictates this size
    Exact(f32),
    /// The switch picks its own size
    Unspecified,
}

/// Switch rectangle in local (widget) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Create bounds from an origin and a size
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            left: min.x,
            top: min.y,
            right: min.x + size.x,
            bottom: min.y + size.y,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Horizontal travel of the sun/moon disc
    pub fn travel(&self) -> f32 {
        self.width() - self.height()
    }

    /// Whether a point lies inside the bounds
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

/// Result of a layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Space the switch occupies in its host
    pub size: Vec2,
    /// Drawn switch area, centered inside `size`
    pub bounds: Bounds,
}

/// Measure the switch for the given constraints.
///
/// With both axes exact the largest box of the fixed aspect ratio is fitted
/// and centered along the axis with slack. With one exact axis the other
/// follows the ratio. With none the default width is used.
pub fn measure(width: Constraint, height: Constraint) -> Layout {
    match (width, height) {
        (Constraint::Exact(w), Constraint::Exact(h)) => {
            let w = w.max(0.0);
            let h = h.max(0.0);
            let (inner, offset) = if h > 0.0 && w / h > ASPECT_RATIO {
                let inner = Vec2::new(h * ASPECT_RATIO, h);
                (inner, Vec2::new((w - inner.x) / 2.0, 0.0))
            } else {
                let inner = Vec2::new(w, w / ASPECT_RATIO);
                (inner, Vec2::new(0.0, (h - inner.y) / 2.0))
            };
            Layout {
                size: Vec2::new(w, h),
                bounds: Bounds::from_min_size(offset, inner),
            }
        }
        (Constraint::Exact(w), Constraint::Unspecified) => fitted(Vec2::new(w, w / ASPECT_RATIO)),
        (Constraint::Unspecified, Constraint::Exact(h)) => fitted(Vec2::new(h * ASPECT_RATIO, h)),
        (Constraint::Unspecified, Constraint::Unspecified) => {
            fitted(Vec2::new(DEFAULT_WIDTH, DEFAULT_WIDTH / ASPECT_RATIO))
        }
    }
}

fn fitted(size: Vec2) -> Layout {
    let size = size.max(Vec2::ZERO);
    Layout {
        size,
        bounds: Bounds::from_min_size(Vec2::ZERO, size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wide_space_centers_horizontally() {
        let layout = measure(Constraint::Exact(400.0), Constraint::Exact(60.0));
        assert_eq!(layout.size, Vec2::new(400.0, 60.0));
        assert_relative_eq!(layout.bounds.width(), 156.0, epsilon = 1e-3);
        assert_relative_eq!(layout.bounds.height(), 60.0);
        assert_relative_eq!(layout.bounds.left, 122.0, epsilon = 1e-3);
        assert_relative_eq!(layout.bounds.top, 0.0);
    }

    #[test]
    fn test_tall_space_centers_vertically() {
        let layout = measure(Constraint::Exact(156.0), Constraint::Exact(100.0));
        assert_relative_eq!(layout.bounds.width(), 156.0);
        assert_relative_eq!(layout.bounds.height(), 60.0, epsilon = 1e-3);
        assert_relative_eq!(layout.bounds.top, 20.0, epsilon = 1e-3);
        assert_relative_eq!(layout.bounds.left, 0.0);
    }

    #[test]
    fn test_single_exact_axis_follows_ratio() {
        let by_width = measure(Constraint::Exact(260.0), Constraint::Unspecified);
        assert_relative_eq!(by_width.size.y, 100.0, epsilon = 1e-3);

        let by_height = measure(Constraint::Unspecified, Constraint::Exact(30.0));
        assert_relative_eq!(by_height.size.x, 78.0, epsilon = 1e-3);
        assert_eq!(by_height.bounds.min(), Vec2::ZERO);
    }

    #[test]
    fn test_unconstrained_uses_default_width() {
        let layout = measure(Constraint::Unspecified, Constraint::Unspecified);
        assert_relative_eq!(layout.size.x, DEFAULT_WIDTH);
        assert_relative_eq!(layout.bounds.width() / layout.bounds.height(), ASPECT_RATIO, epsilon = 1e-4);
    }

    #[test]
    fn test_travel() {
        let bounds = Bounds::from_min_size(Vec2::ZERO, Vec2::new(260.0, 100.0));
        assert_eq!(bounds.travel(), 160.0);
        assert!(bounds.contains(Vec2::new(10.0, 10.0)));
        assert!(!bounds.contains(Vec2::new(-1.0, 10.0)));
    }
}
