//! Quadratic path flattening

use glam::Vec2;

/// Path made of straight and quadratic segments, flattened on the fly
#[derive(Debug, Clone, PartialEq)]
pub struct QuadPath {
    points: Vec<Vec2>,
    segments: u32,
}

impl QuadPath {
    /// Start a path at `start`; each curve is split into `segments` lines
    pub fn new(start: Vec2, segments: u32) -> Self {
        Self {
            points: vec![start],
            segments: segments.max(1),
        }
    }

    fn current(&self) -> Vec2 {
        // `points` is never empty: `new` seeds it
        self.points[self.points.len() - 1]
    }

    /// Quadratic Bézier from the current point through `control` to `end`
    pub fn quad_to(mut self, control: Vec2, end: Vec2) -> Self {
        let start = self.current();
        for i in 1..=self.segments {
            let t = i as f32 / self.segments as f32;
            let u = 1.0 - t;
            self.points
                .push(start * (u * u) + control * (2.0 * u * t) + end * (t * t));
        }
        self
    }

    /// Consume the path into its flattened points
    pub fn into_points(self) -> Vec<Vec2> {
        self.points
    }
}

/// Outline whose x coordinates never decrease, queried by x
#[derive(Debug, Clone, PartialEq)]
pub struct MonotoneCurve {
    points: Vec<Vec2>,
}

impl MonotoneCurve {
    /// Build from points sorted by x; out-of-order points are dropped
    pub fn new(points: impl IntoIterator<Item = Vec2>) -> Self {
        let mut sorted: Vec<Vec2> = Vec::new();
        for p in points {
            match sorted.last() {
                Some(last) if p.x < last.x => continue,
                _ => sorted.push(p),
            }
        }
        Self { points: sorted }
    }

    /// Horizontal extent, if the curve has any points
    pub fn x_range(&self) -> Option<(f32, f32)> {
        Some((self.points.first()?.x, self.points.last()?.x))
    }

    /// Interpolated y at `x`, `None` outside the curve's extent
    pub fn y_at(&self, x: f32) -> Option<f32> {
        let (min, max) = self.x_range()?;
        if x < min || x > max {
            return None;
        }
        let i = self.points.partition_point(|p| p.x < x);
        if i == 0 {
            return Some(self.points[0].y);
        }
        let (a, b) = (self.points[i - 1], self.points[i]);
        let dx = b.x - a.x;
        if dx <= f32::EPSILON {
            return Some(a.y.min(b.y));
        }
        Some(a.y + (b.y - a.y) * (x - a.x) / dx)
    }
}

/// Upper half of a four-point star centered at `center`.
///
/// The star is symmetric about its horizontal axis, so the lower half is the
/// mirror image of this curve.
pub fn star_upper_outline(center: Vec2, radius: f32, segments: u32) -> MonotoneCurve {
    let offset = radius * 0.2;
    let path = QuadPath::new(center - Vec2::new(radius, 0.0), segments)
        .quad_to(center + Vec2::new(-offset, -offset), center - Vec2::new(0.0, radius))
        .quad_to(center + Vec2::new(offset, -offset), center + Vec2::new(radius, 0.0));
    MonotoneCurve::new(path.into_points())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quad_endpoints_and_midpoint() {
        let path = QuadPath::new(Vec2::ZERO, 4).quad_to(Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0));
        let points = path.into_points();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], Vec2::ZERO);
        assert_relative_eq!(points[4].x, 2.0);
        assert_relative_eq!(points[4].y, 0.0);
        // B(0.5) = 0.25 P0 + 0.5 P1 + 0.25 P2
        assert_relative_eq!(points[2].x, 1.0);
        assert_relative_eq!(points[2].y, 1.0);
    }

    #[test]
    fn test_monotone_curve_interpolates() {
        let curve = MonotoneCurve::new([Vec2::new(0.0, 0.0), Vec2::new(2.0, 4.0), Vec2::new(4.0, 0.0)]);
        assert_eq!(curve.x_range(), Some((0.0, 4.0)));
        assert_relative_eq!(curve.y_at(1.0).unwrap(), 2.0);
        assert_relative_eq!(curve.y_at(3.0).unwrap(), 2.0);
        assert_relative_eq!(curve.y_at(0.0).unwrap(), 0.0);
        assert_eq!(curve.y_at(-0.1), None);
        assert_eq!(curve.y_at(4.1), None);
    }

    #[test]
    fn test_star_outline_tips() {
        let curve = star_upper_outline(Vec2::new(10.0, 10.0), 2.0, 8);
        assert_eq!(curve.x_range(), Some((8.0, 12.0)));
        assert_relative_eq!(curve.y_at(10.0).unwrap(), 8.0, epsilon = 1e-4);
        assert_relative_eq!(curve.y_at(8.0).unwrap(), 10.0, epsilon = 1e-4);
        // Concave flanks stay close to the center line
        assert!(curve.y_at(9.0).unwrap() > 9.0);
    }
}
