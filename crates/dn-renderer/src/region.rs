//! Column-sampled fill regions
//!
//! A region is a run of vertical trapezoids ("slabs") sampled along x. Any
//! shape that a vertical line cuts in at most one interval can be expressed
//! this way, which covers every piece of the switch artwork once it has been
//! intersected with the convex switch body. Slabs are convex, so painters
//! can fill them with two triangles each.

use dn_core::Bounds;
use glam::Vec2;

/// Vertical interval `(top, bottom)` at some x
pub type Span = (f32, f32);

/// Trapezoid between two sampled columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    /// Left column
    pub x0: f32,
    /// Right column
    pub x1: f32,
    /// Top edge at `x0`
    pub top0: f32,
    /// Bottom edge at `x0`
    pub bottom0: f32,
    /// Top edge at `x1`
    pub top1: f32,
    /// Bottom edge at `x1`
    pub bottom1: f32,
}

impl Slab {
    /// Corners in clockwise order starting top-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x0, self.top0),
            Vec2::new(self.x1, self.top1),
            Vec2::new(self.x1, self.bottom1),
            Vec2::new(self.x0, self.bottom0),
        ]
    }

    /// Trapezoid area
    pub fn area(&self) -> f32 {
        let h0 = self.bottom0 - self.top0;
        let h1 = self.bottom1 - self.top1;
        (self.x1 - self.x0) * (h0 + h1) / 2.0
    }
}

/// Filled region made of slabs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    slabs: Vec<Slab>,
}

impl Region {
    /// Sample `span_at` over `[x0, x1]` with `columns` slabs.
    ///
    /// Columns where `span_at` returns `None` (or an inverted span) break the
    /// region; slabs are only emitted between two valid columns.
    pub fn sample(x0: f32, x1: f32, columns: u32, span_at: impl Fn(f32) -> Option<Span>) -> Self {
        if x1 <= x0 || columns == 0 {
            return Self::default();
        }
        let valid = |x: f32| span_at(x).filter(|(top, bottom)| top <= bottom);
        let mut slabs = Vec::with_capacity(columns as usize);
        let mut prev = valid(x0).map(|span| (x0, span));
        for i in 1..=columns {
            let x = x0 + (x1 - x0) * i as f32 / columns as f32;
            let next = valid(x).map(|span| (x, span));
            if let (Some((xa, (ta, ba))), Some((xb, (tb, bb)))) = (prev, next) {
                slabs.push(Slab {
                    x0: xa,
                    x1: xb,
                    top0: ta,
                    bottom0: ba,
                    top1: tb,
                    bottom1: bb,
                });
            }
            prev = next;
        }
        Self { slabs }
    }

    /// Slabs in x order
    pub fn slabs(&self) -> &[Slab] {
        &self.slabs
    }

    /// Whether the region has no slabs
    pub fn is_empty(&self) -> bool {
        self.slabs.is_empty()
    }

    /// Total area of all slabs
    pub fn area(&self) -> f32 {
        self.slabs.iter().map(Slab::area).sum()
    }

    /// Whether every slab corner lies within `bounds` (with tolerance)
    pub fn within(&self, bounds: &Bounds, tolerance: f32) -> bool {
        self.slabs.iter().flat_map(|s| s.corners()).all(|p| {
            p.x >= bounds.left - tolerance
                && p.x <= bounds.right + tolerance
                && p.y >= bounds.top - tolerance
                && p.y <= bounds.bottom + tolerance
        })
    }
}

/// Rounded switch body with fully round ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pill {
    /// Bounding box; the end radius is half the height
    pub bounds: Bounds,
}

impl Pill {
    /// Pill filling `bounds`
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Pill shrunk by `inset` on every side and moved down by `dy`
    pub fn inset(&self, inset: f32, dy: f32) -> Self {
        Self {
            bounds: Bounds {
                left: self.bounds.left + inset,
                top: self.bounds.top + inset + dy,
                right: self.bounds.right - inset,
                bottom: self.bounds.bottom - inset + dy,
            },
        }
    }

    /// Horizontal extent
    pub fn x_range(&self) -> (f32, f32) {
        (self.bounds.left, self.bounds.right)
    }

    /// Vertical extent at `x`, `None` outside the pill
    pub fn span_at(&self, x: f32) -> Option<Span> {
        let b = &self.bounds;
        if x < b.left || x > b.right || b.height() <= 0.0 {
            return None;
        }
        let radius = (b.height() / 2.0).min(b.width() / 2.0);
        let cy = b.top + b.height() / 2.0;
        let dx = if x < b.left + radius {
            b.left + radius - x
        } else if x > b.right - radius {
            x - (b.right - radius)
        } else {
            0.0
        };
        let half = if dx == 0.0 {
            b.height() / 2.0
        } else {
            (radius * radius - dx * dx).max(0.0).sqrt()
        };
        Some((cy - half, cy + half))
    }
}

/// Circle queried by column
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(missing_docs)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[allow(missing_docs)]
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Horizontal extent
    pub fn x_range(&self) -> (f32, f32) {
        (self.center.x - self.radius, self.center.x + self.radius)
    }

    /// Vertical extent at `x`, `None` outside the circle
    pub fn span_at(&self, x: f32) -> Option<Span> {
        let dx = x - self.center.x;
        if dx.abs() > self.radius {
            return None;
        }
        let half = (self.radius * self.radius - dx * dx).max(0.0).sqrt();
        Some((self.center.y - half, self.center.y + half))
    }
}

/// Intersection of two spans
pub fn intersect(a: Option<Span>, b: Option<Span>) -> Option<Span> {
    let (a, b) = (a?, b?);
    Some((a.0.max(b.0), a.1.min(b.1)))
}

/// Overlap of two x ranges, `None` when disjoint
pub fn overlap(a: (f32, f32), b: (f32, f32)) -> Option<(f32, f32)> {
    let range = (a.0.max(b.0), a.1.min(b.1));
    (range.0 < range.1).then_some(range)
}

/// Number of columns for a range, proportional to its share of `full_width`
pub fn columns_for(range: (f32, f32), full_width: f32, full_columns: u32) -> u32 {
    if full_width <= 0.0 {
        return 0;
    }
    let share = ((range.1 - range.0) / full_width).clamp(0.0, 1.0);
    ((full_columns as f32 * share).ceil() as u32).max(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn bounds() -> Bounds {
        Bounds::from_min_size(Vec2::ZERO, Vec2::new(260.0, 100.0))
    }

    #[test]
    fn test_pill_span() {
        let pill = Pill::new(bounds());
        assert_eq!(pill.span_at(130.0), Some((0.0, 100.0)));
        assert_eq!(pill.span_at(0.0), Some((50.0, 50.0)));
        let (top, bottom) = pill.span_at(10.0).unwrap();
        assert_relative_eq!(top, 20.0, epsilon = 1e-4);
        assert_relative_eq!(bottom, 80.0, epsilon = 1e-4);
        assert_eq!(pill.span_at(-1.0), None);
    }

    #[test]
    fn test_pill_region_area() {
        let pill = Pill::new(bounds());
        let region = Region::sample(0.0, 260.0, 1000, |x| pill.span_at(x));
        // Rectangle plus one full circle
        let expected = 160.0 * 100.0 + PI * 50.0 * 50.0;
        assert_relative_eq!(region.area(), expected, max_relative = 1e-3);
        assert!(region.within(&bounds(), 1e-3));
    }

    #[test]
    fn test_circle_clipped_by_pill() {
        let pill = Pill::new(bounds());
        let circle = Circle::new(Vec2::new(50.0, 50.0), 300.0);
        let range = overlap(circle.x_range(), pill.x_range()).unwrap();
        let region = Region::sample(range.0, range.1, 500, |x| {
            intersect(circle.span_at(x), pill.span_at(x))
        });
        // Circle covers the whole pill
        assert_relative_eq!(
            region.area(),
            160.0 * 100.0 + PI * 50.0 * 50.0,
            max_relative = 2e-3
        );
    }

    #[test]
    fn test_disjoint_spans_produce_no_slabs() {
        let region = Region::sample(0.0, 10.0, 10, |_| Some((5.0, 1.0)));
        assert!(region.is_empty());
        assert_eq!(overlap((0.0, 1.0), (2.0, 3.0)), None);
    }

    #[test]
    fn test_inset_pill() {
        let inner = Pill::new(bounds()).inset(10.0, 5.0);
        assert_eq!(inner.bounds.top, 15.0);
        assert_eq!(inner.bounds.bottom, 95.0);
        assert_eq!(inner.span_at(5.0), None);
    }

    #[test]
    fn test_columns_for() {
        assert_eq!(columns_for((0.0, 130.0), 260.0, 100), 50);
        assert_eq!(columns_for((0.0, 1.0), 260.0, 100), 4);
        assert_eq!(columns_for((0.0, 1.0), 0.0, 100), 0);
    }
}
