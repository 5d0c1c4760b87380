//! Scene construction
//!
//! [`build_scene`] is a pure function of the fraction, the switch bounds and
//! the palette. It returns primitives in paint order, already clipped to the
//! switch body.

use dn_core::{Bounds, Fraction, Rgba};
use glam::Vec2;

use crate::config::{SceneConfig, SwitchPalette};
use crate::path::{MonotoneCurve, QuadPath, star_upper_outline};
use crate::region::{Circle, Pill, Region, Span, columns_for, intersect, overlap};

/// Regions smaller than this (in square points) are dropped
const MIN_AREA: f32 = 1e-3;

/// Disc radius relative to switch width
const SUN_RADIUS: f32 = 0.15;

/// Ripple radii relative to the disc, outermost first
const RIPPLES: [f32; 3] = [3.9, 3.1, 2.2];

/// Cloud outline: start point and quadratic segments `(cx, cy, x, y)`,
/// in fractions of the switch width (x) and height (y)
struct CloudOutline {
    start: (f32, f32),
    quads: [(f32, f32, f32, f32); 7],
}

const BACK_CLOUD: CloudOutline = CloudOutline {
    start: (0.038, 1.0),
    quads: [
        (0.09, 0.767, 0.218, 0.86),
        (0.24, 0.68, 0.346, 0.733),
        (0.41, 0.48, 0.513, 0.633),
        (0.54, 0.60, 0.551, 0.617),
        (0.6, 0.367, 0.705, 0.433),
        (0.744, 0.367, 0.808, 0.367),
        (0.83, -0.05, 1.0, 0.0),
    ],
};

const FRONT_CLOUD: CloudOutline = CloudOutline {
    start: (0.10, 1.0),
    quads: [
        (0.165, 0.85, 0.23, 0.98),
        (0.28, 0.70, 0.385, 0.867),
        (0.47, 0.64, 0.564, 0.833),
        (0.59, 0.8, 0.628, 0.833),
        (0.70, 0.74, 0.769, 0.767),
        (0.78, 0.58, 0.833, 0.533),
        (0.87, 0.2, 1.0, 0.2),
    ],
};

/// Stars as `(x, y, radius)`: x in fractions of width, y and radius in
/// fractions of height, y measured at night (fraction 1)
const STARS: [(f32, f32, f32); 11] = [
    (0.103, 0.317, 0.045),
    (0.185, 0.2, 0.075),
    (0.439, 0.267, 0.03),
    (0.55, 0.3, 0.085),
    (0.19, 0.467, 0.045),
    (0.385, 0.5, 0.035),
    (0.526, 0.583, 0.035),
    (0.449, 0.733, 0.055),
    (0.115, 0.8, 0.025),
    (0.134, 0.7, 0.035),
    (0.195, 0.833, 0.03),
];

/// Paint layer a primitive belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Layer {
    Sky,
    BackCloud,
    Ripple,
    FrontCloud,
    Star,
    BorderShadow,
    SunShadow,
    Sun,
    Crater,
    Highlight,
}

/// Geometry of a primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Slab-sampled fill
    Region(Region),
    /// Filled circle
    #[allow(missing_docs)]
    Disc { center: Vec2, radius: f32 },
}

/// A colored shape on a layer
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct Primitive {
    pub layer: Layer,
    pub color: Rgba,
    pub shape: Shape,
}

/// Sun/moon placement for a fraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunGeometry {
    /// Disc center
    pub center: Vec2,
    /// Disc radius
    pub radius: f32,
}

impl SunGeometry {
    /// Disc slides from the left end (day) to the right end (night)
    pub fn new(fraction: Fraction, bounds: &Bounds) -> Self {
        let h = bounds.height();
        Self {
            center: Vec2::new(
                bounds.left + h / 2.0 + fraction.get() * bounds.travel(),
                bounds.top + h / 2.0,
            ),
            radius: bounds.width() * SUN_RADIUS,
        }
    }
}

/// Switch artwork for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Switch body the scene was built for
    pub bounds: Bounds,
    /// Fraction the scene was built for
    pub fraction: Fraction,
    /// Primitives in paint order
    pub primitives: Vec<Primitive>,
}

impl Scene {
    fn new(bounds: Bounds, fraction: Fraction) -> Self {
        Self {
            bounds,
            fraction,
            primitives: Vec::new(),
        }
    }

    /// Primitives on one layer, in paint order
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.layer == layer)
    }

    /// Whether nothing would be painted
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    fn push(&mut self, layer: Layer, color: Rgba, shape: Shape) {
        self.primitives.push(Primitive {
            layer,
            color,
            shape,
        });
    }

    fn push_region(&mut self, layer: Layer, color: Rgba, region: Region) {
        if region.area() > MIN_AREA {
            self.push(layer, color, Shape::Region(region));
        }
    }
}

/// Build the switch artwork for `fraction` inside `bounds`
pub fn build_scene(
    fraction: Fraction,
    bounds: Bounds,
    palette: &SwitchPalette,
    config: &SceneConfig,
) -> Scene {
    let mut scene = Scene::new(bounds, fraction);
    let (w, h) = (bounds.width(), bounds.height());
    if w <= 0.0 || h <= 0.0 {
        tracing::trace!(?bounds, "skipping scene for empty bounds");
        return scene;
    }

    let pill = Pill::new(bounds);
    let columns = config.columns.max(4);
    let segments = config.curve_segments.max(1);
    // Clouds sink and stars descend as night falls
    let height_offset = bounds.top + fraction.get() * h;
    let sun = SunGeometry::new(fraction, &bounds);

    let sky = palette.sky_day.lerp(palette.sky_night, fraction);
    scene.push_region(
        Layer::Sky,
        sky,
        Region::sample(bounds.left, bounds.right, columns, |x| pill.span_at(x)),
    );

    let back = cloud_region(&BACK_CLOUD, &bounds, &pill, height_offset, segments, columns);
    scene.push_region(Layer::BackCloud, palette.cloud_secondary, back);

    for factor in RIPPLES {
        let circle = Circle::new(sun.center, sun.radius * factor);
        if let Some(range) = overlap(circle.x_range(), pill.x_range()) {
            let region = Region::sample(range.0, range.1, columns_for(range, w, columns), |x| {
                intersect(circle.span_at(x), pill.span_at(x))
            });
            scene.push_region(Layer::Ripple, palette.ripple, region);
        }
    }

    let front = cloud_region(&FRONT_CLOUD, &bounds, &pill, height_offset, segments, columns);
    scene.push_region(Layer::FrontCloud, palette.cloud, front);

    for (x, y, r) in STARS {
        let center = Vec2::new(bounds.left + w * x, h * y - h + height_offset);
        let outline = star_upper_outline(center, h * r, segments);
        let Some(range) = outline.x_range().and_then(|r| overlap(r, pill.x_range())) else {
            continue;
        };
        let region = Region::sample(range.0, range.1, columns_for(range, w, columns), |x| {
            let star = outline.y_at(x).map(|top| (top, 2.0 * center.y - top));
            intersect(star, pill.span_at(x))
        });
        scene.push_region(Layer::Star, palette.star, region);
    }

    push_border_shadow(&mut scene, &pill, palette, config);

    push_sun_shadow(&mut scene, sun, &pill, palette, config, columns);
    scene.push(
        Layer::Sun,
        palette.sun.lerp(palette.moon, fraction),
        Shape::Disc {
            center: sun.center,
            radius: sun.radius,
        },
    );

    let hole = palette.sun.lerp(palette.moon_hole, fraction);
    let r = sun.radius;
    for (offset, radius) in [
        (Vec2::new(0.0, -r * 0.5), r * 0.2),
        (Vec2::new(-r * 0.3, r * 0.2), r * 0.36),
        (Vec2::new(r * 0.5, r * 0.32), r * 0.25),
    ] {
        scene.push(
            Layer::Crater,
            hole,
            Shape::Disc {
                center: sun.center + offset,
                radius,
            },
        );
    }

    push_highlight(&mut scene, sun, palette, config, columns);
    scene
}

fn cloud_region(
    outline: &CloudOutline,
    bounds: &Bounds,
    pill: &Pill,
    height_offset: f32,
    segments: u32,
    columns: u32,
) -> Region {
    let (w, h) = (bounds.width(), bounds.height());
    let point = |x: f32, y: f32| Vec2::new(bounds.left + w * x, h * y + height_offset);
    let path = outline.quads.iter().fold(
        QuadPath::new(point(outline.start.0, outline.start.1), segments),
        |path, &(cx, cy, x, y)| path.quad_to(point(cx, cy), point(x, y)),
    );
    let curve = MonotoneCurve::new(path.into_points());
    let base = h + height_offset;
    let Some(range) = curve.x_range().and_then(|r| overlap(r, pill.x_range())) else {
        return Region::default();
    };
    Region::sample(range.0, range.1, columns_for(range, w, columns), |x| {
        let cloud = curve.y_at(x).map(|top| (top, base));
        intersect(cloud, pill.span_at(x))
    })
}

/// Offset disc whose edge fades over a band of stacked, pill-clipped circles
fn push_sun_shadow(
    scene: &mut Scene,
    sun: SunGeometry,
    pill: &Pill,
    palette: &SwitchPalette,
    config: &SceneConfig,
    columns: u32,
) {
    let w = pill.bounds.width();
    let center = sun.center + Vec2::new(w * 0.01, w * 0.02);
    let blur = sun.radius * 0.15;
    let layers = config.shadow_layers.max(1);
    let alpha = (palette.sun_shadow.a as f32 / layers as f32).round() as u8;
    let color = palette.sun_shadow.with_alpha(alpha);

    for i in 0..layers {
        let spread = (i as f32 + 0.5) / layers as f32 - 0.5;
        let circle = Circle::new(center, sun.radius + blur * spread);
        let Some(range) = overlap(circle.x_range(), pill.x_range()) else {
            continue;
        };
        let region = Region::sample(range.0, range.1, columns_for(range, w, columns), |x| {
            intersect(circle.span_at(x), pill.span_at(x))
        });
        scene.push_region(Layer::SunShadow, color, region);
    }
}

/// Dark band along the inner edge, thicker at the top as if lit from above
fn push_border_shadow(scene: &mut Scene, pill: &Pill, palette: &SwitchPalette, config: &SceneConfig) {
    let layers = config.shadow_layers;
    if layers == 0 {
        return;
    }
    let w = pill.bounds.width();
    let blur = w * 0.033;
    let dy = w * 0.017;
    let alpha = (palette.border_shadow.a as f32 * 0.5 / layers as f32).round() as u8;
    let color = palette.border_shadow.with_alpha(alpha);
    let (left, right) = pill.x_range();
    let columns = config.columns.max(4);

    for i in 1..=layers {
        let inner = pill.inset(blur * i as f32 / layers as f32, dy);
        let top = Region::sample(left, right, columns, |x| {
            let (pt, pb) = pill.span_at(x)?;
            Some(match inner.span_at(x) {
                Some((it, _)) => (pt, it.min(pb)),
                None => (pt, pb),
            })
        });
        let bottom = Region::sample(left, right, columns, |x| {
            let (pt, pb) = pill.span_at(x)?;
            let (_, ib) = inner.span_at(x)?;
            Some((ib.max(pt), pb))
        });
        scene.push_region(Layer::BorderShadow, color, top);
        scene.push_region(Layer::BorderShadow, color, bottom);
    }
}

/// Soft rim light on the upper-left of the disc
fn push_highlight(
    scene: &mut Scene,
    sun: SunGeometry,
    palette: &SwitchPalette,
    config: &SceneConfig,
    columns: u32,
) {
    let layers = config.highlight_layers;
    if layers == 0 {
        return;
    }
    let r = sun.radius;
    let disc = Circle::new(sun.center, r);
    let shift = r * 0.08;
    let glow = r * 0.25;
    let alpha = (palette.highlight.a as f32 * 0.18).round() as u8;
    let color = palette.highlight.with_alpha(alpha);
    let range = disc.x_range();
    let columns = columns_for(range, scene.bounds.width(), columns);

    for i in 1..=layers {
        let cut = Circle::new(
            sun.center + Vec2::splat(shift),
            r * 1.13 - glow * i as f32 / layers as f32,
        );
        let upper = Region::sample(range.0, range.1, columns, |x| {
            let (a, b) = disc.span_at(x)?;
            Some(match cut.span_at(x) {
                Some((c, _)) => (a, b.min(c)),
                None => (a, b),
            })
        });
        let lower = Region::sample(range.0, range.1, columns, |x| -> Option<Span> {
            let (a, b) = disc.span_at(x)?;
            let (_, d) = cut.span_at(x)?;
            Some((d.max(a), b))
        });
        scene.push_region(Layer::Highlight, color, upper);
        scene.push_region(Layer::Highlight, color, lower);
    }
}
