//! Painting a switch scene with egui shapes

use dn_renderer::{Primitive, Region, Scene, Shape};
use egui::epaint::Mesh;
use egui::{Color32, Pos2, Vec2};

use crate::theme::palette::to_color32;

/// Paint `scene` with its local origin at `origin`
pub fn paint_scene(painter: &egui::Painter, scene: &Scene, origin: Pos2) {
    let offset = origin.to_vec2();
    for primitive in &scene.primitives {
        if let Some(shape) = primitive_shape(primitive, offset) {
            painter.add(shape);
        }
    }
}

/// Translate one primitive into an egui shape
pub fn primitive_shape(primitive: &Primitive, offset: Vec2) -> Option<egui::Shape> {
    let color = to_color32(primitive.color);
    if color.a() == 0 {
        return None;
    }
    match &primitive.shape {
        Shape::Region(region) => {
            let mesh = region_mesh(region, color, offset);
            (!mesh.is_empty()).then(|| egui::Shape::mesh(mesh))
        }
        Shape::Disc { center, radius } => Some(egui::Shape::circle_filled(
            to_pos(*center) + offset,
            *radius,
            color,
        )),
    }
}

/// Two triangles per slab
pub fn region_mesh(region: &Region, color: Color32, offset: Vec2) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.reserve_vertices(region.slabs().len() * 4);
    mesh.reserve_triangles(region.slabs().len() * 2);
    for slab in region.slabs() {
        let base = mesh.vertices.len() as u32;
        for corner in slab.corners() {
            mesh.colored_vertex(to_pos(corner) + offset, color);
        }
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }
    mesh
}

fn to_pos(point: glam::Vec2) -> Pos2 {
    Pos2::new(point.x, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dn_core::{Bounds, Fraction, Rgba};
    use dn_renderer::{Layer, SceneConfig, SwitchPalette, build_scene};

    #[test]
    fn test_region_mesh_counts() {
        let region = Region::sample(0.0, 10.0, 5, |_| Some((0.0, 4.0)));
        let mesh = region_mesh(&region, Color32::WHITE, Vec2::new(100.0, 50.0));
        assert_eq!(mesh.vertices.len(), 20);
        assert_eq!(mesh.indices.len(), 30);
        assert_eq!(mesh.vertices[0].pos, Pos2::new(100.0, 50.0));
    }

    #[test]
    fn test_transparent_primitive_is_skipped() {
        let primitive = Primitive {
            layer: Layer::Ripple,
            color: Rgba::TRANSPARENT,
            shape: dn_renderer::Shape::Disc {
                center: glam::Vec2::ZERO,
                radius: 4.0,
            },
        };
        assert!(primitive_shape(&primitive, Vec2::ZERO).is_none());
    }

    #[test]
    fn test_every_visible_primitive_paints() {
        let bounds = Bounds::from_min_size(glam::Vec2::ZERO, glam::Vec2::new(180.0, 180.0 * 3.0 / 7.8));
        let scene = build_scene(
            Fraction::new(0.4),
            bounds,
            &SwitchPalette::default(),
            &SceneConfig::low(),
        );
        let shapes = scene
            .primitives
            .iter()
            .filter_map(|p| primitive_shape(p, Vec2::ZERO))
            .count();
        assert_eq!(shapes, scene.primitives.len());
    }
}
