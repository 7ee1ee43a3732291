// src/draw/nannou_surface.rs
// Surface implementation over a nannou Draw

use nannou::prelude::*;
use std::f32::consts::TAU;

use crate::models::geometry::SurfaceSize;
use crate::render::{Glow, Surface};

// Triangle count around the glow rings
const GLOW_SEGMENTS: usize = 64;

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    size: SurfaceSize,
    background: Rgb<f32>,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, size: SurfaceSize, background: Rgb<f32>) -> Self {
        Self {
            draw,
            size,
            background,
        }
    }

    // From top-left origin / y down to nannou's center origin / y up
    fn to_nannou(&self, (x, y): (f64, f64)) -> Point2 {
        let (center_x, center_y) = self.size.center();
        pt2((x - center_x) as f32, (center_y - y) as f32)
    }
}

impl Surface for NannouSurface<'_> {
    fn clear(&mut self, size: SurfaceSize) {
        self.size = size;
        self.draw.reset();
        self.draw.background().color(self.background);
    }

    fn gradient_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        near: Rgba<f32>,
        far: Rgba<f32>,
        weight: f32,
    ) {
        let start = self.to_nannou(from);
        let end = self.to_nannou(to);

        self.draw
            .polyline()
            .weight(weight)
            .points_colored(vec![(start, near), (end, far)]);
    }

    fn radial_glow(&mut self, glow: &Glow) {
        let center = self.to_nannou(glow.center);
        let (vertices, indices) = glow_mesh(center, glow);
        self.draw.mesh().indexed_colored(vertices, indices);
    }
}

/// Center vertex, an inner ring in the center color and an outer ring in the
/// rim color. Fan triangles fill the solid core, quads between the rings fade.
fn glow_mesh(center: Point2, glow: &Glow) -> (Vec<(Point3, Rgba<f32>)>, Vec<usize>) {
    let ring = |radius: f64, i: usize| {
        let angle = i as f32 / GLOW_SEGMENTS as f32 * TAU;
        let radius = radius as f32;
        pt3(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
            0.0,
        )
    };

    let mut vertices = Vec::with_capacity(1 + 2 * GLOW_SEGMENTS);
    vertices.push((pt3(center.x, center.y, 0.0), glow.inner));
    for i in 0..GLOW_SEGMENTS {
        vertices.push((ring(glow.inner_radius, i), glow.inner));
    }
    for i in 0..GLOW_SEGMENTS {
        vertices.push((ring(glow.outer_radius, i), glow.outer));
    }

    let inner = |i: usize| 1 + i % GLOW_SEGMENTS;
    let outer = |i: usize| 1 + GLOW_SEGMENTS + i % GLOW_SEGMENTS;

    let mut indices = Vec::with_capacity(9 * GLOW_SEGMENTS);
    for i in 0..GLOW_SEGMENTS {
        indices.extend_from_slice(&[0, inner(i), inner(i + 1)]);
        indices.extend_from_slice(&[inner(i), outer(i), outer(i + 1)]);
        indices.extend_from_slice(&[inner(i), outer(i + 1), inner(i + 1)]);
    }

    (vertices, indices)
}
