// src/render/surface.rs
// The drawing seam between the renderer and whatever presents its output

use nannou::prelude::*;

use crate::models::geometry::SurfaceSize;

/// A soft radial gradient: solid `inner` color up to `inner_radius`, fading
/// linearly to `outer` at `outer_radius`. Outside the outer radius nothing is
/// painted, which matches a full-surface fill with a transparent outer stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub center: (f64, f64),
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub inner: Rgba<f32>,
    pub outer: Rgba<f32>,
}

/// Something the crystal can be drawn onto. Coordinates are screen space,
/// top-left origin, y down.
pub trait Surface {
    fn clear(&mut self, size: SurfaceSize);

    /// Straight line with a linear color gradient from `near` at `from` to `far` at `to`.
    fn gradient_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        near: Rgba<f32>,
        far: Rgba<f32>,
        weight: f32,
    );

    fn radial_glow(&mut self, glow: &Glow);
}
