// src/render/shape_renderer.rs
// The rotating crystal: twelve fixed vertices, rotated and projected every frame,
// joined by distance-thresholded gradient edges over a pulsing center glow.

use crate::config::Config;
use crate::models::geometry::{
    icosahedron_vertices, project, Angles, Point3D, ProjectedPoint, SurfaceSize,
};

use super::edges::{glow_radius, visible_edges, Edge};
use super::frame_loop::{FrameScheduler, LoopHandle, TickOutcome};
use super::palette::Palette;
use super::surface::{Glow, Surface};

#[derive(Debug, Clone)]
pub struct ShapeParams {
    pub scale: f64,
    pub perspective: f64,
    pub time_step: f64,
    pub angle_x_rate: f64,
    pub angle_y_rate: f64,
    pub edge_threshold: f64,
    pub line_weight: f32,
    pub glow_base_radius: f64,
    pub glow_pulse_amplitude: f64,
    pub glow_inner_ratio: f64,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ShapeParams {
    pub fn from_config(config: &Config) -> Self {
        Self {
            scale: config.shape.scale,
            perspective: config.shape.perspective,
            time_step: config.shape.time_step,
            angle_x_rate: config.shape.angle_x_rate,
            angle_y_rate: config.shape.angle_y_rate,
            edge_threshold: config.edges.threshold,
            line_weight: config.edges.line_weight,
            glow_base_radius: config.glow.base_radius,
            glow_pulse_amplitude: config.glow.pulse_amplitude,
            glow_inner_ratio: config.glow.inner_ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RendererState {
    pub t: f64,
    pub size: SurfaceSize,
}

pub struct ShapeRenderer {
    vertices: [Point3D; 12],
    state: RendererState,
    params: ShapeParams,
    palette: Palette,
    handle: LoopHandle,
}

impl ShapeRenderer {
    /// Builds the vertex set, takes the current container size and requests
    /// the first frame. A zero size is accepted; frames stay empty until a resize.
    pub fn new(
        size: SurfaceSize,
        params: ShapeParams,
        palette: Palette,
        scheduler: &mut dyn FrameScheduler,
    ) -> Self {
        let renderer = Self {
            vertices: icosahedron_vertices(params.scale),
            state: RendererState { t: 0.0, size },
            params,
            palette,
            handle: LoopHandle::new(),
        };
        scheduler.request_frame();
        renderer
    }

    pub fn vertices(&self) -> &[Point3D; 12] {
        &self.vertices
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    /// Handle the owner keeps to stop the frame loop.
    pub fn loop_handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    /// Sets the surface to the re-measured container size. Animation phase
    /// and vertices are untouched.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.state.size = size;
    }

    pub fn angles(&self) -> Angles {
        Angles::at(self.state.t, self.params.angle_x_rate, self.params.angle_y_rate)
    }

    pub fn project_all(&self, angles: Angles) -> [ProjectedPoint; 12] {
        self.vertices
            .map(|v| project(v, angles, self.state.size, self.params.perspective))
    }

    pub fn glow(&self) -> Glow {
        let radius = glow_radius(
            self.state.t,
            self.params.glow_base_radius,
            self.params.glow_pulse_amplitude,
        );
        let (inner, outer) = self.palette.glow_colors();
        Glow {
            center: self.state.size.center(),
            inner_radius: radius * self.params.glow_inner_ratio,
            outer_radius: radius,
            inner,
            outer,
        }
    }

    /// One scheduled frame. Always requests exactly one further frame unless
    /// the loop was stopped.
    pub fn tick(
        &mut self,
        visible: bool,
        surface: &mut dyn Surface,
        scheduler: &mut dyn FrameScheduler,
    ) -> TickOutcome {
        if self.handle.is_stopped() {
            return TickOutcome::Stopped;
        }
        if !visible {
            scheduler.request_frame();
            return TickOutcome::Hidden;
        }

        self.state.t += self.params.time_step;
        surface.clear(self.state.size);

        if !self.state.size.is_empty() {
            let projected = self.project_all(self.angles());
            for edge in visible_edges(&projected, self.params.edge_threshold) {
                self.draw_edge(surface, &edge);
            }
            surface.radial_glow(&self.glow());
        }

        scheduler.request_frame();
        TickOutcome::Drawn
    }

    fn draw_edge(&self, surface: &mut dyn Surface, edge: &Edge) {
        let (near, far) = self.palette.edge_colors(edge.alpha);
        surface.gradient_line(
            (edge.from.x, edge.from.y),
            (edge.to.x, edge.to.y),
            near,
            far,
            self.params.line_weight,
        );
    }
}
