// src/render/mod.rs
// The crystal renderer and its frame loop

pub mod edges;
pub mod frame_loop;
pub mod palette;
pub mod shape_renderer;
pub mod surface;

pub use edges::{edge_alpha, glow_radius, visible_edges, Edge};
pub use frame_loop::{FrameScheduler, LoopHandle, PendingFrame, TickOutcome};
pub use palette::Palette;
pub use shape_renderer::{RendererState, ShapeParams, ShapeRenderer};
pub use surface::{Glow, Surface};
