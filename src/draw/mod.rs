// src/draw/mod.rs
// Drawing backends for the renderer's Surface

pub mod nannou_surface;

pub use nannou_surface::NannouSurface;
