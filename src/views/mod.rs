// src/views/mod.rs

pub mod theme;

pub use theme::Theme;
