// src/render/palette.rs
// Colors for edges and the center glow

use nannou::prelude::*;

use crate::config::{EdgeConfig, GlowConfig, PaletteConfig};

#[derive(Debug, Clone)]
pub struct Palette {
    pub accent: Rgb<f32>,
    pub fade: Rgb<f32>,
    pub near_alpha: f32,
    pub far_alpha: f32,
    pub glow_alpha: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(
            &PaletteConfig::default(),
            &EdgeConfig::default(),
            &GlowConfig::default(),
        )
    }
}

impl Palette {
    pub fn from_config(palette: &PaletteConfig, edges: &EdgeConfig, glow: &GlowConfig) -> Self {
        Self {
            accent: rgb_from_bytes(palette.accent),
            fade: rgb_from_bytes(palette.fade),
            near_alpha: edges.near_alpha,
            far_alpha: edges.far_alpha,
            glow_alpha: glow.alpha,
        }
    }

    /// Gradient stops for an edge of strength `alpha`: accent at the near end,
    /// fade color at the far end.
    pub fn edge_colors(&self, alpha: f64) -> (Rgba<f32>, Rgba<f32>) {
        let alpha = alpha as f32;
        (
            with_alpha(self.accent, alpha * self.near_alpha),
            with_alpha(self.fade, alpha * self.far_alpha),
        )
    }

    /// Center and rim colors of the glow; the rim is fully transparent.
    pub fn glow_colors(&self) -> (Rgba<f32>, Rgba<f32>) {
        (
            with_alpha(self.accent, self.glow_alpha),
            with_alpha(self.accent, 0.0),
        )
    }
}

fn rgb_from_bytes([r, g, b]: [u8; 3]) -> Rgb<f32> {
    rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

fn with_alpha(color: Rgb<f32>, alpha: f32) -> Rgba<f32> {
    rgba(color.red, color.green, color.blue, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_colors_scale_with_alpha() {
        let palette = Palette::default();
        let (near, far) = palette.edge_colors(0.5);
        assert!((near.alpha - 0.45).abs() < 1e-6);
        assert!((far.alpha - 0.175).abs() < 1e-6);
        assert!((near.red - 123.0 / 255.0).abs() < 1e-6);
        assert_eq!(far.red, 1.0);
    }

    #[test]
    fn test_glow_fades_to_transparent() {
        let palette = Palette::default();
        let (center, rim) = palette.glow_colors();
        assert!((center.alpha - 0.16).abs() < 1e-6);
        assert_eq!(rim.alpha, 0.0);
        assert_eq!(center.blue, rim.blue);
    }
}
