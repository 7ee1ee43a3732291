// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 640,
            title: String::from("crystalvis"),
        }
    }
}

/************************* Renderer Configs ********************/
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ShapeConfig {
    pub scale: f64,        // Vertex scale of the icosahedron
    pub perspective: f64,  // K in K / (K + depth)
    pub time_step: f64,    // Added to t on every drawn frame
    pub angle_x_rate: f64,
    pub angle_y_rate: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            scale: 140.0,
            perspective: 400.0,
            time_step: 0.0042,
            angle_x_rate: 0.7,
            angle_y_rate: 0.9,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EdgeConfig {
    pub threshold: f64,
    pub line_weight: f32,
    pub near_alpha: f32,
    pub far_alpha: f32,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            threshold: 260.0,
            line_weight: 1.2,
            near_alpha: 0.9,
            far_alpha: 0.35,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GlowConfig {
    pub base_radius: f64,
    pub pulse_amplitude: f64,
    pub inner_ratio: f64,
    pub alpha: f32,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            base_radius: 140.0,
            pulse_amplitude: 20.0,
            inner_ratio: 0.1,
            alpha: 0.16,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PaletteConfig {
    pub accent: [u8; 3],
    pub fade: [u8; 3],
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            accent: [123, 66, 198],
            fade: [255, 255, 255],
        }
    }
}

/************************* Host Configs ********************/
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ResizeConfig {
    pub debounce_ms: u64, // 0 applies resizes immediately
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self { debounce_ms: 160 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct VisibilityConfig {
    pub pause_when_unfocused: bool,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            pause_when_unfocused: false,
        }
    }
}
