// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;
use super::ConfigError;
use crate::models::geometry::circumradius;
use crate::views::Theme;

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub window: WindowConfig,
    pub shape: ShapeConfig,
    pub edges: EdgeConfig,
    pub glow: GlowConfig,
    pub palette: PaletteConfig,
    pub resize: ResizeConfig,
    pub visibility: VisibilityConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, falling back to the
    /// working directory. Returns the config together with the file it came from.
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::exe_dir_path().filter(|p| p.exists()) {
            let config = Self::load_from_path(&exe_config)?;
            return Ok((config, exe_config));
        }

        // Fallback to loading from the current working directory
        let cwd_config = PathBuf::from("config.toml");
        let config = Self::load_from_path(&cwd_config)?;
        Ok((config, cwd_config))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        Some(exe_dir.join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shape.scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "shape.scale must be positive, got {}",
                self.shape.scale
            )));
        }
        if self.shape.perspective <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "shape.perspective must be positive, got {}",
                self.shape.perspective
            )));
        }
        // Depth reaches -circumradius while rotating; K + depth must stay positive
        let radius = circumradius(self.shape.scale);
        if radius >= self.shape.perspective {
            return Err(ConfigError::Invalid(format!(
                "shape.perspective ({}) must exceed the crystal radius ({:.1}) for scale {}",
                self.shape.perspective, radius, self.shape.scale
            )));
        }
        if !(self.shape.time_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "shape.time_step must be positive, got {}",
                self.shape.time_step
            )));
        }
        if self.edges.threshold <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "edges.threshold must be positive, got {}",
                self.edges.threshold
            )));
        }
        if self.glow.base_radius < 0.0 || self.glow.pulse_amplitude < 0.0 {
            return Err(ConfigError::Invalid(String::from(
                "glow radius and pulse amplitude must not be negative",
            )));
        }
        if !(0.0..=1.0).contains(&self.glow.inner_ratio) {
            return Err(ConfigError::Invalid(format!(
                "glow.inner_ratio must be within [0, 1], got {}",
                self.glow.inner_ratio
            )));
        }
        Ok(())
    }
}
