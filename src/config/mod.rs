pub mod config_load;
pub mod config_types;
pub mod error;

pub use config_load::Config;
pub use config_types::{
    EdgeConfig, GlowConfig, PaletteConfig, ResizeConfig, ShapeConfig, VisibilityConfig,
    WindowConfig,
};
pub use error::ConfigError;
