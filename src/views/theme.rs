// src/views/theme.rs
//
// Window background for the dark and light page themes

use nannou::prelude::*;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn background(self) -> Rgb<f32> {
        match self {
            Theme::Dark => rgb(0.04, 0.035, 0.06),
            Theme::Light => rgb(0.96, 0.95, 0.98),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}
