//! Render configuration
//!
//! Stored as RON. Every field has a default, so a config file only needs the
//! values it changes.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::rasterizer::{
    focal_length_for_fov, Color, RasterError, FAR_PLANE, FOV_DEGREES, HEIGHT, NEAR_PLANE, WIDTH,
};

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
    Invalid(RasterError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

impl From<RasterError> for ConfigError {
    fn from(e: RasterError) -> Self {
        ConfigError::Invalid(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything fixed at renderer start-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    /// Field of view across the viewport height, degrees
    pub fov_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    /// Skip faces whose normal points more than 90 degrees from the camera
    pub backface_cull: bool,
    pub wireframe: bool,
    pub wireframe_color: Color,
    /// Show the depth buffer as gray levels (nearer = brighter)
    pub depth_view: bool,
    pub clear_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            fov_degrees: FOV_DEGREES,
            near_plane: NEAR_PLANE,
            far_plane: FAR_PLANE,
            backface_cull: false,
            wireframe: false,
            wireframe_color: Color::BLACK,
            depth_view: false,
            clear_color: Color::WHITE,
        }
    }
}

impl RenderConfig {
    pub fn focal_length(&self) -> f32 {
        focal_length_for_fov(self.fov_degrees)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(RasterError::InvalidViewport { width: self.width, height: self.height }.into());
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(RasterError::InvalidFocalLength(self.focal_length()).into());
        }
        let (near, far) = (self.near_plane, self.far_plane);
        if !(near.is_finite() && far.is_finite() && near > 0.0 && near < far) {
            return Err(RasterError::InvalidClipPlanes { near, far }.into());
        }
        Ok(())
    }

    /// Parse and validate a RON string
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config = Self::from_ron_str(&contents)?;
        log::info!("loaded render config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_ron_string()?)?;
        Ok(())
    }
}
