//! Perspective projection onto the viewport
//!
//! Camera sits at the world origin looking down +Z, +Y up. The visible
//! square `[-1, 1]` (after the perspective divide) spans the viewport height;
//! both axes are scaled by the height so pixels stay square.

use super::constants::{DEPTH_EMPTY, DEPTH_MAX};
use super::error::RasterError;
use super::math::Vec3;
use super::types::ScreenPoint;

/// Fixed-size render target geometry plus the far plane used for depth mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
    pub far_plane: f32,
}

impl Viewport {
    pub fn new(width: usize, height: usize, far_plane: f32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(RasterError::InvalidViewport { width, height });
        }
        if !(far_plane.is_finite() && far_plane > 0.0) {
            return Err(RasterError::InvalidClipPlanes { near: 0.0, far: far_plane });
        }
        Ok(Self { width, height, far_plane })
    }

    /// Pixel column for a perspective-divided x
    pub fn to_screen_x(&self, x: f32) -> i32 {
        ((self.width as f32 + x * self.height as f32) / 2.0).round() as i32
    }

    /// Pixel row for a perspective-divided y (positive y is up the screen)
    pub fn to_screen_y(&self, y: f32) -> i32 {
        ((self.height as f32 - y * self.height as f32) / 2.0).round() as i32
    }

    /// True if (x, y) is inside the viewport
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

/// Perspective divide: scale x and y by `focal_length / z`.
/// At z == 0 the scale falls back to 1.0; the clipper keeps such points away.
pub fn perspective_divide(v: Vec3, focal_length: f32) -> (f32, f32) {
    let scale = if v.z == 0.0 { 1.0 } else { focal_length / v.z };
    (v.x * scale, v.y * scale)
}

/// Map a view-space z onto the depth buffer range.
/// `[0, far]` maps linearly onto `[0, DEPTH_MAX]` (nearer = smaller);
/// anything outside maps to `DEPTH_EMPTY`.
pub fn map_depth(z: f32, far_plane: f32) -> u8 {
    if !(0.0..=far_plane).contains(&z) {
        return DEPTH_EMPTY;
    }
    (z * DEPTH_MAX as f32 / far_plane).round().clamp(0.0, DEPTH_MAX as f32) as u8
}

/// Project a view-space position to a screen point
pub fn project(v: Vec3, focal_length: f32, viewport: &Viewport) -> ScreenPoint {
    let (x, y) = perspective_divide(v, focal_length);
    ScreenPoint {
        x: viewport.to_screen_x(x),
        y: viewport.to_screen_y(y),
        z: map_depth(v.z, viewport.far_plane),
    }
}
