//! Rasterizer constants
//!
//! Default viewport, clip planes and depth-buffer encoding.

/// Default viewport width in pixels
pub const WIDTH: usize = 640;

/// Default viewport height in pixels
pub const HEIGHT: usize = 480;

/// Default near clip plane (view-space z)
pub const NEAR_PLANE: f32 = 1.0;

/// Default far clip plane (view-space z)
pub const FAR_PLANE: f32 = 5.0;

/// Default field of view in degrees, measured across the viewport height
pub const FOV_DEGREES: f32 = 90.0;

/// Depth-buffer value meaning "nothing drawn here yet"
pub const DEPTH_EMPTY: u8 = 255;

/// Largest depth a visible point can map to (the far plane).
/// Kept one below `DEPTH_EMPTY` so geometry on the far plane still passes a
/// strict less-than test against a cleared buffer.
pub const DEPTH_MAX: u8 = 254;
