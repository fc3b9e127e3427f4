//! Rasterizer error type

use std::fmt;

/// Errors surfaced while setting up a renderer or building geometry.
/// Nothing in the per-frame pipeline returns these.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// Depth buffer storage could not be allocated
    DepthBufferAlloc { width: usize, height: usize },
    /// Viewport with a zero (or overflowing) dimension
    InvalidViewport { width: usize, height: usize },
    /// Focal length must be finite and positive
    InvalidFocalLength(f32),
    /// Clip planes must satisfy 0 < near < far
    InvalidClipPlanes { near: f32, far: f32 },
    /// Triangle storage for an object could not be allocated
    ObjectAlloc { triangles: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::DepthBufferAlloc { width, height } => {
                write!(f, "could not allocate a {}x{} depth buffer", width, height)
            }
            RasterError::InvalidViewport { width, height } => {
                write!(f, "invalid viewport size {}x{}", width, height)
            }
            RasterError::InvalidFocalLength(focal) => {
                write!(f, "invalid focal length {} (must be finite and > 0)", focal)
            }
            RasterError::InvalidClipPlanes { near, far } => {
                write!(f, "invalid clip planes near={} far={} (need 0 < near < far)", near, far)
            }
            RasterError::ObjectAlloc { triangles } => {
                write!(f, "could not allocate storage for {} triangles", triangles)
            }
        }
    }
}

impl std::error::Error for RasterError {}
