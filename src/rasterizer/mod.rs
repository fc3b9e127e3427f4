//! Flat-shaded software triangle rasterizer
//!
//! Features:
//! - Perspective projection with a configurable focal length
//! - Near/far plane clipping that splits triangles while keeping winding order
//! - Scanline fill driven by integer error-accumulator (Bresenham) steppers
//! - 8-bit depth buffer, nearer = smaller
//! - Flat shading from the face normal, optional back-face culling
//!
//! # Module Organization
//!
//! - `types` - Color, Vertex, Triangle, ScreenPoint
//! - `math` - Vec3, rotation axes, field-of-view helpers
//! - `object` - Object (triangle list + origin), transforms, cube builder
//! - `project` - perspective divide, viewport mapping, depth mapping
//! - `clip` - near/far plane clipper
//! - `scan` - error steppers, scanline and triangle fill
//! - `shade` - face normals and lighting
//! - `depth` - depth buffer
//! - `render` - pixel sink, framebuffer and the renderer context
//! - `draw` - depth-tested 3D lines (wireframe overlay)
//! - `constants` - default resolution, planes and depth encoding
//! - `error` - error type

pub mod clip;
pub mod constants;
pub mod depth;
pub mod draw;
pub mod error;
pub mod math;
pub mod object;
pub mod project;
pub mod render;
pub mod scan;
pub mod shade;
pub mod types;

// =============================================================================
// Convenience re-exports for commonly used items
// =============================================================================

// Types - core data structures
pub use types::{Color, ScreenPoint, SharedColor, Triangle, Vertex};

// Math and geometry
pub use math::{focal_length_for_fov, Axis, Vec3};
pub use object::Object;

// Pipeline stages
pub use clip::{clip_against, clip_triangle, ClipPlane, ClipResult};
pub use project::{map_depth, perspective_divide, project, Viewport};
pub use scan::{draw_scanline, rasterize_triangle, ErrorStepper, Fill};
pub use shade::{face_normal, lighting_fraction, shade_triangle, FaceShade};

// Render targets
pub use depth::DepthBuffer;
pub use render::{FrameStats, Framebuffer, PixelSink, Renderer};

// Draw utilities
pub use draw::draw_line_3d;

// Errors
pub use error::RasterError;

// Constants
pub use constants::{DEPTH_EMPTY, DEPTH_MAX, FAR_PLANE, FOV_DEGREES, HEIGHT, NEAR_PLANE, WIDTH};
