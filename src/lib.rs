//! LESTER: a flat-shaded software triangle rasterizer
//!
//! Triangles are shaded from their face normal, clipped against near and far
//! depth planes, projected with a perspective divide and scan converted into
//! any `PixelSink` through an 8-bit depth buffer.

pub mod config;
pub mod rasterizer;

pub use config::{ConfigError, RenderConfig};
