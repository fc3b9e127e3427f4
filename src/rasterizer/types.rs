//! Core types for the rasterizer

use std::rc::Rc;
use super::math::Vec3;
use serde::{Deserialize, Serialize};

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255, a: 255 };
    /// The demo cube's surface color
    pub const SKY: Color = Color { r: 50, g: 200, b: 255, a: 255 };

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque gray of the given level
    pub fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Scale the RGB channels by `fraction`, clamping each to 0..=255.
    /// Alpha is written fully opaque, the same as every rasterized pixel.
    pub fn shade(self, fraction: f32) -> Self {
        let scale = |c: u8| (c as f32 * fraction).clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: 255,
        }
    }

    /// Convert to [u8; 4] for framebuffer (RGBA)
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A color shared by every vertex of one logical surface
pub type SharedColor = Rc<Color>;

/// A vertex: position plus a handle to the surface color it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub pos: Vec3,
    pub color: SharedColor,
}

impl Vertex {
    pub fn new(pos: Vec3, color: SharedColor) -> Self {
        Self { pos, color }
    }
}

/// A triangle owning its three vertices.
/// Vertex order is the winding; clipping keeps it.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub v: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self { v: [v0, v1, v2] }
    }

    /// Build from three positions sharing one color
    pub fn from_points(p0: Vec3, p1: Vec3, p2: Vec3, color: &SharedColor) -> Self {
        Self {
            v: [
                Vertex::new(p0, Rc::clone(color)),
                Vertex::new(p1, Rc::clone(color)),
                Vertex::new(p2, Rc::clone(color)),
            ],
        }
    }

    /// Color used for flat shading (the first vertex's)
    pub fn surface_color(&self) -> Color {
        *self.v[0].color
    }
}

/// A projected vertex: pixel position plus mapped depth (nearer = smaller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
    pub z: u8,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32, z: u8) -> Self {
        Self { x, y, z }
    }
}
