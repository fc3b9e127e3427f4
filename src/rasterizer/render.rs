//! Render targets and the per-frame pipeline
//!
//! `Renderer` owns the depth buffer and the projection parameters. Each
//! triangle is shaded once, optionally culled, clipped against the near and
//! far planes, and every surviving piece is projected and scan converted
//! into a `PixelSink`.

use std::ops::AddAssign;
use crate::config::RenderConfig;
use super::clip::clip_triangle;
use super::depth::DepthBuffer;
use super::draw::draw_line_3d;
use super::error::RasterError;
use super::object::Object;
use super::project::{project, Viewport};
use super::scan::{rasterize_triangle, Fill};
use super::shade::shade_triangle;
use super::types::{Color, Triangle};

/// Destination for rasterized pixels. The pipeline only ever writes.
pub trait PixelSink {
    fn set_pixel(&mut self, x: usize, y: usize, color: Color);
}

/// Framebuffer for software rendering
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    /// Read back a pixel, None outside the buffer
    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            let p = &self.pixels[idx..idx + 4];
            Some(Color::new(p[0], p[1], p[2], p[3]))
        } else {
            None
        }
    }
}

impl PixelSink for Framebuffer {
    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        Framebuffer::set_pixel(self, x, y, color);
    }
}

/// Per-frame counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub triangles_submitted: usize,
    pub triangles_culled: usize,
    /// Triangles the clipper removed entirely
    pub triangles_clipped_away: usize,
    /// Pieces handed to the scan converter (after splitting)
    pub triangles_rasterized: usize,
    pub pixels_written: usize,
}

impl AddAssign for FrameStats {
    fn add_assign(&mut self, other: Self) {
        self.triangles_submitted += other.triangles_submitted;
        self.triangles_culled += other.triangles_culled;
        self.triangles_clipped_away += other.triangles_clipped_away;
        self.triangles_rasterized += other.triangles_rasterized;
        self.pixels_written += other.pixels_written;
    }
}

/// Rendering context: depth buffer plus everything the pipeline reads
pub struct Renderer {
    viewport: Viewport,
    near_plane: f32,
    far_plane: f32,
    focal_length: f32,
    depth: DepthBuffer,
    /// Skip triangles facing away from the camera
    pub backface_cull: bool,
    /// Outline every rasterized piece
    pub wireframe: bool,
    pub wireframe_color: Color,
    /// Paint depth as gray instead of the face color
    pub depth_view: bool,
}

fn check_focal_length(focal_length: f32) -> Result<f32, RasterError> {
    if focal_length.is_finite() && focal_length > 0.0 {
        Ok(focal_length)
    } else {
        Err(RasterError::InvalidFocalLength(focal_length))
    }
}

impl Renderer {
    /// Validate the configuration and allocate the depth buffer
    pub fn new(config: &RenderConfig) -> Result<Self, RasterError> {
        let (near, far) = (config.near_plane, config.far_plane);
        if !(near.is_finite() && far.is_finite() && near > 0.0 && near < far) {
            return Err(RasterError::InvalidClipPlanes { near, far });
        }
        let viewport = Viewport::new(config.width, config.height, far)?;
        let focal_length = check_focal_length(config.focal_length())?;
        let depth = DepthBuffer::new(config.width, config.height)?;

        Ok(Self {
            viewport,
            near_plane: near,
            far_plane: far,
            focal_length,
            depth,
            backface_cull: config.backface_cull,
            wireframe: config.wireframe,
            wireframe_color: config.wireframe_color,
            depth_view: config.depth_view,
        })
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    pub fn set_focal_length(&mut self, focal_length: f32) -> Result<(), RasterError> {
        self.focal_length = check_focal_length(focal_length)?;
        Ok(())
    }

    pub fn depth_buffer(&self) -> &DepthBuffer {
        &self.depth
    }

    /// Start a new frame
    pub fn clear_depth(&mut self) {
        self.depth.clear();
    }

    /// Shade, clip, project and fill one triangle
    pub fn render_triangle<S: PixelSink + ?Sized>(&mut self, tri: &Triangle, sink: &mut S) -> FrameStats {
        let mut stats = FrameStats { triangles_submitted: 1, ..Default::default() };

        let shade = shade_triangle(tri);
        if self.backface_cull && shade.is_back_facing() {
            stats.triangles_culled = 1;
            return stats;
        }

        let fill = if self.depth_view { Fill::DepthGray } else { Fill::Solid(shade.color) };
        let (focal, viewport) = (self.focal_length, self.viewport);
        let (wireframe, wire_color) = (self.wireframe, self.wireframe_color);
        let depth = &mut self.depth;
        let mut pixels = 0;

        let pieces = clip_triangle(tri, self.near_plane, self.far_plane, |piece| {
            let points = [
                project(piece.v[0].pos, focal, &viewport),
                project(piece.v[1].pos, focal, &viewport),
                project(piece.v[2].pos, focal, &viewport),
            ];
            pixels += rasterize_triangle(points, fill, &mut *depth, &mut *sink);
            if wireframe {
                for i in 0..3 {
                    pixels += draw_line_3d(&mut *depth, &mut *sink, points[i], points[(i + 1) % 3], wire_color);
                }
            }
        });

        if pieces == 0 {
            stats.triangles_clipped_away = 1;
        }
        stats.triangles_rasterized = pieces;
        stats.pixels_written = pixels;
        stats
    }

    /// Run every triangle of `object` through the pipeline
    pub fn render_object<S: PixelSink + ?Sized>(&mut self, object: &Object, sink: &mut S) -> FrameStats {
        let mut stats = FrameStats::default();
        for tri in &object.triangles {
            stats += self.render_triangle(tri, sink);
        }
        log::trace!("frame: {:?}", stats);
        stats
    }
}
