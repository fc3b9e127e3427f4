//! Renderable objects and their transforms
//!
//! An object is a list of triangles that each own their vertex copies, plus
//! an origin that tracks the accumulated translation. Local rotations pivot
//! around that origin.

use std::rc::Rc;
use super::error::RasterError;
use super::math::{Axis, Vec3};
use super::types::{SharedColor, Triangle, Vertex};

/// Corner indices for each of the cube's 12 faces (two per side)
const CUBE_FACES: [[usize; 3]; 12] = [
    [7, 5, 4],
    [6, 5, 7],
    [3, 0, 1],
    [3, 1, 2],
    [4, 5, 0],
    [1, 0, 5],
    [6, 7, 3],
    [3, 2, 6],
    [6, 1, 5],
    [6, 2, 1],
    [7, 4, 0],
    [0, 3, 7],
];

#[derive(Debug, Clone, Default)]
pub struct Object {
    pub triangles: Vec<Triangle>,
    /// Accumulated translation; the pivot for local rotations
    pub origin: Vec3,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing triangles, origin at the world origin
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles, origin: Vec3::ZERO }
    }

    /// Axis-aligned cube of edge `size` centered on the world origin.
    /// Every vertex shares `color`. Winding puts face normals outward.
    pub fn cube(size: f32, color: &SharedColor) -> Result<Self, RasterError> {
        let h = size / 2.0;
        let corners = [
            Vec3::new(-h, h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(-h, -h, -h),
            Vec3::new(-h, h, h),
            Vec3::new(h, h, h),
            Vec3::new(h, -h, h),
            Vec3::new(-h, -h, h),
        ];

        let mut triangles = Vec::new();
        triangles
            .try_reserve_exact(CUBE_FACES.len())
            .map_err(|_| RasterError::ObjectAlloc { triangles: CUBE_FACES.len() })?;

        for (i, face) in CUBE_FACES.iter().enumerate() {
            let tri = Triangle::new(
                Vertex::new(corners[face[0]], Rc::clone(color)),
                Vertex::new(corners[face[1]], Rc::clone(color)),
                Vertex::new(corners[face[2]], Rc::clone(color)),
            );
            log::debug!(
                "cube triangle #{}: ({:?}) ({:?}) ({:?})",
                i + 1,
                tri.v[0].pos,
                tri.v[1].pos,
                tri.v[2].pos
            );
            triangles.push(tri);
        }

        Ok(Self::from_triangles(triangles))
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Move the object and its origin by (dx, dy, dz)
    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        let delta = Vec3::new(dx, dy, dz);
        self.origin = self.origin + delta;
        self.for_each_vertex(|v| v.pos = v.pos + delta);
    }

    /// Rotate every vertex about a world axis through the world origin.
    /// The origin is left alone.
    pub fn rotate_global(&mut self, axis: Axis, degrees: f32) {
        self.for_each_vertex(|v| v.pos = v.pos.rotated(axis, degrees));
    }

    /// Rotate about an axis through the object's own origin
    pub fn rotate_local(&mut self, axis: Axis, degrees: f32) {
        let pivot = self.origin;
        self.translate(-pivot.x, -pivot.y, -pivot.z);
        self.rotate_global(axis, degrees);
        self.translate(pivot.x, pivot.y, pivot.z);
    }

    fn for_each_vertex(&mut self, mut f: impl FnMut(&mut Vertex)) {
        for tri in &mut self.triangles {
            for v in &mut tri.v {
                f(v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::types::Color;

    fn sky() -> SharedColor {
        Rc::new(Color::SKY)
    }

    fn positions(obj: &Object) -> Vec<Vec3> {
        obj.triangles.iter().flat_map(|t| t.v.iter().map(|v| v.pos)).collect()
    }

    #[test]
    fn test_cube_has_twelve_triangles_sharing_color() {
        let color = sky();
        let cube = Object::cube(1.0, &color).unwrap();
        assert_eq!(cube.len(), 12);
        assert_eq!(Rc::strong_count(&color), 1 + 36);
        for p in positions(&cube) {
            assert_eq!(p.x.abs(), 0.5);
            assert_eq!(p.y.abs(), 0.5);
            assert_eq!(p.z.abs(), 0.5);
        }
    }

    #[test]
    fn test_cube_normals_point_outward() {
        let cube = Object::cube(2.0, &sky()).unwrap();
        for tri in &cube.triangles {
            let a = tri.v[0].pos - tri.v[2].pos;
            let b = tri.v[1].pos - tri.v[2].pos;
            let normal = a.cross(b);
            let center = (tri.v[0].pos + tri.v[1].pos + tri.v[2].pos).scale(1.0 / 3.0);
            assert!(normal.dot(center) > 0.0, "inward normal on {:?}", tri);
        }
    }

    #[test]
    fn test_translate_moves_vertices_and_origin() {
        let mut cube = Object::cube(1.0, &sky()).unwrap();
        cube.translate(0.0, 0.0, 1.0);
        cube.translate(2.0, -1.0, 0.5);
        assert_eq!(cube.origin, Vec3::new(2.0, -1.0, 1.5));
        for p in positions(&cube) {
            assert!(p.z == 1.0 || p.z == 2.0);
            assert!(p.x == 1.5 || p.x == 2.5);
        }
    }

    #[test]
    fn test_rotate_local_round_trip() {
        let mut cube = Object::cube(1.0, &sky()).unwrap();
        cube.translate(0.3, -0.7, 2.0);
        cube.rotate_local(Axis::Y, 10.0);
        let before = positions(&cube);

        for axis in Axis::ALL {
            cube.rotate_local(axis, 33.0);
            cube.rotate_local(axis, -33.0);
        }

        for (a, b) in before.iter().zip(positions(&cube)) {
            assert!((a.x - b.x).abs() < 1e-4);
            assert!((a.y - b.y).abs() < 1e-4);
            assert!((a.z - b.z).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rotate_local_pivots_on_origin() {
        let mut cube = Object::cube(1.0, &sky()).unwrap();
        cube.translate(0.0, 0.0, 3.0);
        cube.rotate_local(Axis::Y, 45.0);
        // Centroid stays put around the pivot
        let pts = positions(&cube);
        let n = pts.len() as f32;
        let sum = pts.iter().fold(Vec3::ZERO, |acc, p| acc + *p);
        let centroid = sum.scale(1.0 / n);
        assert!(centroid.x.abs() < 1e-4);
        assert!(centroid.y.abs() < 1e-4);
        assert!((centroid.z - 3.0).abs() < 1e-4);
        assert_eq!(cube.origin, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_rotate_global_orbits_world_origin() {
        let color = sky();
        let mut obj = Object::from_triangles(vec![Triangle::from_points(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            &color,
        )]);
        obj.rotate_global(Axis::Z, 180.0);
        let p = obj.triangles[0].v[0].pos;
        assert!((p.x + 1.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
    }
}
