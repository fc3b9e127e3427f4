//! Near/far plane clipping
//!
//! Works on view-space z before projection. Each plane either keeps a
//! triangle, discards it, or splits it into one or two sub-triangles that
//! cover exactly the part on the visible side. Sub-triangles keep
//! the parent's winding and go back through both planes.

use std::rc::Rc;
use super::types::{Triangle, Vertex};

/// A depth plane and which side of it is visible
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipPlane {
    /// Visible when z >= the plane
    Near(f32),
    /// Visible when z <= the plane
    Far(f32),
}

impl ClipPlane {
    pub fn z(self) -> f32 {
        match self {
            ClipPlane::Near(z) | ClipPlane::Far(z) => z,
        }
    }

    /// A point exactly on the plane is inside
    pub fn is_outside(self, z: f32) -> bool {
        match self {
            ClipPlane::Near(plane) => z < plane,
            ClipPlane::Far(plane) => z > plane,
        }
    }
}

/// Outcome of clipping one triangle against one plane
#[derive(Debug, Clone, PartialEq)]
pub enum ClipResult {
    /// Entirely inside; use the triangle as is
    Keep,
    /// Entirely outside
    Discard,
    /// Two vertices were outside
    One(Triangle),
    /// One vertex was outside; the remaining quad as two triangles
    Two(Triangle, Triangle),
}

/// Point where the edge from `inside` to `outside` crosses the plane.
/// Color comes from the inside endpoint.
fn intersect(inside: &Vertex, outside: &Vertex, plane: ClipPlane) -> Vertex {
    let plane_z = plane.z();
    let t = (plane_z - inside.pos.z) / (outside.pos.z - inside.pos.z);
    let mut pos = inside.pos.lerp(outside.pos, t);
    pos.z = plane_z;
    Vertex::new(pos, Rc::clone(&inside.color))
}

/// Clip a triangle against a single plane
pub fn clip_against(tri: &Triangle, plane: ClipPlane) -> ClipResult {
    let outside = [
        plane.is_outside(tri.v[0].pos.z),
        plane.is_outside(tri.v[1].pos.z),
        plane.is_outside(tri.v[2].pos.z),
    ];

    match outside.iter().filter(|&&o| o).count() {
        0 => ClipResult::Keep,
        3 => ClipResult::Discard,
        1 => {
            // o is out; a and b follow it in winding order
            let o = outside.iter().position(|&out| out).unwrap_or(0);
            let (a, b) = ((o + 1) % 3, (o + 2) % 3);
            let na = intersect(&tri.v[a], &tri.v[o], plane);
            let nb = intersect(&tri.v[b], &tri.v[o], plane);
            ClipResult::Two(
                Triangle::new(na.clone(), tri.v[a].clone(), tri.v[b].clone()),
                Triangle::new(na, tri.v[b].clone(), nb),
            )
        }
        _ => {
            let i = outside.iter().position(|&out| !out).unwrap_or(0);
            let (a, b) = ((i + 1) % 3, (i + 2) % 3);
            let na = intersect(&tri.v[i], &tri.v[a], plane);
            let nb = intersect(&tri.v[i], &tri.v[b], plane);
            ClipResult::One(Triangle::new(tri.v[i].clone(), na, nb))
        }
    }
}

/// Clip against the near plane then the far plane, calling `emit` for every
/// fully visible piece. Returns the number of pieces emitted.
///
/// A triangle already between the planes is emitted once, unchanged.
pub fn clip_triangle(tri: &Triangle, near: f32, far: f32, mut emit: impl FnMut(&Triangle)) -> usize {
    let planes = [ClipPlane::Near(near), ClipPlane::Far(far)];
    let mut pending = vec![tri.clone()];
    let mut emitted = 0;

    'next: while let Some(current) = pending.pop() {
        for plane in planes {
            match clip_against(&current, plane) {
                ClipResult::Keep => continue,
                ClipResult::Discard => {
                    log::trace!("clip: discarded by {:?}", plane);
                    continue 'next;
                }
                ClipResult::One(t) => {
                    log::trace!("clip: {:?} trimmed to one triangle", plane);
                    pending.push(t);
                    continue 'next;
                }
                ClipResult::Two(t0, t1) => {
                    log::trace!("clip: {:?} split into two triangles", plane);
                    pending.push(t1);
                    pending.push(t0);
                    continue 'next;
                }
            }
        }
        emit(&current);
        emitted += 1;
    }

    emitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::math::Vec3;
    use crate::rasterizer::types::{Color, SharedColor};

    fn color() -> SharedColor {
        Rc::new(Color::SKY)
    }

    fn tri(p: [(f32, f32, f32); 3]) -> Triangle {
        let c = color();
        Triangle::from_points(
            Vec3::new(p[0].0, p[0].1, p[0].2),
            Vec3::new(p[1].0, p[1].1, p[1].2),
            Vec3::new(p[2].0, p[2].1, p[2].2),
            &c,
        )
    }

    /// Signed area of the xz projection; the sign is the winding
    fn winding(t: &Triangle) -> f32 {
        let (a, b, c) = (t.v[0].pos, t.v[1].pos, t.v[2].pos);
        (b.x - a.x) * (c.z - a.z) - (c.x - a.x) * (b.z - a.z)
    }

    fn collect(t: &Triangle, near: f32, far: f32) -> Vec<Triangle> {
        let mut out = Vec::new();
        let n = clip_triangle(t, near, far, |piece| out.push(piece.clone()));
        assert_eq!(n, out.len());
        out
    }

    #[test]
    fn test_inside_triangle_passes_through_unchanged() {
        let t = tri([(0.0, 0.0, 2.0), (1.0, 0.0, 3.0), (0.0, 1.0, 4.0)]);
        let out = collect(&t, 1.0, 5.0);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], t);
    }

    #[test]
    fn test_vertex_on_plane_is_inside() {
        let t = tri([(0.0, 0.0, 1.0), (1.0, 0.0, 5.0), (0.0, 1.0, 3.0)]);
        assert_eq!(clip_against(&t, ClipPlane::Near(1.0)), ClipResult::Keep);
        assert_eq!(clip_against(&t, ClipPlane::Far(5.0)), ClipResult::Keep);
    }

    #[test]
    fn test_fully_outside_is_discarded() {
        let behind = tri([(0.0, 0.0, 0.5), (1.0, 0.0, -2.0), (0.0, 1.0, 0.9)]);
        assert!(collect(&behind, 1.0, 5.0).is_empty());
        let beyond = tri([(0.0, 0.0, 6.0), (1.0, 0.0, 7.0), (0.0, 1.0, 5.5)]);
        assert!(collect(&beyond, 1.0, 5.0).is_empty());
    }

    #[test]
    fn test_one_outside_splits_in_two_keeping_winding() {
        let t = tri([(0.0, 0.0, 0.0), (2.0, 0.0, 2.0), (-2.0, 0.0, 2.0)]);
        match clip_against(&t, ClipPlane::Near(1.0)) {
            ClipResult::Two(a, b) => {
                for piece in [&a, &b] {
                    assert!(piece.v.iter().all(|v| v.pos.z >= 1.0));
                    assert_eq!(winding(piece).signum(), winding(&t).signum());
                }
                // Quad between z=1 and z=2: area = (2 + 4) / 2 * 1 = 3
                let area = (winding(&a).abs() + winding(&b).abs()) / 2.0;
                assert!((area - 3.0).abs() < 1e-5);
            }
            other => panic!("expected a split, got {:?}", other),
        }
    }

    #[test]
    fn test_two_outside_trims_to_one_keeping_winding() {
        let t = tri([(0.0, 0.0, 4.0), (2.0, 0.0, 8.0), (-2.0, 0.0, 8.0)]);
        match clip_against(&t, ClipPlane::Far(5.0)) {
            ClipResult::One(piece) => {
                assert_eq!(piece.v[0].pos, t.v[0].pos);
                assert!((piece.v[1].pos.x - 0.5).abs() < 1e-5);
                assert!((piece.v[2].pos.x + 0.5).abs() < 1e-5);
                assert!(piece.v[1..].iter().all(|v| v.pos.z == 5.0));
                assert_eq!(winding(&piece).signum(), winding(&t).signum());
            }
            other => panic!("expected a trim, got {:?}", other),
        }
    }

    #[test]
    fn test_intersection_takes_inside_color() {
        let inside: SharedColor = Rc::new(Color::RED);
        let outside: SharedColor = Rc::new(Color::BLUE);
        let t = Triangle::new(
            Vertex::new(Vec3::new(0.0, 0.0, 0.0), Rc::clone(&outside)),
            Vertex::new(Vec3::new(1.0, 0.0, 2.0), Rc::clone(&inside)),
            Vertex::new(Vec3::new(0.0, 1.0, 2.0), Rc::clone(&inside)),
        );
        let out = collect(&t, 1.0, 5.0);
        assert_eq!(out.len(), 2);
        for piece in &out {
            assert!(piece.v.iter().all(|v| Rc::ptr_eq(&v.color, &inside)));
        }
    }

    #[test]
    fn test_straddling_both_planes_ends_inside() {
        let t = tri([(0.0, 0.0, 0.0), (3.0, 0.0, 10.0), (-3.0, 1.0, 6.0)]);
        let out = collect(&t, 1.0, 5.0);
        assert!(!out.is_empty());
        for piece in &out {
            assert!(piece.v.iter().all(|v| (1.0..=5.0).contains(&v.pos.z)));
        }
    }
}
