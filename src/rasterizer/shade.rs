//! Flat shading from the face normal
//!
//! The light comes from the camera: a face pointing straight back at the
//! viewer gets full intensity, falling linearly with the normal's angle to
//! -Z down to -1 for a face pointing directly away.

use std::f32::consts::{FRAC_PI_2, PI};
use super::math::Vec3;
use super::types::{Color, Triangle};

/// Result of shading one triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceShade {
    /// Color every pixel of the face gets
    pub color: Color,
    /// Angle between the face normal and the direction back to the camera (radians)
    pub angle: f32,
    /// Lighting fraction in [-1, 1]
    pub fraction: f32,
}

impl FaceShade {
    /// Normal points more than 90 degrees away from the camera
    pub fn is_back_facing(&self) -> bool {
        self.angle > FRAC_PI_2
    }
}

/// Unit normal of (v2->v0) x (v2->v1). Zero for a degenerate triangle.
pub fn face_normal(tri: &Triangle) -> Vec3 {
    let a = tri.v[0].pos - tri.v[2].pos;
    let b = tri.v[1].pos - tri.v[2].pos;
    a.cross(b).normalize()
}

/// Angle of `normal` against the view direction, and the matching lighting fraction
pub fn lighting_fraction(normal: Vec3) -> (f32, f32) {
    let angle = (-normal.z).clamp(-1.0, 1.0).acos();
    let fraction = (2.0 * (PI - angle)) / PI - 1.0;
    (angle, fraction)
}

/// Shade a triangle from its first vertex's color
pub fn shade_triangle(tri: &Triangle) -> FaceShade {
    let (angle, fraction) = lighting_fraction(face_normal(tri));
    FaceShade {
        color: tri.surface_color().shade(fraction),
        angle,
        fraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use crate::rasterizer::types::SharedColor;

    fn facing(normal_z_sign: f32) -> Triangle {
        let c: SharedColor = Rc::new(Color::rgb(200, 100, 50));
        // Counter-clockwise seen from -z gives a -z normal
        let (p0, p1, p2) = (Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 1.0, 2.0), Vec3::new(1.0, 0.0, 2.0));
        if normal_z_sign < 0.0 {
            Triangle::from_points(p0, p1, p2, &c)
        } else {
            Triangle::from_points(p1, p0, p2, &c)
        }
    }

    #[test]
    fn test_normal_of_camera_facing_triangle() {
        let n = face_normal(&facing(-1.0));
        assert!((n.z + 1.0).abs() < 1e-6);
        assert!(n.x.abs() < 1e-6 && n.y.abs() < 1e-6);
    }

    #[test]
    fn test_facing_camera_is_full_intensity() {
        let shade = shade_triangle(&facing(-1.0));
        assert!(shade.angle.abs() < 1e-4);
        assert!((shade.fraction - 1.0).abs() < 1e-4);
        assert_eq!(shade.color, Color::rgb(200, 100, 50));
        assert!(!shade.is_back_facing());
    }

    #[test]
    fn test_facing_away_is_back_facing_and_black() {
        let shade = shade_triangle(&facing(1.0));
        assert!((shade.fraction + 1.0).abs() < 1e-4);
        assert!(shade.is_back_facing());
        assert_eq!(shade.color, Color::rgb(0, 0, 0));
    }

    #[test]
    fn test_edge_on_is_half_way() {
        let (angle, fraction) = lighting_fraction(Vec3::new(1.0, 0.0, 0.0));
        assert!((angle - FRAC_PI_2).abs() < 1e-6);
        assert!(fraction.abs() < 1e-6);
    }

    #[test]
    fn test_fraction_is_linear_in_angle() {
        // 45 degrees toward the camera
        let n = Vec3::new(0.0, 1.0, -1.0).normalize();
        let (angle, fraction) = lighting_fraction(n);
        assert!((angle - PI / 4.0).abs() < 1e-5);
        assert!((fraction - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_triangle_does_not_produce_nan() {
        let c: SharedColor = Rc::new(Color::WHITE);
        let p = Vec3::new(0.2, 0.3, 2.0);
        let shade = shade_triangle(&Triangle::from_points(p, p, p, &c));
        assert!(shade.fraction.is_finite());
        assert_eq!(shade.color, Color::rgb(0, 0, 0));
    }
}
