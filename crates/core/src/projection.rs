//! Pinhole projection and rotation helpers for 3D scenes.

use crate::raster::Point;
use crate::types::{Vec2, Vec3, DEFAULT_CAMERA_DISTANCE, DEFAULT_FOCAL_LENGTH, MIN_DEPTH};

/// Rotate the pair `(a, b)` by `theta` radians.
#[inline]
fn rotate_pair(a: f32, b: f32, theta: f32) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    Vec2::new(a * cos - b * sin, b * cos + a * sin)
}

/// Rotate about the x axis; returns the new `(y, z)`.
pub fn rotate_x(y: f32, z: f32, theta: f32) -> Vec2 {
    rotate_pair(y, z, theta)
}

/// Rotate about the y axis; returns the new `(x, z)`.
pub fn rotate_y(x: f32, z: f32, theta: f32) -> Vec2 {
    rotate_pair(x, z, theta)
}

/// Rotate about the z axis; returns the new `(x, y)`.
pub fn rotate_z(x: f32, y: f32, theta: f32) -> Vec2 {
    rotate_pair(x, y, theta)
}

/// Camera parameters for projecting model space onto the pixel plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Focal length in pixels.
    pub focal_length: f32,
    /// Offset added to `z` after rotation, so the model sits in front of the camera.
    pub camera_distance: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            focal_length: DEFAULT_FOCAL_LENGTH,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
        }
    }
}

impl Projection {
    pub fn new(focal_length: f32, camera_distance: f32) -> Self {
        Self {
            focal_length,
            camera_distance,
        }
    }

    /// Perspective-divide `pos`. Depths at or below [`MIN_DEPTH`] are clamped.
    pub fn project(&self, pos: Vec3) -> Vec2 {
        let z = if pos.z <= MIN_DEPTH { MIN_DEPTH } else { pos.z };
        let scale = self.focal_length / z;
        Vec2::new(pos.x * scale, pos.y * scale)
    }

    /// Apply `yaw` (about y) then `pitch` (about x), push the point
    /// `camera_distance` along +z and project it.
    pub fn project_rotated(&self, pos: Vec3, pitch: f32, yaw: f32) -> Vec2 {
        let xz = rotate_y(pos.x, pos.z, yaw);
        let yz = rotate_x(pos.y, xz.y, pitch);
        self.project(Vec3::new(xz.x, yz.x, yz.y + self.camera_distance))
    }

    /// Map a projected point to pixel coordinates with the origin at the
    /// buffer center. Fractions truncate toward zero.
    pub fn to_screen(projected: Vec2, width: u16, height: u16) -> Point {
        let cx = f32::from(width / 2);
        let cy = f32::from(height / 2);
        ((projected.x + cx) as i32, (projected.y + cy) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn quarter_turn_rotation() {
        let r = rotate_z(1.0, 0.0, std::f32::consts::FRAC_PI_2);
        assert!(approx(r, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn zero_rotation_is_identity() {
        assert!(approx(rotate_x(3.0, -2.0, 0.0), Vec2::new(3.0, -2.0)));
        assert!(approx(rotate_y(3.0, -2.0, 0.0), Vec2::new(3.0, -2.0)));
    }

    #[test]
    fn project_divides_by_depth() {
        let p = Projection::new(24.0, 30.0);
        assert!(approx(p.project(Vec3::new(10.0, -5.0, 12.0)), Vec2::new(20.0, -10.0)));
    }

    #[test]
    fn project_clamps_depth() {
        let p = Projection::new(1.0, 0.0);
        let behind = p.project(Vec3::new(1.0, 1.0, -5.0));
        let near = p.project(Vec3::new(1.0, 1.0, MIN_DEPTH));
        assert!(approx(behind, near));
        assert!(behind.x.is_finite());
    }

    #[test]
    fn unrotated_projection_adds_camera_distance() {
        let p = Projection::default();
        let got = p.project_rotated(Vec3::new(10.0, 10.0, 10.0), 0.0, 0.0);
        let want = p.project(Vec3::new(10.0, 10.0, 40.0));
        assert!(approx(got, want));
    }

    #[test]
    fn screen_mapping_centers_origin() {
        assert_eq!(Projection::to_screen(Vec2::new(0.0, 0.0), 80, 50), (40, 25));
        assert_eq!(Projection::to_screen(Vec2::new(-1.5, 2.7), 81, 51), (38, 27));
    }
}
