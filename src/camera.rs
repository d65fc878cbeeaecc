//! The scene-view camera.
//!
//! An orbit camera: a target point, a distance, and two angles. The editor
//! feeds it drag deltas and scroll ticks; it produces the view and
//! projection matrices that picking rays are built from.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

use crate::angles::angle_from_xy;

/// Elevation stops just short of the poles so the view never degenerates.
const ELEVATION_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// A camera that orbits around a target point.
///
/// # Example
///
/// ```
/// use maquette::{OrbitCamera, Vec3};
///
/// let mut camera = OrbitCamera::new().target(Vec3::ZERO).radius(10.0);
/// camera.orbit(0.2, -0.1);
///
/// let view = camera.view_matrix();
/// let projection = camera.projection_matrix(16.0 / 9.0, 0.1, 1000.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Distance from target.
    pub radius: f32,
    /// Horizontal angle in radians, in `[0, 2π)`.
    pub azimuth: f32,
    /// Vertical angle in radians, clamped short of straight up/down.
    pub elevation: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Minimum distance from target.
    pub min_radius: f32,
    /// Maximum distance from target.
    pub max_radius: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            radius: 15.0,
            azimuth: 0.0,
            elevation: 0.6,
            fov: FRAC_PI_2,
            min_radius: 0.5,
            max_radius: 150.0,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target point to orbit around.
    pub fn target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// Set the distance from target.
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius.clamp(self.min_radius, self.max_radius);
        self
    }

    /// Set the initial azimuth (horizontal angle) in radians.
    pub fn azimuth(mut self, azimuth: f32) -> Self {
        self.azimuth = azimuth;
        self
    }

    /// Set the initial elevation (vertical angle) in radians.
    pub fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation.clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT);
        self
    }

    /// Set the field of view in degrees.
    pub fn fov(mut self, fov_degrees: f32) -> Self {
        self.fov = fov_degrees.to_radians();
        self
    }

    /// Set distance limits.
    pub fn radius_limits(mut self, min: f32, max: f32) -> Self {
        self.min_radius = min;
        self.max_radius = max;
        self.radius = self.radius.clamp(min, max);
        self
    }

    /// Rotates the camera by the given angle deltas in radians.
    ///
    /// Positive `d_azimuth` orbits counterclockwise seen from above;
    /// positive `d_elevation` raises the camera.
    pub fn orbit(&mut self, d_azimuth: f32, d_elevation: f32) {
        self.azimuth = (self.azimuth + d_azimuth).rem_euclid(2.0 * std::f32::consts::PI);
        self.elevation = (self.elevation + d_elevation).clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT);
    }

    /// Moves the camera toward (positive delta) or away from the target,
    /// clamped to the configured radius limits.
    pub fn zoom(&mut self, delta: f32) {
        self.radius = (self.radius - delta).clamp(self.min_radius, self.max_radius);
    }

    /// World-space camera position (spherical to Cartesian).
    pub fn position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.radius * self.elevation.cos() * self.azimuth.sin(),
            self.radius * self.elevation.sin(),
            self.radius * self.elevation.cos() * self.azimuth.cos(),
        );
        self.target + offset
    }

    /// Places the camera at a world-space position, recovering radius,
    /// azimuth, and elevation from the offset to the target.
    ///
    /// A position straight above or below the target has no horizontal
    /// direction to recover an azimuth from, so the current azimuth is kept.
    pub fn look_from(&mut self, position: Vec3) {
        let offset = position - self.target;
        let radius = offset.length();
        if radius < 1e-6 {
            return;
        }

        self.radius = radius.clamp(self.min_radius, self.max_radius);
        self.elevation = (offset.y / radius).clamp(-1.0, 1.0).asin().clamp(
            -ELEVATION_LIMIT,
            ELEVATION_LIMIT,
        );

        // The horizontal plane direction is (z, x) in this spherical
        // convention, so the polar angle of that pair is the azimuth.
        if offset.x.abs() > 1e-6 || offset.z.abs() > 1e-6 {
            self.azimuth = angle_from_xy(offset.z, offset.x);
        }
    }

    /// The view matrix for the current camera pose.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// A perspective projection matrix with this camera's field of view.
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, near, far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn default_pose_sits_on_the_positive_z_side() {
        let camera = OrbitCamera::new().elevation(0.0);
        let position = camera.position();
        assert!((position - Vec3::new(0.0, 0.0, 15.0)).length() < 1e-4);
    }

    #[test]
    fn orbit_wraps_azimuth_and_clamps_elevation() {
        let mut camera = OrbitCamera::new();
        camera.orbit(2.5 * PI, 0.0);
        assert!((0.0..2.0 * PI).contains(&camera.azimuth));

        camera.orbit(0.0, 10.0);
        assert!(camera.elevation <= ELEVATION_LIMIT);
        camera.orbit(0.0, -20.0);
        assert!(camera.elevation >= -ELEVATION_LIMIT);
    }

    #[test]
    fn zoom_respects_radius_limits() {
        let mut camera = OrbitCamera::new().radius_limits(2.0, 20.0);
        camera.zoom(100.0);
        assert_eq!(camera.radius, 2.0);
        camera.zoom(-100.0);
        assert_eq!(camera.radius, 20.0);
    }

    #[test]
    fn look_from_recovers_the_spherical_pose() {
        let mut reference = OrbitCamera::new()
            .target(Vec3::new(1.0, -2.0, 4.0))
            .radius(9.0);
        reference.orbit(2.2, 0.0);
        reference.elevation = 0.4;

        let mut camera = OrbitCamera::new().target(reference.target);
        camera.look_from(reference.position());

        assert!((camera.radius - 9.0).abs() < 1e-3);
        assert!((camera.azimuth - reference.azimuth).abs() < 1e-3);
        assert!((camera.elevation - reference.elevation).abs() < 1e-3);
        assert!((camera.position() - reference.position()).length() < 1e-3);
    }

    #[test]
    fn look_from_straight_above_keeps_the_azimuth() {
        let mut camera = OrbitCamera::new().azimuth(1.25);
        camera.look_from(camera.target + Vec3::Y * 5.0);
        assert!((camera.azimuth - 1.25).abs() < 1e-6);
        assert!((camera.radius - 5.0).abs() < 1e-5);
    }

    #[test]
    fn view_matrix_puts_the_target_on_the_view_axis() {
        let camera = OrbitCamera::new().target(Vec3::new(3.0, 1.0, -2.0)).radius(8.0);
        let in_view = camera.view_matrix().transform_point3(camera.target);
        assert!((in_view - Vec3::new(0.0, 0.0, -8.0)).length() < 1e-3);
    }
}
