//! Spatial transforms and the world-matrix convention.
//!
//! [`Transform`] is the position/rotation/scale triple every scene object is
//! authored in. The renderer only ever sees the composed [`Mat4`]; the
//! inspector only ever sees the decomposed triple. Both directions live here
//! so the composition convention is written down exactly once.

use glam::{Mat4, Quat, Vec3};

use crate::rotation::{euler_to_quaternion, quaternion_to_euler};

/// Position, rotation, and scale of a scene object.
///
/// # Default Values
///
/// A default transform places the object at the origin with no rotation and
/// unit scale:
/// - `position`: `(0, 0, 0)`
/// - `rotation`: Identity quaternion (no rotation)
/// - `scale`: `(1, 1, 1)`
///
/// # Example
///
/// ```
/// use maquette::{Transform, Vec3, Quat};
///
/// let transform = Transform::new()
///     .position(Vec3::new(0.0, 2.0, 0.0))
///     .rotation(Quat::from_rotation_y(0.5))
///     .uniform_scale(2.0);
///
/// let world = transform.matrix();
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    /// World-space position (translation).
    pub position: Vec3,
    /// Rotation as a unit quaternion.
    pub rotation: Quat,
    /// Scale factors for each axis.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Creates a new identity transform (origin, no rotation, unit scale).
    ///
    /// This is equivalent to `Transform::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transform positioned at the given location.
    ///
    /// # Example
    ///
    /// ```
    /// use maquette::{Transform, Vec3};
    ///
    /// let transform = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(transform.position, Vec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Sets the position (translation) component.
    pub fn position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the rotation component using a quaternion.
    ///
    /// For common rotation operations, use glam's quaternion constructors:
    /// - `Quat::from_rotation_x(angle)` — Rotate around X axis
    /// - `Quat::from_rotation_y(angle)` — Rotate around Y axis
    /// - `Quat::from_rotation_z(angle)` — Rotate around Z axis
    /// - `Quat::from_axis_angle(axis, angle)` — Rotate around arbitrary axis
    pub fn rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets non-uniform scale factors for each axis.
    pub fn scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Sets uniform scale on all axes.
    ///
    /// # Example
    ///
    /// ```
    /// use maquette::{Transform, Vec3};
    ///
    /// let transform = Transform::new().uniform_scale(2.0);
    /// assert_eq!(transform.scale, Vec3::new(2.0, 2.0, 2.0));
    /// ```
    pub fn uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Sets the rotation from `(pitch, yaw, roll)` Euler angles in degrees,
    /// packed as the `x`, `y`, `z` components of `degrees`.
    ///
    /// This is the inspector-facing constructor: rotation fields are edited
    /// in degrees, converted here, and never stored as Euler angles on the
    /// object itself.
    pub fn euler_degrees(mut self, degrees: Vec3) -> Self {
        self.rotation = euler_to_quaternion(Vec3::new(
            degrees.x.to_radians(),
            degrees.y.to_radians(),
            degrees.z.to_radians(),
        ));
        self
    }

    /// Returns the rotation as `(pitch, yaw, roll)` Euler angles in degrees.
    pub fn to_euler_degrees(&self) -> Vec3 {
        let radians = quaternion_to_euler(self.rotation);
        Vec3::new(
            radians.x.to_degrees(),
            radians.y.to_degrees(),
            radians.z.to_degrees(),
        )
    }

    /// Converts this transform to a 4×4 world matrix.
    ///
    /// The matrix applies transformations in SRT order (Scale, Rotate,
    /// Translate). Every world matrix the crate writes back to a scene
    /// object is composed through this method, so the renderer and the
    /// inspector always agree on the convention.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Recovers a transform from a world matrix.
    ///
    /// Inverse of [`Transform::matrix`] for affine matrices built from SRT
    /// composition. Matrices with shear or projection terms are outside the
    /// contract and decompose to *some* triple, not a faithful one.
    pub fn from_matrix(matrix: Mat4) -> Self {
        let (scale, rotation, position) = matrix.to_scale_rotation_translation();
        Self {
            position,
            rotation,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_near(a: Vec3, b: Vec3, eps: f32) {
        assert!((a - b).length() < eps, "expected {b:?}, got {a:?}");
    }

    #[test]
    fn matrix_composes_in_srt_order() {
        let transform = Transform::new()
            .position(Vec3::new(1.0, 2.0, 3.0))
            .rotation(Quat::from_rotation_z(0.5))
            .scale(Vec3::new(2.0, 2.0, 2.0));

        let expected = Mat4::from_translation(transform.position)
            * Mat4::from_quat(transform.rotation)
            * Mat4::from_scale(transform.scale);

        let got = transform.matrix();
        for col in 0..4 {
            assert_vec3_near(
                got.col(col).truncate(),
                expected.col(col).truncate(),
                1e-5,
            );
        }
    }

    #[test]
    fn matrix_round_trips_through_decomposition() {
        let original = Transform::new()
            .position(Vec3::new(-4.0, 0.5, 9.0))
            .rotation(Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 1.1))
            .scale(Vec3::new(1.5, 2.0, 0.75));

        let back = Transform::from_matrix(original.matrix());

        assert_vec3_near(back.position, original.position, 1e-4);
        assert_vec3_near(back.scale, original.scale, 1e-4);
        assert!(back.rotation.dot(original.rotation).abs() > 1.0 - 1e-5);
    }

    #[test]
    fn euler_degrees_round_trip() {
        let transform = Transform::new().euler_degrees(Vec3::new(30.0, 45.0, 60.0));
        assert_vec3_near(
            transform.to_euler_degrees(),
            Vec3::new(30.0, 45.0, 60.0),
            1e-2,
        );
    }

    #[test]
    fn identity_reads_back_as_exact_zero_rotation() {
        assert_eq!(Transform::new().to_euler_degrees(), Vec3::ZERO);
    }
}
