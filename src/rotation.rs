//! Quaternion ⇄ Euler conversion for the transform inspector.
//!
//! Rotations live as unit quaternions everywhere in the crate; Euler angles
//! only appear at the editing boundary, where a human needs three numbers to
//! drag. The axis convention is fixed here and nowhere else:
//!
//! - **roll** — rotation about X
//! - **pitch** — rotation about Y
//! - **yaw** — rotation about Z
//!
//! A decomposed rotation is reported as `(pitch, yaw, roll)` in the `x`, `y`,
//! `z` components of the returned [`Vec3`]. Note that this is *not* the
//! roll/pitch/yaw order the extraction computes in; callers should index by
//! meaning, never by assumed axis order.

use glam::{EulerRot, Quat, Vec3};

/// Components smaller than this are reported as exactly zero, so an identity
/// rotation reads back as (0, 0, 0) instead of float noise.
const ZERO_SNAP: f32 = 1e-6;

fn snap_zero(v: f32) -> f32 {
    if v.abs() < ZERO_SNAP { 0.0 } else { v }
}

/// Decomposes a unit quaternion into `(pitch, yaw, roll)` Euler angles in
/// radians, packed as `Vec3 { x: pitch, y: yaw, z: roll }`.
///
/// The extraction is the standard aerospace-sequence one: roll and yaw from
/// `atan2`, pitch from `asin` with its argument clamped to `[-1, 1]` so
/// floating-point error at the gimbal-lock boundary (`pitch = ±90°`) can
/// never produce NaN. At the boundary itself one degree of freedom is lost
/// and yaw/roll become coupled; the result is still finite and valid.
///
/// The input must be normalized. Non-unit quaternions produce garbage
/// angles, not an error, matching the rest of the crate's
/// garbage-in/garbage-out numeric contract.
///
/// # Example
///
/// ```
/// use glam::Quat;
/// use maquette::quaternion_to_euler;
///
/// let angles = quaternion_to_euler(Quat::IDENTITY);
/// assert_eq!(angles.x, 0.0); // pitch
/// assert_eq!(angles.y, 0.0); // yaw
/// assert_eq!(angles.z, 0.0); // roll
/// ```
pub fn quaternion_to_euler(q: Quat) -> Vec3 {
    let ysqr = q.y * q.y;

    // roll (x-axis rotation)
    let t0 = 2.0 * (q.w * q.x + q.y * q.z);
    let t1 = 1.0 - 2.0 * (q.x * q.x + ysqr);
    let roll = t0.atan2(t1);

    // pitch (y-axis rotation); the clamp is the gimbal-lock safeguard
    let t2 = (2.0 * (q.w * q.y - q.z * q.x)).clamp(-1.0, 1.0);
    let pitch = t2.asin();

    // yaw (z-axis rotation)
    let t3 = 2.0 * (q.w * q.z + q.x * q.y);
    let t4 = 1.0 - 2.0 * (ysqr + q.z * q.z);
    let yaw = t3.atan2(t4);

    Vec3::new(snap_zero(pitch), snap_zero(yaw), snap_zero(roll))
}

/// Builds a unit quaternion from `(pitch, yaw, roll)` Euler angles in
/// radians, packed the same way [`quaternion_to_euler`] reports them.
///
/// Composition order is yaw, then pitch, then roll (intrinsic Z-Y-X), which
/// is exactly the sequence the decomposition inverts: away from gimbal lock,
/// `quaternion_to_euler(euler_to_quaternion(angles)) == angles` up to float
/// tolerance.
pub fn euler_to_quaternion(angles: Vec3) -> Quat {
    Quat::from_euler(EulerRot::ZYX, angles.y, angles.x, angles.z)
}
