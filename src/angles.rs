//! Angle utilities shared by the camera and the transform inspector.
//!
//! Two small functions with sharp contracts:
//!
//! - [`angle_from_xy`] — polar angle of a 2D direction, always in `[0, 2π)`
//! - [`wrap_angle_360`] — degree wrapping into `[0, 360)` for rotation fields

use std::f32::consts::PI;

/// Returns the polar angle of the 2D direction `(x, y)` in `[0, 2π)`.
///
/// The quadrant is selected from the sign of `x`: for `x ≥ 0` the result is
/// `atan(y/x)` shifted into `[0, 2π)`, for `x < 0` it is `atan(y/x) + π`.
/// Division by zero at `x = 0` resolves through `atan(±∞) = ±π/2`, so the
/// axis directions come out exact.
///
/// The result at `(0, 0)` is unspecified (the division yields NaN). Callers
/// must not pass a zero direction.
///
/// # Example
///
/// ```
/// use maquette::angle_from_xy;
///
/// let theta = angle_from_xy(0.0, 1.0);
/// assert!((theta - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
pub fn angle_from_xy(x: f32, y: f32) -> f32 {
    if x >= 0.0 {
        // Quadrant I or IV: atan is in [-pi/2, pi/2], shift negatives up.
        let theta = (y / x).atan();
        if theta < 0.0 { theta + 2.0 * PI } else { theta }
    } else {
        // Quadrant II or III.
        (y / x).atan() + PI
    }
}

/// Wraps a degree-valued angle into `[0, 360)`.
///
/// Uses the floating-point remainder against 360, adding 360 when the
/// remainder comes out negative. Wrapping an already-wrapped angle is a
/// no-op, so rotation fields can be wrapped on every edit without drift.
///
/// # Example
///
/// ```
/// use maquette::wrap_angle_360;
///
/// assert_eq!(wrap_angle_360(370.0), 10.0);
/// assert_eq!(wrap_angle_360(-30.0), 330.0);
/// assert_eq!(wrap_angle_360(wrap_angle_360(725.0)), wrap_angle_360(725.0));
/// ```
pub fn wrap_angle_360(angle: f32) -> f32 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}
