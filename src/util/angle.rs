//! Wrap-safe angle interpolation.
//!
//! Euler angles from the host live in degrees and wrap at 360°. Naive
//! lerping across the wrap point produces the classic 359°→1° snap where
//! the value travels 358° the long way around. Everything here routes
//! through [`lerp_angle`], which always takes the ≤180° arc.

use glam::Vec3;

/// Plain scalar linear interpolation.
#[inline]
#[must_use]
pub fn lerp(start: f32, end: f32, amount: f32) -> f32 {
    start + (end - start) * amount
}

/// Interpolate between two angles in degrees along the shortest arc.
///
/// The delta is normalized into `[-180, 180)` before scaling, so the
/// result always moves along the ≤180° path from `current` toward
/// `target`, regardless of operand signs or wrap-around:
///
/// ```
/// use camrig::util::angle::lerp_angle;
/// // Wraps through 0°, not backward through 180°.
/// assert!((lerp_angle(359.0, 1.0, 0.5) - 360.0).abs() < 1e-4);
/// ```
#[inline]
#[must_use]
pub fn lerp_angle(current: f32, target: f32, factor: f32) -> f32 {
    let delta = (target - current + 540.0).rem_euclid(360.0) - 180.0;
    current + delta * factor
}

/// Component-wise [`lerp_angle`] over a Euler rotation vector.
///
/// This is an accepted approximation: each axis eases independently, so
/// the result is not a guaranteed shortest-path rotation in 3D (no
/// quaternion coupling). For the small per-frame deltas the follower
/// sees, the difference is not visible.
#[inline]
#[must_use]
pub fn lerp_rotation(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    Vec3::new(
        lerp_angle(current.x, target.x, factor),
        lerp_angle(current.y, target.y, factor),
        lerp_angle(current.z, target.z, factor),
    )
}

/// Forward unit vector for a host Euler rotation in degrees.
///
/// Uses yaw (`rotation.z`) and pitch (`rotation.x`) only — roll does not
/// affect the forward direction in the host's convention.
#[must_use]
pub fn forward_from_rotation(rotation: Vec3) -> Vec3 {
    let pitch = rotation.x.to_radians();
    let yaw = rotation.z.to_radians();
    Vec3::new(
        -yaw.sin() * pitch.cos(),
        yaw.cos() * pitch.cos(),
        pitch.sin(),
    )
}
