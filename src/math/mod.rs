mod vector;
mod matrix;
mod transform;
mod rotation;
mod aabb;
mod ray;
mod rect;

pub use vector::{Vector2, Vector3, Vector4};
pub use matrix::{transpose, Matrix3, Matrix4};
pub use transform::{build_mat4_from_transform, Transform};
pub use rotation::{build_rot_mat4, look_at, rot_x, rot_y, rot_z, EulerAxis, EULER_ORDER};
pub use aabb::Aabb;
pub use ray::Ray;
pub use rect::Rect;

use std::f32::consts::PI;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// Multiply degrees by this to get radians
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// Returns true if the two floating point values are approximately equal
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Linearly interpolates between two values as `a(1 - t) + bt`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Converts degrees to radians
#[inline]
pub fn deg2rad(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts radians to degrees
#[inline]
pub fn rad2deg(radians: f32) -> f32 {
    radians / DEG_TO_RAD
}

/// Returns -1, 0 or 1 depending on the sign of `x`.
#[inline]
pub fn sign(x: i32) -> i32 {
    (x > 0) as i32 - (x < 0) as i32
}

/// Truncates toward zero through an integer cast.
///
/// This is *not* `f32::floor` for negative non-integers: `floor(-1.5)` is
/// `-1.0`. Values outside the `i32` range saturate.
#[inline]
pub fn floor(a: f32) -> f32 {
    a as i32 as f32
}

/// Returns `a * a`
#[inline]
pub fn square<T>(a: T) -> T
where
    T: std::ops::Mul<Output = T> + Copy,
{
    a * a
}

/// Returns the smaller of two values, preferring `b` when they compare equal
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

/// Returns the larger of two values, preferring `b` when they compare equal
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

/// Computes `a / b` rounded up. `b` must be non-zero.
#[inline]
pub fn div_ceil(a: u32, b: u32) -> u32 {
    a.div_ceil(b)
}

/// Rounds `a` up to the next multiple of `b`; `a` is returned unchanged if it already is one.
#[inline]
pub fn align_up(a: u32, b: u32) -> u32 {
    div_ceil(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_truncates_toward_zero() {
        assert_eq!(floor(1.7), 1.0);
        assert_eq!(floor(-1.5), -1.0);
        assert_eq!(floor(-0.2), 0.0);
    }

    #[test]
    fn sign_of_integers() {
        assert_eq!(sign(42), 1);
        assert_eq!(sign(0), 0);
        assert_eq!(sign(-7), -1);
    }

    #[test]
    fn integer_alignment() {
        assert_eq!(div_ceil(10, 4), 3);
        assert_eq!(div_ceil(8, 4), 2);
        assert_eq!(align_up(10, 4), 12);
        assert_eq!(align_up(256, 256), 256);
        assert_eq!(align_up(0, 16), 0);
    }

    #[test]
    fn generic_helpers() {
        assert_eq!(square(-3), 9);
        assert_eq!(square(1.5f32), 2.25);
        assert_eq!(min(2, 7), 2);
        assert_eq!(max(2.0, -1.0), 2.0);
        assert!(approx_eq(deg2rad(180.0), PI));
        assert!(approx_eq(rad2deg(PI), 180.0));
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }
}
