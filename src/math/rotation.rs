use crate::math::{Matrix4, Vector3};

/// Axis of an elementary rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EulerAxis {
    X,
    Y,
    Z,
}

/// Order in which [`build_rot_mat4`] composes the elementary rotations.
///
/// The matrices are right-multiplied onto the identity in this order, so the
/// result is `Rz * Ry * Rx`. Animation and camera code depend on it; do not
/// change it.
pub const EULER_ORDER: [EulerAxis; 3] = [EulerAxis::Z, EulerAxis::Y, EulerAxis::X];

/// Right-handed rotation of `angle` radians about +X
#[inline]
pub fn rot_x(angle: f32) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    Matrix4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, s, 0.0],
        [0.0, -s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Right-handed rotation of `angle` radians about +Y
#[inline]
pub fn rot_y(angle: f32) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    Matrix4::new([
        [c, 0.0, -s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Right-handed rotation of `angle` radians about +Z
#[inline]
pub fn rot_z(angle: f32) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    Matrix4::new([
        [c, s, 0.0, 0.0],
        [-s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Builds a rotation matrix from euler angles in radians, composed in [`EULER_ORDER`].
pub fn build_rot_mat4(euler_angles: Vector3) -> Matrix4 {
    EULER_ORDER
        .iter()
        .fold(Matrix4::identity(), |acc, axis| {
            let elementary = match axis {
                EulerAxis::X => rot_x(euler_angles.x),
                EulerAxis::Y => rot_y(euler_angles.y),
                EulerAxis::Z => rot_z(euler_angles.z),
            };
            acc * elementary
        })
}

/// Euler angles that turn a body at `origin` so its forward axis (-Z) faces `target`.
///
/// Roll (the Z angle) is always zero. Returns zero angles when the two points
/// coincide.
pub fn look_at(origin: Vector3, target: Vector3) -> Vector3 {
    let dir = (target - origin).normalize();
    if dir.is_zero() {
        return Vector3::ZERO;
    }

    let pitch = dir.y.clamp(-1.0, 1.0).asin();
    let yaw = (-dir.x).atan2(-dir.z);
    Vector3::new(pitch, yaw, 0.0)
}
