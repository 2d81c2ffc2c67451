use crate::math::{build_rot_mat4, Matrix4, Vector3, Vector4};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Position, orientation and scale of a body in 3D space
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Position in 3D space
    pub pos: Vector3,

    /// Rotation in radians, applied in Z, Y, X order (see [`crate::math::EULER_ORDER`])
    pub euler_angles: Vector3,

    /// Scale along each local axis
    pub scale: Vector3,
}

impl Transform {
    /// Creates a new transform with the given position, rotation, and scale
    #[inline]
    pub fn new(pos: Vector3, euler_angles: Vector3, scale: Vector3) -> Self {
        Self {
            pos,
            euler_angles,
            scale,
        }
    }

    /// Creates a new identity transform (no translation, no rotation, unit scale)
    #[inline]
    pub fn identity() -> Self {
        Self {
            pos: Vector3::zero(),
            euler_angles: Vector3::zero(),
            scale: Vector3::one(),
        }
    }

    /// Creates a new transform from just a position
    #[inline]
    pub fn from_position(pos: Vector3) -> Self {
        Self {
            pos,
            ..Self::identity()
        }
    }

    /// Converts the transform to a model matrix
    #[inline]
    pub fn to_matrix(&self) -> Matrix4 {
        build_mat4_from_transform(self)
    }

    /// Transforms a point by this transform
    #[inline]
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.to_matrix().multiply_point(point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Builds the model matrix of a transform: scale, then rotate, then translate.
///
/// Each basis column of the rotation matrix is scaled by the matching scale
/// component and the fourth column is `(pos, 1)`.
pub fn build_mat4_from_transform(t: &Transform) -> Matrix4 {
    let mut result = build_rot_mat4(t.euler_angles);

    let scale = [t.scale.x, t.scale.y, t.scale.z];
    for (c, s) in scale.into_iter().enumerate() {
        let column = result.column(c) * s;
        result.set_column(c, column);
    }
    result.set_column(3, Vector4::from_vector3(t.pos, 1.0));

    result
}
