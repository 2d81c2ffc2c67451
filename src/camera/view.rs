use crate::camera::Camera;
use crate::error::KernelError;
use crate::math::{build_rot_mat4, Matrix4};

/// World-to-camera matrix.
///
/// The rotation part is the transpose of the camera's rotation matrix, which
/// is its inverse because rotation matrices are orthonormal. The first two
/// basis columns are divided by the camera's x/y scale, and the result is
/// applied after translating by `-pos`.
pub fn build_view_mat(cam: &Camera) -> crate::Result<Matrix4> {
    let trans = &cam.trans;
    if trans.scale.x == 0.0 || trans.scale.y == 0.0 {
        log::debug!("rejecting camera with scale {}", trans.scale);
        return Err(KernelError::InvalidParameter(format!(
            "camera x/y scale must be non-zero, got {}",
            trans.scale
        )));
    }

    let mut rotation = build_rot_mat4(trans.euler_angles).transpose();
    let col0 = rotation.column(0) * (1.0 / trans.scale.x);
    let col1 = rotation.column(1) * (1.0 / trans.scale.y);
    rotation.set_column(0, col0);
    rotation.set_column(1, col1);

    Ok(rotation * Matrix4::from_translation(-trans.pos))
}
