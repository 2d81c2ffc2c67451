use crate::camera::Camera;
use crate::math::{deg2rad, Matrix4, Vector3};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Depth convention of the target graphics backend's clip space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ClipSpace {
    /// Near plane at NDC z = -1, far plane at +1
    #[default]
    OpenGl,
    /// Near plane at NDC z = 0, far plane at 1. Also what D3D expects.
    Vulkan,
}

impl ClipSpace {
    /// Third-column z and fourth-column z of the projection matrix
    #[inline]
    fn depth_terms(self, n: f32, f: f32) -> (f32, f32) {
        let span = f - n;
        match self {
            ClipSpace::OpenGl => (-(f + n) / span, -2.0 * f * n / span),
            ClipSpace::Vulkan => (-f / span, -f * n / span),
        }
    }
}

/// Symmetric perspective projection for the given clip space convention.
///
/// The camera looks down -Z. With `n` the near plane, the frustum's half
/// extent at the near plane is `r = tan(fov / 2) * n` across and
/// `t = r * height / width` up. Both conventions share this derivation so the
/// field of view matches between backends; only the depth mapping differs.
///
/// The diagonal is `n / r` and `n / t` rather than `1 / r` and `1 / t`, so
/// the near-plane frustum edges land on NDC x and y of +-1 for any near plane.
pub fn build_projection(cam: &Camera, clip: ClipSpace) -> crate::Result<Matrix4> {
    cam.check_frustum()?;

    let n = cam.near_plane;
    let f = cam.far_plane;
    let r = (deg2rad(cam.fov) * 0.5).tan() * n;
    let t = r * cam.aspect_ratio();
    let (z_scale, z_offset) = clip.depth_terms(n, f);

    Ok(Matrix4::new([
        [n / r, 0.0, 0.0, 0.0],
        [0.0, n / t, 0.0, 0.0],
        [0.0, 0.0, z_scale, -1.0],
        [0.0, 0.0, z_offset, 0.0],
    ]))
}

/// Perspective projection mapping the near plane to NDC z = -1 (OpenGL)
#[inline]
pub fn build_proj_mat(cam: &Camera) -> crate::Result<Matrix4> {
    build_projection(cam, ClipSpace::OpenGl)
}

/// Perspective projection mapping the near plane to NDC z = 0 (Vulkan, D3D)
#[inline]
pub fn build_proj_mat_for_vk(cam: &Camera) -> crate::Result<Matrix4> {
    build_projection(cam, ClipSpace::Vulkan)
}

/// Orthographic projection of the view-space box `[0, width] x [0, height] x [-near, -far]`
/// onto the `[-1, 1]` cube.
///
/// Translates the box center to the origin, then scales each axis to unit
/// half extent, flipping z so the near plane lands on -1.
pub fn build_ortho_mat(cam: &Camera) -> crate::Result<Matrix4> {
    cam.check_viewport()?;
    let span = cam.check_depth_span()?;

    let (w, h) = (cam.width as f32, cam.height as f32);
    let to_center = Matrix4::from_translation(Vector3::new(
        -w * 0.5,
        -h * 0.5,
        (cam.near_plane + cam.far_plane) * 0.5,
    ));
    let scale_flip = Matrix4::from_scale(Vector3::new(2.0 / w, 2.0 / h, -2.0 / span));

    Ok(scale_flip * to_center)
}

/// Inverse of [`build_ortho_mat`]: undoes the scale first, then the translation
pub fn build_inverse_ortho_mat(cam: &Camera) -> crate::Result<Matrix4> {
    cam.check_viewport()?;
    let span = cam.check_depth_span()?;

    let (w, h) = (cam.width as f32, cam.height as f32);
    let unscale = Matrix4::from_scale(Vector3::new(w * 0.5, h * 0.5, -span * 0.5));
    let from_center = Matrix4::from_translation(Vector3::new(
        w * 0.5,
        h * 0.5,
        -(cam.near_plane + cam.far_plane) * 0.5,
    ));

    Ok(from_center * unscale)
}
