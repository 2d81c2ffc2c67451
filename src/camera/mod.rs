//! Camera description and the view/projection matrix builders that consume it.

mod projection;
mod view;

pub use projection::{build_inverse_ortho_mat, build_ortho_mat, build_proj_mat, build_proj_mat_for_vk, build_projection, ClipSpace};
pub use view::build_view_mat;

use crate::error::KernelError;
use crate::math::{Transform, Vector3};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A viewpoint and its frustum.
///
/// Distances are in whatever world units the application uses.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Camera {
    /// Placement of the camera; `euler_angles` rotate it about its own axes
    pub trans: Transform,

    /// Field of view in degrees
    pub fov: f32,

    /// Distance from the camera to the near clipping plane
    pub near_plane: f32,

    /// Distance from the camera to the far clipping plane
    pub far_plane: f32,

    /// Viewport width in pixels
    pub width: u32,

    /// Viewport height in pixels
    pub height: u32,

    /// Linear velocity, owned by whatever moves the camera
    pub velocity: Vector3,

    /// Angular velocity in radians per step, owned by whatever moves the camera
    pub angular_velocity: Vector3,
}

impl Camera {
    /// Creates a camera at the identity transform
    pub fn new(fov: f32, near_plane: f32, far_plane: f32, width: u32, height: u32) -> Self {
        Self {
            trans: Transform::identity(),
            fov,
            near_plane,
            far_plane,
            width,
            height,
            velocity: Vector3::zero(),
            angular_velocity: Vector3::zero(),
        }
    }

    /// `height / width`, the ratio the projection builders scale by
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.height as f32 / self.width as f32
    }

    pub(crate) fn check_viewport(&self) -> crate::Result<()> {
        if self.width == 0 || self.height == 0 {
            log::debug!("rejecting camera with {}x{} viewport", self.width, self.height);
            return Err(KernelError::InvalidParameter(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub(crate) fn check_depth_span(&self) -> crate::Result<f32> {
        let span = self.far_plane - self.near_plane;
        if span == 0.0 || !span.is_finite() {
            log::debug!(
                "rejecting camera with depth range {}..{}",
                self.near_plane,
                self.far_plane
            );
            return Err(KernelError::DegenerateRange(format!(
                "far plane ({}) must differ from near plane ({})",
                self.far_plane, self.near_plane
            )));
        }
        Ok(span)
    }

    pub(crate) fn check_frustum(&self) -> crate::Result<()> {
        self.check_viewport()?;
        if !(self.fov > 0.0 && self.fov < 180.0) {
            log::debug!("rejecting camera with fov {}", self.fov);
            return Err(KernelError::InvalidParameter(format!(
                "fov must be in (0, 180) degrees, got {}",
                self.fov
            )));
        }
        if self.near_plane <= 0.0 {
            log::debug!("rejecting camera with near plane {}", self.near_plane);
            return Err(KernelError::InvalidParameter(format!(
                "near plane must be positive, got {}",
                self.near_plane
            )));
        }
        let span = self.check_depth_span()?;
        if span < 0.0 {
            log::debug!("rejecting camera with inverted depth range");
            return Err(KernelError::InvalidParameter(format!(
                "far plane ({}) must be beyond near plane ({})",
                self.far_plane, self.near_plane
            )));
        }
        Ok(())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(90.0, 0.1, 1000.0, 1280, 720)
    }
}
