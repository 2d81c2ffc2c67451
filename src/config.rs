use crate::camera::{build_projection, Camera, ClipSpace};
use crate::intersect::{IntersectionMethod, RayAabbHit};
use crate::math::{Aabb, Matrix4, Ray};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Backend-dependent choices a renderer or picking system makes once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct KernelConfig {
    /// Depth convention of the graphics backend's clip space
    pub clip_space: ClipSpace,

    /// Ray/box algorithm used for picking
    pub intersection: IntersectionMethod,
}

impl KernelConfig {
    /// Configuration for a Vulkan or D3D renderer
    pub fn vulkan() -> Self {
        Self {
            clip_space: ClipSpace::Vulkan,
            ..Self::default()
        }
    }

    /// Perspective projection in the configured clip space
    #[inline]
    pub fn projection(&self, cam: &Camera) -> crate::Result<Matrix4> {
        build_projection(cam, self.clip_space)
    }

    /// Ray/box test with the configured algorithm
    #[inline]
    pub fn ray_intersects(&self, ray: &Ray, aabb: &Aabb) -> crate::Result<RayAabbHit> {
        self.intersection.intersect(ray, aabb)
    }
}
