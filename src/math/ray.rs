use crate::math::{Aabb, Vector3};
use crate::intersect::{IntersectionMethod, RayAabbHit};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Infinite half-line used for intersection tests
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Origin of the ray
    pub origin: Vector3,

    /// Direction of the ray (not necessarily normalized, must be non-zero)
    pub direction: Vector3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    #[inline]
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray starting at `from` and heading through `to`, with a normalized direction
    #[inline]
    pub fn through(from: Vector3, to: Vector3) -> Self {
        Self {
            origin: from,
            direction: (to - from).normalize(),
        }
    }

    /// Returns the point at parameter `t` along the ray
    #[inline]
    pub fn point_at(&self, t: f32) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Tests this ray against a box with the chosen strategy
    #[inline]
    pub fn intersects_aabb(&self, aabb: &Aabb, method: IntersectionMethod) -> crate::Result<RayAabbHit> {
        method.intersect(self, aabb)
    }
}
