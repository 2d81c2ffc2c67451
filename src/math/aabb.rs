use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-aligned bounding box, described both by center/half extent and by corners.
///
/// `min == origin - half_dim` and `max == origin + half_dim` hold for boxes
/// built with [`Aabb::make`], [`Aabb::from_cube`] or [`Aabb::from_line`].
/// Writing the public fields directly can break that; the intersection tests
/// read `min`/`max` for extents and `origin` for the center.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Center of the box
    pub origin: Vector3,

    /// Half of the box dimensions, all components >= 0
    pub half_dim: Vector3,

    /// Minimum corner of the box
    pub min: Vector3,

    /// Maximum corner of the box
    pub max: Vector3,
}

impl Aabb {
    /// Creates a box centered at `origin` extending `half_dim` along each axis
    #[inline]
    pub fn make(origin: Vector3, half_dim: Vector3) -> Self {
        Self {
            origin,
            half_dim,
            min: origin - half_dim,
            max: origin + half_dim,
        }
    }

    /// Creates a cube with edge length `width` whose minimum corner is `bottom_left`
    #[inline]
    pub fn from_cube(bottom_left: Vector3, width: f32) -> Self {
        let half = Vector3::splat(width * 0.5);
        Self::make(bottom_left + half, half)
    }

    /// Creates the tightest box around the segment `p0`..`p1`
    pub fn from_line(p0: Vector3, p1: Vector3) -> Self {
        let lo = Vector3::new(p0.x.min(p1.x), p0.y.min(p1.y), p0.z.min(p1.z));
        let hi = Vector3::new(p0.x.max(p1.x), p0.y.max(p1.y), p0.z.max(p1.z));
        let half_dim = (hi - lo) * 0.5;
        Self {
            origin: lo + half_dim,
            half_dim,
            min: lo,
            max: hi,
        }
    }

    /// Checks if this box contains a point, boundary included
    #[inline]
    pub fn contains_point(&self, point: Vector3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// The eight corners, indexed by bits `x | y << 1 | z << 2` (bit set = max side)
    pub fn corners(&self) -> [Vector3; 8] {
        std::array::from_fn(|i| {
            Vector3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }

    /// Length of the half diagonal
    #[inline]
    pub fn bounding_radius(&self) -> f32 {
        self.half_dim.magnitude()
    }
}
