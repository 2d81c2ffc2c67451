//! Ray versus axis-aligned box tests.
//!
//! Two unrelated strategies answer the same question. [`face_culling`] is the
//! fast default: it only looks at the (at most three) faces the ray can enter
//! through. [`angle_projection`] slices the box with the plane spanned by the
//! ray and the box center and compares angles inside that plane. It is kept
//! as a reference to validate the first one.
//!
//! Both treat every face and edge boundary as inclusive, and both report a
//! hit for a ray aimed straight through the box center. They agree whenever
//! the ray origin lies outside the box's bounding sphere; see the function
//! docs for what each does closer in.

mod face_culling;
mod angle_projection;

pub use face_culling::intersect_face_culling;
pub use angle_projection::intersect_angle_projection;

use bitflags::bitflags;
use crate::error::KernelError;
use crate::math::{Aabb, Ray, Vector3};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A face of an axis-aligned box, in the priority order used to break ties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Face {
    /// -Z
    Front = 0,
    /// +Z
    Back = 1,
    /// -X
    Left = 2,
    /// +X
    Right = 3,
    /// +Y
    Top = 4,
    /// -Y
    Bottom = 5,
}

impl Face {
    /// All faces in priority order
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Outward unit normal
    #[inline]
    pub fn normal(self) -> Vector3 {
        match self {
            Face::Front => Vector3::new(0.0, 0.0, -1.0),
            Face::Back => Vector3::new(0.0, 0.0, 1.0),
            Face::Left => Vector3::new(-1.0, 0.0, 0.0),
            Face::Right => Vector3::new(1.0, 0.0, 0.0),
            Face::Top => Vector3::new(0.0, 1.0, 0.0),
            Face::Bottom => Vector3::new(0.0, -1.0, 0.0),
        }
    }

    /// Index of the axis the face is perpendicular to
    #[inline]
    pub fn axis(self) -> usize {
        match self {
            Face::Left | Face::Right => 0,
            Face::Top | Face::Bottom => 1,
            Face::Front | Face::Back => 2,
        }
    }

    /// Coordinate of the face plane along its axis
    #[inline]
    pub fn plane_coordinate(self, aabb: &Aabb) -> f32 {
        match self {
            Face::Front | Face::Left | Face::Bottom => aabb.min[self.axis()],
            Face::Back | Face::Right | Face::Top => aabb.max[self.axis()],
        }
    }

    #[inline]
    pub fn flag(self) -> FaceSet {
        FaceSet::from_bits_truncate(1 << self.index())
    }
}

bitflags! {
    /// Set of box faces
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FaceSet: u8 {
        const FRONT = 1 << 0;
        const BACK = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const TOP = 1 << 4;
        const BOTTOM = 1 << 5;
    }
}

impl FaceSet {
    /// Faces a ray travelling along `direction` can enter through, i.e. those
    /// whose outward normal opposes it. Never more than three.
    pub fn entered_by(direction: Vector3) -> Self {
        Face::ALL
            .iter()
            .filter(|face| face.normal().dot(&direction) < 0.0)
            .fold(FaceSet::empty(), |set, face| set | face.flag())
    }

    /// Members in priority order
    pub fn faces(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |face| self.contains(face.flag()))
    }
}

/// Outcome of a ray/box test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayAabbHit {
    pub intersects: bool,

    /// Set when the angle-projection test decided before scanning box edges
    pub exited_early: bool,

    /// Face the ray enters through, reported by face culling only
    pub face: Option<Face>,
}

impl RayAabbHit {
    #[inline]
    pub(crate) fn miss() -> Self {
        Self { intersects: false, exited_early: false, face: None }
    }

    #[inline]
    pub(crate) fn early(intersects: bool) -> Self {
        Self { intersects, exited_early: true, face: None }
    }
}

/// Selects which ray/box algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum IntersectionMethod {
    #[default]
    FaceCulling,
    AngleProjection,
}

impl IntersectionMethod {
    #[inline]
    pub fn intersect(self, ray: &Ray, aabb: &Aabb) -> crate::Result<RayAabbHit> {
        match self {
            IntersectionMethod::FaceCulling => intersect_face_culling(ray, aabb),
            IntersectionMethod::AngleProjection => intersect_angle_projection(ray, aabb),
        }
    }
}

/// A zero direction is invalid input, reported apart from a miss
#[inline]
fn check_direction(ray: &Ray) -> crate::Result<()> {
    if ray.direction.is_zero() {
        return Err(KernelError::ZeroDirection);
    }
    Ok(())
}
