use crate::intersect::{check_direction, FaceSet, RayAabbHit};
use crate::math::{Aabb, Ray};

/// Tests a ray against a box by checking only the faces it can enter through.
///
/// Candidate faces are visited in [`crate::intersect::Face::ALL`] order and
/// the first one whose plane is crossed at `t >= 0` inside the face bounds
/// wins, so a ray through an edge or corner always reports the same face.
///
/// Candidates come from [`FaceSet::entered_by`], which never includes a face
/// parallel to the ray, so the plane parameter `t` is always finite. A ray lying
/// exactly in a face plane can only be caught by one of the other faces.
///
/// An origin inside the box, or on its boundary heading outward, only sees
/// entry planes behind it and reports a miss.
pub fn intersect_face_culling(ray: &Ray, aabb: &Aabb) -> crate::Result<RayAabbHit> {
    check_direction(ray)?;

    for face in FaceSet::entered_by(ray.direction).faces() {
        let axis = face.axis();
        let t = (face.plane_coordinate(aabb) - ray.origin[axis]) / ray.direction[axis];
        if t < 0.0 {
            continue;
        }

        let hit = ray.point_at(t);
        let in_bounds = (0..3)
            .filter(|&other| other != axis)
            .all(|other| hit[other] >= aabb.min[other] && hit[other] <= aabb.max[other]);

        if in_bounds {
            return Ok(RayAabbHit { intersects: true, exited_early: false, face: Some(face) });
        }
    }

    Ok(RayAabbHit::miss())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intersect::Face;
    use crate::math::Vector3;

    fn unit_cube() -> Aabb {
        Aabb::make(Vector3::zero(), Vector3::one())
    }

    #[test]
    fn corner_hit_prefers_front() {
        let ray = Ray::new(Vector3::splat(-2.0), Vector3::one());
        let hit = intersect_face_culling(&ray, &unit_cube()).unwrap();
        assert!(hit.intersects);
        assert_eq!(hit.face, Some(Face::Front));
    }

    #[test]
    fn side_entry_reports_right_face() {
        let ray = Ray::new(Vector3::new(5.0, 0.2, 0.3), Vector3::new(-1.0, 0.0, 0.0));
        let hit = intersect_face_culling(&ray, &unit_cube()).unwrap();
        assert_eq!(hit.face, Some(Face::Right));
        assert_eq!(hit.face.map(Face::index), Some(3));
    }

    #[test]
    fn origin_inside_sees_only_planes_behind_it() {
        let ray = Ray::new(Vector3::new(0.5, 0.2, 0.1), Vector3::new(1.0, 0.3, 0.0));
        let hit = intersect_face_culling(&ray, &unit_cube()).unwrap();
        assert!(!hit.intersects);
        assert_eq!(hit.face, None);
    }

    #[test]
    fn boundary_origin_depends_on_heading() {
        let on_left = Vector3::new(-1.0, 0.2, 0.3);

        let inward = Ray::new(on_left, Vector3::unit_x());
        let hit = intersect_face_culling(&inward, &unit_cube()).unwrap();
        assert_eq!(hit.face, Some(Face::Left));

        let outward = Ray::new(on_left, -Vector3::unit_x());
        assert!(!intersect_face_culling(&outward, &unit_cube()).unwrap().intersects);
    }

    #[test]
    fn box_behind_origin_is_missed() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, 3.0), Vector3::unit_z());
        let hit = intersect_face_culling(&ray, &unit_cube()).unwrap();
        assert!(!hit.intersects);
        assert!(!hit.exited_early);
    }
}
