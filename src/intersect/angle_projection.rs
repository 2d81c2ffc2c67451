use std::f32::consts::FRAC_PI_2;

use crate::intersect::{check_direction, RayAabbHit};
use crate::math::{approx_zero, Aabb, Ray, Vector3};

/// Tests a ray against a box by comparing angles in the plane through the
/// ray and the box center.
///
/// With `R` pointing from the ray origin to the box center, the plane with
/// normal `N = dir x R` cuts the box in a convex polygon whose corners lie on
/// box edges. Seen from the origin that polygon spans an angular interval
/// around `R`; the ray hits the box iff its own angle to `R` falls inside it.
///
/// Two cases return before the edge scan and set `exited_early`:
/// * `N` is zero: the ray points straight at or away from the center, and it
///   hits iff it points toward it.
/// * the ray heads more than 90 degrees away from the center: a miss. This is
///   only exact when the origin is outside the box's bounding sphere; an
///   origin close to a long, thin box can be pruned even though the ray hits.
///   An origin inside the box is not special-cased either.
///
/// The final comparison is inclusive on both ends with no extra slack.
///
/// `face` is never reported.
pub fn intersect_angle_projection(ray: &Ray, aabb: &Aabb) -> crate::Result<RayAabbHit> {
    check_direction(ray)?;

    let origin = ray.origin;
    let dir = ray.direction;
    let to_center = aabb.origin - origin;

    let normal = dir.cross(&to_center);
    if normal.is_zero() {
        let toward = to_center.dot(&dir) >= 0.0;
        log::trace!("ray parallel to center direction, toward = {toward}");
        return Ok(RayAabbHit::early(toward));
    }
    let normal = normal.normalize();

    let heading = dir.signed_angle(&to_center, &normal);
    if heading.abs() > FRAC_PI_2 {
        log::trace!("box center {heading} rad off the ray heading");
        return Ok(RayAabbHit::early(false));
    }

    let mut min_angle = FRAC_PI_2;
    let mut max_angle = -FRAC_PI_2;
    for_each_edge_crossing(aabb, origin, normal, |point| {
        let angle = (point - origin).signed_angle(&to_center, &normal);
        min_angle = min_angle.min(angle);
        max_angle = max_angle.max(angle);
    });

    let intersects = heading >= min_angle && heading <= max_angle;
    Ok(RayAabbHit { intersects, exited_early: false, face: None })
}

/// Calls `visit` with every point where the plane through `point_on_plane`
/// with normal `normal` meets one of the twelve box edges.
///
/// Extents are inclusive. An edge lying in the plane contributes both of its
/// endpoints. Corners the plane passes through are visited once per edge
/// meeting there, so the same point can arrive up to three times.
fn for_each_edge_crossing<F>(aabb: &Aabb, point_on_plane: Vector3, normal: Vector3, mut visit: F)
where
    F: FnMut(Vector3),
{
    const OTHER_AXES: [(usize, usize); 3] = [(1, 2), (0, 2), (0, 1)];

    for (axis, &(b, c)) in OTHER_AXES.iter().enumerate() {
        for vb in [aabb.min[b], aabb.max[b]] {
            for vc in [aabb.min[c], aabb.max[c]] {
                // plane equation with the two fixed coordinates substituted
                let residual = normal[b] * (vb - point_on_plane[b])
                    + normal[c] * (vc - point_on_plane[c]);

                let mut point = Vector3::ZERO;
                point[b] = vb;
                point[c] = vc;

                if normal[axis] == 0.0 {
                    if approx_zero(residual) {
                        point[axis] = aabb.min[axis];
                        visit(point);
                        point[axis] = aabb.max[axis];
                        visit(point);
                    }
                    continue;
                }

                let free = point_on_plane[axis] - residual / normal[axis];
                if free >= aabb.min[axis] && free <= aabb.max[axis] {
                    point[axis] = free;
                    visit(point);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> Aabb {
        Aabb::make(Vector3::zero(), Vector3::one())
    }

    #[test]
    fn axis_plane_cuts_four_vertical_edges() {
        let mut points = Vec::new();
        for_each_edge_crossing(
            &unit_cube(),
            Vector3::new(0.0, 0.0, -2.0),
            Vector3::new(0.0, -1.0, 0.0),
            |p| points.push(p),
        );
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|p| p.y == 0.0 && p.x.abs() == 1.0 && p.z.abs() == 1.0));
    }

    #[test]
    fn plane_through_a_face_emits_edge_endpoints() {
        // z = 1 contains the four edges of the back face
        let mut points = Vec::new();
        for_each_edge_crossing(&unit_cube(), Vector3::new(5.0, 5.0, 1.0), Vector3::unit_z(), |p| {
            points.push(p)
        });
        assert_eq!(points.len(), 12);
        assert!(points.iter().all(|p| p.z == 1.0));
    }

    #[test]
    fn plane_missing_the_box_yields_nothing() {
        let mut count = 0;
        for_each_edge_crossing(&unit_cube(), Vector3::new(0.0, 3.0, 0.0), Vector3::unit_y(), |_| {
            count += 1
        });
        assert_eq!(count, 0);
    }

    #[test]
    fn pointing_away_from_center_exits_early() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, -2.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = intersect_angle_projection(&ray, &unit_cube()).unwrap();
        assert!(!hit.intersects);
        assert!(hit.exited_early);
    }

    #[test]
    fn wide_heading_is_pruned() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, -3.0), Vector3::new(1.0, 0.0, -0.2));
        let hit = intersect_angle_projection(&ray, &unit_cube()).unwrap();
        assert!(!hit.intersects);
        assert!(hit.exited_early);
    }

    #[test]
    fn face_is_never_reported() {
        let ray = Ray::new(Vector3::new(0.3, 0.1, -4.0), Vector3::unit_z());
        let hit = intersect_angle_projection(&ray, &unit_cube()).unwrap();
        assert!(hit.intersects);
        assert!(!hit.exited_early);
        assert_eq!(hit.face, None);
    }
}
