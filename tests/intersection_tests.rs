use geom_kernel::error::KernelError;
use geom_kernel::intersect::{intersect_angle_projection, intersect_face_culling, Face};
use geom_kernel::math::{Aabb, Ray, Vector3};
use geom_kernel::{IntersectionMethod, KernelConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TRIALS: usize = 2000;

fn unit_cube() -> Aabb {
    Aabb::make(Vector3::zero(), Vector3::one())
}

/// Uniformly distributed unit vector via rejection sampling
fn random_direction(rng: &mut StdRng) -> Vector3 {
    loop {
        let v = Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let len = v.magnitude();
        if len > 0.1 && len <= 1.0 {
            return v / len;
        }
    }
}

/// A point between `min_r` and `max_r` away from the origin
fn random_shell_point(rng: &mut StdRng, min_r: f32, max_r: f32) -> Vector3 {
    random_direction(rng) * rng.gen_range(min_r..max_r)
}

/// Both strategies, asserting they agree
fn both(ray: &Ray, aabb: &Aabb) -> bool {
    let a = intersect_face_culling(ray, aabb).unwrap();
    let b = intersect_angle_projection(ray, aabb).unwrap();
    assert_eq!(
        a.intersects, b.intersects,
        "methods disagree for origin {} direction {}",
        ray.origin, ray.direction
    );
    a.intersects
}

#[test]
fn test_ray_through_center() {
    let ray = Ray::through(Vector3::new(0.0, 0.0, -2.0), Vector3::zero());
    assert!(both(&ray, &unit_cube()));

    // Aimed exactly at the center, the angle method decides early
    let hit = intersect_angle_projection(&ray, &unit_cube()).unwrap();
    assert!(hit.exited_early);

    let hit = intersect_face_culling(&ray, &unit_cube()).unwrap();
    assert_eq!(hit.face, Some(Face::Front));
}

#[test]
fn test_ray_clips_edge() {
    // 45 degrees, grazing the edge at x = 1, z = -1
    let ray = Ray::through(Vector3::new(0.0, 0.0, -2.0), Vector3::new(1.0, 0.0, -1.0));
    assert!(both(&ray, &unit_cube()));

    // Steeper angle onto the same edge
    let ray = Ray::through(Vector3::new(-0.5, 0.0, -2.0), Vector3::new(1.0, 0.0, -1.0));
    assert!(both(&ray, &unit_cube()));
}

#[test]
fn test_ray_through_box_generically() {
    let ray = Ray::through(Vector3::new(0.0, 0.0, -2.0), Vector3::new(0.5, 0.0, 0.5));
    assert!(both(&ray, &unit_cube()));
}

#[test]
fn test_ray_passing_beside_box() {
    let ray = Ray::through(Vector3::new(0.0, 0.0, -2.0), Vector3::new(-1.2, 0.0, -1.2));
    assert!(!both(&ray, &unit_cube()));
}

#[test]
fn test_ray_along_face_plane() {
    // Travels inside the plane y = 1 of the top face
    let ray = Ray::new(Vector3::new(0.0, 1.0, -2.0), Vector3::unit_z());
    assert!(both(&ray, &unit_cube()));

    // The top face is parallel and skipped; the front face catches the ray
    let hit = intersect_face_culling(&ray, &unit_cube()).unwrap();
    assert_eq!(hit.face, Some(Face::Front));
}

#[test]
fn test_ray_pointing_away_along_center_line() {
    let origin = Vector3::new(0.0, 0.0, -2.0);
    let ray = Ray::new(origin, origin.normalize());

    let face = intersect_face_culling(&ray, &unit_cube()).unwrap();
    assert!(!face.intersects);

    let angle = intersect_angle_projection(&ray, &unit_cube()).unwrap();
    assert!(!angle.intersects);
    assert!(angle.exited_early);
}

#[test]
fn test_random_rays_into_box_hit() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let cube = unit_cube();

    for _ in 0..TRIALS {
        let origin = random_shell_point(&mut rng, 2.0, 10.0);
        let target = Vector3::new(
            rng.gen_range(-0.9..0.9),
            rng.gen_range(-0.9..0.9),
            rng.gen_range(-0.9..0.9),
        );
        let ray = Ray::through(origin, target);
        assert!(both(&ray, &cube), "missed target {} from {}", target, origin);
    }
}

#[test]
fn test_random_rays_away_from_box_miss() {
    let mut rng = StdRng::seed_from_u64(0xa11a);
    let cube = unit_cube();

    for _ in 0..TRIALS {
        let origin = random_shell_point(&mut rng, 2.0, 10.0);
        // Any heading with a positive component along the outward radius
        // only moves further from the box.
        let mut dir = random_direction(&mut rng);
        if dir.dot(&origin) <= 0.05 * origin.magnitude() {
            dir = dir + origin.normalize();
        }
        if dir.dot(&origin) <= 0.0 {
            continue;
        }
        let ray = Ray::new(origin, dir);
        assert!(!both(&ray, &cube), "hit from {} heading {}", origin, dir);
    }
}

#[test]
fn test_methods_agree_on_random_rays() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..TRIALS {
        let half_dim = Vector3::new(
            rng.gen_range(0.2..2.0),
            rng.gen_range(0.2..2.0),
            rng.gen_range(0.2..2.0),
        );
        let center = random_shell_point(&mut rng, 0.0, 3.0);
        let aabb = Aabb::make(center, half_dim);

        // Keep the origin outside the bounding sphere
        let distance = half_dim.magnitude() + rng.gen_range(0.5..8.0);
        let origin = center + random_direction(&mut rng) * distance;
        let ray = Ray::new(origin, random_direction(&mut rng));

        both(&ray, &aabb);
    }
}

#[test]
fn test_non_unit_direction() {
    let cube = unit_cube();
    let ray = Ray::new(Vector3::new(0.2, -0.3, -6.0), Vector3::new(0.0, 0.0, 40.0));
    assert!(both(&ray, &cube));

    let ray = Ray::new(Vector3::new(3.0, 0.0, -6.0), Vector3::new(0.0, 0.0, 0.001));
    assert!(!both(&ray, &cube));
}

#[test]
fn test_zero_direction_is_invalid() {
    let ray = Ray::new(Vector3::new(0.0, 0.0, -2.0), Vector3::zero());

    assert_eq!(intersect_face_culling(&ray, &unit_cube()), Err(KernelError::ZeroDirection));
    assert_eq!(intersect_angle_projection(&ray, &unit_cube()), Err(KernelError::ZeroDirection));
}

#[test]
fn test_strategy_selection() {
    let cube = Aabb::from_cube(Vector3::new(4.0, 0.0, 0.0), 2.0);
    let ray = Ray::through(Vector3::zero(), Vector3::new(5.0, 1.0, 1.0));

    for method in [IntersectionMethod::FaceCulling, IntersectionMethod::AngleProjection] {
        assert!(ray.intersects_aabb(&cube, method).unwrap().intersects);
    }

    let config = KernelConfig::default();
    let hit = config.ray_intersects(&ray, &cube).unwrap();
    assert_eq!(hit.face, Some(Face::Left));
}

#[test]
fn test_swept_line_box() {
    let sweep = Aabb::from_line(Vector3::new(-1.0, 2.0, 0.0), Vector3::new(1.0, 4.0, 0.5));
    let ray = Ray::through(Vector3::new(0.0, 3.0, -5.0), sweep.origin);
    assert!(both(&ray, &sweep));

    let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::unit_z());
    assert!(!both(&ray, &sweep));
}

#[test]
fn test_grazing_miss_past_corner() {
    // Passes within a fraction of a microradian of the box silhouette
    let ray = Ray::through(
        Vector3::new(6.972064, 36.25808, 9.313875),
        Vector3::new(13.6983185, 11.442873, 12.33313),
    );
    let aabb = Aabb::from_line(
        Vector3::new(13.735892, 11.304321, 8.657366),
        Vector3::new(19.702946, 17.085762, 13.444748),
    );
    assert!(!both(&ray, &aabb));
}

#[test]
fn test_methods_agree_near_box_surface() {
    let mut rng = StdRng::seed_from_u64(0x5afe);

    for _ in 0..TRIALS {
        let half_dim = Vector3::new(
            rng.gen_range(0.2..4.0),
            rng.gen_range(0.2..4.0),
            rng.gen_range(0.2..4.0),
        );
        let center = random_shell_point(&mut rng, 0.0, 20.0);
        let aabb = Aabb::make(center, half_dim);

        // Aim at points straddling the surface, just inside or just outside
        let offset = Vector3::new(
            rng.gen_range(-1.05..1.05),
            rng.gen_range(-1.05..1.05),
            rng.gen_range(-1.05..1.05),
        );
        let target = center + half_dim.component_mul(&offset);

        let distance = half_dim.magnitude() + rng.gen_range(0.5..30.0);
        let origin = center + random_direction(&mut rng) * distance;

        both(&Ray::through(origin, target), &aabb);
    }
}

#[test]
fn test_origin_inside_box_is_a_miss() {
    let ray = Ray::new(Vector3::new(0.5, 0.2, 0.1), Vector3::new(1.0, 0.3, 0.0));
    assert!(!both(&ray, &unit_cube()));

    let angle = intersect_angle_projection(&ray, &unit_cube()).unwrap();
    assert!(angle.exited_early);
}
