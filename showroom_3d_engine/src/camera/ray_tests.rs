use glam::{Mat4, Quat, Vec3};
use crate::scene::{MeshGeometry, AABB};
use super::*;

fn unit_box() -> AABB {
    AABB::new(Vec3::splat(-0.5), Vec3::splat(0.5))
}

fn ray(origin: Vec3, direction: Vec3) -> Ray {
    Ray::new(origin, direction).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_normalizes_direction() {
    let r = ray(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0));
    assert_eq!(r.direction, Vec3::NEG_Z);
    assert_eq!(r.at(2.0), Vec3::new(0.0, 0.0, -2.0));
}

#[test]
fn test_new_rejects_zero_or_nan() {
    assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
    assert!(Ray::new(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 1.0)).is_none());
    assert!(Ray::new(Vec3::splat(f32::INFINITY), Vec3::X).is_none());
}

// ============================================================================
// intersect_aabb
// ============================================================================

#[test]
fn test_hit_from_front() {
    let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    let t = r.intersect_aabb(&unit_box()).unwrap();
    assert!((t - 4.5).abs() < 1e-6);
}

#[test]
fn test_miss_to_the_side() {
    let r = ray(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z);
    assert!(r.intersect_aabb(&unit_box()).is_none());
}

#[test]
fn test_box_behind_origin_is_missed() {
    let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
    assert!(r.intersect_aabb(&unit_box()).is_none());
}

#[test]
fn test_origin_inside_returns_exit_distance() {
    let r = ray(Vec3::ZERO, Vec3::X);
    let t = r.intersect_aabb(&unit_box()).unwrap();
    assert!((t - 0.5).abs() < 1e-6);
}

#[test]
fn test_axis_parallel_ray_on_face_plane() {
    // Origin lies exactly on the min-x plane, direction has no x component
    let r = ray(Vec3::new(-0.5, 0.0, 5.0), Vec3::NEG_Z);
    assert!(r.intersect_aabb(&unit_box()).is_some());
}

#[test]
fn test_degenerate_box_can_be_hit() {
    let flat = AABB::new(Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
    let r = ray(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z);
    let t = r.intersect_aabb(&flat).unwrap();
    assert!((t - 3.0).abs() < 1e-6);
}

// ============================================================================
// intersect_oriented
// ============================================================================

#[test]
fn test_oriented_translation() {
    let world = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
    let r = ray(Vec3::new(10.0, 0.0, 5.0), Vec3::NEG_Z);
    let t = r.intersect_oriented(&unit_box(), &world).unwrap();
    assert!((t - 4.5).abs() < 1e-5);

    let miss = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    assert!(miss.intersect_oriented(&unit_box(), &world).is_none());
}

#[test]
fn test_oriented_scale_returns_world_distance() {
    let world = Mat4::from_scale(Vec3::splat(4.0));
    let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    let t = r.intersect_oriented(&unit_box(), &world).unwrap();
    // Scaled box front face at z = 2
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn test_oriented_rotation_hits_corner_region() {
    // A thin slab rotated 45° around Y: a ray that would miss the
    // axis-aligned slab hits the rotated one
    let slab = AABB::new(Vec3::new(-2.0, -0.5, -0.05), Vec3::new(2.0, 0.5, 0.05));
    let world = Mat4::from_quat(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4));
    let r = ray(Vec3::new(1.0, 0.0, 5.0), Vec3::NEG_Z);

    assert!(r.intersect_oriented(&slab, &Mat4::IDENTITY).is_some());
    let t = r.intersect_oriented(&slab, &world).unwrap();
    // Rotated slab passes through (1, 0, -1)
    assert!((r.at(t).z + 1.0).abs() < 0.1);
}

#[test]
fn test_singular_world_matrix_never_hits() {
    let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    assert!(r.intersect_oriented(&unit_box(), &Mat4::ZERO).is_none());
}

// ============================================================================
// Triangles
// ============================================================================

#[test]
fn test_triangle_hit_inside_and_on_edge() {
    let (a, b, c) = (Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
    let origin = Vec3::new(0.0, 0.0, 5.0);
    let t = triangle_hit(origin, Vec3::NEG_Z, a, b, c).unwrap();
    assert!((t - 5.0).abs() < 1e-6);

    // Bottom edge
    assert!(triangle_hit(Vec3::new(0.0, -1.0, 5.0), Vec3::NEG_Z, a, b, c).is_some());
    // Outside, next to the slanted edge
    assert!(triangle_hit(Vec3::new(0.9, 0.9, 5.0), Vec3::NEG_Z, a, b, c).is_none());
}

#[test]
fn test_triangle_two_sided_and_not_behind() {
    let (a, b, c) = (Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
    // From behind the face
    assert!(triangle_hit(Vec3::new(0.0, 0.0, -3.0), Vec3::Z, a, b, c).is_some());
    // Pointing away
    assert!(triangle_hit(Vec3::new(0.0, 0.0, 3.0), Vec3::Z, a, b, c).is_none());
}

#[test]
fn test_triangle_parallel_or_degenerate_misses() {
    let (a, b, c) = (Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
    assert!(triangle_hit(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, a, b, c).is_none());
    assert!(triangle_hit(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, a, a, c).is_none());
}

#[test]
fn test_mesh_returns_nearest_face() {
    let mesh = MeshGeometry::cuboid(&unit_box());
    let r = ray(Vec3::new(0.1, 0.2, 5.0), Vec3::NEG_Z);
    let t = r.intersect_mesh(&mesh, &Mat4::IDENTITY).unwrap();
    assert!((t - 4.5).abs() < 1e-5);
}

#[test]
fn test_mesh_from_inside_hits_far_wall() {
    let mesh = MeshGeometry::cuboid(&unit_box());
    let r = ray(Vec3::new(0.1, 0.1, 0.0), Vec3::NEG_Z);
    let t = r.intersect_mesh(&mesh, &Mat4::IDENTITY).unwrap();
    assert!((t - 0.5).abs() < 1e-5);
}

#[test]
fn test_mesh_scaled_returns_world_distance() {
    let mesh = MeshGeometry::cuboid(&unit_box());
    let world = Mat4::from_scale(Vec3::splat(4.0));
    let r = ray(Vec3::new(0.3, -0.2, 5.0), Vec3::NEG_Z);
    let t = r.intersect_mesh(&mesh, &world).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
    assert!((t - r.intersect_oriented(&unit_box(), &world).unwrap()).abs() < 1e-5);
}

#[test]
fn test_mesh_open_shell_is_missed_through_the_gap() {
    // Two quads facing the viewer with a hole between them
    let mesh = MeshGeometry::new(
        vec![
            Vec3::new(-2.0, -1.0, 0.0), Vec3::new(-0.5, -1.0, 0.0),
            Vec3::new(-2.0, 1.0, 0.0), Vec3::new(-0.5, 1.0, 0.0),
            Vec3::new(0.5, -1.0, 0.0), Vec3::new(2.0, -1.0, 0.0),
            Vec3::new(0.5, 1.0, 0.0), Vec3::new(2.0, 1.0, 0.0),
        ],
        vec![0, 1, 2, 1, 3, 2, 4, 5, 6, 5, 7, 6],
    );
    let through_gap = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    assert!(through_gap.intersect_oriented(&mesh.bounds().unwrap(), &Mat4::IDENTITY).is_some());
    assert!(through_gap.intersect_mesh(&mesh, &Mat4::IDENTITY).is_none());

    let on_panel = ray(Vec3::new(1.0, 0.0, 5.0), Vec3::NEG_Z);
    assert!(on_panel.intersect_mesh(&mesh, &Mat4::IDENTITY).is_some());
}

#[test]
fn test_mesh_singular_world_matrix_never_hits() {
    let mesh = MeshGeometry::cuboid(&unit_box());
    let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    assert!(r.intersect_mesh(&mesh, &Mat4::ZERO).is_none());
}
