// Tests for the mesh builders and shared visual-side transforms.

use app_core::{
    face_origin_basis, geometry, gravity_ring_radii, gravity_ring_segments, Camera, Particle,
    VectorInstance, CAMERA_FOV_DEG, RING_COUNT,
};
use glam::{Mat3, Vec3};

#[test]
fn sphere_has_expected_counts_and_radius() {
    let mesh = geometry::sphere(2.0, 8, 6);
    assert_eq!(mesh.vertices.len(), (8 + 1) * (6 + 1));
    assert_eq!(mesh.indices.len(), 8 * 6 * 6);
    for v in &mesh.vertices {
        let len = Vec3::from(v.position).length();
        assert!((len - 2.0).abs() < 1e-4, "vertex off the sphere: {len}");
    }
    let max = *mesh.indices.iter().max().unwrap();
    assert!((max as usize) < mesh.vertices.len());
}

#[test]
fn ring_vertices_stay_in_the_annulus() {
    let mesh = geometry::ring(1.0, 1.015, 80);
    assert_eq!(mesh.vertices.len(), (80 + 1) * 2);
    for v in &mesh.vertices {
        assert_eq!(v.position[2], 0.0, "ring must be flat in XY");
        let r = Vec3::from(v.position).length();
        assert!((0.9999..=1.0151).contains(&r), "radius {r} outside annulus");
    }
}

#[test]
fn cone_apex_points_down_negative_z() {
    let mesh = geometry::cone(0.006, 0.04, 6);
    let apex = mesh.vertices[0].position;
    assert_eq!(apex, [0.0, 0.0, -0.02]);
    for v in &mesh.vertices[1..] {
        assert!((v.position[2] - 0.02).abs() < 1e-6, "base must sit at +z");
    }
}

#[test]
fn gravity_ring_series_widens_outward() {
    let (inner0, outer0) = gravity_ring_radii(0);
    assert!((inner0 - 1.65).abs() < 1e-6);
    assert!((outer0 - inner0 - 0.009).abs() < 1e-6);
    let mut prev_inner = 0.0;
    for i in 0..RING_COUNT {
        let (inner, outer) = gravity_ring_radii(i);
        assert!(inner > prev_inner, "rings must widen outward");
        assert!(outer > inner);
        assert_eq!(gravity_ring_segments(i), 80 + i as u32);
        prev_inner = inner;
    }
}

#[test]
fn face_origin_basis_is_orthonormal_and_aims_home() {
    for pos in [
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(-2.0, 3.0, 1.0),
        Vec3::new(0.0, 4.0, 0.0), // straight up: exercises the up-hint fallback
    ] {
        let basis = face_origin_basis(pos);
        let [x, y, z] = [basis.x_axis, basis.y_axis, basis.z_axis];
        for axis in [x, y, z] {
            assert!((axis.length() - 1.0).abs() < 1e-5);
        }
        assert!(x.dot(y).abs() < 1e-5);
        assert!(y.dot(z).abs() < 1e-5);
        assert!(x.dot(z).abs() < 1e-5);
        assert!((basis.determinant() - 1.0).abs() < 1e-4, "basis must not mirror");
        let expected_fwd = (-pos).normalize();
        assert!((z - expected_fwd).length() < 1e-5, "+Z must face the origin");
    }
}

#[test]
fn degenerate_origin_basis_is_identity() {
    assert_eq!(face_origin_basis(Vec3::ZERO), Mat3::IDENTITY);
}

#[test]
fn vector_instance_places_the_particle() {
    let p = Particle {
        position: Vec3::new(1.0, -2.0, 3.0),
        velocity: Vec3::new(0.005, 0.0, 0.0),
        life_scale: 1.0,
        grid_index: 0,
    };
    let inst = VectorInstance::from_particle(&p);
    // translation lives in the last column of the column-major model
    assert_eq!(inst.model[3], [1.0, -2.0, 3.0, 1.0]);

    let origin_only = VectorInstance::at(Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(origin_only.model[3], [4.0, 5.0, 6.0, 1.0]);
    assert_eq!(origin_only.model[0], [1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn camera_matrices_are_finite_and_scaled_by_fov() {
    let cam = Camera::standard(16.0 / 9.0);
    assert!((cam.fovy_radians - CAMERA_FOV_DEG.to_radians()).abs() < 1e-6);
    let vp = cam.view_proj();
    assert!(vp.to_cols_array().iter().all(|c| c.is_finite()));
    // the globe center must project inside clip space
    let clip = vp * Vec3::ZERO.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1.0 && ndc.y.abs() < 1.0);
}
