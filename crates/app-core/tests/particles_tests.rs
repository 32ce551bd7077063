// Integration tests for the particle pool, reset policy, and integrator.

use app_core::{FieldError, FieldParams, ParticleField, GRAVITY, PARTICLE_COUNT, RESET_RADIUS};
use glam::Vec3;

fn field(density: usize, spread: f32) -> ParticleField {
    ParticleField::new(FieldParams {
        grid_density: density,
        spread,
        ..FieldParams::default()
    })
    .expect("valid field params")
}

#[test]
fn pool_is_sized_to_density_cubed() {
    let f = field(5, 11.0);
    assert_eq!(f.len(), 125);
    let default = ParticleField::new(FieldParams::default()).unwrap();
    assert_eq!(default.len(), PARTICLE_COUNT);
}

#[test]
fn invalid_params_are_rejected() {
    let err = ParticleField::new(FieldParams {
        grid_density: 0,
        ..FieldParams::default()
    })
    .unwrap_err();
    assert!(matches!(err, FieldError::ZeroDensity));

    let err = ParticleField::new(FieldParams {
        spread: 0.0,
        ..FieldParams::default()
    })
    .unwrap_err();
    assert!(matches!(err, FieldError::NonPositiveSpread(_)));
}

#[test]
fn reset_is_deterministic_across_pools() {
    let a = field(4, 7.0);
    let b = field(4, 7.0);
    for i in 0..a.len() {
        assert_eq!(
            a.particles()[i].position,
            b.particles()[i].position,
            "position for index {i} must be a pure function of the index"
        );
    }
}

#[test]
fn reset_is_idempotent() {
    let mut f = field(3, 6.0);
    // scramble, then reset the same slot twice
    for _ in 0..5 {
        f.step();
    }
    f.reset(13);
    let first = f.particles()[13];
    f.reset(13);
    let second = f.particles()[13];
    assert_eq!(first.position, second.position);
    assert_eq!(second.velocity, Vec3::ZERO);
    assert_eq!(second.life_scale, 0.0);
    assert_eq!(second.grid_index, 13);
}

#[test]
fn density_two_lattice_is_a_unit_cube() {
    let f = field(2, 2.0);
    assert_eq!(f.len(), 8);
    let mut positions: Vec<Vec3> = f.particles().iter().map(|p| p.position).collect();
    for p in f.particles() {
        assert_eq!(p.velocity, Vec3::ZERO);
        assert_eq!(p.life_scale, 0.0);
    }
    // Every coordinate lands on {-1, 0}: eight distinct corners of a cube
    // with side length 1 (offset half a cell from the origin).
    for pos in &positions {
        for c in [pos.x, pos.y, pos.z] {
            assert!(
                c == -1.0 || c == 0.0,
                "unexpected lattice coordinate {c} in {pos:?}"
            );
        }
    }
    positions.sort_by(|a, b| a.to_array().partial_cmp(&b.to_array()).unwrap());
    positions.dedup();
    assert_eq!(positions.len(), 8, "corners must be distinct");
}

#[test]
fn single_step_matches_gravity_constant() {
    let mut f = field(1, 11.0);
    f.set_particle(0, Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO);
    f.step();
    let p = f.particles()[0];
    // distance 1 => acceleration is exactly the gravity constant on x
    assert!((p.velocity.x - GRAVITY).abs() < 1e-7, "vx = {}", p.velocity.x);
    assert_eq!(p.velocity.y, 0.0);
    assert_eq!(p.velocity.z, 0.0);
    assert!((p.position.x - (1.0 - GRAVITY)).abs() < 1e-7);
    assert!((p.life_scale - 0.1).abs() < 1e-7);
}

#[test]
fn below_threshold_resets_instead_of_integrating() {
    let mut f = field(3, 9.0);
    f.set_particle(4, Vec3::new(0.3, 0.0, 0.0), Vec3::new(0.2, 0.0, 0.0));
    f.step();
    let p = f.particles()[4];
    assert_eq!(
        p.velocity,
        Vec3::ZERO,
        "a reclaimed particle must not integrate this frame"
    );
    assert_eq!(p.life_scale, 0.0);
    // back on its lattice slot, well clear of the reclaim radius
    assert!(p.position.length() >= RESET_RADIUS);
}

#[test]
fn no_particle_lingers_below_the_reclaim_radius() {
    let mut f = field(3, 9.0);
    for i in 0..f.len() {
        f.set_particle(i, Vec3::new(0.0, 0.1, 0.0), Vec3::ZERO);
    }
    f.step();
    for (i, p) in f.particles().iter().enumerate() {
        assert!(
            p.position.length() >= RESET_RADIUS,
            "particle {i} still inside the reclaim radius after a tick"
        );
    }
}

#[test]
fn life_scale_never_exceeds_one() {
    let mut f = field(1, 11.0);
    f.set_particle(0, Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    for _ in 0..40 {
        f.step();
        let p = f.particles()[0];
        assert!(p.life_scale <= 1.0, "life_scale {}", p.life_scale);
    }
    assert_eq!(f.particles()[0].life_scale, 1.0);
}

#[test]
fn moon_cross_term_is_computed_but_inert_by_default() {
    let mut near_moon = field(1, 11.0);
    let mut far_moon = ParticleField::new(FieldParams {
        grid_density: 1,
        moon_position: Vec3::new(-3.0, 8.0, 1.0),
        ..FieldParams::default()
    })
    .unwrap();
    near_moon.set_particle(0, Vec3::new(2.0, 1.0, 0.0), Vec3::ZERO);
    far_moon.set_particle(0, Vec3::new(2.0, 1.0, 0.0), Vec3::ZERO);
    for _ in 0..10 {
        near_moon.step();
        far_moon.step();
    }
    assert_eq!(
        near_moon.particles()[0].position,
        far_moon.particles()[0].position,
        "with the toggle off, the moon must not influence trajectories"
    );

    let mut pulled = ParticleField::new(FieldParams {
        grid_density: 1,
        apply_moon_gravity: true,
        ..FieldParams::default()
    })
    .unwrap();
    pulled.set_particle(0, Vec3::new(2.0, 1.0, 0.0), Vec3::ZERO);
    for _ in 0..10 {
        pulled.step();
    }
    assert_ne!(
        pulled.particles()[0].position,
        near_moon.particles()[0].position,
        "enabling the toggle must change the trajectory"
    );
}

#[test]
fn vector_scale_tracks_life_and_speed() {
    let mut f = field(1, 11.0);
    f.set_particle(0, Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.01, 0.0, 0.0));
    let mut p = f.particles()[0];
    p.life_scale = 0.5;
    let scale = p.vector_scale();
    assert_eq!(scale.x, 0.5);
    assert_eq!(scale.y, 0.5);
    assert!((scale.z - (0.01 * 200.0 - 0.5)).abs() < 1e-6);
}
