// Tests for constants and their mathematical relationships.

use app_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Smoothing must stay in (0, 1) for the ease step to converge
    assert!(SMOOTHING > 0.0 && SMOOTHING < 1.0);

    // Per-frame gravity is tiny but positive
    assert!(GRAVITY > 0.0 && GRAVITY < 1.0);
    assert!(MOON_GRAVITY > 0.0 && MOON_GRAVITY < GRAVITY);

    // Reserved damping factor is a sane fraction
    assert!(FRICTION > 0.0 && FRICTION <= 1.0);

    // Life scale reaches full size in a finite number of ticks
    assert!(LIFE_SCALE_STEP > 0.0 && LIFE_SCALE_STEP <= 1.0);

    // Pacing values are positive
    assert!(FRAME_INTERVAL_MS > 0.0);
    assert!(STARTUP_DELAY_MS > 0);
    assert!(SCROLL_QUIET_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // The pool is sized exactly to the lattice
    assert_eq!(PARTICLE_COUNT, GRID_DENSITY * GRID_DENSITY * GRID_DENSITY);

    // The reclaim radius sits inside the globe, and the lattice outside it
    assert!(RESET_RADIUS < GLOBE_RADIUS);
    assert!(PARTICLE_SPREAD / 2.0 > GLOBE_RADIUS);

    // The moon constant is the documented fraction of the globe's
    assert!((MOON_GRAVITY - GRAVITY / 7.0).abs() < 1e-9);

    // Both frame budgets are intentionally equal until variable pacing lands
    assert_eq!(FRAME_INTERVAL_MS, FRAME_INTERVAL_SCROLLING_MS);

    // Camera planes bracket the scene
    assert!(CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_Z > GLOBE_RADIUS && CAMERA_Z < CAMERA_FAR);
    assert!(MOON_DISTANCE > PARTICLE_SPREAD);

    // Outlines sit just outside their bodies
    assert!(GLOBE_OUTLINE_OUTER > GLOBE_RADIUS);
    assert!(MOON_OUTLINE_OUTER > MOON_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn viewport_baseline_is_landscape() {
    assert!(DEV_SCREEN_W > DEV_SCREEN_H);
    assert!(SMALL_SCREEN_WIDTH < DEV_SCREEN_W);
    assert!(SMALL_SCREEN_HEIGHT_SCALE > 1.0);
}
