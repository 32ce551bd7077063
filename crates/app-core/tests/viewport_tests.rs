// Tests for viewport derivation and pointer normalization.

use app_core::{
    normalize_pointer, MotionFlags, ViewportState, DEV_SCREEN_H, DEV_SCREEN_W,
    SMALL_SCREEN_HEIGHT_SCALE,
};

#[test]
fn small_screens_scale_the_height() {
    let v = ViewportState::compute(800.0, 600.0, 0.0);
    assert!(v.is_small_screen);
    assert_eq!(v.height_scale, SMALL_SCREEN_HEIGHT_SCALE);
    assert!((v.height - 600.0 * SMALL_SCREEN_HEIGHT_SCALE).abs() < 1e-4);
}

#[test]
fn baseline_screen_has_unit_scale_factors() {
    let v = ViewportState::compute(DEV_SCREEN_W, DEV_SCREEN_H, 0.0);
    assert!(!v.is_small_screen);
    assert_eq!(v.height_scale, 1.0);
    assert!((v.scale_x - 1.0).abs() < 1e-6);
    assert!((v.scale_y - 1.0).abs() < 1e-6);
    assert!((v.scale_aspect - 1.0).abs() < 1e-6);
    assert!((v.aspect - v.dev_aspect).abs() < 1e-6);
}

#[test]
fn scrollbar_inset_narrows_the_width() {
    let v = ViewportState::compute(1200.0, 800.0, 15.0);
    assert_eq!(v.width, 1185.0);
}

#[test]
fn recompute_replaces_derived_fields_and_keeps_input_state() {
    let mut v = ViewportState::compute(1400.0, 900.0, 0.0);
    v.set_pointer(1400.0, 0.0, 0.0);
    v.is_mouse_down = true;
    let next = v.recompute(700.0, 900.0, 0.0);
    // all derived fields describe the new screen
    assert!(next.is_small_screen);
    assert_eq!(next.width, 700.0);
    assert!((next.height - 900.0 * SMALL_SCREEN_HEIGHT_SCALE).abs() < 1e-4);
    // pointer and button state survive the swap
    assert_eq!(next.pointer_x, v.pointer_x);
    assert_eq!(next.pointer_y, v.pointer_y);
    assert!(next.is_mouse_down);
}

#[test]
fn pointer_normalization_is_centered() {
    let (x, y) = normalize_pointer(500.0, 250.0, 0.0, 1000.0, 500.0);
    assert_eq!((x, y), (0.0, 0.0));
    let (x, y) = normalize_pointer(1000.0, 500.0, 0.0, 1000.0, 500.0);
    assert_eq!((x, y), (0.5, 0.5));
    let (x, y) = normalize_pointer(0.0, 0.0, 0.0, 1000.0, 500.0);
    assert_eq!((x, y), (-0.5, -0.5));
}

#[test]
fn pointer_normalization_subtracts_scroll() {
    let (_, y_unscrolled) = normalize_pointer(100.0, 250.0, 0.0, 1000.0, 500.0);
    let (_, y_scrolled) = normalize_pointer(100.0, 250.0 + 120.0, 120.0, 1000.0, 500.0);
    assert_eq!(y_unscrolled, y_scrolled);
}

#[test]
fn motion_flags_track_arrows_and_latch_jump() {
    let mut m = MotionFlags::default();
    m.key_down("ArrowUp");
    m.key_down(" ");
    assert!(m.forward && m.jump);
    m.key_up("ArrowUp");
    m.key_up(" ");
    assert!(!m.forward);
    assert!(m.jump, "space has no key-up; the flag stays latched");
    m.key_down("x");
    assert!(!m.backward && !m.left && !m.right);
}
