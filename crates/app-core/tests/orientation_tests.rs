// Tests for the first-order orientation smoother and the group rig.

use app_core::{GroupId, Orientable, OrientationRig, GLOBE_YAW_OFFSET, SMOOTHING};
use std::f32::consts::PI;

#[test]
fn smoothing_converges_monotonically_from_rest() {
    let mut o = Orientable::new(GroupId::Vectors, 0.0);
    let (px, py) = (0.3, 0.2);
    let yaw_target = px * PI;
    let pitch_target = py * PI;

    let mut prev_yaw_err = (yaw_target - o.yaw).abs();
    let mut prev_pitch_err = (pitch_target - o.pitch).abs();
    for step in 0..80 {
        o.ease_toward(px, py, SMOOTHING);
        let yaw_err = (yaw_target - o.yaw).abs();
        let pitch_err = (pitch_target - o.pitch).abs();
        assert!(
            yaw_err <= prev_yaw_err,
            "yaw error grew at step {step}: {yaw_err} > {prev_yaw_err}"
        );
        assert!(pitch_err <= prev_pitch_err, "pitch error grew at step {step}");
        prev_yaw_err = yaw_err;
        prev_pitch_err = pitch_err;
    }
    assert!(prev_yaw_err < 1e-5);
    assert!(prev_pitch_err < 1e-5);
}

#[test]
fn smoothing_never_overshoots_from_rest() {
    let mut o = Orientable::new(GroupId::Rings, 0.0);
    let target = 0.4 * PI;
    for _ in 0..200 {
        o.ease_toward(0.4, 0.4, SMOOTHING);
        assert!(o.yaw <= target + 1e-6, "yaw overshot: {}", o.yaw);
        assert!(o.pitch <= target + 1e-6);
    }
}

#[test]
fn smoothing_is_stable_for_any_factor_in_unit_interval() {
    for k in [0.05, 0.4, 0.95] {
        let mut o = Orientable::new(GroupId::Dots, 0.0);
        for _ in 0..500 {
            o.ease_toward(-0.5, 0.5, k);
        }
        assert!(
            (o.yaw - (-0.5 * PI)).abs() < 1e-3,
            "k={k} failed to converge, yaw={}",
            o.yaw
        );
        assert!(o.yaw.is_finite() && o.pitch.is_finite());
    }
}

#[test]
fn globe_group_carries_the_yaw_offset() {
    let mut rig = OrientationRig::standard();
    // constant centered pointer: targets are 0 except the globe's offset
    for _ in 0..120 {
        rig.step(0.0, 0.0);
    }
    let globe = rig.get(GroupId::Globe).unwrap();
    assert!(
        (globe.yaw - (-GLOBE_YAW_OFFSET)).abs() < 1e-4,
        "globe yaw {} should settle at -offset",
        globe.yaw
    );
    for id in [
        GroupId::Vectors,
        GroupId::Dots,
        GroupId::Rings,
        GroupId::RingsLat,
        GroupId::RingsLng,
    ] {
        let g = rig.get(id).unwrap();
        assert!(g.yaw.abs() < 1e-4, "{id:?} yaw should settle at 0");
        assert!(g.pitch.abs() < 1e-4);
    }
}

#[test]
fn rig_steps_every_group() {
    let mut rig = OrientationRig::standard();
    rig.step(0.25, -0.25);
    for g in rig.iter() {
        assert!(
            g.pitch != 0.0,
            "group {:?} did not move on the first step",
            g.id
        );
    }
}

#[test]
fn globe_starts_turned_away() {
    let rig = OrientationRig::standard();
    let globe = rig.get(GroupId::Globe).unwrap();
    assert!((globe.yaw - (-PI)).abs() < 1e-6);
    assert_eq!(globe.pitch, 0.0);
}
