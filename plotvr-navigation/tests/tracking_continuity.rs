//! Integration tests for the tracking state machine
//!
//! These tests check that switching between tracking and free mode never
//! moves the scene the user sees, and that relocation draws stay in range.

use nalgebra::Vector3;
use plotvr_core::Transform3D;
use plotvr_navigation::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPSILON: f32 = 1e-5;

/// A head pose looking somewhere up and to the left, with a small neck offset
fn tilted_head(yaw: f32, pitch: f32) -> HeadTransform {
    let view = Transform3D::rotation(&Vector3::x(), pitch)
        * Transform3D::rotation(&Vector3::y(), yaw)
        * Transform3D::translation(Vector3::new(0.0, -0.075, 0.08));
    HeadTransform::new(view)
}

#[test]
fn test_round_trip_without_head_motion_is_seamless() {
    let mut nav = NavigationState::default();
    nav.update_head(&tilted_head(0.3, -0.2));
    let before = nav.effective_view();

    nav.toggle_track_head().unwrap();
    assert!(nav.effective_view().approx_eq(&before, EPSILON));

    nav.toggle_track_head().unwrap();
    assert_eq!(nav.mode(), TrackingMode::Tracking);
    assert!(nav.effective_view().approx_eq(&before, EPSILON));
    assert!(nav.head_pre_view().is_identity(EPSILON));
}

#[test]
fn test_head_motion_while_free_is_absorbed_on_retrack() {
    let mut nav = NavigationState::default();
    nav.update_head(&tilted_head(0.3, -0.2));
    nav.toggle_track_head().unwrap();
    let frozen = nav.effective_view();

    // the user keeps turning while the view is frozen
    nav.update_head(&tilted_head(-1.1, 0.4));
    assert!(nav.effective_view().approx_eq(&frozen, EPSILON));

    nav.toggle_track_head().unwrap();
    assert!(nav.effective_view().approx_eq(&frozen, EPSILON));
}

#[test]
fn test_manual_moves_survive_retrack() {
    let mut nav = NavigationState::default();
    nav.update_head(&tilted_head(0.6, 0.0));
    nav.toggle_track_head().unwrap();
    nav.manual_move(Axis::Forward, Direction::Positive);
    nav.manual_move(Axis::Right, Direction::Negative);
    let moved = nav.effective_view();

    nav.update_head(&tilted_head(0.1, 0.1));
    nav.toggle_track_head().unwrap();
    assert!(nav.effective_view().approx_eq(&moved, EPSILON));

    // later frames follow the head from the new reference
    nav.update_head(&tilted_head(0.1, 0.1));
    assert!(nav.effective_view().approx_eq(&moved, EPSILON));
}

#[test]
fn test_repeated_switching_stays_continuous() {
    let mut nav = NavigationState::default();
    let poses = [
        tilted_head(0.2, 0.0),
        tilted_head(0.9, -0.3),
        tilted_head(-0.4, 0.5),
        tilted_head(2.0, 0.1),
    ];
    for pose in poses.iter().cycle().take(12) {
        nav.update_head(pose);
        let before = nav.effective_view();
        nav.toggle_track_head().unwrap();
        assert!(nav.effective_view().approx_eq(&before, 1e-4));
    }
}

#[test]
fn test_relocation_draws_stay_in_range() {
    for seed in 0..200 {
        let mut nav = NavigationState::default();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..5 {
            let r = nav.relocate_focus_object(&mut rng);
            assert!(RELOCATE_AZIMUTH_DEG.contains(&r.azimuth_deg), "{r:?}");
            assert!(RELOCATE_DISTANCE.contains(&r.distance), "{r:?}");
            assert!(RELOCATE_ELEVATION_DEG.contains(&r.elevation_deg), "{r:?}");
        }
    }
}

#[test]
fn test_relocation_does_not_touch_tracking_state() {
    let mut nav = NavigationState::default();
    let camera = nav.camera();
    nav.relocate_focus_object(&mut StdRng::seed_from_u64(3));
    assert_eq!(nav.mode(), TrackingMode::Tracking);
    assert_eq!(nav.camera(), camera);
}
