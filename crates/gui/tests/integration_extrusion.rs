//! End-to-end extrusion tests through the headless harness.
//!
//! Every click and hover goes through the camera projection, the mesh pick
//! and the picking plane, exactly as the viewport panel drives them.

use boxtrude_gui_lib::harness::TestHarness;
use boxtrude_gui_lib::state::extrusion::{ClickOutcome, InteractionMode, KeyOutcome};
use boxtrude_gui_lib::state::settings::{CommitMissPolicy, ExtrusionSettings};
use glam::Vec3;
use shared::{Axis, BoxDimensions};

const TOL: f64 = 1e-3;

fn approx(a: BoxDimensions, b: BoxDimensions) -> bool {
    (a.width - b.width).abs() < TOL
        && (a.height - b.height).abs() < TOL
        && (a.depth - b.depth).abs() < TOL
}

fn committed(outcome: ClickOutcome) -> BoxDimensions {
    match outcome {
        ClickOutcome::Committed(d) => d,
        other => panic!("expected a commit, got {other:?}"),
    }
}

/// Screen point far above the viewport; its ray points away from the
/// picking plane of a face seen from the default camera.
fn off_plane_pos() -> egui::Pos2 {
    egui::pos2(400.0, -1.0e4)
}

#[test]
fn test_drag_plus_x_face_to_three() {
    let mut h = TestHarness::new();

    assert_eq!(
        h.click_world(Vec3::new(1.0, 0.4, 0.3)),
        ClickOutcome::FaceSelected(Axis::X)
    );
    let preview = h.drag_to(Vec3::new(3.0, 0.5, 0.5)).expect("preview");
    assert!(approx(preview, BoxDimensions::new(3.0, 1.0, 1.0)), "{preview:?}");

    let dims = committed(h.click_world(Vec3::new(3.0, 0.5, 0.5)));
    assert!(approx(dims, BoxDimensions::new(3.0, 1.0, 1.0)), "{dims:?}");
    assert_eq!(h.mode(), InteractionMode::Idle);
    assert_eq!(h.preview_count(), 0);
    assert_eq!(h.live_mesh_count(), 1);
}

#[test]
fn test_side_view_drag_plus_x_face() {
    let mut h = TestHarness::new();
    // Sideways view: the picking plane of the +X face is y = 0.5
    h.look_from(Vec3::new(6.0, 4.0, 0.5), Vec3::new(0.0, 0.0, 0.5));

    assert_eq!(
        h.click_world(Vec3::new(1.0, 0.5, 0.3)),
        ClickOutcome::FaceSelected(Axis::X)
    );
    assert!(h.is_face_selected());

    let preview = h.drag_to(Vec3::new(3.0, 0.5, 0.5)).expect("preview");
    assert!(approx(preview, BoxDimensions::new(3.0, 1.0, 1.0)), "{preview:?}");
    assert_eq!(h.preview_count(), 1);
    let v = h.validate_preview().unwrap();
    assert!(v.validate_box().is_empty());
    assert!(v.assert_dimensions_approx(BoxDimensions::new(3.0, 1.0, 1.0), 1e-3));

    let dims = committed(h.click_world(Vec3::new(3.0, 0.5, 0.5)));
    assert!(approx(dims, BoxDimensions::new(3.0, 1.0, 1.0)), "{dims:?}");
    assert_eq!(h.mode(), InteractionMode::Idle);
    assert_eq!(h.preview_count(), 0);
    assert_eq!(h.solid_count(), 1);
    assert_eq!(h.live_mesh_count(), 1);

    let v = h.validate_solid().unwrap();
    assert!(v.validate_box().is_empty());
    assert!(v.assert_dimensions_approx(dims, 1e-5));
}

#[test]
fn test_every_face_maps_to_its_axis() {
    let near = Vec3::splat(5.0);
    let far = Vec3::splat(-4.0);
    let cases = [
        (near, Vec3::new(1.0, 0.4, 0.3), Axis::X),
        (near, Vec3::new(0.4, 1.0, 0.3), Axis::Y),
        (near, Vec3::new(0.4, 0.3, 1.0), Axis::Z),
        (far, Vec3::new(0.0, 0.4, 0.3), Axis::X),
        (far, Vec3::new(0.4, 0.0, 0.3), Axis::Y),
        (far, Vec3::new(0.4, 0.3, 0.0), Axis::Z),
    ];

    for (eye, point, axis) in cases {
        let mut h = TestHarness::new();
        h.look_from(eye, Vec3::ZERO);
        assert_eq!(
            h.click_world(point),
            ClickOutcome::FaceSelected(axis),
            "eye {eye:?} point {point:?}"
        );
        let sel = h.controller.selected_face().copied().unwrap();
        assert_eq!(sel.axis, axis);
        assert!((sel.anchor - point).length() < 1e-3);
    }
}

#[test]
fn test_successive_commits_accumulate() {
    let mut h = TestHarness::new();

    // Default camera looks down (-1, -1, -1); the +X plane is y + z = 1
    h.click_world(Vec3::new(1.0, 0.4, 0.3));
    let first = committed(h.click_world(Vec3::new(3.0, 0.5, 0.5)));
    assert!(approx(first, BoxDimensions::new(3.0, 1.0, 1.0)), "{first:?}");

    // The +Y plane runs through x = 1.5, z = 0.5, so it is x + z = 2
    assert_eq!(
        h.click_world(Vec3::new(1.0, 1.0, 0.3)),
        ClickOutcome::FaceSelected(Axis::Y)
    );
    let second = committed(h.click_world(Vec3::new(1.5, 2.5, 0.5)));
    assert!(approx(second, BoxDimensions::new(3.0, 2.5, 1.0)), "{second:?}");

    let v = h.validate_solid().unwrap();
    assert!(v.is_origin_anchored(1e-6));
    assert!(v.assert_dimensions_approx(second, 1e-5));
}

#[test]
fn test_drag_below_minimum_clamps() {
    let mut h = TestHarness::new();
    h.click_world(Vec3::new(1.0, 0.4, 0.3));

    let preview = h.drag_to(Vec3::new(-2.0, 0.5, 0.5)).expect("preview");
    assert!((preview.width - 0.01).abs() < 1e-9);
    assert!(preview.is_valid());
}

#[test]
fn test_reset_mid_drag_cancels_selection() {
    let mut h = TestHarness::new();
    h.click_world(Vec3::new(1.0, 0.4, 0.3));
    h.drag_to(Vec3::new(2.5, 0.5, 0.5));
    assert_eq!(h.preview_count(), 1);

    assert_eq!(h.press_key(egui::Key::R), KeyOutcome::Reset(BoxDimensions::UNIT));
    assert_eq!(h.mode(), InteractionMode::Idle);
    assert_eq!(h.dimensions(), BoxDimensions::UNIT);
    assert_eq!(h.preview_count(), 0);
    assert_eq!(h.live_mesh_count(), 1);

    // The preview loop has stopped
    assert_eq!(h.frame(), None);
    assert_eq!(h.preview_count(), 0);
}

#[test]
fn test_escape_cancels_without_commit() {
    let mut h = TestHarness::new();
    h.click_world(Vec3::new(1.0, 0.4, 0.3));
    h.drag_to(Vec3::new(2.5, 0.5, 0.5));

    assert_eq!(h.press_key(egui::Key::Escape), KeyOutcome::Cancelled);
    assert_eq!(h.dimensions(), BoxDimensions::UNIT);
    assert_eq!(h.preview_count(), 0);
    assert_eq!(h.press_key(egui::Key::Escape), KeyOutcome::Ignored);
}

#[test]
fn test_single_preview_over_many_frames() {
    let mut h = TestHarness::new();
    h.click_world(Vec3::new(1.0, 0.4, 0.3));

    for i in 0..60 {
        let x = 1.0 + i as f32 * 0.05;
        h.drag_to(Vec3::new(x, 0.5, 0.5));
        assert!(h.preview_count() <= 1);
        assert_eq!(h.live_mesh_count(), 2);
    }
}

#[test]
fn test_repeated_frame_at_same_pointer_is_stable() {
    let mut h = TestHarness::new();
    h.click_world(Vec3::new(1.0, 0.4, 0.3));

    let a = h.drag_to(Vec3::new(2.0, 0.5, 0.5)).unwrap();
    let b = h.frame().unwrap();
    let c = h.frame().unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(h.preview_count(), 1);
}

#[test]
fn test_pointer_leaving_keeps_last_preview() {
    let mut h = TestHarness::new();
    h.click_world(Vec3::new(1.0, 0.4, 0.3));
    let shown = h.drag_to(Vec3::new(2.0, 0.5, 0.5)).unwrap();

    h.leave();
    h.frame();
    assert_eq!(h.preview_dimensions(), Some(shown));
    assert_eq!(h.preview_count(), 1);
}

#[test]
fn test_miss_keeps_selection_by_default() {
    let mut h = TestHarness::new();
    h.click_world(Vec3::new(1.0, 0.4, 0.3));

    assert_eq!(h.click_screen(off_plane_pos()), ClickOutcome::Missed);
    assert!(h.is_face_selected());
    assert_eq!(h.dimensions(), BoxDimensions::UNIT);
}

#[test]
fn test_miss_cancels_selection_when_configured() {
    let settings = ExtrusionSettings {
        commit_miss: CommitMissPolicy::CancelSelection,
        ..Default::default()
    };
    let mut h = TestHarness::with_settings(settings, BoxDimensions::UNIT);
    h.click_world(Vec3::new(1.0, 0.4, 0.3));
    h.drag_to(Vec3::new(2.0, 0.5, 0.5));

    assert_eq!(h.click_screen(off_plane_pos()), ClickOutcome::Cancelled);
    assert_eq!(h.mode(), InteractionMode::Idle);
    assert_eq!(h.dimensions(), BoxDimensions::UNIT);
    assert_eq!(h.preview_count(), 0);
}

#[test]
fn test_miss_reuses_last_preview_when_configured() {
    let settings = ExtrusionSettings {
        commit_miss: CommitMissPolicy::ReuseLastPreview,
        ..Default::default()
    };
    let mut h = TestHarness::with_settings(settings, BoxDimensions::UNIT);
    h.click_world(Vec3::new(1.0, 0.4, 0.3));
    let shown = h.drag_to(Vec3::new(2.0, 0.5, 0.5)).unwrap();

    let dims = committed(h.click_screen(off_plane_pos()));
    assert!(approx(dims, shown), "{dims:?} vs {shown:?}");
    assert_eq!(h.mode(), InteractionMode::Idle);
}

#[test]
fn test_orbit_between_select_and_commit() {
    let mut h = TestHarness::new();
    h.click_world(Vec3::new(1.0, 0.4, 0.3));

    // The plane follows the new view direction but still contains the X axis
    h.orbit(10.0, 0.0);
    let plane = h.controller.picking_plane().unwrap();
    assert!(plane.normal.dot(Vec3::X).abs() < 1e-5);

    let target = plane.point + Vec3::X * 1.5;
    let dims = committed(h.click_world(target));
    assert!((dims.width - 2.5).abs() < TOL, "{dims:?}");
}

#[test]
fn test_resized_viewport_still_picks() {
    let mut h = TestHarness::new();
    h.resize(egui::vec2(320.0, 900.0));
    assert_eq!(
        h.click_world(Vec3::new(1.0, 0.4, 0.3)),
        ClickOutcome::FaceSelected(Axis::X)
    );
}

#[test]
fn test_initial_size_is_built() {
    let initial = BoxDimensions::new(2.0, 0.5, 1.5);
    let h = TestHarness::with_settings(ExtrusionSettings::default(), initial);
    let v = h.validate_solid().unwrap();
    assert!(v.validate_box().is_empty());
    assert!(v.assert_dimensions_approx(initial, 1e-5));
}
