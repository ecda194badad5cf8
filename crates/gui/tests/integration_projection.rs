//! Integration tests for the projection pipeline: purity, depth ordering
//! and screen-space picking.

use approx::assert_relative_eq;
use egui::{pos2, vec2, Pos2, Rect};
use shared::Face;
use voxl_gui_lib::fixtures;
use voxl_gui_lib::harness::EditorHarness;
use voxl_gui_lib::state::ToolMode;
use voxl_gui_lib::viewport::camera::OrbitCamera;
use voxl_gui_lib::viewport::projection::{hit_test, project_store, sort_back_to_front};

fn screen() -> Rect {
    Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))
}

#[test]
fn test_projection_is_deterministic() {
    let voxels = fixtures::column(4);
    let camera = OrbitCamera::new();
    let a = project_store(&voxels, &camera, screen());
    let b = project_store(&voxels, &camera, screen());

    assert_eq!(a.len(), b.len());
    for (fa, fb) in a.iter().zip(&b) {
        assert_eq!(fa.points, fb.points);
        assert_eq!(fa.depth, fb.depth);
        assert_eq!(fa.voxel, fb.voxel);
        assert_eq!(fa.face, fb.face);
    }
}

#[test]
fn test_projection_yields_six_faces_per_voxel() {
    let voxels = fixtures::column(3);
    let faces = project_store(&voxels, &OrbitCamera::new(), screen());
    assert_eq!(faces.len(), 18);

    // Every face is tagged with its owner
    for (i, chunk) in faces.chunks(6).enumerate() {
        for (pf, face) in chunk.iter().zip(Face::ALL) {
            assert_eq!(pf.voxel, i);
            assert_eq!(pf.face, face);
        }
    }
}

#[test]
fn test_eye_sits_on_the_unit_sphere() {
    let mut camera = OrbitCamera::new();
    camera.rotate(73.0, 20.0);
    assert_relative_eq!(camera.eye_position().length(), 1.0, epsilon = 1e-5);
}

#[test]
fn test_depth_sort_is_back_to_front() {
    let voxels = fixtures::column(5);
    let mut faces = project_store(&voxels, &OrbitCamera::new(), screen());
    sort_back_to_front(&mut faces);

    for pair in faces.windows(2) {
        assert!(pair[0].depth <= pair[1].depth);
    }
}

#[test]
fn test_depth_sort_preserves_order_of_equal_depths() {
    // Two voxels at the same position project to identical depths; the sort
    // must keep their store order.
    let voxels = vec![
        fixtures::voxel("#111111", 0.0, 0.0, 0.0),
        fixtures::voxel("#222222", 0.0, 0.0, 0.0),
    ];
    let mut faces = project_store(&voxels, &OrbitCamera::new(), screen());
    sort_back_to_front(&mut faces);

    for pair in faces.windows(2) {
        if pair[0].depth == pair[1].depth && pair[0].face == pair[1].face {
            assert!(pair[0].voxel < pair[1].voxel);
        }
    }
}

#[test]
fn test_hit_test_picks_topmost_face_at_center() {
    let voxels = vec![fixtures::gray_voxel(0.0, 0.0, 0.0)];
    let camera = OrbitCamera::new();
    let mut faces = project_store(&voxels, &camera, screen());
    sort_back_to_front(&mut faces);

    let (voxel, _face) = hit_test(&faces, screen().center()).expect("center must hit");
    assert_eq!(voxel, 0);
}

#[test]
fn test_hit_test_misses_outside_geometry() {
    let voxels = vec![fixtures::gray_voxel(0.0, 0.0, 0.0)];
    let mut faces = project_store(&voxels, &OrbitCamera::new(), screen());
    sort_back_to_front(&mut faces);

    assert!(hit_test(&faces, pos2(2.0, 2.0)).is_none());
}

#[test]
fn test_nearer_voxel_occludes_farther_one() {
    // The default eye looks in from negative x/z, so a voxel at (-2, 0, -2)
    // sits roughly on the eye ray in front of the origin voxel. A click at
    // center overlaps both; the pick must resolve to the nearer one.
    let voxels = vec![
        fixtures::gray_voxel(0.0, 0.0, 0.0),
        fixtures::gray_voxel(-2.0, 0.0, -2.0),
    ];
    let mut faces = project_store(&voxels, &OrbitCamera::new(), screen());
    sort_back_to_front(&mut faces);

    let (voxel, _face) = hit_test(&faces, screen().center()).expect("center must hit");
    assert_eq!(voxel, 1);
}

#[test]
fn test_pan_shifts_projection_uniformly() {
    let voxels = fixtures::column(2);
    let mut camera = OrbitCamera::new();
    let before = project_store(&voxels, &camera, screen());
    camera.pan(vec2(30.0, -12.0));
    let after = project_store(&voxels, &camera, screen());

    for (a, b) in before.iter().zip(&after) {
        for (pa, pb) in a.points.iter().zip(&b.points) {
            assert_relative_eq!(pb.x - pa.x, 30.0, epsilon = 1e-4);
            assert_relative_eq!(pb.y - pa.y, -12.0, epsilon = 1e-4);
        }
        assert_eq!(a.depth, b.depth);
    }
}

#[test]
fn test_click_pipeline_draw_then_delete() {
    let mut h = EditorHarness::new();

    let (voxel, _) = h.click_at(h.rect.center()).expect("center must hit");
    assert_eq!(voxel, 0);
    assert_eq!(h.voxel_count(), 2);

    h.set_mode(ToolMode::Del);
    h.click_at(h.rect.center()).expect("center must hit");
    assert_eq!(h.voxel_count(), 1);
}

#[test]
fn test_zoom_scales_face_size() {
    let voxels = vec![fixtures::gray_voxel(0.0, 0.0, 0.0)];
    let mut camera = OrbitCamera::new();
    let small = project_store(&voxels, &camera, screen());
    camera.zoom(40.0);
    let large = project_store(&voxels, &camera, screen());

    let span = |faces: &[voxl_gui_lib::viewport::projection::ProjectedFace]| {
        faces[0]
            .points
            .iter()
            .map(|p| (*p - screen().center()).length())
            .fold(0.0_f32, f32::max)
    };
    assert!(span(&large) > span(&small) * 2.0);
}
