//! Integration tests for the editor store: face-click mutations, capacity,
//! duplicates and history, driven through the headless harness.

use shared::{Face, Voxel, DEFAULT_COLOR, MAX_VOXELS};
use voxl_gui_lib::fixtures;
use voxl_gui_lib::harness::EditorHarness;
use voxl_gui_lib::state::ToolMode;

#[test]
fn test_draw_on_top_face_stacks_upward() {
    let mut h = EditorHarness::new();
    h.set_color("#ff0000");

    assert!(h.click_face(0, Face::Top));

    assert_eq!(h.voxel_count(), 2);
    let added = &h.voxels()[1];
    assert_eq!(added.position, [0.0, -2.0, 0.0]);
    assert_eq!(added.color, "#ff0000");
    // The clicked voxel is untouched
    assert_eq!(h.voxels()[0], Voxel::origin_default());
}

#[test]
fn test_draw_uses_currently_selected_color() {
    let mut h = EditorHarness::new();
    h.click_face(0, Face::Right);
    h.set_color("#00ff00");
    h.click_face(1, Face::Right);

    assert_eq!(h.voxels()[1].color, DEFAULT_COLOR);
    assert_eq!(h.voxels()[2].color, "#00ff00");
    assert_eq!(h.voxels()[2].position, [4.0, 0.0, 0.0]);
}

#[test]
fn test_delete_removes_every_duplicate_at_position() {
    let mut h = EditorHarness::new();
    // Two extra voxels at the same lattice cell
    h.state.store.replace_all(vec![
        fixtures::gray_voxel(0.0, 0.0, 0.0),
        fixtures::voxel("#112233", 2.0, 0.0, 0.0),
        fixtures::voxel("#445566", 2.0, 0.0, 0.0),
    ]);

    h.set_mode(ToolMode::Del);
    assert!(h.click_face(1, Face::Front));

    assert_eq!(h.voxel_count(), 1);
    assert!(h.voxels_at([2.0, 0.0, 0.0]).is_empty());
}

#[test]
fn test_delete_can_empty_the_store() {
    let mut h = EditorHarness::new();
    h.set_mode(ToolMode::Del);
    assert!(h.click_face(0, Face::Top));
    assert_eq!(h.voxel_count(), 0);
}

#[test]
fn test_draw_ignored_at_capacity() {
    let mut h = EditorHarness::new();
    h.state.store.replace_all(fixtures::full_slab());
    assert_eq!(h.voxel_count(), MAX_VOXELS);

    assert!(!h.click_face(0, Face::Top));
    assert_eq!(h.voxel_count(), MAX_VOXELS);
}

#[test]
fn test_delete_still_works_at_capacity() {
    let mut h = EditorHarness::new();
    h.state.store.replace_all(fixtures::full_slab());

    h.set_mode(ToolMode::Del);
    assert!(h.click_face(0, Face::Top));
    assert_eq!(h.voxel_count(), MAX_VOXELS - 1);
}

#[test]
fn test_stale_index_is_noop() {
    let mut h = EditorHarness::new();
    assert!(!h.click_face(5, Face::Top));
    assert_eq!(h.voxel_count(), 1);
}

#[test]
fn test_undo_redo_cycle() {
    let mut h = EditorHarness::new();
    h.click_face(0, Face::Top);
    h.click_face(1, Face::Top);
    assert_eq!(h.voxel_count(), 3);

    h.state.store.undo();
    assert_eq!(h.voxel_count(), 2);
    h.state.store.undo();
    assert_eq!(h.voxel_count(), 1);
    assert!(!h.state.store.can_undo());

    h.state.store.redo();
    h.state.store.redo();
    assert_eq!(h.voxel_count(), 3);
    assert!(!h.state.store.can_redo());
}

#[test]
fn test_new_mutation_clears_redo() {
    let mut h = EditorHarness::new();
    h.click_face(0, Face::Top);
    h.state.store.undo();
    assert!(h.state.store.can_redo());

    h.click_face(0, Face::Right);
    assert!(!h.state.store.can_redo());
}

#[test]
fn test_reset_restores_single_default_voxel() {
    let mut h = EditorHarness::new();
    h.set_color("#abcdef");
    h.click_face(0, Face::Left);
    h.click_face(0, Face::Right);

    h.reset();

    assert_eq!(h.voxels(), &[Voxel::origin_default()]);
    // Reset is itself undoable
    h.state.store.undo();
    assert_eq!(h.voxel_count(), 3);
}

#[test]
fn test_each_face_displaces_two_units_along_one_axis() {
    for face in Face::ALL {
        let mut h = EditorHarness::new();
        assert!(h.click_face(0, face), "{face:?}");
        let p = h.voxels()[1].position;
        let moved: Vec<f32> = p.iter().copied().filter(|c| *c != 0.0).collect();
        assert_eq!(moved.len(), 1, "{face:?} moved along {p:?}");
        assert_eq!(moved[0].abs(), 2.0, "{face:?}");
    }
}
