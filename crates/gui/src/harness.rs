//! Headless test harness for programmatic editor manipulation.
//!
//! Drives the same state the GUI drives, without a window: face clicks,
//! mode/color changes, import/export and screen-space picking.

use egui::{Pos2, Rect};
use shared::codec::{self, ImportError};
use shared::{Face, Voxel};

use crate::state::{parse_color, AppState, ToolMode};
use crate::viewport::camera::OrbitCamera;
use crate::viewport::projection::{hit_test, project_store, sort_back_to_front};

/// Headless editor: application state plus a camera and a virtual screen.
pub struct EditorHarness {
    pub state: AppState,
    pub camera: OrbitCamera,
    pub rect: Rect,
}

impl EditorHarness {
    /// Fresh editor as the app starts it: one default voxel at the origin.
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            camera: OrbitCamera::new(),
            rect: Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0)),
        }
    }

    // ── Store inspection ──────────────────────────────────────

    pub fn voxel_count(&self) -> usize {
        self.state.store.len()
    }

    pub fn voxels(&self) -> &[Voxel] {
        self.state.store.voxels()
    }

    /// All voxels sitting at `position` (normally zero or one).
    pub fn voxels_at(&self, position: [f32; 3]) -> Vec<&Voxel> {
        self.voxels()
            .iter()
            .filter(|v| v.position == position)
            .collect()
    }

    // ── Tool state ────────────────────────────────────────────

    pub fn set_mode(&mut self, mode: ToolMode) {
        self.state.mode = mode;
    }

    /// Select the drawing color from a CSS spec. Returns false if the spec
    /// does not parse (selection left unchanged).
    pub fn set_color(&mut self, spec: &str) -> bool {
        match parse_color(spec) {
            Some(color) => {
                self.state.current_color = color;
                true
            }
            None => false,
        }
    }

    // ── Interaction ───────────────────────────────────────────

    /// Click a specific face of a specific voxel (bypasses picking).
    /// Returns whether the store changed.
    pub fn click_face(&mut self, voxel_index: usize, face: Face) -> bool {
        let color = self.state.current_color_hex();
        self.state
            .store
            .apply_face_click(voxel_index, face, self.state.mode, &color)
    }

    /// Full click pipeline: project, depth-sort, pick the topmost polygon
    /// under `pos`, then mutate. Returns the picked target, if any.
    pub fn click_at(&mut self, pos: Pos2) -> Option<(usize, Face)> {
        let mut faces = project_store(self.voxels(), &self.camera, self.rect);
        sort_back_to_front(&mut faces);
        let target = hit_test(&faces, pos)?;
        self.click_face(target.0, target.1);
        Some(target)
    }

    // ── Import / export ───────────────────────────────────────

    /// Validate and import; the store is replaced only on success.
    pub fn import_json(&mut self, text: &str) -> Result<(), ImportError> {
        let voxels = codec::import_json(text)?;
        self.state.store.replace_all(voxels);
        Ok(())
    }

    pub fn export_json(&self) -> String {
        codec::export_json(self.voxels())
    }

    pub fn reset(&mut self) {
        self.state.store.reset();
    }
}

impl Default for EditorHarness {
    fn default() -> Self {
        Self::new()
    }
}
