//! Voxel store: the ordered list of placed voxels, with undo/redo history.
//!
//! Every mutation is a whole-value replacement of the list, which makes the
//! history a plain stack of snapshots.

use shared::{Face, Voxel, MAX_VOXELS};

use super::ToolMode;

/// Ordered voxel list. Order is observable: import and export preserve it.
pub struct StoreState {
    voxels: Vec<Voxel>,
    /// Undo stack - previous states
    undo_stack: Vec<Vec<Voxel>>,
    /// Redo stack - undone states
    redo_stack: Vec<Vec<Voxel>>,
    /// Monotonically increasing version counter for cache invalidation
    version: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            voxels: vec![Voxel::origin_default()],
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            version: 0,
        }
    }
}

impl StoreState {
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Current store version (increments on every mutation).
    pub fn version(&self) -> u64 {
        self.version
    }

    /// How many voxels can still be added before the ceiling.
    pub fn remaining_capacity(&self) -> usize {
        MAX_VOXELS.saturating_sub(self.voxels.len())
    }

    /// Append a voxel. Silently ignored at capacity; duplicate positions are
    /// not rejected (deletion removes all voxels at a position at once).
    pub fn add(&mut self, voxel: Voxel) -> bool {
        if self.voxels.len() >= MAX_VOXELS {
            tracing::debug!("voxel limit reached, add ignored");
            return false;
        }
        self.save_undo();
        self.voxels.push(voxel);
        true
    }

    /// Remove every voxel at `position`. Returns how many were removed.
    pub fn remove_at(&mut self, position: [f32; 3]) -> usize {
        let before = self.voxels.len();
        if !self.voxels.iter().any(|v| v.position == position) {
            return 0;
        }
        self.save_undo();
        self.voxels.retain(|v| v.position != position);
        before - self.voxels.len()
    }

    /// Replace the whole store (successful import).
    pub fn replace_all(&mut self, voxels: Vec<Voxel>) {
        self.save_undo();
        self.voxels = voxels;
    }

    /// Restore the single default voxel at the origin.
    pub fn reset(&mut self) {
        self.replace_all(vec![Voxel::origin_default()]);
    }

    /// Apply a face click: the whole of the interaction controller's mutation
    /// semantics. Returns whether the store changed. A stale index (the store
    /// mutated since the faces were projected) is a no-op.
    pub fn apply_face_click(
        &mut self,
        voxel_index: usize,
        face: Face,
        mode: ToolMode,
        color: &str,
    ) -> bool {
        let Some(target) = self.voxels.get(voxel_index) else {
            return false;
        };
        match mode {
            ToolMode::Del => self.remove_at(target.position) > 0,
            ToolMode::Draw => {
                let position = face.next_position(target.position);
                self.add(Voxel::new(color, position))
            }
        }
    }

    // ── History ───────────────────────────────────────────────

    fn save_undo(&mut self) {
        self.undo_stack.push(self.voxels.clone());
        if self.undo_stack.len() > 100 {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
        self.version += 1;
    }

    /// Undo last change
    pub fn undo(&mut self) {
        if let Some(prev) = self.undo_stack.pop() {
            self.redo_stack.push(std::mem::replace(&mut self.voxels, prev));
            self.version += 1;
        }
    }

    /// Redo last undone change
    pub fn redo(&mut self) {
        if let Some(next) = self.redo_stack.pop() {
            self.undo_stack.push(std::mem::replace(&mut self.voxels, next));
            self.version += 1;
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
