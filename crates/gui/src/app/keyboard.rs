//! Keyboard shortcut handling

use eframe::egui;

use crate::state::{AppState, ToolMode};
use crate::ui::toolbar;
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState, viewport: &mut ViewportPanel) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let mut export_requested = false;

    ctx.input(|i| {
        // Ctrl+Z — undo
        if i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift {
            state.store.undo();
        }
        // Ctrl+Shift+Z or Ctrl+Y — redo
        if (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
            || (i.modifiers.command && i.key_pressed(egui::Key::Y))
        {
            state.store.redo();
        }
        // D — draw mode
        if i.key_pressed(egui::Key::D) && !i.modifiers.command {
            state.mode = ToolMode::Draw;
        }
        // X — delete mode
        if i.key_pressed(egui::Key::X) && !i.modifiers.command {
            state.mode = ToolMode::Del;
        }
        // Ctrl+E — export
        if i.modifiers.command && i.key_pressed(egui::Key::E) {
            export_requested = true;
        }
        // Home — reset camera
        if i.key_pressed(egui::Key::Home) {
            viewport.reset_camera();
        }
        // Escape — dismiss alert
        if i.key_pressed(egui::Key::Escape) {
            state.alert = None;
        }
    });

    // File dialog must run outside the input closure.
    if export_requested {
        toolbar::action_export(state);
    }
}
