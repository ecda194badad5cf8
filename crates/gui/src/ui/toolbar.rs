//! Toolbar actions and UI

use egui::Ui;
use shared::codec;

use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::{AppState, ToolMode};

// ── Public actions (callable from shortcuts too) ─────────────

pub fn action_export(state: &mut AppState) {
    if state.store.is_empty() {
        return;
    }
    let Some(path) = rfd::FileDialog::new()
        .set_title(t("dialog.export_title"))
        .add_filter("JSON", &["json"])
        .set_file_name("Voxel.json")
        .save_file()
    else {
        return;
    };

    let json = codec::export_json(state.store.voxels());
    if let Err(e) = std::fs::write(&path, json) {
        tracing::error!("Failed to write voxel file: {e}");
        state.raise_alert(format!("{e}"));
    } else {
        tracing::info!("Exported {} voxels to {}", state.store.len(), path.display());
    }
}

pub fn action_import(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title(t("dialog.import_title"))
        .add_filter("JSON", &["json", "txt"])
        .pick_file()
    else {
        return;
    };

    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            let err = codec::ImportError::Read(e.to_string());
            tracing::error!("Failed to read voxel file: {e}");
            state.raise_alert(err.to_string());
            return;
        }
    };

    match codec::import_json(&json) {
        Ok(voxels) => {
            tracing::info!("Imported {} voxels from {}", voxels.len(), path.display());
            state.store.replace_all(voxels);
        }
        Err(e) => {
            tracing::error!("Import rejected: {e}");
            state.raise_alert(e.to_string());
        }
    }
}

// ── Toolbar UI ───────────────────────────────────────────────

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // ── Color picker ──
        ui.label(t("tb.color"));
        egui::color_picker::color_edit_button_srgba(
            ui,
            &mut state.current_color,
            egui::color_picker::Alpha::Opaque,
        )
        .on_hover_text(t("tip.color"));

        ui.separator();

        // ── Tool mode (mutually exclusive) ──
        if ui
            .add_enabled(state.mode != ToolMode::Draw, egui::Button::new(t("tb.draw")))
            .on_hover_text(t("tip.draw"))
            .clicked()
        {
            state.mode = ToolMode::Draw;
        }
        if ui
            .add_enabled(state.mode != ToolMode::Del, egui::Button::new(t("tb.del")))
            .on_hover_text(t("tip.del"))
            .clicked()
        {
            state.mode = ToolMode::Del;
        }

        ui.separator();

        // ── History buttons ──
        if ui
            .add_enabled(state.store.can_undo(), egui::Button::new(t("tb.undo")))
            .clicked()
        {
            state.store.undo();
        }
        if ui
            .add_enabled(state.store.can_redo(), egui::Button::new(t("tb.redo")))
            .clicked()
        {
            state.store.redo();
        }

        ui.separator();

        // ── File actions ──
        if ui
            .add_enabled(!state.store.is_empty(), egui::Button::new(t("tb.export")))
            .on_hover_text(t("tip.export"))
            .clicked()
        {
            action_export(state);
        }
        if ui.button(t("tb.import")).on_hover_text(t("tip.import")).clicked() {
            action_import(state);
        }

        ui.separator();

        if ui.button(t("tb.reset")).on_hover_text(t("tip.reset")).clicked() {
            state.store.reset();
        }

        // ── Language toggle (right-aligned) ──
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.selectable_label(lang() == Lang::Ru, "RU").clicked() {
                set_lang(Lang::Ru);
            }
            if ui.selectable_label(lang() == Lang::En, "EN").clicked() {
                set_lang(Lang::En);
            }
        });
    });
}
