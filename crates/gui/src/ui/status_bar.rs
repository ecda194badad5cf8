use egui::Ui;
use shared::SOFT_LIMIT;

use crate::i18n::t;
use crate::state::{AppState, ToolMode};

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let count = state.store.len();
        ui.weak(format!("{}: {count}", t("status.voxels")));

        // Countdown once the scene approaches the hard cap
        if count > SOFT_LIMIT {
            ui.separator();
            let remaining = state.store.remaining_capacity();
            let color = if remaining == 0 {
                egui::Color32::from_rgb(230, 90, 90)
            } else {
                egui::Color32::from_rgb(255, 200, 100)
            };
            ui.colored_label(color, format!("{}: {remaining}", t("status.remaining")));
        }

        ui.separator();

        let mode_label = match state.mode {
            ToolMode::Draw => t("status.mode_draw"),
            ToolMode::Del => t("status.mode_del"),
        };
        ui.label(format!("{}: {mode_label}", t("status.mode")));

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("Voxl v0.1");
        });
    });
}
