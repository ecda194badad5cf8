//! Blocking error alert window

use eframe::egui;

use crate::i18n::t;
use crate::state::AppState;

/// Show the pending alert, if any. The window stays up until dismissed.
pub fn show(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.alert.clone() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(t("alert.title"))
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(&message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button(t("alert.ok")).clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        state.alert = None;
    }
}
