//! Main application module

mod keyboard;
mod styles;

use eframe::egui;
use shared::Voxel;

use crate::state::AppState;
use crate::ui::{alert, status_bar, toolbar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct VoxelApp {
    state: AppState,
    viewport: ViewportPanel,
}

impl VoxelApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial_voxels: Option<Vec<Voxel>>) -> Self {
        let mut state = AppState::default();

        if let Some(voxels) = initial_voxels {
            tracing::info!("Starting with {} imported voxels", voxels.len());
            state.store.replace_all(voxels);
        }

        styles::configure_styles(&cc.egui_ctx);

        Self {
            state,
            viewport: ViewportPanel::new(),
        }
    }
}

impl eframe::App for VoxelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport);

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state);
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Central panel: voxel viewport ────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });

        // ── Blocking error alert ─────────────────────────────
        alert::show(ctx, &mut self.state);
    }
}
