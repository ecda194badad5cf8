//! Viewport panel: camera input routing, face picking and painting.
//!
//! Rendering is a pure software path: project every cube face, depth-sort
//! them and paint back to front with the egui painter.

use eframe::egui::{self, Ui};
use shared::codec;

use voxl_gui_lib::viewport::camera::OrbitCamera;
use voxl_gui_lib::viewport::projection::{self, ProjectedFace};

use crate::i18n::t;
use crate::state::AppState;

const DRAG_ROTATE_FACTOR: f32 = 0.5;
const SCROLL_ROTATE_FACTOR: f32 = 0.5;
const SCROLL_ZOOM_FACTOR: f32 = 0.5;

/// Per-face brightness, indexed by `Face as usize`. Front is full-bright,
/// side and bottom faces darken so adjacent faces stay distinguishable.
const FACE_SHADE: [f32; 6] = [1.0, 0.80, 0.70, 0.55, 0.60, 0.90];

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(24, 24, 28);
const OUTLINE: egui::Color32 = egui::Color32::from_rgb(20, 20, 22);
const FALLBACK_FILL: egui::Color32 = egui::Color32::from_rgb(128, 128, 128);

pub struct ViewportPanel {
    camera: OrbitCamera,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::new(),
        }
    }

    pub fn reset_camera(&mut self) {
        self.camera = OrbitCamera::new();
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(
            ui.available_size(),
            egui::Sense::click_and_drag(),
        );

        self.handle_camera_input(ui, rect, &response);

        let mut faces = projection::project_store(state.store.voxels(), &self.camera, rect);
        projection::sort_back_to_front(&mut faces);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((voxel, face)) = projection::hit_test(&faces, pos) {
                    let color = state.current_color_hex();
                    if state.store.apply_face_click(voxel, face, state.mode, &color) {
                        // Repaint from the mutated store so the click's
                        // effect is visible this frame.
                        faces =
                            projection::project_store(state.store.voxels(), &self.camera, rect);
                        projection::sort_back_to_front(&mut faces);
                    }
                }
            }
        }

        self.paint(ui, rect, state, &faces);
    }

    fn handle_camera_input(&mut self, ui: &Ui, rect: egui::Rect, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.camera
                .rotate(delta.x * DRAG_ROTATE_FACTOR, delta.y * DRAG_ROTATE_FACTOR);
        }
        if response.dragged_by(egui::PointerButton::Secondary) {
            self.camera.pan(response.drag_delta());
        }

        let pointer_over = ui
            .input(|i| i.pointer.hover_pos())
            .is_some_and(|p| rect.contains(p));
        if pointer_over {
            let (scroll, zoom_modifier) =
                ui.input(|i| (i.smooth_scroll_delta, i.modifiers.command));
            if scroll != egui::Vec2::ZERO {
                if zoom_modifier {
                    // Dominant wheel axis drives the zoom step.
                    let step = if scroll.y.abs() >= scroll.x.abs() {
                        scroll.y
                    } else {
                        scroll.x
                    };
                    self.camera.zoom(step * SCROLL_ZOOM_FACTOR);
                } else {
                    self.camera
                        .rotate(scroll.x * SCROLL_ROTATE_FACTOR, scroll.y * SCROLL_ROTATE_FACTOR);
                }
            }
        }
    }

    fn paint(&self, ui: &Ui, rect: egui::Rect, state: &AppState, faces: &[ProjectedFace]) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND);

        for pf in faces {
            let base = state
                .store
                .voxels()
                .get(pf.voxel)
                .and_then(|v| codec::color_rgba8(&v.color))
                .map(|[r, g, b, _]| egui::Color32::from_rgb(r, g, b))
                .unwrap_or(FALLBACK_FILL);
            let fill = shade(base, FACE_SHADE[pf.face as usize]);
            painter.add(egui::Shape::convex_polygon(
                pf.points.to_vec(),
                fill,
                egui::Stroke::new(1.0, OUTLINE),
            ));
        }

        self.draw_camera_info(&painter, rect);

        if state.store.is_empty() {
            painter.text(
                egui::pos2(rect.center().x, rect.bottom() - 20.0),
                egui::Align2::CENTER_BOTTOM,
                t("hint.nav"),
                egui::FontId::proportional(11.0),
                egui::Color32::from_rgb(100, 100, 110),
            );
        }
    }

    fn draw_camera_info(&self, painter: &egui::Painter, rect: egui::Rect) {
        let overlay_rect = egui::Rect::from_min_size(
            egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
            egui::vec2(136.0, 44.0),
        );
        painter.rect_filled(
            overlay_rect,
            4.0,
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
        );
        painter.text(
            overlay_rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!(
                "Scale: {:.0}\nAz: {:.0}  El: {:.0}",
                self.camera.scale, self.camera.azimuth, self.camera.elevation,
            ),
            egui::FontId::monospace(10.0),
            egui::Color32::from_rgb(160, 160, 170),
        );
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn shade(color: egui::Color32, factor: f32) -> egui::Color32 {
    let scale = |c: u8| (c as f32 * factor).round() as u8;
    egui::Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Face;

    #[test]
    fn shade_full_factor_is_identity() {
        let c = egui::Color32::from_rgb(213, 213, 213);
        assert_eq!(shade(c, 1.0), c);
    }

    #[test]
    fn shade_darkens_each_channel() {
        let c = shade(egui::Color32::from_rgb(200, 100, 50), 0.5);
        assert_eq!(c, egui::Color32::from_rgb(100, 50, 25));
    }

    #[test]
    fn every_face_has_a_shade_entry() {
        for face in Face::ALL {
            let factor = FACE_SHADE[face as usize];
            assert!(factor > 0.0 && factor <= 1.0);
        }
    }
}
