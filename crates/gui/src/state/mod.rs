pub mod store;

pub use store::StoreState;

use egui::Color32;

/// What a click on a voxel face does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    /// Add a voxel on the clicked side.
    Draw,
    /// Remove the clicked voxel.
    Del,
}

/// Combined application state: the voxel store plus the UI-facing bits.
pub struct AppState {
    pub store: StoreState,
    pub mode: ToolMode,
    /// Color applied to newly drawn voxels.
    pub current_color: Color32,
    /// Pending user-facing error, shown as a blocking alert.
    pub alert: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: StoreState::default(),
            mode: ToolMode::Draw,
            current_color: parse_color(shared::DEFAULT_COLOR)
                .unwrap_or(Color32::LIGHT_GRAY),
            alert: None,
        }
    }
}

impl AppState {
    /// The selected color as a CSS hex string (what new voxels store).
    pub fn current_color_hex(&self) -> String {
        let c = self.current_color;
        format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
    }

    /// Queue a user-facing error message for the alert window.
    pub fn raise_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }
}

/// Resolve a CSS color spec to an egui color, opaque.
pub fn parse_color(spec: &str) -> Option<Color32> {
    shared::codec::color_rgba8(spec).map(|[r, g, b, _]| Color32::from_rgb(r, g, b))
}
