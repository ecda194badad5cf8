// Library crate: exposes the headless-testable modules for integration tests.
// GUI-specific modules (app shell, ui panels, the interactive viewport) remain
// in the binary crate.

pub mod fixtures;
pub mod harness;
pub mod state;

/// Viewport math usable without a window: camera, cube geometry, projection
/// and hit testing. The interactive panel itself stays in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod mesh;
    pub mod projection;
}
