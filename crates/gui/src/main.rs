mod app;
mod i18n;
mod ui;
mod viewport;

// Re-export the library state module so that `crate::state` resolves to the
// lib crate types everywhere in the binary.
pub use voxl_gui_lib::state;

use app::VoxelApp;
use shared::Voxel;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voxl_gui=info".into()),
        )
        .init();

    // Parse --file <path> argument
    let initial_voxels = parse_file_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Voxl — Voxel Editor")
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "voxl-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(VoxelApp::new(cc, initial_voxels)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_file_arg() -> Option<Vec<Voxel>> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--file" && i + 1 < args.len() {
            let path = &args[i + 1];
            match std::fs::read_to_string(path) {
                Ok(text) => match shared::codec::import_json(&text) {
                    Ok(voxels) => {
                        tracing::info!("Loaded {} voxels from {path}", voxels.len());
                        return Some(voxels);
                    }
                    Err(e) => {
                        tracing::error!("Failed to import voxels from {path}: {e}");
                    }
                },
                Err(e) => {
                    tracing::error!("Failed to read voxel file {path}: {e}");
                }
            }
            break;
        }
        i += 1;
    }
    None
}
