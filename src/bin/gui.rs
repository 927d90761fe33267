// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use corn_stats::{config::{settings, state::GuiState}, gui, log, loge};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init();

    let app_options = settings::load().unwrap_or_else(|e| {
        loge!("Config: {} (using defaults)", e);
        Default::default()
    });

    let gui = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Corn Liga North")
            .with_inner_size([gui.window_w as f32, gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, app_options) {
        loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
