// src/gui/pages/mod.rs
use eframe::egui;

use crate::gui::app::App;

pub mod standings;
pub mod team_dash;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;

    /// Draw the page body (below tabs and notices).
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App) {}
}
