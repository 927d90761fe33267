// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Team shown in the "Team details" panel (by name)
    pub selected_team: Option<String>,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Side panel → glossary expanded
    pub show_glossary: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_team: None,
            window_w: 1280,
            window_h: 800,
            current_page_index: 0,
            show_glossary: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn with_options(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
