// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Name of the last successfully loaded CSV (status pill); empty before
    /// the first load.
    pub loaded_file: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self { loaded_file: s!() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
