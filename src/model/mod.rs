//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models for maintainability:
//!
//! - **NavigationModel**: Image set, cursor, reviewed and deleted sets
//! - **UiModel**: User preferences, folder prompt, visual state
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No I/O: File operations live in the actions layer and the binary
//! - Pure accessors: Helper methods are side-effect free

pub mod navigation;
pub mod types;
pub mod ui;

pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

use std::path::PathBuf;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Review state (image set, cursor, reviewed and deleted sets)
    pub navigation: NavigationModel,

    /// UI preferences and visual state
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool) -> Self {
        Self {
            navigation: NavigationModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Get the image under the cursor (if any)
    pub fn current_image(&self) -> Option<&PathBuf> {
        self.navigation.current()
    }

    /// Check if a modal input surface is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(false);
        assert!(model.navigation.images.is_empty());
        assert_eq!(model.navigation.cursor, 0);
        assert!(!model.ui.vim_mode);
        assert!(model.current_image().is_none());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(false);
        let _cloned = model.clone();
    }

    #[test]
    fn test_has_modal() {
        let mut model = Model::new(false);
        assert!(!model.has_modal());

        model.ui.prompt_mode = true;
        assert!(model.has_modal());
    }

    #[test]
    fn test_toast() {
        let mut model = Model::new(false);
        assert!(model.ui.toast_message.is_none());

        model.show_toast("Test".to_string());
        assert!(model.ui.toast_message.is_some());

        model.dismiss_toast();
        assert!(model.ui.toast_message.is_none());
    }

    #[test]
    fn test_vim_command_state() {
        let model = Model::new(false);
        assert_eq!(model.ui.vim_command_state, VimCommandState::None);
    }
}
