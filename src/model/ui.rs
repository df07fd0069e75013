//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, the folder prompt, and visual state.

use std::time::Instant;

use super::types::VimCommandState;

/// UI preferences, prompt, and visual state
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    // ============================================
    // FOLDER PROMPT
    // ============================================
    /// Whether the folder prompt is active (receiving keystrokes)
    pub prompt_mode: bool,

    /// Current folder prompt input
    pub prompt_input: String,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Sixel cleanup counter (clear the terminal for N frames)
    pub sixel_cleanup_frames: u8,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            prompt_mode: false,
            prompt_input: String::new(),
            toast_message: None,
            sixel_cleanup_frames: 0,
            should_quit: false,
        }
    }

    /// Check if a modal input surface is currently showing
    pub fn has_modal(&self) -> bool {
        self.prompt_mode
    }

    /// Open the folder prompt with a starting value
    pub fn open_prompt(&mut self, initial: String) {
        self.prompt_mode = true;
        self.prompt_input = initial;
    }

    /// Close the folder prompt and clear its input
    pub fn close_prompt(&mut self) {
        self.prompt_mode = false;
        self.prompt_input.clear();
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed (older than the toast duration)
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false);
        assert!(!model.vim_mode);
        assert!(!model.prompt_mode);
        assert!(model.toast_message.is_none());
        assert!(!model.should_quit);
    }

    #[test]
    fn test_has_modal() {
        let mut model = UiModel::new(false);
        assert!(!model.has_modal());

        model.prompt_mode = true;
        assert!(model.has_modal());
    }

    #[test]
    fn test_prompt_lifecycle() {
        let mut model = UiModel::new(false);

        model.open_prompt("/pics".to_string());
        assert!(model.prompt_mode);
        assert_eq!(model.prompt_input, "/pics");

        model.close_prompt();
        assert!(!model.prompt_mode);
        assert!(model.prompt_input.is_empty());
    }

    #[test]
    fn test_prompt_input_can_be_built_incrementally() {
        let mut model = UiModel::new(false);
        model.open_prompt(String::new());

        // Simulate typing character by character
        model.prompt_input.push('/');
        assert_eq!(model.prompt_input, "/");

        model.prompt_input.push('t');
        model.prompt_input.push('m');
        model.prompt_input.push('p');
        assert_eq!(model.prompt_input, "/tmp");
    }

    #[test]
    fn test_prompt_input_can_be_cleared_with_backspace() {
        let mut model = UiModel::new(false);
        model.open_prompt("/tmp".to_string());

        // Simulate backspace
        model.prompt_input.pop();
        assert_eq!(model.prompt_input, "/tm");

        model.prompt_input.pop();
        model.prompt_input.pop();
        model.prompt_input.pop();
        assert!(model.prompt_input.is_empty());
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false);
        assert!(model.toast_message.is_none());

        model.show_toast("Test".to_string());
        assert!(model.toast_message.is_some());
        assert!(!model.should_dismiss_toast()); // Fresh toast stays up

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
        assert!(!model.should_dismiss_toast());
    }

    #[test]
    fn test_vim_command_state_default() {
        let model = UiModel::new(true);
        assert!(model.vim_mode);
        assert_eq!(model.vim_command_state, VimCommandState::None);
    }

    #[test]
    fn test_ui_model_is_cloneable() {
        let model = UiModel::new(false);
        let _cloned = model.clone();
    }
}
