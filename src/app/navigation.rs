//! Folder and cursor methods
//!
//! Methods that move the review along: selecting a folder, stepping
//! through images, and the folder prompt lifecycle.

use crate::{actions, log_debug, App};
use std::path::{Path, PathBuf};

impl App {
    /// Open a folder and position the cursor for review
    pub(crate) fn select_folder(&mut self, path: &Path) {
        actions::select_folder(&mut self.model.navigation, &self.checklist, path);
        log_debug(&format!(
            "Selected folder {:?}: {} images, {} already reviewed",
            self.model.navigation.folder,
            self.model.navigation.len(),
            self.model.navigation.reviewed_count()
        ));
        self.reload_preview();
    }

    /// Mark the current image reviewed and advance with wraparound
    pub(crate) fn show_next(&mut self) {
        actions::show_next(&mut self.model.navigation, &self.checklist);
        self.reload_preview();
    }

    /// Step back with wraparound; nothing is marked reviewed
    pub(crate) fn show_previous(&mut self) {
        actions::show_previous(&mut self.model.navigation);
        self.reload_preview();
    }

    /// Jump straight to an index; nothing is marked reviewed
    pub(crate) fn jump_to(&mut self, index: usize) {
        actions::jump_to(&mut self.model.navigation, index);
        self.reload_preview();
    }

    /// Move the cursor by a signed amount, clamped to the set bounds
    pub(crate) fn jump_by(&mut self, delta: isize) {
        let len = self.model.navigation.len();
        if len == 0 {
            return;
        }
        let current = self.model.navigation.cursor as isize;
        let target = (current + delta).clamp(0, len as isize - 1);
        self.jump_to(target as usize);
    }

    /// Open the folder prompt, pre-filled with the current folder
    pub(crate) fn open_folder_prompt(&mut self) {
        let initial = self
            .model
            .navigation
            .folder
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.model.ui.open_prompt(initial);
    }

    /// Accept the folder prompt input and select the folder
    pub(crate) fn submit_folder_prompt(&mut self) {
        let input = self.model.ui.prompt_input.trim().to_string();
        self.model.ui.close_prompt();

        if input.is_empty() {
            return;
        }

        let path = expand_home(&input);
        if !path.is_dir() {
            self.model
                .show_toast(format!("Error: Not a folder: {}", input));
            return;
        }

        self.select_folder(&path);
    }

    /// Dismiss the folder prompt without acting
    pub(crate) fn cancel_folder_prompt(&mut self) {
        self.model.ui.close_prompt();
    }
}

/// Expand a leading "~" to the home directory
fn expand_home(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}
