//! File operation methods
//!
//! User actions that touch files on disk:
//! - Delete the current image
//! - Copy the current image into a category

use crate::actions::CopyOutcome;
use crate::{actions, log_debug, App};

impl App {
    /// Delete the current image and move on
    ///
    /// The cursor advances whether or not the removal worked; a failure
    /// is surfaced as a toast instead of blocking the review.
    pub(crate) fn delete_current(&mut self) {
        let name = self
            .model
            .current_image()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned());

        match actions::delete_current(&mut self.model.navigation, &self.checklist) {
            Ok(()) => {}
            Err(e) => {
                let name = name.unwrap_or_else(|| "image".to_string());
                log_debug(&format!("Delete failed for {}: {}", name, e));
                self.model
                    .show_toast(format!("Error: Failed to delete {}: {}", name, e));
            }
        }

        self.reload_preview();
    }

    /// Copy the current image into the category bound to a digit key
    pub(crate) fn copy_to_category(&mut self, digit: char) {
        let Some(binding) =
            crate::logic::category::binding_for_digit(&self.categories, digit).cloned()
        else {
            return;
        };

        match actions::copy_current_to_category(
            &self.model.navigation,
            &self.sorted_root,
            &binding.dir_name,
        ) {
            Ok(CopyOutcome::Copied) => {
                self.model.show_toast(format!("Copied to {}", binding.dir_name));
            }
            Ok(CopyOutcome::SourceVanished) => {
                // The file went away between display and keystroke; nothing to report
                log_debug(&format!(
                    "Copy skipped, source vanished: {:?}",
                    self.model.current_image()
                ));
            }
            Ok(CopyOutcome::NothingToCopy) => {}
            Err(e) => {
                self.model
                    .show_toast(format!("Error: Failed to copy to {}: {}", binding.dir_name, e));
            }
        }
    }
}
