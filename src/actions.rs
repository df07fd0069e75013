//! Review actions
//!
//! The operations a keystroke triggers, expressed over the navigation
//! model and the checkpoint store. The binary wires these to keys and
//! renders the outcome; tests drive them directly with no terminal.

use std::path::Path;

use crate::checklist::ChecklistStore;
use crate::logic;
use crate::model::NavigationModel;
use crate::scanner;

/// What happened to a copy request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The image now exists under the category directory
    Copied,
    /// The source file disappeared before it could be copied; nothing to report
    SourceVanished,
    /// The working set is empty, there was nothing to copy
    NothingToCopy,
}

/// Open a folder for review
///
/// Scans the folder, merges the checkpoint, and positions the cursor on
/// the first unreviewed image. The folder path is canonicalized first so
/// checkpoint entries keep one spelling across sessions.
pub fn select_folder(nav: &mut NavigationModel, store: &ChecklistStore, folder: &Path) {
    let folder = folder
        .canonicalize()
        .unwrap_or_else(|_| folder.to_path_buf());
    let images = scanner::scan_folder(&folder);
    let reviewed = store.load(&images);
    nav.load_folder(folder, images, reviewed);
}

/// Advance to the next image
///
/// Marks the current image reviewed, both in memory and in the
/// checkpoint file, then moves the cursor forward with wraparound.
/// A no-op on an empty working set.
pub fn show_next(nav: &mut NavigationModel, store: &ChecklistStore) {
    let Some(current) = nav.current().cloned() else {
        return;
    };

    nav.reviewed.insert(current.clone());
    store.mark_reviewed(&current);

    if let Some(next) = logic::navigation::advance_index(nav.cursor, nav.images.len()) {
        nav.cursor = next;
    }
}

/// Step back to the previous image
///
/// Moves the cursor backward with wraparound. Nothing is marked
/// reviewed; only forward movement records progress.
pub fn show_previous(nav: &mut NavigationModel) {
    if let Some(prev) = logic::navigation::retreat_index(nav.cursor, nav.images.len()) {
        nav.cursor = prev;
    }
}

/// Jump straight to an image by index
///
/// Out-of-bounds indices are ignored. Nothing is marked reviewed.
pub fn jump_to(nav: &mut NavigationModel, index: usize) {
    if index < nav.images.len() {
        nav.cursor = index;
    }
}

/// Delete the current image from disk, then advance
///
/// The cursor advances exactly as in [`show_next`] whether or not the
/// removal succeeded, so one undeletable file cannot pin the review.
/// The image keeps its slot in the working set and is remembered in the
/// session's deleted set only when the file actually went away.
/// The caller decides how to surface a returned error.
pub fn delete_current(nav: &mut NavigationModel, store: &ChecklistStore) -> std::io::Result<()> {
    let Some(current) = nav.current().cloned() else {
        return Ok(());
    };

    let removed = std::fs::remove_file(&current);
    if removed.is_ok() {
        nav.deleted.insert(current);
    }

    show_next(nav, store);
    removed
}

/// Copy the current image into a category directory
///
/// Creates `sorted_root/dir_name` if needed, then copies the file under
/// its own name, preserving the modification time. Re-copying the same
/// image overwrites the earlier copy instead of creating a duplicate.
/// A source that vanished between display and keystroke is reported as
/// [`CopyOutcome::SourceVanished`], not as an error. The cursor and the
/// reviewed set are never touched.
pub fn copy_current_to_category(
    nav: &NavigationModel,
    sorted_root: &Path,
    dir_name: &str,
) -> std::io::Result<CopyOutcome> {
    let Some(source) = nav.current() else {
        return Ok(CopyOutcome::NothingToCopy);
    };
    let Some(file_name) = source.file_name() else {
        return Ok(CopyOutcome::NothingToCopy);
    };

    let destination_dir = sorted_root.join(dir_name);
    std::fs::create_dir_all(&destination_dir)?;

    let source_meta = match std::fs::metadata(source) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(CopyOutcome::SourceVanished)
        }
        Err(e) => return Err(e),
    };

    let destination = destination_dir.join(file_name);
    match std::fs::copy(source, &destination) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(CopyOutcome::SourceVanished)
        }
        Err(e) => return Err(e),
    }

    if let Ok(modified) = source_meta.modified() {
        let dest_file = std::fs::OpenOptions::new().write(true).open(&destination)?;
        dest_file.set_modified(modified)?;
    }

    Ok(CopyOutcome::Copied)
}
