//! Folder scanning
//!
//! Enumerates the image files of a single folder and the category
//! subdirectories of the sorted root. Scanning never fails: unreadable
//! directories simply yield empty results.

use std::path::{Path, PathBuf};

use crate::logic;

/// File extensions the bundled image decoders can read
///
/// Derived from the codecs compiled into the image crate, so the
/// allowlist always matches what the viewer can actually open.
pub fn supported_extensions() -> Vec<&'static str> {
    image::ImageFormat::all()
        .filter(|format| format.reading_enabled())
        .flat_map(|format| format.extensions_str())
        .copied()
        .collect()
}

/// List the image files directly inside `dir`
///
/// Non-recursive: subdirectories are skipped, not descended into.
/// Entries keep the order the directory listing returns them in.
/// An unreadable or missing directory yields an empty vector.
pub fn scan_folder(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let extensions = supported_extensions();
    let mut images = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() && logic::file::has_supported_extension(&path, &extensions) {
            images.push(path);
        }
    }
    images
}

/// List the subdirectory names of the sorted root
///
/// Each subdirectory is a sorting category. Files inside the root are
/// ignored. A missing root yields an empty vector; categories appear
/// once the user creates the directories.
pub fn scan_categories(root: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut names = Vec::new();
    for entry in entries.flatten() {
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names
}
