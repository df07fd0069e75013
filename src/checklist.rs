//! Reviewed-image checkpoint store
//!
//! Persists the set of reviewed images as a flat text file, one absolute
//! path per line. The file lives next to the executable by default so the
//! review position survives restarts without any database.
//!
//! A single process owns the file. Concurrent writers can drop entries;
//! that trade-off is accepted for a single-user desktop tool.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the checkpoint file placed next to the executable
pub const CHECKLIST_FILE_NAME: &str = "checked_images.txt";

/// Flat-file store for the reviewed-image checkpoint
#[derive(Clone, Debug)]
pub struct ChecklistStore {
    path: PathBuf,
}

impl ChecklistStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default checkpoint location: next to the executable
    ///
    /// Falls back to the working directory when the executable path
    /// cannot be resolved.
    pub fn default_path() -> PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(CHECKLIST_FILE_NAME)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the subset of `known` paths recorded in the checkpoint file
    ///
    /// Called when a folder is opened to pre-mark its images as reviewed.
    /// A missing or unreadable file yields an empty set; the checkpoint
    /// is an aid, never a reason to fail.
    pub fn load(&self, known: &[PathBuf]) -> HashSet<PathBuf> {
        let entries = self.read_entries();
        known
            .iter()
            .filter(|path| entries.contains(path.as_path()))
            .cloned()
            .collect()
    }

    /// Record a path as reviewed
    ///
    /// Re-reads the file first so a path is never written twice, then
    /// appends a single line. Write errors are swallowed: losing a
    /// checkpoint entry only costs a repeat review after restart.
    ///
    /// Paths are stored as display strings; non-UTF-8 file names do not
    /// round-trip exactly.
    pub fn mark_reviewed(&self, path: &Path) {
        let entries = self.read_entries();
        if entries.contains(path) {
            return;
        }

        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            let _ = writeln!(file, "{}", path.display());
        }
    }

    fn read_entries(&self) -> HashSet<PathBuf> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(PathBuf::from)
                .collect(),
            Err(_) => HashSet::new(),
        }
    }
}
