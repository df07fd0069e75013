//! Navigation Model
//!
//! This sub-model contains all state related to reviewing a folder:
//! the image set, the cursor, and the reviewed and deleted path sets.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::logic;

/// Review state for the currently selected folder
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Folder currently being reviewed (None before the first selection)
    pub folder: Option<PathBuf>,

    /// Images in the folder, in listing order; deleted images keep their slot
    pub images: Vec<PathBuf>,

    /// Index of the image currently shown (meaningless when `images` is empty)
    pub cursor: usize,

    /// Paths already reviewed, merged from the checkpoint file
    pub reviewed: HashSet<PathBuf>,

    /// Paths deleted during this session; cleared when a new folder is selected
    pub deleted: HashSet<PathBuf>,
}

impl NavigationModel {
    /// Create initial empty navigation model
    pub fn new() -> Self {
        Self {
            folder: None,
            images: Vec::new(),
            cursor: 0,
            reviewed: HashSet::new(),
            deleted: HashSet::new(),
        }
    }

    /// Replace the working set with a freshly scanned folder
    ///
    /// The cursor resumes at the first unreviewed image, or the first
    /// image when everything was already reviewed.
    pub fn load_folder(&mut self, folder: PathBuf, images: Vec<PathBuf>, reviewed: HashSet<PathBuf>) {
        self.cursor = logic::navigation::first_unreviewed(&images, &reviewed);
        self.folder = Some(folder);
        self.images = images;
        self.reviewed = reviewed;
        self.deleted.clear();
    }

    /// Get the image under the cursor if any
    pub fn current(&self) -> Option<&PathBuf> {
        self.images.get(self.cursor)
    }

    /// Number of images in the working set, deleted ones included
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Check whether the working set is empty
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Check whether an image has been reviewed
    pub fn is_reviewed(&self, path: &Path) -> bool {
        self.reviewed.contains(path)
    }

    /// Check whether an image was deleted this session
    pub fn is_deleted(&self, path: &Path) -> bool {
        self.deleted.contains(path)
    }

    /// Count the images in the working set that have been reviewed
    pub fn reviewed_count(&self) -> usize {
        self.images
            .iter()
            .filter(|path| self.reviewed.contains(*path))
            .count()
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_images() -> Vec<PathBuf> {
        vec![
            PathBuf::from("/pics/a.jpg"),
            PathBuf::from("/pics/b.jpg"),
            PathBuf::from("/pics/c.jpg"),
        ]
    }

    #[test]
    fn test_navigation_model_creation() {
        let model = NavigationModel::new();
        assert!(model.folder.is_none());
        assert!(model.images.is_empty());
        assert_eq!(model.cursor, 0);
        assert!(model.current().is_none());
    }

    #[test]
    fn test_load_folder_starts_at_first_unreviewed() {
        let mut model = NavigationModel::new();
        let mut reviewed = HashSet::new();
        reviewed.insert(PathBuf::from("/pics/a.jpg"));

        model.load_folder(PathBuf::from("/pics"), sample_images(), reviewed);

        assert_eq!(model.cursor, 1);
        assert_eq!(model.current(), Some(&PathBuf::from("/pics/b.jpg")));
        assert_eq!(model.reviewed_count(), 1);
    }

    #[test]
    fn test_load_folder_all_reviewed_starts_over() {
        let mut model = NavigationModel::new();
        let reviewed = sample_images().into_iter().collect();

        model.load_folder(PathBuf::from("/pics"), sample_images(), reviewed);

        assert_eq!(model.cursor, 0);
        assert_eq!(model.reviewed_count(), 3);
    }

    #[test]
    fn test_load_folder_clears_session_deletions() {
        let mut model = NavigationModel::new();
        model.deleted.insert(PathBuf::from("/old/x.jpg"));

        model.load_folder(PathBuf::from("/pics"), sample_images(), HashSet::new());

        assert!(model.deleted.is_empty());
    }

    #[test]
    fn test_current_out_of_bounds_is_none() {
        let mut model = NavigationModel::new();
        model.images = sample_images();
        model.cursor = 99;
        assert!(model.current().is_none());
    }

    #[test]
    fn test_reviewed_count_ignores_paths_outside_set() {
        let mut model = NavigationModel::new();
        let mut reviewed = HashSet::new();
        reviewed.insert(PathBuf::from("/pics/a.jpg"));
        reviewed.insert(PathBuf::from("/elsewhere/z.jpg"));

        model.load_folder(PathBuf::from("/pics"), sample_images(), reviewed);

        assert_eq!(model.reviewed_count(), 1);
    }

    #[test]
    fn test_navigation_model_is_cloneable() {
        let model = NavigationModel::new();
        let _cloned = model.clone();
    }
}
