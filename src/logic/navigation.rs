//! Image cursor logic
//!
//! Pure functions for calculating cursor positions with wrapping behavior
//! and for resuming a folder at the first unreviewed image.

use std::collections::HashSet;
use std::path::PathBuf;

/// Calculate the next cursor index with wrapping
///
/// Advances the cursor to the next image in the set. If at the end,
/// wraps around to the beginning.
///
/// # Arguments
/// * `current` - Current cursor index
/// * `list_len` - Total number of images in the set
///
/// # Returns
/// * `Some(index)` - The next cursor index
/// * `None` - If the set is empty
///
/// # Examples
/// ```
/// use sortui::logic::navigation::advance_index;
///
/// // Empty set
/// assert_eq!(advance_index(0, 0), None);
///
/// // Normal progression
/// assert_eq!(advance_index(0, 3), Some(1));
/// assert_eq!(advance_index(1, 3), Some(2));
///
/// // Wrapping at end
/// assert_eq!(advance_index(2, 3), Some(0));
/// ```
pub fn advance_index(current: usize, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some((current + 1) % list_len)
}

/// Calculate the previous cursor index with wrapping
///
/// Moves the cursor to the previous image in the set. If at the beginning,
/// wraps around to the end.
///
/// # Arguments
/// * `current` - Current cursor index
/// * `list_len` - Total number of images in the set
///
/// # Returns
/// * `Some(index)` - The previous cursor index
/// * `None` - If the set is empty
///
/// # Examples
/// ```
/// use sortui::logic::navigation::retreat_index;
///
/// // Empty set
/// assert_eq!(retreat_index(0, 0), None);
///
/// // Normal progression
/// assert_eq!(retreat_index(2, 3), Some(1));
/// assert_eq!(retreat_index(1, 3), Some(0));
///
/// // Wrapping at beginning
/// assert_eq!(retreat_index(0, 3), Some(2));
/// ```
pub fn retreat_index(current: usize, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some((current + list_len - 1) % list_len)
}

/// Find the index of the first image not yet reviewed
///
/// Used when opening a folder to resume where a previous session left off.
/// Falls back to the first image when every image has already been reviewed.
///
/// # Arguments
/// * `images` - Images in display order
/// * `reviewed` - Paths already recorded as reviewed
///
/// # Returns
/// The index of the first unreviewed image, or 0 if all are reviewed
/// (also 0 for an empty set, where the index is meaningless)
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use std::path::PathBuf;
/// use sortui::logic::navigation::first_unreviewed;
///
/// let images = vec![PathBuf::from("/pics/a.jpg"), PathBuf::from("/pics/b.jpg")];
/// let mut reviewed = HashSet::new();
///
/// // Nothing reviewed yet
/// assert_eq!(first_unreviewed(&images, &reviewed), 0);
///
/// // First image reviewed, resume at the second
/// reviewed.insert(PathBuf::from("/pics/a.jpg"));
/// assert_eq!(first_unreviewed(&images, &reviewed), 1);
///
/// // Everything reviewed, start over
/// reviewed.insert(PathBuf::from("/pics/b.jpg"));
/// assert_eq!(first_unreviewed(&images, &reviewed), 0);
/// ```
pub fn first_unreviewed(images: &[PathBuf], reviewed: &HashSet<PathBuf>) -> usize {
    images
        .iter()
        .position(|path| !reviewed.contains(path))
        .unwrap_or(0)
}
