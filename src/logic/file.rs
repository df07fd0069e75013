//! File classification logic
//!
//! Pure functions for deciding which directory entries count as images.

use std::path::Path;

/// Check whether a path carries one of the supported image extensions
///
/// The comparison is ASCII case-insensitive, so "photo.JPG" matches "jpg".
/// Paths without an extension never match.
///
/// # Arguments
/// * `path` - Path to classify
/// * `extensions` - Lowercase extension allowlist, without leading dots
///
/// # Examples
/// ```
/// use std::path::Path;
/// use sortui::logic::file::has_supported_extension;
///
/// let exts = ["jpg", "png"];
/// assert!(has_supported_extension(Path::new("/pics/cat.jpg"), &exts));
/// assert!(has_supported_extension(Path::new("/pics/CAT.JPG"), &exts));
/// assert!(!has_supported_extension(Path::new("/pics/notes.txt"), &exts));
/// assert!(!has_supported_extension(Path::new("/pics/README"), &exts));
/// ```
pub fn has_supported_extension(path: &Path, extensions: &[&str]) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            let ext = ext.to_ascii_lowercase();
            extensions.iter().any(|candidate| *candidate == ext)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTS: [&str; 3] = ["jpg", "jpeg", "png"];

    #[test]
    fn test_matching_extension() {
        assert!(has_supported_extension(Path::new("a.jpg"), &EXTS));
        assert!(has_supported_extension(Path::new("b.jpeg"), &EXTS));
        assert!(has_supported_extension(Path::new("/abs/path/c.png"), &EXTS));
    }

    #[test]
    fn test_case_insensitive_match() {
        assert!(has_supported_extension(Path::new("a.JPG"), &EXTS));
        assert!(has_supported_extension(Path::new("a.Png"), &EXTS));
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(!has_supported_extension(Path::new("notes.txt"), &EXTS));
        assert!(!has_supported_extension(Path::new("archive.tar.gz"), &EXTS));
    }

    #[test]
    fn test_no_extension() {
        assert!(!has_supported_extension(Path::new("README"), &EXTS));
        assert!(!has_supported_extension(Path::new(".hidden"), &EXTS));
    }

    #[test]
    fn test_extension_only_suffix_does_not_match() {
        // "jpg" must be the extension, not part of the stem
        assert!(!has_supported_extension(Path::new("jpg"), &EXTS));
        assert!(!has_supported_extension(Path::new("not-a-jpg"), &EXTS));
    }

    #[test]
    fn test_empty_allowlist() {
        assert!(!has_supported_extension(Path::new("a.jpg"), &[]));
    }
}
