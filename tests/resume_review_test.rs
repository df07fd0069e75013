//! Tests for checkpoint-driven resume
//!
//! Opening a folder merges the checkpoint file and positions the cursor
//! on the first image that has not been reviewed yet, so a review picks
//! up where the previous session stopped. A fully reviewed folder opens
//! at the beginning again.

use sortui::actions;
use sortui::checklist::ChecklistStore;
use sortui::model::NavigationModel;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn create_image(dir: &Path, name: &str) {
    let mut file = fs::File::create(dir.join(name)).expect("failed to create test file");
    file.write_all(b"fake image data")
        .expect("failed to write test file");
}

/// Test: A folder with no history opens at the first image
#[test]
fn test_fresh_folder_starts_at_first_image() {
    let dir = TempDir::new().unwrap();
    let store = ChecklistStore::new(dir.path().join("checked_images.txt"));
    for name in ["a.jpg", "b.jpg", "c.jpg"] {
        create_image(dir.path(), name);
    }

    let mut nav = NavigationModel::new();
    actions::select_folder(&mut nav, &store, dir.path());

    assert_eq!(nav.len(), 3);
    assert_eq!(nav.cursor, 0);
    assert_eq!(nav.reviewed_count(), 0);
}

/// Test: Reopening a folder resumes at the first unreviewed image
#[test]
fn test_reopen_resumes_after_reviewed_prefix() {
    let dir = TempDir::new().unwrap();
    let store = ChecklistStore::new(dir.path().join("checked_images.txt"));
    for name in ["a.jpg", "b.jpg", "c.jpg", "d.jpg"] {
        create_image(dir.path(), name);
    }

    // First session reviews the first two images
    let mut first_session = NavigationModel::new();
    actions::select_folder(&mut first_session, &store, dir.path());
    actions::show_next(&mut first_session, &store);
    actions::show_next(&mut first_session, &store);

    // Second session opens the same folder with the same checkpoint
    let mut second_session = NavigationModel::new();
    actions::select_folder(&mut second_session, &store, dir.path());

    let reviewed = store.load(&second_session.images);
    let current = second_session
        .current()
        .expect("folder should not be empty");
    assert!(
        !reviewed.contains(current),
        "resumed cursor should sit on an unreviewed image"
    );
    for image in &second_session.images[..second_session.cursor] {
        assert!(
            reviewed.contains(image),
            "every image before the resumed cursor should be reviewed"
        );
    }
}

/// Test: A fully reviewed folder opens at the beginning
#[test]
fn test_reopen_fully_reviewed_folder_starts_over() {
    let dir = TempDir::new().unwrap();
    let store = ChecklistStore::new(dir.path().join("checked_images.txt"));
    for name in ["a.jpg", "b.jpg"] {
        create_image(dir.path(), name);
    }

    let mut first_session = NavigationModel::new();
    actions::select_folder(&mut first_session, &store, dir.path());
    actions::show_next(&mut first_session, &store);
    actions::show_next(&mut first_session, &store);
    assert_eq!(first_session.reviewed_count(), 2);

    let mut second_session = NavigationModel::new();
    actions::select_folder(&mut second_session, &store, dir.path());

    assert_eq!(second_session.cursor, 0);
    assert_eq!(
        second_session.reviewed_count(),
        2,
        "review marks should survive into the new session"
    );
}

/// Test: The checkpoint file is shared across store instances
#[test]
fn test_checkpoint_survives_new_store_instance() {
    let dir = TempDir::new().unwrap();
    let checkpoint = dir.path().join("checked_images.txt");
    create_image(dir.path(), "a.jpg");

    let mut nav = NavigationModel::new();
    {
        let store = ChecklistStore::new(checkpoint.clone());
        actions::select_folder(&mut nav, &store, dir.path());
        actions::show_next(&mut nav, &store);
    }

    let reopened = ChecklistStore::new(checkpoint);
    assert_eq!(reopened.load(&nav.images).len(), 1);
}

/// Test: Selecting an unreadable folder yields an empty working set
#[test]
fn test_select_missing_folder_yields_empty_set() {
    let dir = TempDir::new().unwrap();
    let store = ChecklistStore::new(dir.path().join("checked_images.txt"));

    let mut nav = NavigationModel::new();
    actions::select_folder(&mut nav, &store, &dir.path().join("no_such_subdir"));

    assert!(nav.is_empty());
    assert_eq!(nav.current(), None);

    // Navigation on the empty set stays inert
    actions::show_next(&mut nav, &store);
    actions::show_previous(&mut nav);
    assert_eq!(nav.cursor, 0);
}

/// Test: Marks from another folder do not shift the resume position
#[test]
fn test_other_folder_marks_do_not_affect_resume() {
    let images_dir = TempDir::new().unwrap();
    let other_dir = TempDir::new().unwrap();
    let store = ChecklistStore::new(images_dir.path().join("checked_images.txt"));
    create_image(images_dir.path(), "a.jpg");
    create_image(other_dir.path(), "b.jpg");

    // Review the other folder completely
    let mut other_nav = NavigationModel::new();
    actions::select_folder(&mut other_nav, &store, other_dir.path());
    actions::show_next(&mut other_nav, &store);

    // The first folder still opens unreviewed at image 0
    let mut nav = NavigationModel::new();
    actions::select_folder(&mut nav, &store, images_dir.path());
    assert_eq!(nav.cursor, 0);
    assert_eq!(nav.reviewed_count(), 0);
}
