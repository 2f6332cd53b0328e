use std::time::{Duration, SystemTime};

use fs_testbed::TemporaryProject;

#[test]
fn diff_classifies_added_removed_modified_and_touched() {
    let project = TemporaryProject::new().expect("failed to create the temporary project");
    project.write("removed.txt", "hello world").unwrap();
    project.write("touched.txt", "").unwrap();
    project.write("modified.txt", "").unwrap();

    let s1 = project.snapshot().unwrap();

    project.write("added.txt", "").unwrap();
    project.remove("removed.txt").unwrap();
    // An explicit offset keeps the check independent of filesystem
    // timestamp granularity.
    project
        .touch_at("touched.txt", SystemTime::now() + Duration::from_secs(5))
        .unwrap();
    project.write("modified.txt", "la la la").unwrap();

    let s2 = project.snapshot().unwrap();
    let diff = &s2 - &s1;

    assert!(diff.added().contains("added.txt"));
    assert!(diff.removed().contains("removed.txt"));
    assert!(diff.modified().contains("modified.txt"));
    assert!(diff.touched().contains("touched.txt"));

    // Each path lands in exactly one set.
    assert_eq!(diff.added().len(), 1);
    assert_eq!(diff.removed().len(), 1);
    assert_eq!(diff.modified().len(), 1);
    assert_eq!(diff.touched().len(), 1);
}

#[test]
fn immediate_recapture_yields_an_empty_diff() {
    let project = TemporaryProject::new().expect("failed to create the temporary project");
    project.write("one.txt", "1").unwrap();
    project.write("sub/two.txt", "2").unwrap();

    let s1 = project.snapshot().unwrap();
    let s2 = project.snapshot().unwrap();
    let diff = &s2 - &s1;

    assert!(diff.added().is_empty());
    assert!(diff.removed().is_empty());
    assert!(diff.modified().is_empty());
    assert!(diff.touched().is_empty());
}

#[test]
fn subtraction_is_antisymmetric() {
    let project = TemporaryProject::new().expect("failed to create the temporary project");
    project.write("stays.txt", "here").unwrap();
    project.write("goes.txt", "away").unwrap();

    let s1 = project.snapshot().unwrap();
    project.remove("goes.txt").unwrap();
    project.write("arrives.txt", "new").unwrap();
    let s2 = project.snapshot().unwrap();

    let forward = &s2 - &s1;
    let backward = &s1 - &s2;

    assert_eq!(forward.added(), backward.removed());
    assert_eq!(forward.removed(), backward.added());
}

#[test]
fn rewriting_identical_content_counts_as_touched() {
    let project = TemporaryProject::new().expect("failed to create the temporary project");
    project.write("same.txt", "stable").unwrap();

    let s1 = project.snapshot().unwrap();
    project.write("same.txt", "stable").unwrap();
    project
        .touch_at("same.txt", SystemTime::now() + Duration::from_secs(3))
        .unwrap();
    let s2 = project.snapshot().unwrap();

    let diff = &s2 - &s1;
    assert!(diff.touched().contains("same.txt"));
    assert!(diff.modified().is_empty());
}

#[test]
fn unrelated_directories_compare_by_relative_path_only() {
    let left = TemporaryProject::new().expect("failed to create the left project");
    let right = TemporaryProject::new().expect("failed to create the right project");
    left.write("shared.txt", "same content").unwrap();
    right.write("shared.txt", "same content").unwrap();
    left.write("only_left.txt", "x").unwrap();

    let a = left.snapshot().unwrap();
    let b = right.snapshot().unwrap();
    let diff = &a - &b;

    // Same relative key on both sides, so it is neither added nor removed.
    assert!(!diff.added().contains("shared.txt"));
    assert!(!diff.removed().contains("shared.txt"));
    assert!(diff.added().contains("only_left.txt"));
}
