//! Panicking assertion helpers for filesystem state.
//!
//! These mirror the shape of the standard `assert!` family: a failed
//! check panics with a message naming the offending path, so the test
//! harness reports it like any other assertion.

use std::path::Path;

/// Panics unless `path` exists on disk.
pub fn assert_exists(path: impl AsRef<Path>) {
    let path = path.as_ref();
    assert!(
        path.exists(),
        "the path \"{}\" was expected to exist, but does not",
        path.display()
    );
}

/// Panics unless the file at `path` contains `needle`.
pub fn assert_file_contains(path: impl AsRef<Path>, needle: &str) {
    let path = path.as_ref();
    let contents = read_for_assert(path);
    assert!(
        contents.contains(needle),
        "\"{}\" was not found in \"{}\"",
        needle,
        path.display()
    );
}

/// Panics if the file at `path` contains `needle`.
pub fn assert_file_not_contains(path: impl AsRef<Path>, needle: &str) {
    let path = path.as_ref();
    let contents = read_for_assert(path);
    assert!(
        !contents.contains(needle),
        "\"{}\" was unexpectedly found in \"{}\"",
        needle,
        path.display()
    );
}

fn read_for_assert(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) => panic!("could not read \"{}\": {}", path.display(), error),
    }
}
