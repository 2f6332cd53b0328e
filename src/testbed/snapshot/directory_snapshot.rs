//! Point-in-time capture of a directory tree.

use std::env;
use std::ops::Sub;
use std::path::{Path, PathBuf};

use hashlink::LinkedHashMap;
use tracing::debug;
use walkdir::WalkDir;

use crate::testbed::error::{Result, TestbedError};
use crate::testbed::snapshot::diff::SnapshotDiff;
use crate::testbed::snapshot::file_record::FileRecord;
use crate::testbed::snapshot::hasher;
use crate::testbed::snapshot::path_key::path_as_key;

/// An immutable record of every regular file under a directory at the time
/// of capture.
///
/// A snapshot on its own mostly answers membership and metadata questions;
/// it becomes useful when a second snapshot of the same location is taken
/// and the two are subtracted:
///
/// ```rust
/// use fs_testbed::TemporaryProject;
///
/// # fn main() -> fs_testbed::Result<()> {
/// let project = TemporaryProject::new()?;
/// let before = project.snapshot()?;
/// project.write("hello.txt", "Hello, World!")?;
/// let after = project.snapshot()?;
///
/// let diff = &after - &before;
/// assert!(diff.added().contains("hello.txt"));
/// # Ok(())
/// # }
/// ```
///
/// Only regular files are tracked; directories never appear as entries and
/// symlinks are left to the walker's default handling. Keys are stored
/// relative to the snapshot root, normalized by
/// [`path_as_key`](super::path_as_key).
pub struct DirectorySnapshot {
    root: PathBuf,
    records: LinkedHashMap<String, FileRecord>,
}

impl DirectorySnapshot {
    /// Walks `root` recursively and records stat metadata plus a content
    /// digest for every regular file found. Filesystem mutations made
    /// after capture are not reflected.
    ///
    /// Every file is read in full, so the cost is proportional to the
    /// total byte size of the tree. The walk fails fast: an unreadable
    /// file or an unwalkable directory aborts the capture with the
    /// underlying error.
    pub fn capture(root: impl AsRef<Path>) -> Result<DirectorySnapshot> {
        let root = absolute(root.as_ref())?;
        let mut records = LinkedHashMap::new();

        for entry in WalkDir::new(&root) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let metadata = entry.metadata()?;
            let digest = hasher::digest_file(entry.path())?;
            let key = path_as_key(entry.path(), &root);
            records.insert(key, FileRecord::new(&metadata, digest));
        }

        debug!(
            "captured {} files under {}",
            records.len(),
            root.display()
        );
        Ok(DirectorySnapshot { root, records })
    }

    /// The directory this snapshot was captured from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True when `path`, absolute or relative to the snapshot root, names
    /// a tracked file.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.records
            .contains_key(path_as_key(path, &self.root).as_str())
    }

    /// The record captured for `path`. Lookup of an untracked path is a
    /// [`TestbedError::NotTracked`] error; use [`contains`](Self::contains)
    /// for a boolean answer.
    pub fn get(&self, path: impl AsRef<Path>) -> Result<&FileRecord> {
        let key = path_as_key(path, &self.root);
        self.records
            .get(key.as_str())
            .ok_or_else(|| TestbedError::not_tracked(key))
    }

    /// The tracked relative paths, in the order the walk found them. Call
    /// again for a fresh pass; sort explicitly when order matters.
    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn has_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    pub(crate) fn record(&self, key: &str) -> Option<&FileRecord> {
        self.records.get(key)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &FileRecord)> + '_ {
        self.records.iter().map(|(key, record)| (key.as_str(), record))
    }
}

/// `&after - &before` reads the way a diff is meant: the newer snapshot on
/// the left.
impl<'s> Sub<&'s DirectorySnapshot> for &'s DirectorySnapshot {
    type Output = SnapshotDiff<'s>;

    fn sub(self, other: &'s DirectorySnapshot) -> SnapshotDiff<'s> {
        SnapshotDiff::new(self, other)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
