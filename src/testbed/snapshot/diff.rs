//! Set-based difference between two snapshots.

use std::cell::OnceCell;
use std::collections::HashSet;

use crate::testbed::snapshot::directory_snapshot::DirectorySnapshot;

/// The difference between snapshot `a` (newer) and snapshot `b` (older),
/// produced by `&a - &b`.
///
/// Four derived path sets are exposed. Each is computed the first time it
/// is requested and cached for the life of the diff; the diff itself
/// borrows both snapshots and copies nothing up front.
///
/// The diff reasons about path presence, content digests, and modification
/// times only. Ownership, permission, and access-time changes are not
/// reported even though the underlying records carry those fields.
pub struct SnapshotDiff<'s> {
    a: &'s DirectorySnapshot,
    b: &'s DirectorySnapshot,
    added: OnceCell<HashSet<String>>,
    removed: OnceCell<HashSet<String>>,
    modified: OnceCell<HashSet<String>>,
    touched: OnceCell<HashSet<String>>,
}

impl<'s> SnapshotDiff<'s> {
    pub(crate) fn new(a: &'s DirectorySnapshot, b: &'s DirectorySnapshot) -> SnapshotDiff<'s> {
        SnapshotDiff {
            a,
            b,
            added: OnceCell::new(),
            removed: OnceCell::new(),
            modified: OnceCell::new(),
            touched: OnceCell::new(),
        }
    }

    /// Paths present in `a` but absent from `b`.
    pub fn added(&self) -> &HashSet<String> {
        self.added.get_or_init(|| {
            self.a
                .paths()
                .filter(|&path| !self.b.has_key(path))
                .map(str::to_owned)
                .collect()
        })
    }

    /// Paths present in `b` but no longer in `a`.
    pub fn removed(&self) -> &HashSet<String> {
        self.removed.get_or_init(|| {
            self.b
                .paths()
                .filter(|&path| !self.a.has_key(path))
                .map(str::to_owned)
                .collect()
        })
    }

    /// Paths present in both whose content digests differ.
    pub fn modified(&self) -> &HashSet<String> {
        self.modified.get_or_init(|| {
            let mut result = HashSet::new();
            for (path, after) in self.a.entries() {
                if let Some(before) = self.b.record(path) {
                    if after.digest != before.digest {
                        result.insert(path.to_owned());
                    }
                }
            }
            result
        })
    }

    /// Paths present in both whose digests are identical but whose
    /// modification times differ: rewritten with the same content, or
    /// metadata-only touched. Only mtime is consulted; a file that was
    /// merely read never counts as touched.
    pub fn touched(&self) -> &HashSet<String> {
        self.touched.get_or_init(|| {
            let mut result = HashSet::new();
            for (path, after) in self.a.entries() {
                if let Some(before) = self.b.record(path) {
                    if after.modified != before.modified && after.digest == before.digest {
                        result.insert(path.to_owned());
                    }
                }
            }
            result
        })
    }
}
