//! Per-file metadata captured by a snapshot.

use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;

/// Second and nanosecond parts of a stat timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub secs: i64,
    pub nanos: i64,
}

/// The stat fields and content digest recorded for one tracked file.
///
/// A record is a plain value: two records compare equal exactly when every
/// field matches, and a record never changes after capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub mode: u32,
    pub inode: u64,
    pub device: u64,
    pub links: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub accessed: Timestamp,
    pub modified: Timestamp,
    pub changed: Timestamp,
    /// Lowercase hex content digest, see [`super::hasher::digest_file`].
    pub digest: String,
}

impl FileRecord {
    pub(crate) fn new(metadata: &Metadata, digest: String) -> FileRecord {
        FileRecord {
            mode: metadata.mode(),
            inode: metadata.ino(),
            device: metadata.dev(),
            links: metadata.nlink(),
            uid: metadata.uid(),
            gid: metadata.gid(),
            size: metadata.size(),
            accessed: Timestamp {
                secs: metadata.atime(),
                nanos: metadata.atime_nsec(),
            },
            modified: Timestamp {
                secs: metadata.mtime(),
                nanos: metadata.mtime_nsec(),
            },
            changed: Timestamp {
                secs: metadata.ctime(),
                nanos: metadata.ctime_nsec(),
            },
            digest,
        }
    }
}
