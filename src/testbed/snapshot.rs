//! Directory snapshots and snapshot diffs.
//!
//! A snapshot records the metadata and content digest of every regular
//! file under a directory. Take one before exercising the code under
//! test, another afterwards, and subtract the two to learn exactly which
//! files were added, removed, modified, or merely touched.

pub mod diff;
pub mod directory_snapshot;
pub mod file_record;
pub mod hasher;
pub mod path_key;

pub use diff::SnapshotDiff;
pub use directory_snapshot::DirectorySnapshot;
pub use file_record::{FileRecord, Timestamp};
pub use path_key::path_as_key;
