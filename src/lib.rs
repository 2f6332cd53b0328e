//! This library provides sandboxed filesystem state for tests.
//! When you are testing filesystem operations you need a temporary directory that is wiped
//! out after the testing is finished, and a way to observe what the code under test changed.
//! This package creates a per-test project directory (seeded imperatively or from a YAML/JSON
//! layout), captures snapshots of the directory state, and subtracts two snapshots into the
//! added, removed, modified, and touched file sets.

pub mod testbed;

pub use testbed::error::{Result, TestbedError};

pub use testbed::asset_dir::AssetDir;
pub use testbed::file_builder::FileBuilder;
pub use testbed::layout::Layout;
pub use testbed::snapshot::{DirectorySnapshot, FileRecord, SnapshotDiff, Timestamp};
pub use testbed::temp_project::TemporaryProject;
