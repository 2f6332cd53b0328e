//! The `testbed` module provides temporary project directories, directory
//! snapshots, and the helpers tests use to work with both: layout
//! scaffolding, asset lookup, file building, and assertions.

pub mod asserts;
pub mod asset_dir;
pub mod error;
pub mod file_builder;
pub mod layout;
pub mod scaffold;
pub mod snapshot;
pub mod temp_project;

// reexport
pub use error::{Result, TestbedError};

pub use asset_dir::AssetDir;
pub use file_builder::FileBuilder;
pub use layout::Layout;
pub use snapshot::DirectorySnapshot;
pub use snapshot::FileRecord;
pub use snapshot::SnapshotDiff;
pub use temp_project::TemporaryProject;
