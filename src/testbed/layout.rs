//! The `layout` module describes the declarative documents a sandbox can
//! be seeded from. A layout lists directories, files, and links; file
//! content comes from a [`FileSeed`](file_seed::FileSeed).

pub mod directory_spec;
pub mod document;
pub mod entry;
pub mod file_seed;
pub mod file_spec;
pub mod link_spec;

pub use directory_spec::DirectorySpec;
pub use document::Layout;
pub use entry::LayoutEntry;
pub use file_seed::FileSeed;
pub use file_spec::FileSpec;
pub use link_spec::LinkSpec;
