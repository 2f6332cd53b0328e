use serde::{Deserialize, Serialize};

use super::entry::LayoutEntry;

/// A directory to create, along with the entries nested inside it.
///
/// ## yaml
///
/// ```yaml
/// ---
///   - !directory
///       name: fixtures
///       entries:
///         - !file
///             name: data.txt
///             seed: !text "payload"
/// ```
///
/// ## json
///
/// ```json
/// [
///     {
///         "directory": {
///             "name": "fixtures",
///             "entries": [
///                 {"file": {"name": "data.txt", "seed": {"text": "payload"}}}
///             ]
///         }
///     }
/// ]
/// ```
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct DirectorySpec {
    /// A directory will be created with the given name.
    pub name: String,

    /// The entries to materialize inside the directory. May be empty.
    #[serde(default)]
    pub entries: Vec<LayoutEntry>,
}
