use serde::{Deserialize, Serialize};

use super::file_seed::FileSeed;

/// A file to create. The `seed` chooses where its content comes from and
/// may be omitted entirely for an empty file.
///
/// ## yaml
///
/// ```yaml
/// - !file
///     name: notes.txt
///     seed: !text "remember the milk"
/// ```
///
/// ## json
///
/// ```json
/// {"file": {"name": "notes.txt", "seed": {"text": "remember the milk"}}}
/// ```
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct FileSpec {
    pub name: String,

    #[serde(default)]
    pub seed: FileSeed,
}
