use serde::{Deserialize, Serialize};

/// Where a scaffolded file's content comes from.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FileSeed {
    /// A string written as UTF-8:
    ///
    /// ```yaml
    /// - !file
    ///     name: greeting.txt
    ///     seed: !text "Hello, world!"
    /// ```
    Text(String),
    /// Raw bytes, listed inline. Only sensible for small fixtures:
    ///
    /// ```yaml
    /// - !file
    ///     name: blob.bin
    ///     seed:
    ///         !bytes
    ///             - 116
    ///             - 101
    ///             - 115
    ///             - 116
    /// ```
    Bytes(Vec<u8>),
    /// Content copied from a real file on disk:
    ///
    /// ```yaml
    /// - !file
    ///     name: manifest.toml
    ///     seed: !copy_from Cargo.toml
    /// ```
    CopyFrom(String),
    /// No content at all. This is the default when `seed` is omitted:
    ///
    /// ```yaml
    /// - !file
    ///     name: placeholder.txt
    /// ```
    Empty,
}

impl Default for FileSeed {
    fn default() -> FileSeed {
        FileSeed::Empty
    }
}
