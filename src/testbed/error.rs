//! TestbedError is used to report failures while building sandboxes and
//! capturing snapshots.
use std::fmt;
use std::io;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TestbedError>;

/// Errors raised by sandbox construction, layout parsing, and snapshots.
#[derive(Debug)]
pub enum TestbedError {
    /// A layout document was parsed from an empty string.
    EmptyLayout,
    /// A snapshot lookup named a path the snapshot does not track.
    NotTracked(String),
    /// An asset file was requested but does not exist on disk.
    AssetNotFound(String),
    /// A project copy destination already exists and overwrite was off.
    DestinationExists(String),
    /// A project copy was pointed at the filesystem root.
    RefusingRootCopy,
    Io(io::Error),
    Walk(walkdir::Error),
    ParseYaml(serde_yaml::Error),
    ParseJson(serde_json::Error),
    Pattern(regex::Error),
}

impl TestbedError {
    pub fn empty_layout() -> Self {
        TestbedError::EmptyLayout
    }

    pub fn not_tracked(path: impl Into<String>) -> Self {
        TestbedError::NotTracked(path.into())
    }

    pub fn asset_not_found(path: impl Into<String>) -> Self {
        TestbedError::AssetNotFound(path.into())
    }

    pub fn destination_exists(path: impl Into<String>) -> Self {
        TestbedError::DestinationExists(path.into())
    }

    pub fn refusing_root_copy() -> Self {
        TestbedError::RefusingRootCopy
    }

    pub fn is_empty_layout(&self) -> bool {
        matches!(self, TestbedError::EmptyLayout)
    }

    pub fn is_not_tracked(&self) -> bool {
        matches!(self, TestbedError::NotTracked(_))
    }

    pub fn is_asset_not_found(&self) -> bool {
        matches!(self, TestbedError::AssetNotFound(_))
    }

    pub fn is_destination_exists(&self) -> bool {
        matches!(self, TestbedError::DestinationExists(_))
    }
}

impl fmt::Display for TestbedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TestbedError::EmptyLayout => {
                write!(f, "The layout document should not be empty.")
            }
            TestbedError::NotTracked(path) => {
                write!(f, "The path \"{}\" is not tracked by this snapshot.", path)
            }
            TestbedError::AssetNotFound(path) => {
                write!(f, "The asset \"{}\" was not found on disk.", path)
            }
            TestbedError::DestinationExists(path) => {
                write!(f, "The copy destination \"{}\" already exists.", path)
            }
            TestbedError::RefusingRootCopy => {
                write!(f, "Refusing to copy the project over the filesystem root.")
            }
            TestbedError::Io(error) => write!(f, "{}", error),
            TestbedError::Walk(error) => write!(f, "{}", error),
            TestbedError::ParseYaml(error) => write!(f, "{}", error),
            TestbedError::ParseJson(error) => write!(f, "{}", error),
            TestbedError::Pattern(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for TestbedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TestbedError::Io(error) => Some(error),
            TestbedError::Walk(error) => Some(error),
            TestbedError::ParseYaml(error) => Some(error),
            TestbedError::ParseJson(error) => Some(error),
            TestbedError::Pattern(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for TestbedError {
    fn from(error: io::Error) -> TestbedError {
        TestbedError::Io(error)
    }
}

impl From<walkdir::Error> for TestbedError {
    fn from(error: walkdir::Error) -> TestbedError {
        TestbedError::Walk(error)
    }
}

impl From<serde_yaml::Error> for TestbedError {
    fn from(error: serde_yaml::Error) -> TestbedError {
        TestbedError::ParseYaml(error)
    }
}

impl From<serde_json::Error> for TestbedError {
    fn from(error: serde_json::Error) -> TestbedError {
        TestbedError::ParseJson(error)
    }
}

impl From<regex::Error> for TestbedError {
    fn from(error: regex::Error) -> TestbedError {
        TestbedError::Pattern(error)
    }
}

/// Lets `?` forward testbed failures out of `io::Result` test closures.
impl From<TestbedError> for io::Error {
    fn from(error: TestbedError) -> io::Error {
        match error {
            TestbedError::Io(error) => error,
            other => io::Error::new(io::ErrorKind::Other, other),
        }
    }
}
