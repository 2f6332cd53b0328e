//! Access to checked-in test asset files.

use std::path::{Path, PathBuf};

use crate::testbed::error::{Result, TestbedError};

/// Resolves files inside a directory of test assets.
///
/// Every lookup verifies the file actually exists, so a typo in an asset
/// name fails with a clear error instead of a confusing downstream I/O
/// failure.
///
/// # Example
///
/// ```rust,no_run
/// use fs_testbed::AssetDir;
///
/// # fn main() -> fs_testbed::Result<()> {
/// let assets = AssetDir::new("tests/assets");
/// let fixture = assets.read("requests/login.json")?;
/// # let _ = fixture;
/// # Ok(())
/// # }
/// ```
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    pub fn new(root: impl Into<PathBuf>) -> AssetDir {
        AssetDir { root: root.into() }
    }

    /// The asset directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of the asset `filename`; fails with
    /// [`TestbedError::AssetNotFound`] when no such file exists.
    pub fn path(&self, filename: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.root.join(filename);
        if !path.exists() {
            return Err(TestbedError::asset_not_found(path.to_string_lossy()));
        }
        Ok(path)
    }

    /// Contents of the asset as UTF-8 text.
    pub fn read(&self, filename: impl AsRef<Path>) -> Result<String> {
        Ok(std::fs::read_to_string(self.path(filename)?)?)
    }

    /// Contents of the asset as raw bytes.
    pub fn read_bytes(&self, filename: impl AsRef<Path>) -> Result<Vec<u8>> {
        Ok(std::fs::read(self.path(filename)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testbed::temp_project::TemporaryProject;

    #[test]
    fn existing_assets_resolve_and_read() {
        let project = TemporaryProject::new().unwrap();
        project.write("fixtures/sample.txt", "sample body").unwrap();

        let assets = AssetDir::new(project.abspath("fixtures"));
        assert!(assets.path("sample.txt").unwrap().is_absolute());
        assert_eq!(assets.read("sample.txt").unwrap(), "sample body");
        assert_eq!(assets.read_bytes("sample.txt").unwrap(), b"sample body");
    }

    #[test]
    fn a_missing_asset_is_reported_by_name() {
        let project = TemporaryProject::new().unwrap();
        let assets = AssetDir::new(project.path());

        let error = assets.path("missing.txt").unwrap_err();
        assert!(error.is_asset_not_found());
        assert!(error.to_string().contains("missing.txt"));
    }
}
