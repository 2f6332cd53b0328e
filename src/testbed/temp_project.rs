//! Temporary project directories for filesystem tests.

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use rand::Rng;
use regex::Regex;
use tracing::warn;
use walkdir::WalkDir;

use crate::testbed::asserts;
use crate::testbed::error::{Result, TestbedError};
use crate::testbed::layout::Layout;
use crate::testbed::scaffold;
use crate::testbed::snapshot::path_key::{normalize, path_as_key};
use crate::testbed::snapshot::DirectorySnapshot;

/// Prefix used for generated project directories.
const TEMP_PREFIX: &str = "testbed_";

/// A sandbox directory that lives for the duration of a test.
///
/// The directory is created on construction and removed recursively when
/// the value is dropped, unless preservation was requested. Files are
/// addressed by paths relative to the project root.
///
/// # Example
///
/// ```rust
/// use fs_testbed::TemporaryProject;
///
/// # fn main() -> fs_testbed::Result<()> {
/// let project = TemporaryProject::new()?;
/// project.write("notes/hello.txt", "Ohai :)")?;
/// assert_eq!(project.read("notes/hello.txt")?, "Ohai :)");
/// # Ok(())
/// # }
/// ```
pub struct TemporaryProject {
    path: PathBuf,
    preserve: bool,
}

impl TemporaryProject {
    /// Creates a fresh project under the system temp directory. A random
    /// suffix keeps concurrently running tests out of each other's way.
    pub fn new() -> Result<TemporaryProject> {
        let suffix: u64 = rand::rng().random();
        let path = env::temp_dir().join(format!("{}{}", TEMP_PREFIX, suffix));
        std::fs::create_dir_all(&path)?;

        Ok(TemporaryProject {
            path,
            preserve: false,
        })
    }

    /// Uses `path` as the project directory. Anything already at that
    /// location is removed first, then the directory (and any missing
    /// parents) is created.
    pub fn at(path: impl Into<PathBuf>) -> Result<TemporaryProject> {
        let path = path.into();
        if path.exists() {
            std::fs::remove_dir_all(&path)?;
        }
        std::fs::create_dir_all(&path)?;

        Ok(TemporaryProject {
            path,
            preserve: false,
        })
    }

    /// Keeps the directory on disk after drop. Useful for inspecting the
    /// state a failing test left behind.
    pub fn preserve(mut self) -> TemporaryProject {
        self.preserve = true;
        self
    }

    /// The project root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute path of `filename` inside the project. Purely lexical: the
    /// file does not have to exist.
    pub fn abspath(&self, filename: impl AsRef<Path>) -> PathBuf {
        normalize(&self.path.join(filename))
    }

    /// Reads the file as UTF-8 text.
    pub fn read(&self, filename: impl AsRef<Path>) -> Result<String> {
        Ok(std::fs::read_to_string(self.abspath(filename))?)
    }

    /// Reads the file as raw bytes.
    pub fn read_bytes(&self, filename: impl AsRef<Path>) -> Result<Vec<u8>> {
        Ok(std::fs::read(self.abspath(filename))?)
    }

    /// Writes `contents` to the file, creating it and any missing parent
    /// directories. An existing file is overwritten.
    pub fn write(&self, filename: impl AsRef<Path>, contents: impl AsRef<str>) -> Result<PathBuf> {
        self.write_bytes(filename, contents.as_ref().as_bytes())
    }

    /// Byte-oriented sibling of [`write`](Self::write).
    pub fn write_bytes(&self, filename: impl AsRef<Path>, contents: &[u8]) -> Result<PathBuf> {
        let path = self.abspath(filename);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Removes the file.
    pub fn remove(&self, filename: impl AsRef<Path>) -> Result<()> {
        std::fs::remove_file(self.abspath(filename))?;
        Ok(())
    }

    /// Updates the modification time of an existing file to now.
    pub fn touch(&self, filename: impl AsRef<Path>) -> Result<()> {
        self.touch_at(filename, SystemTime::now())
    }

    /// Sets the modification time of an existing file explicitly. Handy
    /// when a test must not depend on filesystem timestamp granularity.
    pub fn touch_at(&self, filename: impl AsRef<Path>, time: SystemTime) -> Result<()> {
        let file = std::fs::OpenOptions::new()
            .write(true)
            .open(self.abspath(filename))?;
        file.set_modified(time)?;
        Ok(())
    }

    /// Recursively searches the project for a file whose relative path
    /// matches the fnmatch-style `pattern` (`*` and `?` wildcards; `*`
    /// also crosses directory separators) and returns the first match.
    pub fn glob(&self, pattern: &str) -> Result<Option<String>> {
        let matcher = Regex::new(&translate(pattern))?;

        for entry in WalkDir::new(&self.path) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = path_as_key(entry.path(), &self.path);
            if matcher.is_match(&relative) {
                return Ok(Some(relative));
            }
        }

        Ok(None)
    }

    /// Captures the current state of the project directory.
    pub fn snapshot(&self) -> Result<DirectorySnapshot> {
        DirectorySnapshot::capture(&self.path)
    }

    /// Copies the whole project to `dest`, preserving its layout. An
    /// existing destination is an error unless `overwrite` is set, in
    /// which case it is removed first. A destination without a parent
    /// directory (the filesystem root) is always refused.
    pub fn copy_project(&self, dest: impl AsRef<Path>, overwrite: bool) -> Result<()> {
        let dest = dest.as_ref();
        if dest.exists() {
            if !overwrite {
                return Err(TestbedError::destination_exists(dest.to_string_lossy()));
            }
            if dest.parent().is_none() {
                return Err(TestbedError::refusing_root_copy());
            }
            std::fs::remove_dir_all(dest)?;
        }

        scaffold::copy_tree(&self.path, dest)
    }

    /// Parses `layout` (YAML or JSON) and materializes it into the
    /// project root. See the [`layout`](crate::testbed::layout) module for
    /// the document format.
    ///
    /// ```rust
    /// use fs_testbed::TemporaryProject;
    ///
    /// # fn main() -> fs_testbed::Result<()> {
    /// let project = TemporaryProject::new()?;
    /// project.scaffold(r#"---
    /// - !file
    ///     name: greeting.txt
    ///     seed: !text "Hello, world!"
    /// "#)?;
    /// assert_eq!(project.read("greeting.txt")?, "Hello, world!");
    /// # Ok(())
    /// # }
    /// ```
    pub fn scaffold(&self, layout: &str) -> Result<()> {
        let layout = Layout::parse(layout)?;
        scaffold::materialize(&layout, &self.path)
    }

    /// Runs `test_proc` against this project and panics when it returns an
    /// error, so the failure is reported by the test harness.
    pub fn run<F>(&self, test_proc: F)
    where
        F: Fn(&TemporaryProject) -> io::Result<()>,
    {
        if let Err(error) = test_proc(self) {
            panic!("inner test has error: {}", error);
        }
    }

    /// Panics unless `filename` exists inside the project.
    pub fn assert_has(&self, filename: impl AsRef<Path>) {
        asserts::assert_exists(self.abspath(filename));
    }

    /// Panics unless the project file contains `needle`.
    pub fn assert_file_contains(&self, filename: impl AsRef<Path>, needle: &str) {
        asserts::assert_file_contains(self.abspath(filename), needle);
    }

    /// Panics if the project file contains `needle`.
    pub fn assert_file_not_contains(&self, filename: impl AsRef<Path>, needle: &str) {
        asserts::assert_file_not_contains(self.abspath(filename), needle);
    }

    /// Removes the project directory now, ignoring failures. Preserved
    /// projects are left alone.
    pub fn teardown(&self) {
        if self.preserve || !self.path.exists() {
            return;
        }
        if let Err(error) = std::fs::remove_dir_all(&self.path) {
            warn!(
                "failed to remove temporary project {}: {}",
                self.path.display(),
                error
            );
        }
    }
}

impl Drop for TemporaryProject {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Translates an fnmatch-style pattern into an anchored regex.
fn translate(pattern: &str) -> String {
    let mut translated = String::from("^");
    for ch in pattern.chars() {
        match ch {
            '*' => translated.push_str(".*"),
            '?' => translated.push('.'),
            _ => translated.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4]))),
        }
    }
    translated.push('$');
    translated
}
