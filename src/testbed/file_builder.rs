//! Incremental plain-file construction.

use std::path::{Path, PathBuf};

use crate::testbed::error::Result;

/// Accumulates lines of content and writes them to disk in one go.
///
/// Content can be collected over time, across setup helpers or several
/// steps of a test, before a single `write` puts the finished file on
/// disk. A trailing newline is appended by default; some tools refuse
/// files without one.
///
/// # Example
///
/// ```rust
/// use fs_testbed::{FileBuilder, TemporaryProject};
///
/// # fn main() -> fs_testbed::Result<()> {
/// let project = TemporaryProject::new()?;
/// let mut script = FileBuilder::new(project.abspath("bin/run.sh"));
/// script.add_line("#!/bin/sh");
/// script.add_lines(["echo one", "echo two"]);
/// script.write()?;
///
/// assert_eq!(project.read("bin/run.sh")?, "#!/bin/sh\necho one\necho two\n");
/// # Ok(())
/// # }
/// ```
pub struct FileBuilder {
    path: PathBuf,
    lines: Vec<String>,
    trailing_newline: bool,
}

impl FileBuilder {
    pub fn new(path: impl Into<PathBuf>) -> FileBuilder {
        FileBuilder {
            path: path.into(),
            lines: Vec::new(),
            trailing_newline: true,
        }
    }

    /// Drops the newline normally appended at the end of the file.
    pub fn without_trailing_newline(mut self) -> FileBuilder {
        self.trailing_newline = false;
        self
    }

    /// Appends one line of content.
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends several lines of content at once.
    pub fn add_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// Writes the accumulated lines, creating missing parent directories.
    pub fn write(&self) -> Result<&Path> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut contents = self.lines.join("\n");
        if self.trailing_newline {
            contents.push('\n');
        }
        std::fs::write(&self.path, contents)?;

        Ok(&self.path)
    }

    /// Where the file will be written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testbed::temp_project::TemporaryProject;

    #[test]
    fn lines_accumulate_in_order() {
        let project = TemporaryProject::new().unwrap();
        let mut builder = FileBuilder::new(project.abspath("out/script.sh"));
        builder.add_line("#!/bin/sh");
        builder.add_lines(["echo one", "echo two"]);
        builder.write().unwrap();

        assert_eq!(
            project.read("out/script.sh").unwrap(),
            "#!/bin/sh\necho one\necho two\n"
        );
    }

    #[test]
    fn the_trailing_newline_can_be_dropped() {
        let project = TemporaryProject::new().unwrap();
        let mut builder =
            FileBuilder::new(project.abspath("terse.txt")).without_trailing_newline();
        builder.add_line("no newline after me");
        builder.write().unwrap();

        assert_eq!(project.read("terse.txt").unwrap(), "no newline after me");
    }

    #[test]
    fn an_empty_builder_writes_an_empty_line() {
        let project = TemporaryProject::new().unwrap();
        let builder = FileBuilder::new(project.abspath("blank.txt"));
        builder.write().unwrap();

        assert_eq!(project.read("blank.txt").unwrap(), "\n");
    }
}
