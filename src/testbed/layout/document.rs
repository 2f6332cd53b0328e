use serde::{Deserialize, Serialize};

use super::entry::LayoutEntry;
use crate::testbed::error::{Result, TestbedError};

/// A parsed layout document: the entries to materialize into a sandbox
/// root, in order.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Layout(pub Vec<LayoutEntry>);

impl Layout {
    /// Parses a layout from a string in YAML or JSON format. The format is
    /// detected from the first character; an empty string is an error.
    ///
    /// # YAML example
    ///
    /// ```rust
    /// use fs_testbed::Layout;
    ///
    /// let layout = Layout::parse(r#"---
    /// - !directory
    ///     name: fixtures
    ///     entries:
    ///       - !file
    ///           name: data.txt
    ///           seed: !text "payload"
    /// "#).unwrap();
    /// assert_eq!(layout.0.len(), 1);
    /// ```
    ///
    /// # JSON example
    ///
    /// ```rust
    /// use fs_testbed::Layout;
    ///
    /// let layout = Layout::parse(
    ///     r#"[{"file":{"name":"data.txt","seed":{"text":"payload"}}}]"#,
    /// ).unwrap();
    /// assert_eq!(layout.0.len(), 1);
    /// ```
    pub fn parse(text: &str) -> Result<Layout> {
        match text.chars().next() {
            Some('{') | Some('[') => serde_json::from_str(text).map_err(|error| error.into()),
            Some(_) => serde_yaml::from_str(text).map_err(|error| error.into()),
            None => Err(TestbedError::empty_layout()),
        }
    }
}
