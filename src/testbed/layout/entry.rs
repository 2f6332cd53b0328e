use serde::{Deserialize, Serialize};

use super::directory_spec::DirectorySpec;
use super::file_spec::FileSpec;
use super::link_spec::LinkSpec;

/// One entry of a layout document.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LayoutEntry {
    Directory(DirectorySpec),
    File(FileSpec),
    Link(LinkSpec),
}
