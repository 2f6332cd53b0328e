//! Canonical string keys for snapshot paths.

use std::path::{Component, Path, PathBuf};

/// Converts a path to the canonical key form used by snapshots.
///
/// Several spellings can name the same node under a snapshot root; this
/// collapses all of them to one key. The input is joined onto `root` when
/// it is relative, related lexically back to `root`, stripped of `.` and
/// `..` segments, and separated by forward slashes. The whole computation
/// is lexical: nothing is resolved against the filesystem.
///
/// # Example
///
/// ```rust
/// use fs_testbed::testbed::snapshot::path_as_key;
///
/// assert_eq!(path_as_key("./file.txt", "/base"), path_as_key("file.txt", "/base"));
/// assert_eq!(path_as_key("/base/a/b.txt", "/base"), "a/b.txt");
/// ```
pub fn path_as_key(path: impl AsRef<Path>, root: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    let root = normalize(root.as_ref());
    let joined = if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&root.join(path))
    };
    let relative = relative_to(&joined, &root);

    let mut key = String::new();
    for component in relative.components() {
        if !key.is_empty() {
            key.push('/');
        }
        key.push_str(&component.as_os_str().to_string_lossy());
    }
    if key.is_empty() {
        key.push('.');
    }
    key.replace('\\', "/")
}

/// Collapses `.` segments and resolves `..` against preceding components.
/// Leading `..` segments of a relative path are kept; `..` directly under
/// the root is dropped, as `normpath` semantics require.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    let mut normalized = PathBuf::new();
    for part in &parts {
        normalized.push(part.as_os_str());
    }
    normalized
}

/// Lexical equivalent of relating `path` back to `base`: shared leading
/// components are dropped and every remaining `base` component becomes a
/// `..` segment. Both inputs must already be normalized.
fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_parts: Vec<Component> = path.components().collect();
    let base_parts: Vec<Component> = base.components().collect();
    let shared = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[shared..] {
        relative.push(part.as_os_str());
    }
    relative
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_and_dot_prefixed_paths_share_a_key() {
        assert_eq!(
            path_as_key("./file.txt", "/base"),
            path_as_key("file.txt", "/base"),
        );
    }

    #[test]
    fn absolute_paths_relate_back_to_the_root() {
        assert_eq!(path_as_key("/base/a/b.txt", "/base"), "a/b.txt");
    }

    #[test]
    fn parent_and_current_segments_collapse() {
        assert_eq!(path_as_key("a/./b/../c.txt", "/base"), "a/c.txt");
        assert_eq!(path_as_key("/base/./sub//x.txt", "/base"), "sub/x.txt");
    }

    #[test]
    fn backslashes_become_forward_slashes() {
        assert_eq!(path_as_key("a\\b.txt", "/base"), "a/b.txt");
    }

    #[test]
    fn the_root_itself_maps_to_dot() {
        assert_eq!(path_as_key("/base", "/base"), ".");
        assert_eq!(path_as_key(".", "/base"), ".");
    }

    #[test]
    fn paths_above_the_root_keep_parent_segments() {
        assert_eq!(path_as_key("/other/x.txt", "/base"), "../other/x.txt");
    }

    #[test]
    fn normalize_keeps_leading_parent_segments_of_relative_paths() {
        assert_eq!(normalize(Path::new("../a/./b")), PathBuf::from("../a/b"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    }
}
