//! Content digests for snapshot records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::testbed::error::Result;

/// Files are read in bounded chunks so digesting a large file never holds
/// its whole content in memory.
pub const CHUNK_SIZE: usize = 15 * 1024 * 1024; // 15 MiB

/// Computes the BLAKE3 digest of a file's content as a lowercase hex
/// string.
///
/// The digest is a content identity used for change detection, not a
/// security boundary. Errors opening or reading the file propagate to the
/// caller.
pub fn digest_file(path: impl AsRef<Path>) -> Result<String> {
    let mut file = File::open(path.as_ref())?;
    let mut hasher = blake3::Hasher::new();
    let mut chunk = vec![0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        hasher.update(&chunk[..read]);
    }

    Ok(hex::encode(hasher.finalize().as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testbed::temp_project::TemporaryProject;

    #[test]
    fn equal_content_produces_equal_digests() {
        let project = TemporaryProject::new().unwrap();
        project.write("one.txt", "same bytes").unwrap();
        project.write("two.txt", "same bytes").unwrap();

        let one = digest_file(project.abspath("one.txt")).unwrap();
        let two = digest_file(project.abspath("two.txt")).unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn different_content_produces_different_digests() {
        let project = TemporaryProject::new().unwrap();
        project.write("one.txt", "alpha").unwrap();
        project.write("two.txt", "beta").unwrap();

        let one = digest_file(project.abspath("one.txt")).unwrap();
        let two = digest_file(project.abspath("two.txt")).unwrap();
        assert_ne!(one, two);
    }

    #[test]
    fn digest_is_lowercase_hex() {
        let project = TemporaryProject::new().unwrap();
        project.write("file.txt", "payload").unwrap();

        let digest = digest_file(project.abspath("file.txt")).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn empty_files_share_one_digest() {
        let project = TemporaryProject::new().unwrap();
        project.write("a.txt", "").unwrap();
        project.write("b.txt", "").unwrap();

        assert_eq!(
            digest_file(project.abspath("a.txt")).unwrap(),
            digest_file(project.abspath("b.txt")).unwrap(),
        );
    }

    #[test]
    fn a_missing_file_is_an_error() {
        let project = TemporaryProject::new().unwrap();
        assert!(digest_file(project.abspath("missing.txt")).is_err());
    }
}
