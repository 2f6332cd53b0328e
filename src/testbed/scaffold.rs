//! Materializes layout entries into a sandbox directory.

use std::path::Path;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::debug;
use walkdir::WalkDir;

use crate::testbed::error::Result;
use crate::testbed::layout::{FileSeed, FileSpec, Layout, LayoutEntry, LinkSpec};

/// Builds every entry of `layout` inside `root`, which must already exist.
pub fn materialize(layout: &Layout, root: &Path) -> Result<()> {
    debug!(
        "scaffolding {} top-level entries into {}",
        layout.0.len(),
        root.display()
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(build_entries(&layout.0, root))
}

/// Recursively copies the tree rooted at `src` into `dst`, creating `dst`
/// and any missing intermediate directories.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(copy_dir(src, dst))
}

async fn build_entries(entries: &[LayoutEntry], dir: &Path) -> Result<()> {
    for entry in entries {
        match entry {
            LayoutEntry::Directory(conf) => {
                let child = dir.join(&conf.name);
                fs::create_dir_all(&child).await?;
                build_entries_boxed(&conf.entries, &child).await?;
            }
            LayoutEntry::File(conf) => create_file(conf, dir).await?,
            LayoutEntry::Link(conf) => create_link(conf, dir).await?,
        }
    }
    Ok(())
}

fn build_entries_boxed<'a>(
    entries: &'a [LayoutEntry],
    dir: &'a Path,
) -> BoxFuture<'a, Result<()>> {
    async move { build_entries(entries, dir).await }.boxed()
}

async fn create_file(conf: &FileSpec, dir: &Path) -> Result<()> {
    let path = dir.join(&conf.name);
    let mut file = File::create(&path).await?;

    match &conf.seed {
        FileSeed::Text(text) => file.write_all(text.as_bytes()).await?,
        FileSeed::Bytes(data) => file.write_all(data).await?,
        FileSeed::CopyFrom(source) => {
            let mut original = File::open(source).await?;
            tokio::io::copy(&mut original, &mut file).await?;
        }
        FileSeed::Empty => {}
    }

    Ok(())
}

async fn create_link(conf: &LinkSpec, dir: &Path) -> Result<()> {
    fs::symlink(&conf.target, dir.join(&conf.name)).await?;
    Ok(())
}

async fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).await?;

    for entry in WalkDir::new(src).min_depth(1).max_depth(1) {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        // Path-based checks follow symlinks, so linked content is copied
        // through as plain files and directories.
        if entry.path().is_dir() {
            copy_dir_boxed(entry.path(), &target).await?;
        } else if entry.path().is_file() {
            let mut original = File::open(entry.path()).await?;
            let mut copy = File::create(&target).await?;
            tokio::io::copy(&mut original, &mut copy).await?;
        }
    }

    Ok(())
}

fn copy_dir_boxed<'a>(src: &'a Path, dst: &'a Path) -> BoxFuture<'a, Result<()>> {
    async move { copy_dir(src, dst).await }.boxed()
}
