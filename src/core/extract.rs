//! Tar/gzip extraction for fetch-recipes
//!
//! Archives are unpacked on the blocking thread pool since flate2 and tar are
//! synchronous readers.

use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::core::error::{Error, Result};

/// Unpack `src` (a `.tar.gz` file) into the `dest` directory
///
/// The destination directory is created if missing. Existing files under
/// `dest` are overwritten entry by entry.
pub async fn extract_tar_gz(src: &Path, dest: &Path) -> Result<()> {
    let src = src.to_path_buf();
    let dest = dest.to_path_buf();

    tokio::task::spawn_blocking(move || unpack_archive(&src, &dest))
        .await
        .map_err(|e| Error::ExtractError(format!("extraction task failed: {e}")))?
}

fn unpack_archive(src: &PathBuf, dest: &PathBuf) -> Result<()> {
    std::fs::create_dir_all(dest)?;

    let file = std::fs::File::open(src)?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    archive.set_unpack_xattrs(false);
    archive
        .unpack(dest)
        .map_err(|e| Error::ExtractError(e.to_string()))
}
