use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;
use winhelper_common::error::LinkError;

/// Creates a symbolic link at `link` pointing to `original`.
///
/// Relative paths are resolved against `base`. The original must exist and
/// nothing may already occupy the link path. Returns the link's full path.
pub fn make_link(base: &Path, original: &Path, link: &Path) -> Result<PathBuf, LinkError> {
    let original: PathBuf = base.join(original);
    let link: PathBuf = base.join(link);

    if !original.try_exists()? {
        return Err(LinkError::Missing(original));
    }

    match fs::symlink_metadata(&link) {
        Ok(_) => return Err(LinkError::AlreadyExists(link)),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    create_symlink(&original, &link)?;
    info!("Linked {} -> {}", link.display(), original.display());
    Ok(link)
}

#[cfg(unix)]
fn create_symlink(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
fn create_symlink(original: &Path, link: &Path) -> std::io::Result<()> {
    if original.is_dir() {
        std::os::windows::fs::symlink_dir(original, link)
    } else {
        std::os::windows::fs::symlink_file(original, link)
    }
}
