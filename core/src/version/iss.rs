//! Reads and rewrites the `MyAppVersion` define of an Inno-Setup script.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use winhelper_common::error::IssError;

const DEFINE_MARKER: &str = "#define MyAppVersion";

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"#define\s+MyAppVersion\s+"([\d.]+)""#).expect("MyAppVersion pattern is valid")
});

/// Returns the version literal of the first `#define MyAppVersion "x.y.z"` line.
pub fn current_version(path: impl AsRef<Path>) -> Result<String, IssError> {
    let path: &Path = path.as_ref();
    let contents = read(path)?;

    let version = find_version(&contents).ok_or_else(|| IssError::VersionNotFound(path.to_path_buf()))?;
    debug!("Found version {version} in {}", path.display());
    Ok(version)
}

/// Replaces every `#define MyAppVersion` line with one carrying `version`.
///
/// The new contents go to a temporary file next to the script which is then
/// renamed over it. Line endings of untouched lines are preserved.
pub fn save_version(path: impl AsRef<Path>, version: &str) -> Result<(), IssError> {
    let path: &Path = path.as_ref();
    let contents = read(path)?;
    let rewritten = replace_version(&contents, version);

    let io_err = |source: std::io::Error| IssError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir: &Path = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(rewritten.as_bytes()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    info!("Wrote MyAppVersion {version} to {}", path.display());
    Ok(())
}

fn read(path: &Path) -> Result<String, IssError> {
    fs::read_to_string(path).map_err(|source| IssError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn find_version(contents: &str) -> Option<String> {
    contents
        .lines()
        .find_map(|line| VERSION_PATTERN.captures(line))
        .map(|caps| caps[1].to_string())
}

fn replace_version(contents: &str, version: &str) -> String {
    contents
        .split_inclusive('\n')
        .map(|line| {
            if !line.contains(DEFINE_MARKER) {
                return line.to_string();
            }
            let ending = if line.ends_with("\r\n") {
                "\r\n"
            } else if line.ends_with('\n') {
                "\n"
            } else {
                ""
            };
            format!("{DEFINE_MARKER} \"{version}\"{ending}")
        })
        .collect()
}
