use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use winhelper_common::error::VersionError;

use super::operation::{Operation, Version};

pub const VERSION_FILE: &str = "VERSION";

/// Holds one version string and applies symbolic deltas to it.
///
/// The manager starts out unset. The first successful [`set_version`] stores
/// its argument verbatim; later calls must be operators. A failed call never
/// changes the stored value.
///
/// [`set_version`]: VersionManager::set_version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionManager {
    version: Option<String>,
}

impl VersionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// A manager already holding `version`. An empty string leaves it unset.
    pub fn with_version(version: impl Into<String>) -> Self {
        let version: String = version.into();
        Self {
            version: (!version.is_empty()).then_some(version),
        }
    }

    /// Reads `<dir>/VERSION`, trimming surrounding whitespace.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, VersionError> {
        let path: PathBuf = dir.as_ref().join(VERSION_FILE);
        let contents = fs::read_to_string(&path).map_err(|source| VersionError::Io {
            path: path.clone(),
            source,
        })?;

        debug!("Loaded version {:?} from {}", contents.trim(), path.display());
        Ok(Self::with_version(contents.trim()))
    }

    pub fn is_set(&self) -> bool {
        self.version.is_some()
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or_default()
    }

    pub fn set_version(&mut self, op: &str) -> Result<(), VersionError> {
        if op.is_empty() {
            return Err(VersionError::EmptyVersion);
        }

        let Some(current) = self.version.as_deref() else {
            self.version = Some(op.to_string());
            return Ok(());
        };

        let operation: Operation = op.parse()?;
        let next: Version = current.parse::<Version>()?.apply(operation)?;

        debug!("Version {current} -> {next} ({op})");
        self.version = Some(next.to_string());
        Ok(())
    }

    /// Writes the version to `<dir>/VERSION` and returns the file path.
    pub fn save(&self, dir: impl AsRef<Path>, force: bool) -> Result<PathBuf, VersionError> {
        let path: PathBuf = dir.as_ref().join(VERSION_FILE);
        self.save_as(&path, force)?;
        Ok(path)
    }

    /// Writes the version to `path`, synced to disk before returning.
    ///
    /// Without `force` the file is created exclusively and an existing one is
    /// left untouched.
    pub fn save_as(&self, path: impl AsRef<Path>, force: bool) -> Result<(), VersionError> {
        let path: &Path = path.as_ref();
        let version: &str = self.version.as_deref().ok_or(VersionError::Unset)?;

        let mut options = OpenOptions::new();
        options.write(true);
        if force {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let io_err = |source: std::io::Error| VersionError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = options.open(path).map_err(|source| match source.kind() {
            ErrorKind::AlreadyExists => VersionError::AlreadyExists(path.to_path_buf()),
            _ => io_err(source),
        })?;

        file.write_all(version.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;

        info!("Saved version {version} to {}", path.display());
        Ok(())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
