use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("invalid operation: {0:?}")]
    InvalidOperation(String),

    #[error("empty version")]
    EmptyVersion,

    #[error("negative version: a component cannot drop below zero")]
    NegativeVersion,

    #[error("version overflow: a component is already at its maximum")]
    Overflow,

    /// The stored value is not a `proto.major.minor` triple, so it cannot be adjusted.
    #[error("malformed version: {0:?}")]
    MalformedVersion(String),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("version is not set")]
    Unset,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("malformed address: {0}")]
    MalformedAddress(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Why a single host probe produced no record.
///
/// Scans absorb these; they only ever reach the log.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("no reply before timeout")]
    Timeout,

    #[error("ICMP socket unavailable")]
    Unavailable,

    #[error("icmp: {0}")]
    Icmp(String),
}

#[derive(Debug, Error)]
pub enum IssError {
    #[error("no MyAppVersion define in {}", .0.display())]
    VersionNotFound(PathBuf),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: std::process::ExitStatus },
}

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("link target {} does not exist", .0.display())]
    Missing(PathBuf),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}
