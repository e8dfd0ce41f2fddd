//! Version bookkeeping for release builds.
//!
//! A version is the triple `proto.major.minor`, adjusted with symbolic
//! operators (`+++`, `--`, `+`, ...) by the [`VersionManager`] and persisted
//! either as a plain `VERSION` file or inside an Inno-Setup script ([`iss`]).

pub mod iss;
mod manager;
mod operation;

pub use manager::{VERSION_FILE, VersionManager};
pub use operation::{Operation, Version};
