use std::fmt;
use std::str::FromStr;

use winhelper_common::error::VersionError;

/// A symbolic adjustment to one component of a [`Version`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    BumpProto,
    DropProto,
    BumpMajor,
    DropMajor,
    BumpMinor,
    DropMinor,
    Keep,
}

impl FromStr for Operation {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(VersionError::EmptyVersion),
            "+++" => Ok(Self::BumpProto),
            "---" => Ok(Self::DropProto),
            "++" => Ok(Self::BumpMajor),
            "--" => Ok(Self::DropMajor),
            "+" => Ok(Self::BumpMinor),
            "-" => Ok(Self::DropMinor),
            "=" | "==" | "===" => Ok(Self::Keep),
            other => Err(VersionError::InvalidOperation(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub proto: u64,
    pub major: u64,
    pub minor: u64,
}

impl Version {
    pub fn new(proto: u64, major: u64, minor: u64) -> Self {
        Self {
            proto,
            major,
            minor,
        }
    }

    /// Returns the adjusted version, or an error if a component would leave the `u64` range.
    pub fn apply(self, op: Operation) -> Result<Self, VersionError> {
        let Self {
            mut proto,
            mut major,
            mut minor,
        } = self;

        match op {
            Operation::BumpProto => proto = increment(proto)?,
            Operation::DropProto => proto = decrement(proto)?,
            Operation::BumpMajor => major = increment(major)?,
            Operation::DropMajor => major = decrement(major)?,
            Operation::BumpMinor => minor = increment(minor)?,
            Operation::DropMinor => minor = decrement(minor)?,
            Operation::Keep => {}
        }

        Ok(Self::new(proto, major, minor))
    }
}

fn increment(component: u64) -> Result<u64, VersionError> {
    component.checked_add(1).ok_or(VersionError::Overflow)
}

fn decrement(component: u64) -> Result<u64, VersionError> {
    component.checked_sub(1).ok_or(VersionError::NegativeVersion)
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || VersionError::MalformedVersion(s.to_string());

        let mut parts = s.trim().split('.');
        let mut component = || -> Result<u64, VersionError> {
            let part = parts.next().ok_or_else(malformed)?;
            if !part.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse().map_err(|_| malformed())
        };

        let version = Self::new(component()?, component()?, component()?);

        if parts.next().is_some() {
            return Err(malformed());
        }
        Ok(version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.proto, self.major, self.minor)
    }
}
