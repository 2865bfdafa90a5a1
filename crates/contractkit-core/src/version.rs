//! Compiler version identifiers.

use derive_more::Display;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::{Error, Result};

// MAJOR.MINOR.PATCH, numeric components without leading zeros.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$").unwrap()
});

/// A compiler release identifier such as `0.8.19`.
///
/// Only exact releases are accepted; ranges, prefixes (`v0.8.19`) and
/// prerelease suffixes are rejected because the toolchain downloads a
/// specific compiler build for each descriptor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[serde(try_from = "String", into = "String")]
#[display("{major}.{minor}.{patch}")]
pub struct CompilerVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl CompilerVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string, rejecting anything that is not an exact release.
    pub fn parse(input: &str) -> Result<Self> {
        let caps = VERSION_REGEX
            .captures(input)
            .ok_or_else(|| Error::InvalidInput(format!("malformed compiler version '{}'", input)))?;

        let component = |idx: usize| -> Result<u32> {
            caps[idx].parse().map_err(|_| {
                Error::InvalidInput(format!(
                    "compiler version component out of range in '{}'",
                    input
                ))
            })
        };

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }
}

impl std::str::FromStr for CompilerVersion {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CompilerVersion {
    type Error = Error;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CompilerVersion> for String {
    fn from(version: CompilerVersion) -> Self {
        version.to_string()
    }
}
