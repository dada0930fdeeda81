//! Platform facts - OS family and version, captured once at startup.
//!
//! Both fields are set together before any predicate runs and never
//! mutated afterwards. Detection failure is fatal by design: there is no
//! meaningful fallback family/version for an unsupported host.

use std::fmt;

use serde::{Deserialize, Serialize};
use sysinfo::System;
use tracing::debug;

use crate::error::ProbeError;

/// Coarse OS family classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    Windows,
    Linux,
    MacOs,
    FreeBsd,
    Other,
}

impl PlatformFamily {
    /// Every family the probe distinguishes, for exhaustive checks.
    pub const ALL: [PlatformFamily; 5] = [
        PlatformFamily::Windows,
        PlatformFamily::Linux,
        PlatformFamily::MacOs,
        PlatformFamily::FreeBsd,
        PlatformFamily::Other,
    ];

    /// Classify a `std::env::consts::OS`-style identifier.
    pub fn from_os_str(os: &str) -> Self {
        match os {
            "windows" => PlatformFamily::Windows,
            "linux" => PlatformFamily::Linux,
            "macos" => PlatformFamily::MacOs,
            "freebsd" => PlatformFamily::FreeBsd,
            _ => PlatformFamily::Other,
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformFamily::Windows => "Windows",
            PlatformFamily::Linux => "Linux",
            PlatformFamily::MacOs => "macOS",
            PlatformFamily::FreeBsd => "FreeBSD",
            PlatformFamily::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Immutable host facts: which OS family, and the raw version string the
/// OS reported (e.g. "10.14.6" on macOS, "10" on Windows).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFacts {
    family: PlatformFamily,
    raw_version: String,
}

impl PlatformFacts {
    /// Build facts from known values. Used for dependency injection and
    /// tests; production callers normally go through [`Self::detect`].
    pub fn new(family: PlatformFamily, raw_version: impl Into<String>) -> Self {
        Self {
            family,
            raw_version: raw_version.into(),
        }
    }

    /// Query the host for family and OS version.
    ///
    /// A host that reports no version string is an unsupported host;
    /// callers must treat the error as fatal rather than defaulting.
    pub fn detect() -> Result<Self, ProbeError> {
        let family = PlatformFamily::from_os_str(std::env::consts::OS);
        let raw_version = System::os_version().ok_or(ProbeError::VersionUnavailable)?;

        let facts = Self {
            family,
            raw_version,
        };
        debug!(family = %facts.family, version = %facts.raw_version, "Detected platform facts");
        Ok(facts)
    }

    pub fn family(&self) -> PlatformFamily {
        self.family
    }

    pub fn raw_version(&self) -> &str {
        &self.raw_version
    }
}

impl fmt::Display for PlatformFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.raw_version)
    }
}
