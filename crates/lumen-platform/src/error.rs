//! Error types for the platform probe.

use thiserror::Error;

/// Unrecoverable probe failures.
///
/// Only facts initialization can fail. Subprocess query failures are NOT
/// errors at this boundary: they are logged and collapsed into an empty
/// result by policy (see [`crate::probe::PlatformProbe::query`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("host reported no OS version string")]
    VersionUnavailable,
}
