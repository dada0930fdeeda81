//! The probe surface: predicates over platform facts.
//!
//! A [`PlatformProbe`] is facts plus a command runner. Predicates are
//! pure reads of the facts except [`PlatformProbe::is_gnome_desktop`],
//! which shells out through the runner.

use std::sync::OnceLock;

use tracing::error;

use crate::command::{CommandRunner, ShellRunner};
use crate::desktop;
use crate::facts::{PlatformFacts, PlatformFamily};
use crate::version;

static GLOBAL_PROBE: OnceLock<PlatformProbe> = OnceLock::new();

/// Stateless-after-init platform probe.
pub struct PlatformProbe {
    facts: PlatformFacts,
    runner: Box<dyn CommandRunner>,
}

impl PlatformProbe {
    /// Probe over the given facts, querying through the real shell.
    pub fn new(facts: PlatformFacts) -> Self {
        Self::with_runner(facts, Box::new(ShellRunner))
    }

    /// Probe with an injected runner. This is the seam tests use to
    /// substitute canned command output.
    pub fn with_runner(facts: PlatformFacts, runner: Box<dyn CommandRunner>) -> Self {
        Self { facts, runner }
    }

    /// Process-wide probe, detecting facts exactly once even under
    /// concurrent first access.
    ///
    /// # Panics
    ///
    /// Aborts if fact detection fails. No fallback family/version exists,
    /// so an undetectable host is a fatal startup condition; callers that
    /// want to handle it construct facts via [`PlatformFacts::detect`]
    /// themselves.
    pub fn global() -> &'static PlatformProbe {
        GLOBAL_PROBE.get_or_init(|| match PlatformFacts::detect() {
            Ok(facts) => PlatformProbe::new(facts),
            Err(e) => panic!("platform fact detection failed: {e}"),
        })
    }

    pub fn facts(&self) -> &PlatformFacts {
        &self.facts
    }

    // ========================================================================
    // Family/version predicates
    // ========================================================================

    /// Exact match against the detected OS family.
    pub fn has_family(&self, family: PlatformFamily) -> bool {
        self.facts.family() == family
    }

    /// Detected version meets or exceeds `threshold` under the ordinal
    /// comparison rule in [`crate::version`].
    pub fn has_version_or_higher(&self, threshold: &str) -> bool {
        version::at_least(self.facts.raw_version(), threshold)
    }

    pub fn has_family_and_version_or_higher(
        &self,
        family: PlatformFamily,
        threshold: &str,
    ) -> bool {
        self.has_family(family) && self.has_version_or_higher(threshold)
    }

    pub fn is_windows_10_or_later(&self) -> bool {
        self.has_family_and_version_or_higher(PlatformFamily::Windows, "10")
    }

    pub fn is_linux(&self) -> bool {
        self.has_family(PlatformFamily::Linux)
    }

    pub fn is_macos_mojave_or_later(&self) -> bool {
        self.has_family_and_version_or_higher(PlatformFamily::MacOs, "10.14")
    }

    /// Best-effort GNOME session detection; always `false` off Linux.
    /// See [`crate::desktop`] for the heuristics.
    pub fn is_gnome_desktop(&self) -> bool {
        desktop::is_gnome_desktop(self)
    }

    // ========================================================================
    // Command queries
    // ========================================================================

    /// Run a shell command and return its stdout.
    ///
    /// Fallback policy: any spawn or read failure is logged here and
    /// collapsed into `""`. Errors never cross this boundary — the
    /// consumers only want a boolean heuristic, not diagnostics. Each
    /// call runs the command fresh; nothing is cached and nothing is
    /// retried.
    pub fn query(&self, command: &str) -> String {
        match self.runner.run(command) {
            Ok(stdout) => stdout,
            Err(e) => {
                error!(command = %command, error = %e, "OS query failed");
                String::new()
            }
        }
    }

    /// Lower-case the output of `command` and check it contains `needle`
    /// (expected lower-case already).
    pub fn query_contains(&self, command: &str, needle: &str) -> bool {
        self.query(command).to_lowercase().contains(needle)
    }
}
