//! GNOME desktop-session heuristics for Linux.
//!
//! No single signal covers every GNOME-based distribution and session
//! type (X11/Wayland, flavors, remote sessions), so three progressively
//! weaker signals are tried in order:
//!
//! 1. `XDG_CURRENT_DESKTOP` mentions gnome
//! 2. `XDG_DATA_DIRS` mentions gnome
//! 3. a gnome process is in the process list
//!
//! Best-effort by design; exotic configurations can still produce false
//! negatives.

use crate::probe::PlatformProbe;

/// Substring every heuristic looks for, lower-case.
pub(crate) const GNOME_TOKEN: &str = "gnome";

/// Probe commands, strongest signal first.
pub(crate) const GNOME_HEURISTICS: [&str; 3] = [
    "echo $XDG_CURRENT_DESKTOP",
    "echo $XDG_DATA_DIRS | grep -Eo 'gnome'",
    "ps -e | grep -E -i \"gnome\"",
];

/// True when any heuristic finds a GNOME-family session.
///
/// Returns `false` without spawning anything when the probe is not on
/// Linux.
pub(crate) fn is_gnome_desktop(probe: &PlatformProbe) -> bool {
    if !probe.is_linux() {
        return false;
    }
    GNOME_HEURISTICS
        .iter()
        .any(|cmd| probe.query_contains(cmd, GNOME_TOKEN))
}
