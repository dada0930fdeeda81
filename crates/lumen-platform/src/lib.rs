//! Lumen Platform - OS family, version and desktop-environment probe
//!
//! Answers one narrow question for the theme-detection layer: what OS,
//! what version, and (on Linux) is this a GNOME-family session? The
//! strategies that actually watch for theme changes pick their backend
//! (registry polling, D-Bus, file watching) from these booleans.
//!
//! Facts are captured once at startup and immutable afterwards. The only
//! impure predicate is the GNOME heuristic, which shells out through a
//! swappable [`CommandRunner`].

pub mod command;
pub mod desktop;
pub mod error;
pub mod facts;
pub mod probe;
pub mod version;

pub use command::{CommandRunner, ShellRunner};
pub use error::ProbeError;
pub use facts::{PlatformFacts, PlatformFamily};
pub use probe::PlatformProbe;
