//! # dc-core
//!
//! Error definitions, configuration defaults, and process-wide settings
//! shared by every crate in the dcalendario workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Static configuration defaults, overridable from the environment.
pub mod config;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Process-wide resolved settings.
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;
