//! # pulse-settings
//!
//! Configuration management with layered sources for the pulse server.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`PulseSettings::default()`]
//! 2. **User file** — `~/.pulse/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `PULSE_*` overrides (highest priority)
//!
//! The binary loads settings once at startup and passes values down; there
//! is no runtime reload path.
//!
//! # Usage
//!
//! ```no_run
//! use pulse_settings::load_settings;
//!
//! let settings = load_settings().unwrap_or_default();
//! println!("HTTP port: {}", settings.server.port);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::*;
