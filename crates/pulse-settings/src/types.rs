//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` for the JSON wire
//! format. Each type implements [`Default`] with production default values,
//! and `#[serde(default)]` allows partial JSON — missing fields get their
//! default value during deserialization.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root settings type for the pulse server.
///
/// Loaded from `~/.pulse/settings.json` with defaults applied for missing
/// fields; `PULSE_*` environment variables override specific values.
///
/// # JSON Format
///
/// ```json
/// {
///   "version": "0.1.0",
///   "name": "pulse",
///   "server": { "port": 9090 },
///   "stream": { "intervalMs": 500 }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PulseSettings {
    /// Settings schema version.
    pub version: String,
    /// Application name.
    pub name: String,
    /// Server network settings.
    pub server: ServerSettings,
    /// Streaming endpoint settings.
    pub stream: StreamSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for PulseSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            name: "pulse".to_string(),
            server: ServerSettings::default(),
            stream: StreamSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl PulseSettings {
    /// Correct invalid values in place.
    ///
    /// Called automatically during loading. Out-of-range values are fixed
    /// with a warning rather than rejected, so users get corrected behavior
    /// instead of a startup failure. The tick interval in particular must
    /// be positive — a zero interval would spin the session loop.
    pub fn validate(&mut self) {
        if self.stream.interval_ms == 0 {
            let fallback = StreamSettings::default().interval_ms;
            tracing::warn!("stream.intervalMs must be > 0, using {fallback}");
            self.stream.interval_ms = fallback;
        }
    }
}

/// Server network settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Bind address.
    pub bind: String,
    /// Directory holding the HTML templates.
    pub views_dir: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind: "127.0.0.1".to_string(),
            views_dir: "views".to_string(),
        }
    }
}

/// Streaming endpoint settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreamSettings {
    /// Tick interval in milliseconds. Must be positive.
    pub interval_ms: u64,
    /// Template rendered for the landing page.
    pub index_template: String,
    /// Template rendered for each tick event.
    pub event_template: String,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            index_template: "index.html".to_string(),
            event_template: "event.html".to_string(),
        }
    }
}

impl StreamSettings {
    /// The tick interval as a [`Duration`].
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Tracing filter directive (e.g. `info`, `pulse_server=debug`).
    pub level: String,
    /// Emit JSON log lines instead of human-readable text.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
