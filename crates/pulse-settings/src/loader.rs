//! Settings loading: defaults, user file, environment overrides.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::Result;
use crate::types::PulseSettings;

/// Path of the user settings file: `~/.pulse/settings.json`.
///
/// Falls back to the current directory when `HOME` is unset.
#[must_use]
pub fn settings_path() -> PathBuf {
    let home = std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from);
    home.join(".pulse").join("settings.json")
}

/// Load settings from the default path with env overrides applied.
///
/// A missing settings file is not an error — defaults are used. A file
/// that exists but cannot be read or parsed is.
pub fn load_settings() -> Result<PulseSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific file path.
///
/// The file content is deep-merged over compiled defaults, then `PULSE_*`
/// environment variables are applied, then [`PulseSettings::validate`]
/// corrects anything out of range.
pub fn load_settings_from_path(path: &Path) -> Result<PulseSettings> {
    let defaults = serde_json::to_value(PulseSettings::default())?;

    let merged = if path.is_file() {
        let content = std::fs::read_to_string(path)?;
        let overlay: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, overlay)
    } else {
        defaults
    };

    let mut settings: PulseSettings = serde_json::from_value(merged)?;
    apply_overrides(&mut settings, |name| std::env::var(name).ok());
    settings.validate();
    Ok(settings)
}

/// Deep-merge `overlay` into `base`.
///
/// Objects merge key-by-key recursively; any other value in `overlay`
/// replaces the base value wholesale.
#[must_use]
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                let _ = base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Apply `PULSE_*` overrides from the given variable lookup.
///
/// Unparseable numeric values are ignored with a warning rather than
/// failing startup. The lookup is injected so tests can override without
/// mutating process environment.
fn apply_overrides(settings: &mut PulseSettings, get: impl Fn(&str) -> Option<String>) {
    if let Some(port) = get("PULSE_PORT") {
        match port.parse() {
            Ok(port) => settings.server.port = port,
            Err(_) => tracing::warn!("ignoring invalid PULSE_PORT: {port}"),
        }
    }
    if let Some(bind) = get("PULSE_BIND") {
        settings.server.bind = bind;
    }
    if let Some(interval) = get("PULSE_INTERVAL_MS") {
        match interval.parse() {
            Ok(ms) => settings.stream.interval_ms = ms,
            Err(_) => tracing::warn!("ignoring invalid PULSE_INTERVAL_MS: {interval}"),
        }
    }
    if let Some(dir) = get("PULSE_VIEWS_DIR") {
        settings.server.views_dir = dir;
    }
    if let Some(level) = get("PULSE_LOG_LEVEL") {
        settings.logging.level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn fake_env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn deep_merge_combines_disjoint_keys() {
        let merged = deep_merge(json!({"x": 1}), json!({"y": 2}));
        assert_eq!(merged["x"], 1);
        assert_eq!(merged["y"], 2);
    }

    #[test]
    fn deep_merge_recurses_into_objects() {
        let base = json!({"server": {"port": 8080, "bind": "127.0.0.1"}});
        let overlay = json!({"server": {"port": 9090}});
        let merged = deep_merge(base, overlay);
        assert_eq!(merged["server"]["port"], 9090);
        assert_eq!(merged["server"]["bind"], "127.0.0.1");
    }

    #[test]
    fn deep_merge_replaces_non_objects() {
        let merged = deep_merge(json!({"level": "info"}), json!({"level": "debug"}));
        assert_eq!(merged["level"], "debug");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings = load_settings_from_path(Path::new("/nonexistent/settings.json")).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.stream.interval_ms, 1000);
    }

    #[test]
    fn file_values_merge_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"stream": {"intervalMs": 250}}"#).unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings.stream.interval_ms, 250);
        // Untouched sections keep defaults.
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.stream.event_template, "event.html");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_settings_from_path(&path).expect_err("malformed file");
        assert!(matches!(err, crate::SettingsError::Parse(_)));
    }

    #[test]
    fn overrides_beat_file_values() {
        let mut settings = PulseSettings::default();
        settings.server.port = 9090;

        apply_overrides(
            &mut settings,
            fake_env(&[("PULSE_PORT", "7070"), ("PULSE_INTERVAL_MS", "50")]),
        );

        assert_eq!(settings.server.port, 7070);
        assert_eq!(settings.stream.interval_ms, 50);
    }

    #[test]
    fn string_overrides_apply_verbatim() {
        let mut settings = PulseSettings::default();
        apply_overrides(
            &mut settings,
            fake_env(&[
                ("PULSE_BIND", "0.0.0.0"),
                ("PULSE_VIEWS_DIR", "/srv/views"),
                ("PULSE_LOG_LEVEL", "debug"),
            ]),
        );
        assert_eq!(settings.server.bind, "0.0.0.0");
        assert_eq!(settings.server.views_dir, "/srv/views");
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn invalid_numeric_override_is_ignored() {
        let mut settings = PulseSettings::default();
        apply_overrides(&mut settings, fake_env(&[("PULSE_PORT", "not-a-port")]));
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn zero_interval_from_file_is_corrected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"stream": {"intervalMs": 0}}"#).unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings.stream.interval_ms, 1000);
    }

    #[test]
    fn settings_path_is_under_home() {
        let path = settings_path();
        assert!(path.ends_with(".pulse/settings.json"));
    }
}
