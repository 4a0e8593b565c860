//! Settings loading errors.

/// Result alias for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Why settings could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings file")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON for the settings schema.
    #[error("failed to parse settings file")]
    Parse(#[from] serde_json::Error),
}
