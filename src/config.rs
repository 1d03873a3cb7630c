use crate::env::{env_or, LOG_PROVIDER_LEVEL_ENV};
use crate::level::Level;
use serde::Deserialize;

/// Provider configuration.
///
/// **Fields**
/// - `level`: minimum level name (`"debug"`, `"info"`, `"warn"`,
///   `"error"`, `"fatal"`). Case-sensitive; anything else behaves as
///   `"info"`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub level: String,
}

impl ProviderConfig {
    pub fn new(level: impl Into<String>) -> Self {
        ProviderConfig { level: level.into() }
    }

    /// Read the level from [`LOG_PROVIDER_LEVEL_ENV`], defaulting to `info`.
    pub fn from_env() -> Self {
        Self::new(env_or(LOG_PROVIDER_LEVEL_ENV, Level::Info.name()))
    }

    /// Parsed threshold. Never fails; bad names become [`Level::Info`].
    pub fn level(&self) -> Level {
        Level::parse_or_default(&self.level)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(Level::Info.name())
    }
}
