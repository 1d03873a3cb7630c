use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// Levels are ordered by importance (`Debug < Info < Warn < Error < Fatal`);
/// a provider emits a record iff `record.level >= threshold`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    /// Emitting a `Fatal` record terminates the process once it is written.
    Fatal = 4,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Numeric severity, the `#[repr(u8)]` discriminant.
    pub fn severity(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Level::severity`]; `None` for bytes that name no level.
    pub fn from_severity(severity: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.severity() == severity)
    }

    /// Lowercase configuration name, e.g. `"warn"`.
    pub fn name(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// Uppercase name used in rendered lines, e.g. `"WARN"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Parse a configuration string, substituting [`Level::Info`] for
    /// anything unrecognized. Never fails.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`Level::from_str`] for an unknown level name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Names are case-sensitive: `"warn"` parses, `"WARN"` does not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}
