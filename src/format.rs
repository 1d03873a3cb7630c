use crate::level::Level;
use crate::record::{render_value, LogRecord};

pub const RESET: &str = "\x1b[0m";
pub const CYAN: &str = "\x1b[36m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";
pub const WHITE: &str = "\x1b[37m";

/// `YYYY-MM-DD HH:MM:SS`, local time, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Turns a [`LogRecord`] into the bytes a sink writes.
///
/// Implementations hold no per-call state and are shared across threads.
pub trait RecordFormatter: Send + Sync {
    /// Render one record. The output is a single line ending in `\n`.
    fn format(&self, record: &LogRecord) -> Vec<u8>;
}

/// Colorized single-line console format:
///
/// ```text
/// 2024-01-15 10:30:45 [\x1b[32mINFO\x1b[0m] main.rs(25) - Application started user_id=123
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn new() -> Self {
        ConsoleFormatter
    }

    /// Same as [`RecordFormatter::format`], as a `String`.
    pub fn format_line(&self, record: &LogRecord) -> String {
        let mut line = format!(
            "{} [{}{}{}] {} - {}",
            record.timestamp.format(TIMESTAMP_FORMAT),
            level_color(record.level.severity()),
            record.level.as_str(),
            RESET,
            record.caller,
            record.message,
        );

        for (key, value) in &record.fields {
            line.push(' ');
            line.push_str(key);
            line.push('=');
            line.push_str(&render_value(value));
        }

        line.push('\n');
        line
    }
}

impl RecordFormatter for ConsoleFormatter {
    fn format(&self, record: &LogRecord) -> Vec<u8> {
        self.format_line(record).into_bytes()
    }
}

/// ANSI color escape for a raw severity byte. Bytes that name no [`Level`]
/// get white.
pub fn level_color(severity: u8) -> &'static str {
    match Level::from_severity(severity) {
        Some(Level::Debug) => CYAN,
        Some(Level::Info) => GREEN,
        Some(Level::Warn) => YELLOW,
        Some(Level::Error) | Some(Level::Fatal) => RED,
        None => WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caller::Caller;
    use crate::fields;
    use crate::record::Fields;
    use chrono::{Local, TimeZone};

    fn record(level: Level, message: &str, fields: Fields) -> LogRecord {
        LogRecord {
            timestamp: Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap(),
            level,
            message: message.to_string(),
            fields,
            caller: Caller::new("src/main.rs", 25),
        }
    }

    #[test]
    fn renders_the_full_line() {
        let line = ConsoleFormatter.format_line(&record(
            Level::Info,
            "Application started",
            fields! { "user_id" => 123 },
        ));
        assert_eq!(
            line,
            "2024-01-15 10:30:45 [\x1b[32mINFO\x1b[0m] main.rs(25) - Application started user_id=123\n"
        );
    }

    #[test]
    fn omits_field_section_when_empty() {
        let line = ConsoleFormatter.format_line(&record(Level::Warn, "disk low", Fields::new()));
        assert!(line.ends_with("] main.rs(25) - disk low\n"));
    }

    #[test]
    fn fields_render_sorted_by_key() {
        let line = ConsoleFormatter.format_line(&record(
            Level::Debug,
            "m",
            fields! { "zeta" => 1, "alpha" => "a", "mid" => true },
        ));
        assert!(line.ends_with(" - m alpha=a mid=true zeta=1\n"), "{line:?}");
    }

    #[test]
    fn output_ends_with_exactly_one_newline() {
        let bytes = ConsoleFormatter.format(&record(Level::Error, "boom", Fields::new()));
        assert_eq!(bytes.last(), Some(&b'\n'));
        assert_eq!(bytes.iter().filter(|b| **b == b'\n').count(), 1);
    }

    #[test]
    fn color_table_matches_every_level() {
        let expected = [
            (Level::Debug, "\x1b[36m"),
            (Level::Info, "\x1b[32m"),
            (Level::Warn, "\x1b[33m"),
            (Level::Error, "\x1b[31m"),
            (Level::Fatal, "\x1b[31m"),
        ];
        for (level, color) in expected {
            assert_eq!(level_color(level.severity()), color, "{level}");
            let line = ConsoleFormatter.format_line(&record(level, "x", Fields::new()));
            assert!(line.contains(&format!("[{color}{level}\x1b[0m]")), "{line:?}");
        }
    }

    #[test]
    fn unknown_severity_is_white() {
        assert_eq!(level_color(5), "\x1b[37m");
        assert_eq!(level_color(200), WHITE);
    }

    #[test]
    fn unresolved_caller_renders_sentinel() {
        let mut rec = record(Level::Info, "x", Fields::new());
        rec.caller = Caller::unknown();
        assert!(ConsoleFormatter.format_line(&rec).contains("] ???(0) - x"));
    }
}
