use std::fmt;
use std::panic::Location;

/// File name reported when no caller could be resolved.
pub const UNKNOWN_FILE: &str = "???";

/// Upper bound on the frames [`resolve_caller`] inspects.
pub const MAX_FRAMES: usize = 8;

/// Frames whose function/module path or file path contains one of these
/// belong to the logging pipeline itself and are skipped. Case-sensitive.
pub const SKIP_MARKERS: [&str; 2] = ["tracing_subscriber", "console_log_provider"];

/// Source location a record is attributed to: file basename plus line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub file: String,
    pub line: u32,
}

impl Caller {
    /// Build a caller from a full source path; only the last path segment is kept.
    pub fn new(path: &str, line: u32) -> Self {
        Caller {
            file: basename(path).to_string(),
            line,
        }
    }

    /// The `("???", 0)` sentinel.
    pub fn unknown() -> Self {
        Caller {
            file: UNKNOWN_FILE.to_string(),
            line: 0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.file == UNKNOWN_FILE && self.line == 0
    }

    /// Location of the code calling this function (or, through a chain of
    /// `#[track_caller]` functions, the outermost such call site).
    #[track_caller]
    pub fn here() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl Default for Caller {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.file, self.line)
    }
}

/// A candidate source location offered to [`resolve_caller`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Function or module path the location belongs to.
    pub function: &'a str,
    pub file: &'a str,
    pub line: u32,
}

impl Frame<'_> {
    fn is_internal(&self) -> bool {
        SKIP_MARKERS
            .iter()
            .any(|marker| self.function.contains(marker) || self.file.contains(marker))
    }
}

/// Pick the first frame outside the logging pipeline.
///
/// Frames are ordered innermost first. At most [`MAX_FRAMES`] are looked at;
/// when none qualifies the result is [`Caller::unknown`].
pub fn resolve_caller<'a, I>(frames: I) -> Caller
where
    I: IntoIterator<Item = Frame<'a>>,
{
    frames
        .into_iter()
        .take(MAX_FRAMES)
        .find(|frame| !frame.is_internal())
        .map(|frame| Caller::new(frame.file, frame.line))
        .unwrap_or_else(Caller::unknown)
}

fn basename(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}
