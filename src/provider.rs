use crate::caller::Caller;
use crate::config::ProviderConfig;
use crate::format::{ConsoleFormatter, RecordFormatter};
use crate::level::Level;
use crate::record::{Fields, LogRecord};
use crate::sink::{LogSink, StdoutSink};
use std::error::Error;
use std::sync::Arc;

/// Exit status used by [`ExitProcess`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Error type returned by [`LogProvider`] operations.
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("failed to write log record: {0}")]
    Sink(Box<dyn Error + Send + Sync>),
}

/// Operations a logging facade drives on a provider.
pub trait LogProvider: Send + Sync {
    /// Whether a record at `level` would be emitted.
    fn should_log(&self, level: Level) -> bool;

    /// Emit one record attributed to `caller`.
    ///
    /// **Returns**
    /// - `Ok(())` if the record was written, or filtered out by level.
    /// - `Err(ProviderError::Sink(..))` if the sink rejected the write.
    fn write(
        &self,
        level: Level,
        message: &str,
        fields: &Fields,
        caller: Caller,
    ) -> Result<(), ProviderError>;

    /// Release provider resources.
    fn close(&self) -> Result<(), ProviderError>;
}

/// What happens once a [`Level::Fatal`] record has been handed to the sink,
/// whether or not the write succeeded.
pub trait FatalHandler: Send + Sync {
    fn on_fatal(&self);
}

/// Terminates the process with [`FATAL_EXIT_CODE`]. This is irreversible:
/// the calling thread never returns and no destructors run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitProcess;

impl FatalHandler for ExitProcess {
    fn on_fatal(&self) {
        std::process::exit(FATAL_EXIT_CODE);
    }
}

/// Provider writing colorized lines to a console sink.
///
/// The threshold is fixed at construction. By default the sink is standard
/// output and a fatal record exits the process.
pub struct ConsoleProvider {
    threshold: Level,
    sink: Arc<dyn LogSink>,
    formatter: Arc<dyn RecordFormatter>,
    fatal: Arc<dyn FatalHandler>,
}

impl ConsoleProvider {
    /// Create a provider from configuration. An unparseable level falls
    /// back to `info`; construction never fails.
    pub fn new(config: &ProviderConfig) -> Self {
        Self::with_level(config.level())
    }

    pub fn with_level(threshold: Level) -> Self {
        ConsoleProvider {
            threshold,
            sink: Arc::new(StdoutSink),
            formatter: Arc::new(ConsoleFormatter),
            fatal: Arc::new(ExitProcess),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn RecordFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Replace the fatal behavior, e.g. with a recorder in tests.
    pub fn with_fatal_handler(mut self, fatal: Arc<dyn FatalHandler>) -> Self {
        self.fatal = fatal;
        self
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    /// [`LogProvider::write`] attributed to the code calling `log`.
    #[track_caller]
    pub fn log(&self, level: Level, message: &str, fields: &Fields) -> Result<(), ProviderError> {
        self.write(level, message, fields, Caller::here())
    }

    #[track_caller]
    pub fn debug(&self, message: &str, fields: &Fields) -> Result<(), ProviderError> {
        self.log(Level::Debug, message, fields)
    }

    #[track_caller]
    pub fn info(&self, message: &str, fields: &Fields) -> Result<(), ProviderError> {
        self.log(Level::Info, message, fields)
    }

    #[track_caller]
    pub fn warn(&self, message: &str, fields: &Fields) -> Result<(), ProviderError> {
        self.log(Level::Warn, message, fields)
    }

    #[track_caller]
    pub fn error(&self, message: &str, fields: &Fields) -> Result<(), ProviderError> {
        self.log(Level::Error, message, fields)
    }

    /// Write a fatal record, then hand control to the fatal handler. With
    /// the default [`ExitProcess`] handler this never returns.
    #[track_caller]
    pub fn fatal(&self, message: &str, fields: &Fields) -> Result<(), ProviderError> {
        self.log(Level::Fatal, message, fields)
    }

    fn emit(&self, record: &LogRecord) -> Result<(), ProviderError> {
        let line = self.formatter.format(record);
        self.sink.write_line(&line).map_err(ProviderError::Sink)
    }
}

impl LogProvider for ConsoleProvider {
    fn should_log(&self, level: Level) -> bool {
        level >= self.threshold
    }

    fn write(
        &self,
        level: Level,
        message: &str,
        fields: &Fields,
        caller: Caller,
    ) -> Result<(), ProviderError> {
        if !self.should_log(level) {
            return Ok(());
        }

        let record = LogRecord::now(level, message, fields.clone(), caller);
        let written = self.emit(&record);

        // Fatal terminates even when the sink rejected the line.
        if level == Level::Fatal {
            if let Err(e) = &written {
                eprintln!("{}", e);
            }
            self.fatal.on_fatal();
        }
        written
    }

    fn close(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

impl std::fmt::Debug for ConsoleProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleProvider")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
