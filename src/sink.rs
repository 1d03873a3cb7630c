use std::error::Error;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Result of a sink operation, boxed so any backend error fits.
pub type SinkResult = Result<(), Box<dyn Error + Send + Sync>>;

/// Synchronous destination for rendered log lines.
///
/// Implementations must write each `line` as a unit: two concurrent calls
/// may be ordered either way but never interleave their bytes.
pub trait LogSink: Send + Sync {
    /// Write one fully rendered record.
    ///
    /// **Returns**
    /// - `Ok(())` once the whole line has been handed to the destination
    ///   and flushed.
    /// - `Err(..)` if the destination rejected the write. The provider
    ///   passes this straight back to its caller; it is not retried.
    fn write_line(&self, line: &[u8]) -> SinkResult;
}

/// Writes to the process's standard output.
///
/// Each line is written and flushed while holding the stdout lock.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &[u8]) -> SinkResult {
        let mut out = io::stdout().lock();
        out.write_all(line)?;
        out.flush()?;
        Ok(())
    }
}

/// Keeps every line in memory and counts writes.
///
/// Useful for tests and for capturing output in tools that post-process it.
#[derive(Debug, Default)]
pub struct MemorySink {
    buf: Mutex<Vec<u8>>,
    writes: AtomicUsize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `write_line` calls seen so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &[u8]) -> SinkResult {
        let mut buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        buf.extend_from_slice(line);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
