use crate::sink::{LogSink, SinkResult};

/// A sink that simply drops all records.
///
/// Useful for measuring the overhead of filtering and formatting without
/// any terminal I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn write_line(&self, _line: &[u8]) -> SinkResult {
        Ok(())
    }
}
