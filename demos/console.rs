use std::sync::Arc;

use console_log_provider::config::ProviderConfig;
use console_log_provider::fields;
use console_log_provider::provider::{ConsoleProvider, ProviderError};
use console_log_provider::sink::{LogSink, SinkResult};

/// Example of plugging in a custom destination by implementing `LogSink`
/// directly. Here it just prefixes each line before printing it.
struct TaggedStdout(&'static str);

impl LogSink for TaggedStdout {
    fn write_line(&self, line: &[u8]) -> SinkResult {
        print!("[{}] {}", self.0, String::from_utf8_lossy(line));
        Ok(())
    }
}

fn main() -> Result<(), ProviderError> {
    // LOG_PROVIDER_LEVEL=debug shows the debug line below.
    let provider = ConsoleProvider::new(&ProviderConfig::from_env());

    provider.debug("loading settings", &fields! { "path" => "/etc/app.toml" })?;
    provider.info("Application started", &fields! { "user_id" => 123 })?;
    provider.warn("slow response", &fields! { "ms" => 1840, "route" => "/login" })?;
    provider.error("authentication failed", &fields! { "reason" => "invalid password" })?;

    let tagged = ConsoleProvider::new(&ProviderConfig::new("info"))
        .with_sink(Arc::new(TaggedStdout("audit")));
    tagged.info("custom sink in use", &fields! {})?;

    // Uncomment to see the process exit with status 1 after the line is written.
    // provider.fatal("unrecoverable", &fields! {})?;

    Ok(())
}
