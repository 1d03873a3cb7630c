use std::sync::Arc;
use std::time::Instant;

use console_log_provider::fields;
use console_log_provider::level::Level;
use console_log_provider::noop_sink::NoopSink;
use console_log_provider::provider::{ConsoleProvider, ProviderError};

fn main() -> Result<(), ProviderError> {
    let provider = ConsoleProvider::with_level(Level::Info).with_sink(Arc::new(NoopSink));

    let n: u64 = 100_000;

    let start = Instant::now();
    for i in 0..n {
        provider.error("load test error", &fields! { "iteration" => i })?;
    }
    let formatted = start.elapsed();

    let start = Instant::now();
    for i in 0..n {
        provider.debug("filtered", &fields! { "iteration" => i })?;
    }
    let filtered = start.elapsed();

    println!(
        "formatted {} records in {:?} (~{:.0} rec/s)",
        n,
        formatted,
        n as f64 / formatted.as_secs_f64()
    );
    println!(
        "filtered {} records in {:?} (~{:.0} rec/s)",
        n,
        filtered,
        n as f64 / filtered.as_secs_f64()
    );

    Ok(())
}
