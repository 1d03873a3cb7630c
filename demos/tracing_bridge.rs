use tracing::{error, info, info_span, warn};

use console_log_provider::fields;
use console_log_provider::init::{init_console_tracing_with_config, LayerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let provider = init_console_tracing_with_config(LayerConfig::from_env())?;

    info!("starting service");

    let span = info_span!("request", id = 42);
    let _guard = span.enter();

    warn!(attempt = 2, "retrying upstream");
    error!(
        user_id = 42,
        reason = "invalid password",
        "authentication failed"
    );

    // tracing has no fatal level; go to the provider directly.
    if std::env::args().any(|arg| arg == "--fatal") {
        provider.fatal("cannot recover", &fields! { "user_id" => 42 })?;
    }

    Ok(())
}
