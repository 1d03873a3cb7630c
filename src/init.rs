use crate::config::ProviderConfig;
use crate::layer::ConsoleLayer;
use crate::provider::{ConsoleProvider, LogProvider};
use std::sync::Arc;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Configuration of the tracing bridge.
///
/// **Fields**
/// - `provider`: [`ProviderConfig`] used to build the [`ConsoleProvider`].
/// - `with_span_frames`: offer enclosing spans as fallback caller frames.
#[derive(Clone, Debug)]
pub struct LayerConfig {
    pub provider: ProviderConfig,
    pub with_span_frames: bool,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            with_span_frames: true,
        }
    }
}

impl LayerConfig {
    /// Defaults, with the level taken from the environment.
    pub fn from_env() -> Self {
        Self {
            provider: ProviderConfig::from_env(),
            ..Self::default()
        }
    }
}

/// Error type returned when installing the global subscriber.
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled(#[from] SetGlobalDefaultError),
}

/// Install a [`Registry`] with a [`ConsoleLayer`] over `provider` as the
/// global default subscriber.
///
/// Can succeed once per process; later calls return
/// [`InitError::AlreadyInstalled`].
pub fn init_console_tracing(provider: Arc<dyn LogProvider>) -> Result<(), InitError> {
    install(ConsoleLayer::new(provider))
}

/// Build a stdout [`ConsoleProvider`] from `config` and install it as in
/// [`init_console_tracing`].
///
/// **Returns**
/// - the provider, for code that wants to log without going through
///   `tracing` (e.g. fatal records, which `tracing` has no level for).
pub fn init_console_tracing_with_config(
    config: LayerConfig,
) -> Result<Arc<ConsoleProvider>, InitError> {
    let provider = Arc::new(ConsoleProvider::new(&config.provider));
    let layer = ConsoleLayer::new(provider.clone()).with_span_frames(config.with_span_frames);
    install(layer)?;
    Ok(provider)
}

fn install(layer: ConsoleLayer) -> Result<(), InitError> {
    let subscriber = Registry::default().with(layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
