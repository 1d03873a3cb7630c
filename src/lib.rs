pub mod level;
pub mod record;
pub mod caller;
pub mod format;
pub mod sink;
pub mod noop_sink;
pub mod provider;
pub mod config;
pub mod env;

#[cfg(feature = "layer")]
pub mod layer;

#[cfg(feature = "layer")]
pub mod init;

#[doc(hidden)]
pub use serde_json;
