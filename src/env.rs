/// Environment variable names used by this crate for convenient
/// configuration of the provider from services.
///
/// These are purely helpers; the provider itself never reads the
/// environment.

/// Minimum level to emit, e.g. `warn`. Unrecognized values mean `info`.
pub const LOG_PROVIDER_LEVEL_ENV: &str = "LOG_PROVIDER_LEVEL";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_falls_back_to_default() {
        let key = "CONSOLE_LOG_PROVIDER_ENV_OR_UNSET_0D5E";
        assert!(std::env::var_os(key).is_none());
        assert_eq!(env_or(key, "info"), "info");
    }
}
