use equipreg_core::Height;

/// Errors raised by the host itself, never by a registry.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The block height is non-decreasing.
    #[error("block height cannot move backwards from {current} to {requested}")]
    ClockRegression { current: Height, requested: Height },

    /// A read result could not be encoded as JSON.
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors loading a deploy config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse deploy config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Every problem found, not just the first.
    #[error("invalid deploy config: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
