/// Errors from building an engine or loading its configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml { source: serde_yml::Error },

    #[error("board must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("fill rate must be within [0, 1], got {0}")]
    InvalidFillRate(f64),

    #[error("speed level must be within 1..=5, got {0}")]
    InvalidSpeedLevel(u8),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}
