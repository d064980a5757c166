use thiserror::Error;

/// Errors from the configuration editors and the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid encoded content type list: {0}")]
    InvalidEncodedList(String),

    #[error("stored allow-list carries both the flat and the per-collection shape")]
    AmbiguousShape,

    #[error("unrecognized allow-list shape: {0}")]
    UnknownShape(String),

    #[error("allow-list is {actual}, expected {expected}")]
    ShapeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("content type index {index} out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("failed to write settings: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
