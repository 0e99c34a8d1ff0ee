use std::fmt;

/// Comprehensive error types for verbprobe operations
#[derive(Debug)]
pub enum VerbProbeError {
    /// IO error (writing the report, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Report serialization error
    Serialization(serde_json::Error),
}

impl fmt::Display for VerbProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerbProbeError::Io(err) => write!(f, "IO error: {err}"),
            VerbProbeError::Config(msg) => write!(f, "Configuration error: {msg}"),
            VerbProbeError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            VerbProbeError::Http(err) => write!(f, "HTTP error: {err}"),
            VerbProbeError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            VerbProbeError::Serialization(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for VerbProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VerbProbeError::Io(err) => Some(err),
            VerbProbeError::Http(err) => Some(err),
            VerbProbeError::TomlParsing(err) => Some(err),
            VerbProbeError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VerbProbeError {
    fn from(err: std::io::Error) -> Self {
        VerbProbeError::Io(err)
    }
}

impl From<reqwest::Error> for VerbProbeError {
    fn from(err: reqwest::Error) -> Self {
        VerbProbeError::Http(err)
    }
}

impl From<toml::de::Error> for VerbProbeError {
    fn from(err: toml::de::Error) -> Self {
        VerbProbeError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for VerbProbeError {
    fn from(err: serde_json::Error) -> Self {
        VerbProbeError::Serialization(err)
    }
}

/// Type alias for Results using VerbProbeError
pub type Result<T> = std::result::Result<T, VerbProbeError>;
