use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read or written.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON/TOML syntax or shape error.
    #[error("{origin}: {message}")]
    Parse { origin: String, message: String },

    /// A name outside the eight known parameters.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    #[error("invalid assumption {name}: {reason}")]
    InvalidAssumption { name: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
