//! Crate-level error types.

use std::fmt;

use web_time::Duration;

/// Errors produced by the camrig crate.
#[derive(Debug)]
pub enum RigError {
    /// The host does not recognize the requested visual asset.
    AssetNotFound(String),
    /// A requested asset did not finish loading before the deadline.
    AssetLoadTimeout {
        /// Name of the asset that was being waited on.
        name: String,
        /// How long the wait lasted before giving up.
        waited: Duration,
    },
    /// The host refused to spawn an entity.
    Spawn(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetNotFound(name) => {
                write!(f, "asset not recognized by host: {name}")
            }
            Self::AssetLoadTimeout { name, waited } => {
                write!(f, "asset {name} not loaded after {waited:?}")
            }
            Self::Spawn(msg) => write!(f, "spawn failed: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for RigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
