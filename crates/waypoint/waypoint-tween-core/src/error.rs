//! Error types for mover configuration.

use thiserror::Error;

/// Failures raised while building a mover configuration.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A mover needs at least one waypoint to approach.
    #[error("waypoint sequence is empty")]
    EmptyWaypoints,
    #[error("mover config parse error: {0}")]
    Parse(String),
    #[error("unknown easing style: {0}")]
    UnknownEasing(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
