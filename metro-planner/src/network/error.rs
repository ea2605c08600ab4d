//! Network construction and loading errors.

use std::path::PathBuf;

use crate::domain::LineNumber;

/// Usage errors raised while building or querying the network.
///
/// These signal a programming or data error, not a lookup miss: a miss is
/// reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A station or query referenced a line that was never registered
    #[error("line {0} is not registered")]
    UnknownLine(LineNumber),

    /// A connection group referenced a station that was never registered
    #[error("station '{name}' on line {line} is not registered")]
    UnknownStation { line: LineNumber, name: String },

    /// A connection group had no members
    #[error("connection group must name at least one station")]
    EmptyConnection,
}

/// Errors from loading a network description.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid network JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document references lines or stations it never declares
    #[error("invalid network: {0}")]
    Network(#[from] NetworkError),
}
