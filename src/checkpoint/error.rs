//! Snapshot error types.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while writing, reading, or restoring a snapshot
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Writing the snapshot as `format` failed
    #[error("Failed to encode {format} snapshot: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    /// Reading a snapshot stored as `format` failed
    #[error("Failed to decode {format} snapshot: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },

    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Invalid snapshot config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Ids repeat, an id is out of range, or a transition points outside
    /// the snapshot
    #[error("Inconsistent snapshot: {0}")]
    Inconsistent(String),
}
