//! Transport serialization errors.

use thiserror::Error;

/// Errors that can occur when encoding or decoding the transport JSON
#[derive(Debug, Error)]
pub enum SerializeError {
    /// Input was not a well-formed transition array
    #[error("Malformed diagram JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to encode diagram: {0}")]
    Encode(#[source] serde_json::Error),
}
