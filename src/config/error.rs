//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when building a [`DiagramConfig`](super::DiagramConfig).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Default state prefix must not be empty")]
    EmptyPrefix,

    #[error("Maximum label length must be at least 1")]
    ZeroLabelLength,

    #[error("Default accept set must not be empty")]
    EmptyDefaultAccept,
}
