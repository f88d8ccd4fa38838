//! Validation errors for labels and accept sets.
//!
//! The `Display` text of each variant is the message shown next to the
//! offending field in the editor.

use crate::core::{StateId, TransitionId};
use thiserror::Error;

/// Why a state's name cannot be committed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("Not a valid label name")]
    InvalidLength,

    #[error("Names beginning with {prefix} are reserved")]
    Reserved { prefix: String },

    #[error("Duplicate state name")]
    DuplicateName,

    #[error("Unknown state {0}")]
    UnknownState(StateId),
}

/// Why a transition's accept set cannot be committed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AcceptSetError {
    #[error("Invalid accept set")]
    Empty,

    #[error("Unknown transition {0}")]
    UnknownTransition(TransitionId),
}
