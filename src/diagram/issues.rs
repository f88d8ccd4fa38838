//! Problems reported by whole-diagram validation.

use crate::core::{StateId, TransitionId};
use crate::registry::{AcceptSetError, LabelError};
use thiserror::Error;

/// One problem found while validating a diagram
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiagramIssue {
    #[error("State {state}: {error}")]
    Label { state: StateId, error: LabelError },

    #[error("Transition {transition}: {error}")]
    AcceptSet {
        transition: TransitionId,
        error: AcceptSetError,
    },
}

impl DiagramIssue {
    /// The message the editor shows next to the offending field.
    pub fn message(&self) -> String {
        match self {
            Self::Label { error, .. } => error.to_string(),
            Self::AcceptSet { error, .. } => error.to_string(),
        }
    }
}
