//! State and transition records.
//!
//! States and transitions are passive values. Transitions refer to their
//! endpoints through [`StateId`] surrogates handed out by the state registry,
//! never through the state values themselves.

use super::role::{self, Role, RoleFlag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable surrogate key for a state within one diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub(crate) u64);

/// Stable surrogate key for a transition within one diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransitionId(pub(crate) u64);

impl StateId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TransitionId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A node of the diagram.
///
/// # Example
///
/// ```rust
/// use fsm_diagram::core::{Role, RoleFlag, State};
///
/// let mut state = State::new(0, "q0", 50.0, 50.0);
/// assert_eq!(state.role, Role::Normal);
///
/// state.toggle_role();
/// assert_eq!(state.role, Role::Final);
///
/// state.set_role_flag(RoleFlag::Start, false);
/// assert_eq!(state.role, Role::StartFinal);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Canvas position
    pub x: f64,
    pub y: f64,
    /// Index used for default naming
    pub state_index: u32,
    pub name: String,
    pub role: Role,
}

impl State {
    /// Create a `Normal` state.
    pub fn new(state_index: u32, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            state_index,
            name: name.into(),
            role: Role::Normal,
        }
    }

    /// Advance the role one step along the fixed cycle and return it.
    pub fn toggle_role(&mut self) -> Role {
        self.role = role::toggle_role(self.role);
        self.role
    }

    /// Set or clear one role flag and return the new role.
    pub fn set_role_flag(&mut self, flag: RoleFlag, remove: bool) -> Role {
        self.role = role::set_role_flag(self.role, flag, remove);
        self.role
    }

    /// Flip one role flag and return the new role.
    pub fn toggle_role_flag(&mut self, flag: RoleFlag) -> Role {
        self.role = role::toggle_role_flag(self.role, flag);
        self.role
    }
}

/// An edge of the diagram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub source: StateId,
    pub dest: StateId,
    /// Comma-separated characters or a bracketed character class. Only
    /// non-emptiness is checked.
    pub characters_accepted: String,
    /// Curve rotation used when drawing the edge
    pub rotation: f64,
}

impl Transition {
    pub fn new(source: StateId, dest: StateId, characters_accepted: impl Into<String>) -> Self {
        Self {
            source,
            dest,
            characters_accepted: characters_accepted.into(),
            rotation: 0.0,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.dest
    }

    /// Whether `state` is either endpoint.
    pub fn touches(&self, state: StateId) -> bool {
        self.source == state || self.dest == state
    }
}

/// Discriminator for the two kinds of diagram object.
///
/// This is the `type` field of the transport format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    State,
    Transition,
}

/// Handle to any object in a diagram, for hosts that select and delete
/// states and transitions through one code path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagramObject {
    State(StateId),
    Transition(TransitionId),
}

impl DiagramObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::State(_) => ObjectKind::State,
            Self::Transition(_) => ObjectKind::Transition,
        }
    }
}

impl From<StateId> for DiagramObject {
    fn from(id: StateId) -> Self {
        Self::State(id)
    }
}

impl From<TransitionId> for DiagramObject {
    fn from(id: TransitionId) -> Self {
        Self::Transition(id)
    }
}
