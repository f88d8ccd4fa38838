//! fsm-diagram: the data model behind a finite-state-machine diagram editor.
//!
//! The crate owns the states and transitions of a diagram and the rules that
//! govern them. Drawing, layout, and running the automaton on input are left
//! to the host.
//!
//! # Core Concepts
//!
//! - **Role**: whether a state is a start state, a final state, both, or
//!   neither, with three pure edit functions
//! - **Registries**: arenas of states and transitions keyed by surrogate ids,
//!   with default naming and label validation
//! - **Diagram**: one editing session combining both registries
//! - **Transport JSON**: the array-of-transitions format used by saved
//!   diagrams, plus lossless snapshots
//!
//! # Example
//!
//! ```rust
//! use fsm_diagram::{Diagram, Role, RoleFlag};
//!
//! let mut diagram = Diagram::new();
//! let q0 = diagram.add_default_state(50.0, 50.0);
//! let q1 = diagram.add_default_state(150.0, 50.0);
//!
//! diagram.state_mut(q0).unwrap().set_role_flag(RoleFlag::Start, false);
//! diagram.state_mut(q1).unwrap().toggle_role();
//! assert_eq!(diagram.state(q1).unwrap().role, Role::Final);
//!
//! let first = diagram.add_transition(q1, q1);
//! let second = diagram.add_transition(q1, q1);
//! assert_eq!(first, second);
//!
//! diagram.state_mut(q1).unwrap().name = "q7".to_string();
//! assert_eq!(diagram.validate_label(q1), "Names beginning with q are reserved");
//! ```

pub mod checkpoint;
pub mod config;
pub mod core;
pub mod diagram;
pub mod registry;
pub mod serialize;

// Re-export commonly used types
pub use crate::config::{DiagramConfig, DiagramConfigBuilder};
pub use crate::core::{
    DiagramObject, ObjectKind, Role, RoleFlag, State, StateId, Transition, TransitionId,
};
pub use crate::diagram::{Diagram, DiagramIssue};
pub use crate::registry::{AcceptSetError, LabelError};
pub use crate::serialize::SerializeError;
