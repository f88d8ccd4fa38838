//! Core diagram entities and the role machine.
//!
//! This module contains the passive records of the diagram:
//! - `State` and `Transition` plus their surrogate ids
//! - `Role`, the start/final status of a state, and its pure edit functions
//!
//! Nothing here touches a registry; role edits work on a bare `Role` or
//! a single `State`.

mod entity;
pub mod role;

pub use entity::{DiagramObject, ObjectKind, State, StateId, Transition, TransitionId};
pub use role::{set_role_flag, toggle_role, toggle_role_flag, Role, RoleFlag};
