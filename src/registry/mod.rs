//! State and transition registries.
//!
//! Each registry is an arena that hands out surrogate ids on insertion and
//! keeps its entries in insertion order. Validation is a separate step from
//! insertion: a registry happily holds a state with a duplicate name until
//! the caller asks whether it may be committed.

pub mod error;
pub mod states;
pub mod transitions;

pub use error::{AcceptSetError, LabelError};
pub use states::StateRegistry;
pub use transitions::TransitionRegistry;
