//! The diagram store.
//!
//! A [`Diagram`] is one editing session: a state registry, a transition
//! registry, and the configuration they share. Hosts hold it by value and
//! pass it by reference; nothing is global, so independent diagrams can
//! coexist.
//!
//! # Example
//!
//! ```rust
//! use fsm_diagram::Diagram;
//!
//! let mut diagram = Diagram::new();
//! let q0 = diagram.add_default_state(50.0, 50.0);
//! let q1 = diagram.add_default_state(150.0, 50.0);
//! diagram.add_transition(q0, q1);
//!
//! diagram.remove_state(q0);
//!
//! assert_eq!(diagram.states().len(), 1);
//! assert!(diagram.transitions().is_empty());
//! ```

mod issues;

pub use issues::DiagramIssue;

use crate::config::DiagramConfig;
use crate::core::{DiagramObject, State, StateId, Transition, TransitionId};
use crate::registry::{AcceptSetError, LabelError, StateRegistry, TransitionRegistry};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, info};

/// States plus transitions of one editing session.
#[derive(Clone, Debug, Default)]
pub struct Diagram {
    config: DiagramConfig,
    states: StateRegistry,
    transitions: TransitionRegistry,
}

impl Diagram {
    /// Create an empty diagram with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty diagram with a custom configuration
    pub fn with_config(config: DiagramConfig) -> Self {
        Self {
            states: StateRegistry::new(&config),
            transitions: TransitionRegistry::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn states(&self) -> &StateRegistry {
        &self.states
    }

    pub fn transitions(&self) -> &TransitionRegistry {
        &self.transitions
    }

    pub(crate) fn states_mut(&mut self) -> &mut StateRegistry {
        &mut self.states
    }

    pub(crate) fn transitions_mut(&mut self) -> &mut TransitionRegistry {
        &mut self.transitions
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    pub fn state_mut(&mut self, id: StateId) -> Option<&mut State> {
        self.states.get_mut(id)
    }

    pub fn transition(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions.get(id)
    }

    pub fn transition_mut(&mut self, id: TransitionId) -> Option<&mut Transition> {
        self.transitions.get_mut(id)
    }

    /// Reset both collections to empty. Configuration is kept.
    pub fn clear(&mut self) {
        info!(
            states = self.states.len(),
            transitions = self.transitions.len(),
            "diagram cleared"
        );
        self.states.clear();
        self.transitions.clear();
    }

    pub fn add_state(&mut self, state: State) -> StateId {
        self.states.add_state(state)
    }

    pub fn add_default_state(&mut self, x: f64, y: f64) -> StateId {
        self.states.add_default_state(x, y)
    }

    /// Connect two states. Endpoints are not checked for membership; a
    /// transition to a missing state is left out of [`Diagram::to_json`].
    pub fn add_transition(&mut self, source: StateId, dest: StateId) -> TransitionId {
        self.transitions.add_transition(source, dest)
    }

    pub fn remove_transition(&mut self, id: TransitionId) -> Option<Transition> {
        self.transitions.remove_transition(id)
    }

    /// Remove a state together with every transition that touches it.
    ///
    /// Does nothing if the state is not part of this diagram.
    pub fn remove_state(&mut self, id: StateId) -> Option<State> {
        let removed = self.transitions.remove_incident(id);
        let state = self.states.remove(id);
        if state.is_some() {
            debug!(state_id = %id, cascaded = removed, "state removed with its transitions");
        }
        state
    }

    /// Remove whichever kind of object `object` refers to. Returns whether
    /// anything was removed.
    pub fn remove_object(&mut self, object: DiagramObject) -> bool {
        match object {
            DiagramObject::State(id) => self.remove_state(id).is_some(),
            DiagramObject::Transition(id) => self.remove_transition(id).is_some(),
        }
    }

    pub fn check_label(&self, id: StateId) -> Result<(), LabelError> {
        self.states.check_label(id)
    }

    pub fn check_candidate(&self, state: &State) -> Result<(), LabelError> {
        self.states.check_candidate(state)
    }

    pub fn validate_label(&self, id: StateId) -> String {
        self.states.validate_label(id)
    }

    pub fn check_accept_chars(&self, id: TransitionId) -> Result<(), AcceptSetError> {
        self.transitions.check_accept_chars(id)
    }

    pub fn validate_accept_chars(&self, id: TransitionId) -> String {
        self.transitions.validate_accept_chars(id)
    }

    /// Validate every state label and every accept set, collecting all
    /// problems instead of stopping at the first.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<DiagramIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<DiagramIssue>>> = Vec::new();

        for state in self.states.ids() {
            let check = match self.states.check_label(state) {
                Ok(()) => Validation::success(()),
                Err(error) => Validation::fail(DiagramIssue::Label { state, error }),
            };
            checks.push(check);
        }

        for (transition, _) in self.transitions.iter() {
            let check = match self.transitions.check_accept_chars(transition) {
                Ok(()) => Validation::success(()),
                Err(error) => Validation::fail(DiagramIssue::AcceptSet { transition, error }),
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
