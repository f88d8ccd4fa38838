//! Transport JSON for saving and loading diagrams.
//!
//! A diagram is stored as a JSON array of transitions. States are not listed
//! on their own; each one appears nested inside the transitions that touch
//! it:
//!
//! ```json
//! [{ "sourceState": { "x": 50, "y": 50, "stateIndex": 0, "name": "q0",
//!                     "stateType": "start", "type": "state" },
//!    "destState":   { "x": 150, "y": 50, "stateIndex": 1, "name": "q1",
//!                     "stateType": "final", "type": "state" },
//!    "charactersAccepted": "a", "rotation": 0, "type": "transition" }]
//! ```
//!
//! Loading rebuilds the state set from transition endpoints, keyed by name.
//! A state with no transitions therefore does not survive a save/load round
//! trip. Use [`checkpoint`](crate::checkpoint) for lossless persistence.
//!
//! # Example
//!
//! ```rust
//! use fsm_diagram::Diagram;
//!
//! let mut diagram = Diagram::new();
//! let q0 = diagram.add_default_state(50.0, 50.0);
//! let q1 = diagram.add_default_state(150.0, 50.0);
//! diagram.add_default_state(250.0, 50.0); // isolated
//! diagram.add_transition(q0, q1);
//!
//! let json = diagram.to_json().unwrap();
//! let loaded = Diagram::from_json(&json).unwrap();
//!
//! assert_eq!(loaded.states().len(), 2);
//! assert_eq!(loaded.transitions().len(), 1);
//! ```

mod error;
mod wire;

pub use error::SerializeError;

use crate::config::DiagramConfig;
use crate::core::{ObjectKind, State, StateId, Transition};
use crate::diagram::Diagram;
use tracing::{info, warn};
use wire::{WireState, WireTransition};

/// Encode a diagram's transitions as transport JSON.
///
/// A transition whose source or destination is no longer in the diagram
/// cannot be written in this format and is left out with a warning.
pub fn to_json(diagram: &Diagram) -> Result<String, SerializeError> {
    let mut wire = Vec::with_capacity(diagram.transitions().len());

    for (id, transition) in diagram.transitions().iter() {
        let (Some(source), Some(dest)) = (
            diagram.state(transition.source),
            diagram.state(transition.dest),
        ) else {
            warn!(
                transition_id = %id,
                source = %transition.source,
                dest = %transition.dest,
                "skipping transition with missing endpoint"
            );
            continue;
        };

        wire.push(WireTransition {
            source_state: WireState::from(source),
            dest_state: WireState::from(dest),
            characters_accepted: transition.characters_accepted.clone(),
            rotation: transition.rotation,
            kind: ObjectKind::Transition,
        });
    }

    serde_json::to_string(&wire).map_err(SerializeError::Encode)
}

/// Decode transport JSON into a new diagram with the default configuration.
pub fn from_json(text: &str) -> Result<Diagram, SerializeError> {
    from_json_with_config(text, DiagramConfig::default())
}

/// Decode transport JSON into a new diagram with the given configuration.
///
/// Malformed JSON is an error. Objects that parse but lack fields load with
/// defaults (empty name, zero position, `normal` role, empty accept set)
/// rather than being rejected.
pub fn from_json_with_config(
    text: &str,
    config: DiagramConfig,
) -> Result<Diagram, SerializeError> {
    let wire: Vec<WireTransition> = serde_json::from_str(text).map_err(SerializeError::Parse)?;
    Ok(rebuild(wire, config))
}

fn rebuild(wire: Vec<WireTransition>, config: DiagramConfig) -> Diagram {
    let mut diagram = Diagram::with_config(config);

    for (position, entry) in wire.into_iter().enumerate() {
        if entry.kind != ObjectKind::Transition
            || entry.source_state.kind != ObjectKind::State
            || entry.dest_state.kind != ObjectKind::State
        {
            warn!(position, "mismatched object type tag in saved diagram");
        }

        let source = intern_state(&mut diagram, entry.source_state);
        let dest = intern_state(&mut diagram, entry.dest_state);

        let mut transition = Transition::new(source, dest, entry.characters_accepted);
        transition.rotation = entry.rotation;
        // Saved data is kept as-is, including repeated self-loops.
        diagram.transitions_mut().push(transition);
    }

    info!(
        states = diagram.states().len(),
        transitions = diagram.transitions().len(),
        "diagram loaded"
    );
    diagram
}

/// First occurrence of a name wins; later endpoints with the same name
/// resolve to the already registered state.
fn intern_state(diagram: &mut Diagram, wire: WireState) -> StateId {
    if let Some(id) = diagram.states().find_by_name(&wire.name) {
        return id;
    }
    diagram.states_mut().add_state(State::from(wire))
}

impl Diagram {
    /// See [`to_json`].
    pub fn to_json(&self) -> Result<String, SerializeError> {
        to_json(self)
    }

    /// See [`from_json`].
    pub fn from_json(text: &str) -> Result<Self, SerializeError> {
        from_json(text)
    }

    /// Replace this diagram's contents with decoded transport JSON, keeping
    /// the current configuration. On error the diagram is left unchanged.
    pub fn load_json(&mut self, text: &str) -> Result<(), SerializeError> {
        *self = from_json_with_config(text, self.config().clone())?;
        Ok(())
    }
}
