//! Lossless snapshots of a whole diagram.
//!
//! The transport JSON only stores transitions, so isolated states are lost on
//! a save/load round trip. A [`Snapshot`] stores every state and transition
//! together with their ids and the diagram configuration, and can be written
//! as JSON or as compact binary.
//!
//! # Example
//!
//! ```rust
//! use fsm_diagram::checkpoint::Snapshot;
//! use fsm_diagram::Diagram;
//!
//! let mut diagram = Diagram::new();
//! diagram.add_default_state(10.0, 10.0);
//!
//! let bytes = Snapshot::capture(&diagram).to_binary().unwrap();
//! let restored = Snapshot::from_binary(&bytes).unwrap().restore().unwrap();
//!
//! assert_eq!(restored.states().len(), 1);
//! ```

pub mod error;

pub use error::CheckpointError;

use crate::config::DiagramConfig;
use crate::core::{State, StateId, Transition, TransitionId};
use crate::diagram::Diagram;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a diagram.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When snapshot was taken
    pub timestamp: DateTime<Utc>,

    pub config: DiagramConfig,

    /// States in insertion order
    pub states: Vec<(StateId, State)>,

    /// Transitions in insertion order
    pub transitions: Vec<(TransitionId, Transition)>,
}

impl Snapshot {
    pub fn capture(diagram: &Diagram) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            config: diagram.config().clone(),
            states: diagram
                .states()
                .iter()
                .map(|(id, s)| (id, s.clone()))
                .collect(),
            transitions: diagram
                .transitions()
                .iter()
                .map(|(id, t)| (id, t.clone()))
                .collect(),
        }
    }

    /// Rebuild the diagram, keeping ids.
    ///
    /// Fails if the version is unknown, the config breaks the builder's
    /// rules, an id repeats or is `u64::MAX`, or a transition refers to a
    /// state that is not in the snapshot.
    pub fn restore(&self) -> Result<Diagram, CheckpointError> {
        self.check()?;

        let mut diagram = Diagram::with_config(self.config.clone());
        for (id, state) in &self.states {
            diagram.states_mut().insert_with_id(*id, state.clone());
        }
        for (id, transition) in &self.transitions {
            diagram
                .transitions_mut()
                .insert_with_id(*id, transition.clone());
        }

        info!(
            snapshot_id = %self.id,
            states = self.states.len(),
            transitions = self.transitions.len(),
            "diagram restored from snapshot"
        );
        Ok(diagram)
    }

    fn check(&self) -> Result<(), CheckpointError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        self.config.validate()?;

        let mut state_ids = HashSet::new();
        for (id, _) in &self.states {
            if id.0 == u64::MAX {
                return Err(CheckpointError::Inconsistent(format!(
                    "state id {id} is out of range"
                )));
            }
            if !state_ids.insert(*id) {
                return Err(CheckpointError::Inconsistent(format!(
                    "duplicate state id {id}"
                )));
            }
        }

        let mut transition_ids = HashSet::new();
        for (id, transition) in &self.transitions {
            if id.0 == u64::MAX {
                return Err(CheckpointError::Inconsistent(format!(
                    "transition id {id} is out of range"
                )));
            }
            if !transition_ids.insert(*id) {
                return Err(CheckpointError::Inconsistent(format!(
                    "duplicate transition id {id}"
                )));
            }
            for endpoint in [transition.source, transition.dest] {
                if !state_ids.contains(&endpoint) {
                    return Err(CheckpointError::Inconsistent(format!(
                        "transition {id} refers to missing state {endpoint}"
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Encode {
            format: "json",
            message: e.to_string(),
        })
    }

    pub fn from_json(text: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(text).map_err(|e| CheckpointError::Decode {
            format: "json",
            message: e.to_string(),
        })
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode {
            format: "binary",
            message: e.to_string(),
        })
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes).map_err(|e| CheckpointError::Decode {
            format: "binary",
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::core::Role;

    fn sample() -> Diagram {
        let mut diagram = Diagram::new();
        let q0 = diagram.add_default_state(0.0, 0.0);
        let q1 = diagram.add_default_state(100.0, 0.0);
        let lonely = diagram.add_default_state(200.0, 0.0);
        diagram.state_mut(lonely).unwrap().role = Role::Final;
        diagram.add_transition(q0, q1);
        diagram.remove_state(q0);
        let q0 = diagram.add_default_state(0.0, 50.0);
        diagram.add_transition(q0, q0);
        diagram
    }

    fn assert_same(a: &Diagram, b: &Diagram) {
        let states_a: Vec<_> = a.states().iter().map(|(id, s)| (id, s.clone())).collect();
        let states_b: Vec<_> = b.states().iter().map(|(id, s)| (id, s.clone())).collect();
        assert_eq!(states_a, states_b);

        let trans_a: Vec<_> = a.transitions().iter().map(|(id, t)| (id, t.clone())).collect();
        let trans_b: Vec<_> = b.transitions().iter().map(|(id, t)| (id, t.clone())).collect();
        assert_eq!(trans_a, trans_b);
    }

    #[test]
    fn json_snapshot_preserves_isolated_states() {
        let diagram = sample();
        let json = Snapshot::capture(&diagram).to_json().unwrap();
        let restored = Snapshot::from_json(&json).unwrap().restore().unwrap();

        assert_same(&diagram, &restored);
        assert!(restored.states().find_by_name("q2").is_some());
    }

    #[test]
    fn binary_snapshot_preserves_diagram() {
        let diagram = sample();
        let bytes = Snapshot::capture(&diagram).to_binary().unwrap();
        let restored = Snapshot::from_binary(&bytes).unwrap().restore().unwrap();

        assert_same(&diagram, &restored);
    }

    #[test]
    fn restored_diagram_does_not_reuse_ids() {
        let diagram = sample();
        let mut restored = Snapshot::capture(&diagram).restore().unwrap();

        let fresh = restored.add_default_state(0.0, 0.0);
        assert!(diagram.states().ids().all(|id| id != fresh));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut snapshot = Snapshot::capture(&sample());
        snapshot.version = 99;

        assert!(matches!(
            snapshot.restore(),
            Err(CheckpointError::UnsupportedVersion {
                found: 99,
                supported: SNAPSHOT_VERSION
            })
        ));
    }

    #[test]
    fn dangling_transition_is_rejected() {
        let mut snapshot = Snapshot::capture(&sample());
        snapshot.states.clear();

        assert!(matches!(
            snapshot.restore(),
            Err(CheckpointError::Inconsistent(_))
        ));
    }

    #[test]
    fn highest_ids_are_rejected() {
        let mut snapshot = Snapshot::capture(&sample());
        snapshot.states[0].0 = StateId(u64::MAX);
        assert!(matches!(
            snapshot.restore(),
            Err(CheckpointError::Inconsistent(_))
        ));

        let mut snapshot = Snapshot::capture(&sample());
        snapshot.transitions[0].0 = TransitionId(u64::MAX);
        let json = snapshot.to_json().unwrap();
        assert!(matches!(
            Snapshot::from_json(&json).unwrap().restore(),
            Err(CheckpointError::Inconsistent(_))
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut snapshot = Snapshot::capture(&sample());
        snapshot.config.default_prefix.clear();

        assert!(matches!(
            snapshot.restore(),
            Err(CheckpointError::InvalidConfig(ConfigError::EmptyPrefix))
        ));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(
            Snapshot::from_binary(&[1, 2, 3]),
            Err(CheckpointError::Decode { format: "binary", .. })
        ));
    }

    #[test]
    fn each_capture_gets_a_fresh_id() {
        let diagram = sample();
        assert_ne!(
            Snapshot::capture(&diagram).id,
            Snapshot::capture(&diagram).id
        );
    }
}
