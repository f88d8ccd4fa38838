//! Arena of diagram states.

use super::error::LabelError;
use crate::config::DiagramConfig;
use crate::core::{State, StateId};
use std::collections::HashSet;
use tracing::debug;

/// Owns the states of one diagram, in insertion order.
///
/// Insertion never checks names; a state may hold an invalid or duplicate
/// label until the caller validates it with [`StateRegistry::check_label`].
#[derive(Clone, Debug)]
pub struct StateRegistry {
    entries: Vec<(StateId, State)>,
    next_id: u64,
    config: DiagramConfig,
}

impl StateRegistry {
    pub fn new(config: &DiagramConfig) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            config: config.clone(),
        }
    }

    /// Append a state and return its id.
    pub fn add_state(&mut self, state: State) -> StateId {
        let id = StateId(self.next_id);
        self.next_id += 1;
        debug!(state_id = %id, name = %state.name, index = state.state_index, "state added");
        self.entries.push((id, state));
        id
    }

    /// Append a `Normal` state named after the lowest free index.
    ///
    /// Indices freed by removed states are reused before new ones are taken.
    pub fn add_default_state(&mut self, x: f64, y: f64) -> StateId {
        let index = self.lowest_free_index();
        let name = self.config.default_name(index);
        self.add_state(State::new(index, name, x, y))
    }

    fn lowest_free_index(&self) -> u32 {
        let used: HashSet<u32> = self.entries.iter().map(|(_, s)| s.state_index).collect();
        let count = self.entries.len() as u32;
        (0..count).find(|i| !used.contains(i)).unwrap_or(count)
    }

    /// Remove a state. Transitions are not touched here; use
    /// [`Diagram::remove_state`](crate::Diagram::remove_state) to cascade.
    pub fn remove(&mut self, id: StateId) -> Option<State> {
        let pos = self.entries.iter().position(|(sid, _)| *sid == id)?;
        let (_, state) = self.entries.remove(pos);
        debug!(state_id = %id, name = %state.name, "state removed");
        Some(state)
    }

    /// Insert under a known id, used when restoring snapshots.
    pub(crate) fn insert_with_id(&mut self, id: StateId, state: State) {
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        self.entries.push((id, state));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: StateId) -> Option<&State> {
        self.entries
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, s)| s)
    }

    pub fn get_mut(&mut self, id: StateId) -> Option<&mut State> {
        self.entries
            .iter_mut()
            .find(|(sid, _)| *sid == id)
            .map(|(_, s)| s)
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.get(id).is_some()
    }

    /// First state carrying `name`, in insertion order.
    pub fn find_by_name(&self, name: &str) -> Option<StateId> {
        self.entries
            .iter()
            .find(|(_, s)| s.name == name)
            .map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.entries.iter().map(|(id, s)| (*id, s))
    }

    pub fn ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate the name of a registered state.
    ///
    /// Checks run in order: length, reserved prefix, duplicates.
    pub fn check_label(&self, id: StateId) -> Result<(), LabelError> {
        let state = self.get(id).ok_or(LabelError::UnknownState(id))?;
        self.check_name(state, Some(id))
    }

    /// Validate a state that has not been added yet. Every registered state
    /// counts as a potential duplicate.
    pub fn check_candidate(&self, state: &State) -> Result<(), LabelError> {
        self.check_name(state, None)
    }

    /// Message form of [`check_label`](Self::check_label); empty means valid.
    pub fn validate_label(&self, id: StateId) -> String {
        match self.check_label(id) {
            Ok(()) => String::new(),
            Err(err) => err.to_string(),
        }
    }

    fn check_name(&self, state: &State, own: Option<StateId>) -> Result<(), LabelError> {
        let len = state.name.chars().count();
        if len == 0 || len > self.config.max_label_len {
            return Err(LabelError::InvalidLength);
        }

        let prefix = &self.config.default_prefix;
        if state.name.starts_with(prefix.as_str())
            && state.name != self.config.default_name(state.state_index)
        {
            return Err(LabelError::Reserved {
                prefix: prefix.clone(),
            });
        }

        let duplicate = self
            .entries
            .iter()
            .any(|(id, other)| Some(*id) != own && other.name == state.name);
        if duplicate {
            return Err(LabelError::DuplicateName);
        }

        Ok(())
    }
}

impl Default for StateRegistry {
    fn default() -> Self {
        Self::new(&DiagramConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;

    #[test]
    fn first_default_state_gets_index_zero() {
        let mut registry = StateRegistry::default();
        let id = registry.add_default_state(50.0, 60.0);

        let state = registry.get(id).unwrap();
        assert_eq!(state.state_index, 0);
        assert_eq!(state.name, "q0");
        assert_eq!(state.role, Role::Normal);
        assert_eq!((state.x, state.y), (50.0, 60.0));
    }

    #[test]
    fn default_state_reuses_lowest_freed_index() {
        let mut registry = StateRegistry::default();
        let _q0 = registry.add_default_state(0.0, 0.0);
        let q1 = registry.add_default_state(0.0, 0.0);
        let _q2 = registry.add_default_state(0.0, 0.0);

        registry.remove(q1);
        let id = registry.add_default_state(0.0, 0.0);

        assert_eq!(registry.get(id).unwrap().state_index, 1);
        assert_eq!(registry.get(id).unwrap().name, "q1");
        assert_ne!(id, q1, "ids are never reused");
    }

    #[test]
    fn default_state_skips_indices_taken_by_manual_states() {
        let mut registry = StateRegistry::default();
        registry.add_state(State::new(0, "A", 0.0, 0.0));
        registry.add_state(State::new(1, "B", 0.0, 0.0));

        let id = registry.add_default_state(0.0, 0.0);
        assert_eq!(registry.get(id).unwrap().name, "q2");
    }

    #[test]
    fn add_state_allows_duplicate_names() {
        let mut registry = StateRegistry::default();
        let a = registry.add_state(State::new(0, "A", 0.0, 0.0));
        let b = registry.add_state(State::new(1, "A", 0.0, 0.0));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.check_label(a), Err(LabelError::DuplicateName));
        assert_eq!(registry.validate_label(b), "Duplicate state name");
    }

    #[test]
    fn label_length_must_be_one_to_three() {
        let mut registry = StateRegistry::default();
        let empty = registry.add_state(State::new(0, "", 0.0, 0.0));
        let long = registry.add_state(State::new(1, "ABCD", 0.0, 0.0));
        let ok = registry.add_state(State::new(2, "ABC", 0.0, 0.0));

        assert_eq!(registry.validate_label(empty), "Not a valid label name");
        assert_eq!(registry.validate_label(long), "Not a valid label name");
        assert_eq!(registry.validate_label(ok), "");
    }

    #[test]
    fn reserved_prefix_requires_matching_index() {
        let mut registry = StateRegistry::default();
        let id = registry.add_state(State::new(3, "q5", 0.0, 0.0));

        assert_eq!(
            registry.validate_label(id),
            "Names beginning with q are reserved"
        );

        registry.get_mut(id).unwrap().name = "q3".to_string();
        assert_eq!(registry.validate_label(id), "");
    }

    #[test]
    fn length_is_checked_before_reserved_prefix() {
        let mut registry = StateRegistry::default();
        let id = registry.add_state(State::new(0, "q100", 0.0, 0.0));
        assert_eq!(registry.check_label(id), Err(LabelError::InvalidLength));
    }

    #[test]
    fn candidate_is_checked_against_all_states() {
        let mut registry = StateRegistry::default();
        registry.add_default_state(0.0, 0.0);

        let clash = State::new(0, "q0", 0.0, 0.0);
        assert_eq!(
            registry.check_candidate(&clash),
            Err(LabelError::DuplicateName)
        );
        assert!(registry.check_candidate(&State::new(9, "X", 0.0, 0.0)).is_ok());
    }

    #[test]
    fn unknown_state_fails_validation() {
        let registry = StateRegistry::default();
        assert_eq!(
            registry.check_label(StateId(4)),
            Err(LabelError::UnknownState(StateId(4)))
        );
    }

    #[test]
    fn removing_absent_state_is_noop() {
        let mut registry = StateRegistry::default();
        let id = registry.add_default_state(0.0, 0.0);
        assert!(registry.remove(id).is_some());
        assert!(registry.remove(id).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn custom_prefix_drives_naming_and_reservation() {
        let config = crate::config::DiagramConfigBuilder::new()
            .default_prefix("s")
            .build()
            .unwrap();
        let mut registry = StateRegistry::new(&config);
        let id = registry.add_default_state(0.0, 0.0);
        assert_eq!(registry.get(id).unwrap().name, "s0");

        let q = registry.add_state(State::new(1, "q7", 0.0, 0.0));
        assert_eq!(registry.validate_label(q), "");

        let s = registry.add_state(State::new(2, "s5", 0.0, 0.0));
        assert_eq!(registry.validate_label(s), "Names beginning with s are reserved");
    }

    #[test]
    fn inserting_highest_id_does_not_overflow() {
        let mut registry = StateRegistry::default();
        registry.insert_with_id(StateId(u64::MAX), State::new(0, "A", 0.0, 0.0));

        assert!(registry.contains(StateId(u64::MAX)));
    }
}
