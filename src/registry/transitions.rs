//! Arena of diagram transitions.

use super::error::AcceptSetError;
use crate::config::DiagramConfig;
use crate::core::{StateId, Transition, TransitionId};
use tracing::debug;

/// Owns the transitions of one diagram.
#[derive(Clone, Debug)]
pub struct TransitionRegistry {
    entries: Vec<(TransitionId, Transition)>,
    next_id: u64,
    default_accept: String,
}

impl TransitionRegistry {
    pub fn new(config: &DiagramConfig) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            default_accept: config.default_accept.clone(),
        }
    }

    /// Connect `source` to `dest`.
    ///
    /// A second self-loop on the same state is never created: the existing
    /// one is returned instead. Between distinct states every call appends a
    /// new parallel transition.
    pub fn add_transition(&mut self, source: StateId, dest: StateId) -> TransitionId {
        if source == dest {
            if let Some(existing) = self.self_loop(source) {
                debug!(transition_id = %existing, state_id = %source, "self-loop already present");
                return existing;
            }
        }

        let transition = Transition::new(source, dest, self.default_accept.clone());
        self.push(transition)
    }

    fn self_loop(&self, state: StateId) -> Option<TransitionId> {
        self.entries
            .iter()
            .find(|(_, t)| t.is_self_loop() && t.source == state)
            .map(|(id, _)| *id)
    }

    /// Append a fully specified transition without the self-loop check.
    pub(crate) fn push(&mut self, transition: Transition) -> TransitionId {
        let id = TransitionId(self.next_id);
        self.next_id += 1;
        debug!(
            transition_id = %id,
            source = %transition.source,
            dest = %transition.dest,
            "transition added"
        );
        self.entries.push((id, transition));
        id
    }

    /// Insert under a known id, used when restoring snapshots.
    pub(crate) fn insert_with_id(&mut self, id: TransitionId, transition: Transition) {
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        self.entries.push((id, transition));
    }

    pub fn remove_transition(&mut self, id: TransitionId) -> Option<Transition> {
        let pos = self.entries.iter().position(|(tid, _)| *tid == id)?;
        let (_, transition) = self.entries.remove(pos);
        debug!(transition_id = %id, "transition removed");
        Some(transition)
    }

    /// Remove every transition that starts or ends at `state`. Returns how
    /// many were removed.
    pub fn remove_incident(&mut self, state: StateId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(_, t)| !t.touches(state));
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(state_id = %state, removed, "incident transitions removed");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: TransitionId) -> Option<&Transition> {
        self.entries
            .iter()
            .find(|(tid, _)| *tid == id)
            .map(|(_, t)| t)
    }

    pub fn get_mut(&mut self, id: TransitionId) -> Option<&mut Transition> {
        self.entries
            .iter_mut()
            .find(|(tid, _)| *tid == id)
            .map(|(_, t)| t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TransitionId, &Transition)> {
        self.entries.iter().map(|(id, t)| (*id, t))
    }

    /// Transitions that start or end at `state`.
    pub fn incident(&self, state: StateId) -> impl Iterator<Item = (TransitionId, &Transition)> {
        self.iter().filter(move |(_, t)| t.touches(state))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Only emptiness is checked. Comma lists and character classes are
    /// accepted as written.
    pub fn check_accept_chars(&self, id: TransitionId) -> Result<(), AcceptSetError> {
        let transition = self
            .get(id)
            .ok_or(AcceptSetError::UnknownTransition(id))?;
        if transition.characters_accepted.is_empty() {
            return Err(AcceptSetError::Empty);
        }
        Ok(())
    }

    /// Message form of [`check_accept_chars`](Self::check_accept_chars);
    /// empty means valid.
    pub fn validate_accept_chars(&self, id: TransitionId) -> String {
        match self.check_accept_chars(id) {
            Ok(()) => String::new(),
            Err(err) => err.to_string(),
        }
    }
}

impl Default for TransitionRegistry {
    fn default() -> Self {
        Self::new(&DiagramConfig::default())
    }
}
