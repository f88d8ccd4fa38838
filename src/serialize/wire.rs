//! Field layout of the transport JSON.

use crate::core::{ObjectKind, Role, State};
use serde::{Deserialize, Deserializer, Serialize};

fn state_kind() -> ObjectKind {
    ObjectKind::State
}

fn transition_kind() -> ObjectKind {
    ObjectKind::Transition
}

/// Missing, `null`, and `0` all load as zero. Non-finite floats are written
/// as `null`, so they come back as zero too.
fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct WireState {
    #[serde(default, deserialize_with = "zero_if_null")]
    pub x: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub y: f64,
    #[serde(default)]
    pub state_index: u32,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub name: String,
    #[serde(default)]
    pub state_type: Role,
    #[serde(rename = "type", default = "state_kind")]
    pub kind: ObjectKind,
}

impl Default for WireState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            state_index: 0,
            name: String::new(),
            state_type: Role::Normal,
            kind: ObjectKind::State,
        }
    }
}

impl From<&State> for WireState {
    fn from(state: &State) -> Self {
        Self {
            x: state.x,
            y: state.y,
            state_index: state.state_index,
            name: state.name.clone(),
            state_type: state.role,
            kind: ObjectKind::State,
        }
    }
}

impl From<WireState> for State {
    fn from(wire: WireState) -> Self {
        Self {
            x: wire.x,
            y: wire.y,
            state_index: wire.state_index,
            name: wire.name,
            role: wire.state_type,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct WireTransition {
    #[serde(default)]
    pub source_state: WireState,
    #[serde(default)]
    pub dest_state: WireState,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub characters_accepted: String,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub rotation: f64,
    #[serde(rename = "type", default = "transition_kind")]
    pub kind: ObjectKind,
}
