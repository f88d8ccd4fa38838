//! Start/final role of a diagram state.
//!
//! A role is two independent flags (`is_start`, `is_final`) packed into one
//! of four values. Three pure view functions edit that pair, each matching a
//! different editor affordance:
//!
//! - [`toggle_role`]: cycle-click through all four roles in a fixed order
//! - [`set_role_flag`]: checkbox that sets or clears one flag
//! - [`toggle_role_flag`]: checkbox that flips one flag

use serde::{Deserialize, Serialize};
use std::fmt;

/// Start/final status of a state.
///
/// Serializes as the lowercase strings `normal`, `start`, `final`, and
/// `startfinal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Normal,
    Start,
    Final,
    StartFinal,
}

/// A single flag within a [`Role`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoleFlag {
    Start,
    Final,
}

impl Role {
    /// All roles in cycle order.
    pub const ALL: [Role; 4] = [Role::Normal, Role::Final, Role::Start, Role::StartFinal];

    /// Pack a flag pair into a role.
    pub fn from_flags(is_start: bool, is_final: bool) -> Self {
        match (is_start, is_final) {
            (false, false) => Self::Normal,
            (true, false) => Self::Start,
            (false, true) => Self::Final,
            (true, true) => Self::StartFinal,
        }
    }

    pub fn is_start(self) -> bool {
        matches!(self, Self::Start | Self::StartFinal)
    }

    pub fn is_final(self) -> bool {
        matches!(self, Self::Final | Self::StartFinal)
    }

    pub fn has(self, flag: RoleFlag) -> bool {
        match flag {
            RoleFlag::Start => self.is_start(),
            RoleFlag::Final => self.is_final(),
        }
    }

    fn with(self, flag: RoleFlag, value: bool) -> Self {
        match flag {
            RoleFlag::Start => Self::from_flags(value, self.is_final()),
            RoleFlag::Final => Self::from_flags(self.is_start(), value),
        }
    }

    /// Wire string for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Start => "start",
            Self::Final => "final",
            Self::StartFinal => "startfinal",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advance one step along `Normal → Final → Start → StartFinal → Normal`.
///
/// This order is fixed and is not the binary count over the flag pair.
pub fn toggle_role(role: Role) -> Role {
    match role {
        Role::Normal => Role::Final,
        Role::Final => Role::Start,
        Role::Start => Role::StartFinal,
        Role::StartFinal => Role::Normal,
    }
}

/// Set (`remove == false`) or clear (`remove == true`) one flag, keeping the
/// other. Setting a flag that is already set, or clearing one that is already
/// clear, returns the role unchanged.
pub fn set_role_flag(role: Role, flag: RoleFlag, remove: bool) -> Role {
    role.with(flag, !remove)
}

/// Flip exactly one flag.
pub fn toggle_role_flag(role: Role, flag: RoleFlag) -> Role {
    role.with(flag, !role.has(flag))
}
