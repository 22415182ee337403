//! Value objects for Module Dependency

use serde::{Deserialize, Serialize};
use std::fmt;

pub use shared_types::{ModuleKey, ModuleKeyError, TenantId};

/// Activation state of a module for one tenant.
///
/// The engine never owns this state; it only advises whether a requested
/// transition is currently legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleState {
    Inactive,
    Active,
}

impl From<bool> for ModuleState {
    fn from(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

impl fmt::Display for ModuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => f.write_str("inactive"),
            Self::Active => f.write_str("active"),
        }
    }
}
