//! Action table — the vocabulary of a discrete device.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Declared states of a discrete device and the action tokens leading to them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionTable {
    /// Every legal state, in declaration order.
    pub states: Vec<String>,
    /// Action token → resulting state.
    pub actions: BTreeMap<String, String>,
}

impl ActionTable {
    /// The state `action` leads to, if the action is part of the table.
    #[must_use]
    pub fn resolve(&self, action: &str) -> Option<&str> {
        self.actions.get(action).map(String::as_str)
    }

    #[must_use]
    pub fn has_state(&self, state: &str) -> bool {
        self.states.iter().any(|s| s == state)
    }

    /// Check that the table is closed: every action targets a declared state
    /// and every declared state is the target of at least one action.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found for `device`.
    pub fn validate(&self, device: &str) -> Result<(), ValidationError> {
        if self.states.is_empty() {
            return Err(ValidationError::NoStates {
                device: device.to_string(),
            });
        }
        if self.actions.is_empty() {
            return Err(ValidationError::NoActions {
                device: device.to_string(),
            });
        }
        if let Some((action, state)) = self.actions.iter().find(|(_, s)| !self.has_state(s)) {
            return Err(ValidationError::UndeclaredState {
                device: device.to_string(),
                action: action.clone(),
                state: state.clone(),
            });
        }
        if let Some(state) = self
            .states
            .iter()
            .find(|s| !self.actions.values().any(|target| target == *s))
        {
            return Err(ValidationError::UnreachableState {
                device: device.to_string(),
                state: state.clone(),
            });
        }
        Ok(())
    }
}
