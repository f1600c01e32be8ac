//! Device — a named thing whose state only changes through validated actions.
//!
//! A device is either **discrete** (a finite set of named states reached via an
//! [`ActionTable`]) or **continuous** (a free-form value string set verbatim by
//! the requested action, e.g. a thermostat setting such as `"22°C"`).

mod action_table;
mod transition;

pub use action_table::ActionTable;
pub use transition::{Outcome, Transition};

use serde::{Deserialize, Serialize};

use crate::error::{FridayError, ValidationError};

/// Shape of a device's state space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceKind {
    /// Finite set of states reached through named actions.
    Discrete(ActionTable),
    /// Any action string becomes the new state as-is.
    Continuous,
}

impl DeviceKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Discrete(_) => "discrete",
            Self::Continuous => "continuous",
        }
    }
}

/// Static description of a device, as supplied by configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub name: String,
    /// State the device starts in.
    pub initial: String,
    #[serde(flatten)]
    pub kind: DeviceKind,
}

impl DeviceSpec {
    /// Create a builder for constructing a [`DeviceSpec`].
    #[must_use]
    pub fn builder() -> DeviceSpecBuilder {
        DeviceSpecBuilder::default()
    }

    /// Check configuration-time invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FridayError::Validation`] when:
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - the action table is inconsistent (see [`ActionTable::validate`])
    /// - a discrete device starts in an undeclared state
    ///   ([`ValidationError::InvalidInitialState`])
    pub fn validate(&self) -> Result<(), FridayError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if let DeviceKind::Discrete(table) = &self.kind {
            table.validate(&self.name)?;
            if !table.has_state(&self.initial) {
                return Err(ValidationError::InvalidInitialState {
                    device: self.name.clone(),
                    state: self.initial.clone(),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Step-by-step builder for [`DeviceSpec`].
///
/// The spec is discrete unless [`continuous`](Self::continuous) is called.
#[derive(Debug, Default)]
pub struct DeviceSpecBuilder {
    name: Option<String>,
    initial: Option<String>,
    continuous: bool,
    table: ActionTable,
}

impl DeviceSpecBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    #[must_use]
    pub fn continuous(mut self) -> Self {
        self.continuous = true;
        self
    }

    /// Declare a legal state of a discrete device.
    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.table.states.push(state.into());
        self
    }

    /// Map an action token to the state it leads to.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>, state: impl Into<String>) -> Self {
        self.table.actions.insert(action.into(), state.into());
        self
    }

    /// Consume the builder, validate, and return a [`DeviceSpec`].
    ///
    /// # Errors
    ///
    /// Returns [`FridayError::Validation`] if the spec breaks an invariant.
    pub fn build(self) -> Result<DeviceSpec, FridayError> {
        let kind = if self.continuous {
            DeviceKind::Continuous
        } else {
            DeviceKind::Discrete(self.table)
        };
        let spec = DeviceSpec {
            name: self.name.unwrap_or_default(),
            initial: self.initial.unwrap_or_default(),
            kind,
        };
        spec.validate()?;
        Ok(spec)
    }
}

/// A device and its current state.
///
/// Only constructed from a validated [`DeviceSpec`], so a discrete device's
/// state is always one of its declared states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    name: String,
    kind: DeviceKind,
    state: String,
}

impl Device {
    /// Validate `spec` and create the device in its initial state.
    ///
    /// # Errors
    ///
    /// Returns [`FridayError::Validation`] if the spec is inconsistent.
    pub fn from_spec(spec: DeviceSpec) -> Result<Self, FridayError> {
        spec.validate()?;
        Ok(Self {
            name: spec.name,
            kind: spec.kind,
            state: spec.initial,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &DeviceKind {
        &self.kind
    }

    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Whether `action` would be applied rather than ignored.
    #[must_use]
    pub fn accepts(&self, action: &str) -> bool {
        match &self.kind {
            DeviceKind::Discrete(table) => table.resolve(action).is_some(),
            DeviceKind::Continuous => true,
        }
    }

    /// Apply `action` and report what happened.
    ///
    /// Continuous devices take the action verbatim as their new state.
    /// Discrete devices move to the mapped state, or keep their state and
    /// report [`Outcome::Ignored`] when the action is not in their table.
    pub fn apply(&mut self, action: &str) -> Transition {
        let previous = self.state.clone();
        let outcome = match &self.kind {
            DeviceKind::Continuous => {
                self.state = action.to_string();
                Outcome::Applied
            }
            DeviceKind::Discrete(table) => match table.resolve(action) {
                Some(next) => {
                    self.state = next.to_string();
                    Outcome::Applied
                }
                None => Outcome::Ignored,
            },
        };

        Transition {
            device: self.name.clone(),
            action: action.to_string(),
            previous,
            state: self.state.clone(),
            outcome,
        }
    }
}
