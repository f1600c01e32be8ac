//! Event — an immutable record of something that happened to a device.

use serde::{Deserialize, Serialize};

use crate::device::{Outcome, Transition};
use crate::id::EventId;
use crate::time::{Timestamp, now};

/// Kind of event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// An action was applied (the state may or may not differ).
    StateChanged,
    /// The device did not know the requested action.
    ActionIgnored,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StateChanged => f.write_str("state_changed"),
            Self::ActionIgnored => f.write_str("action_ignored"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_type: EventType,
    pub device: String,
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(event_type: EventType, device: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            device: device.into(),
            data,
            timestamp: now(),
        }
    }
}

impl From<&Transition> for Event {
    fn from(transition: &Transition) -> Self {
        let event_type = match transition.outcome {
            Outcome::Applied => EventType::StateChanged,
            Outcome::Ignored => EventType::ActionIgnored,
        };
        Self::new(
            event_type,
            transition.device.clone(),
            serde_json::json!({
                "action": transition.action,
                "from": transition.previous,
                "to": transition.state,
            }),
        )
    }
}
