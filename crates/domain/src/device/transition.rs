//! Transition — what applying one action to one device produced.

use serde::{Deserialize, Serialize};

/// Whether the action changed the device's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The action was legal; the device is now in `state`.
    Applied,
    /// The device does not know the action; its state is untouched.
    Ignored,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Applied => f.write_str("applied"),
            Self::Ignored => f.write_str("ignored"),
        }
    }
}

/// Result of a single `apply` call on a known device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub device: String,
    pub action: String,
    pub previous: String,
    /// State after the call (equal to `previous` when ignored).
    pub state: String,
    pub outcome: Outcome,
}

impl Transition {
    /// Whether the stored state differs from the one before the call.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != self.state
    }
}
