//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`FridayError`]
//! via `#[from]`.

/// Top-level error for the friday workspace.
#[derive(Debug, thiserror::Error)]
pub enum FridayError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("unknown device")]
    UnknownDevice(#[from] UnknownDeviceError),

    /// Failure in infrastructure outside the domain (event delivery, …).
    #[error("internal error")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The requested device name is not part of the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device {name:?}")]
pub struct UnknownDeviceError {
    pub name: String,
}

impl UnknownDeviceError {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Configuration-time consistency violations for devices and matchers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("device {0:?} is declared more than once")]
    DuplicateDevice(String),

    #[error("device {device:?} declares no states")]
    NoStates { device: String },

    #[error("device {device:?} declares no actions")]
    NoActions { device: String },

    #[error("device {device:?}: action {action:?} targets undeclared state {state:?}")]
    UndeclaredState {
        device: String,
        action: String,
        state: String,
    },

    #[error("device {device:?}: state {state:?} is not reachable from any action")]
    UnreachableState { device: String, state: String },

    #[error("device {device:?}: initial state {state:?} is not a declared state")]
    InvalidInitialState { device: String, state: String },

    #[error("matcher for {device:?} has no keywords")]
    NoKeywords { device: String },

    #[error("matcher for {device:?} has an empty keyword")]
    EmptyKeyword { device: String },

    #[error("matcher for {device:?} has no action keywords")]
    NoActionKeywords { device: String },

    #[error("matcher targets unknown device {device:?}")]
    UnknownMatcherDevice { device: String },

    #[error("matcher for {device:?} extracts action {action:?} the device does not accept")]
    UnsupportedAction { device: String, action: String },

    #[error("matcher for {device:?} extracts a {extraction} but the device is {kind}")]
    KindMismatch {
        device: String,
        extraction: &'static str,
        kind: &'static str,
    },
}
