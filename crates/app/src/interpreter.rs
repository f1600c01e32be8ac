//! Command interpreter — turns one utterance into at most one registry call.

use std::sync::Arc;

use friday_domain::command::{self, Command, CommandError, Extraction, Matcher};
use friday_domain::device::{DeviceKind, Transition};
use friday_domain::error::{FridayError, ValidationError};

use crate::registry::DeviceRegistry;

/// Ordered keyword matchers bound to the registry they drive.
pub struct CommandInterpreter {
    registry: Arc<DeviceRegistry>,
    matchers: Vec<Matcher>,
}

impl CommandInterpreter {
    /// Create an interpreter, checking every matcher against the registry's
    /// vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`FridayError::Validation`] when a matcher is empty, names a
    /// device the registry does not hold, extracts an action the device would
    /// ignore, or pairs a temperature extraction with a discrete device (and
    /// the reverse).
    pub fn new(registry: Arc<DeviceRegistry>, matchers: Vec<Matcher>) -> Result<Self, FridayError> {
        for matcher in &matchers {
            check(&registry, matcher)?;
        }
        Ok(Self { registry, matchers })
    }

    #[must_use]
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Extract a command without touching the registry.
    ///
    /// # Errors
    ///
    /// See [`command::parse`].
    pub fn parse(&self, utterance: &str) -> Result<Command, CommandError> {
        command::parse(&self.matchers, utterance)
    }

    /// Extract a command and apply it.
    ///
    /// Registry outcomes are passed through untouched: an ignored action comes
    /// back as an `Ok` transition, an unknown device as
    /// [`CommandError::UnknownDevice`].
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] when extraction fails (no `apply` happens)
    /// or the registry rejects the device.
    #[tracing::instrument(skip(self))]
    pub fn interpret(&self, utterance: &str) -> Result<Transition, CommandError> {
        let command = self.parse(utterance).inspect_err(|err| {
            tracing::debug!(%err, "no command extracted");
        })?;
        tracing::debug!(device = %command.device, action = %command.action, "command extracted");
        Ok(self.registry.apply(&command.device, &command.action)?)
    }
}

fn check(registry: &DeviceRegistry, matcher: &Matcher) -> Result<(), ValidationError> {
    matcher.validate()?;

    let device = registry
        .device(&matcher.device)
        .ok_or_else(|| ValidationError::UnknownMatcherDevice {
            device: matcher.device.clone(),
        })?;

    match (&matcher.extraction, device.kind()) {
        (Extraction::Action { actions }, DeviceKind::Discrete(_)) => {
            match actions.iter().find(|action| !device.accepts(action)) {
                Some(action) => Err(ValidationError::UnsupportedAction {
                    device: matcher.device.clone(),
                    action: action.clone(),
                }),
                None => Ok(()),
            }
        }
        (Extraction::Temperature { .. }, DeviceKind::Continuous) => Ok(()),
        (extraction, kind) => Err(ValidationError::KindMismatch {
            device: matcher.device.clone(),
            extraction: extraction.label(),
            kind: kind.label(),
        }),
    }
}
