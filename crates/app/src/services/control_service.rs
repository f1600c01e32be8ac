//! Control service — the use-cases every front end calls.
//!
//! Wraps the registry and the interpreter, and publishes an event for every
//! transition so listeners (SSE clients, logs) see the change.

use std::sync::Arc;

use friday_domain::command::CommandError;
use friday_domain::device::Transition;
use friday_domain::error::FridayError;
use friday_domain::event::Event;

use crate::interpreter::CommandInterpreter;
use crate::ports::EventPublisher;
use crate::registry::{DeviceRegistry, Snapshot};

/// Application service for device control, status, and text commands.
pub struct ControlService<EP> {
    registry: Arc<DeviceRegistry>,
    interpreter: CommandInterpreter,
    publisher: EP,
}

impl<EP: EventPublisher> ControlService<EP> {
    /// Create a new service.
    ///
    /// `interpreter` is expected to be bound to the same `registry`.
    pub fn new(
        registry: Arc<DeviceRegistry>,
        interpreter: CommandInterpreter,
        publisher: EP,
    ) -> Self {
        Self {
            registry,
            interpreter,
            publisher,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// Apply a structured `{device, action}` request.
    ///
    /// # Errors
    ///
    /// Returns [`FridayError::UnknownDevice`] when the registry has no such
    /// device.
    #[tracing::instrument(skip(self))]
    pub async fn control(&self, device: &str, action: &str) -> Result<Transition, FridayError> {
        let transition = self.registry.apply(device, action)?;
        self.publish(&transition).await;
        Ok(transition)
    }

    /// Current state of every device.
    #[must_use]
    pub fn status(&self) -> Snapshot {
        self.registry.snapshot()
    }

    /// Interpret a lower-cased utterance and apply the command it names.
    ///
    /// # Errors
    ///
    /// Returns the interpreter's [`CommandError`]; see
    /// [`CommandInterpreter::interpret`].
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, utterance: &str) -> Result<Transition, CommandError> {
        let transition = self.interpreter.interpret(utterance)?;
        self.publish(&transition).await;
        Ok(transition)
    }

    // The transition is already committed; a lost event must not undo it.
    async fn publish(&self, transition: &Transition) {
        if let Err(err) = self.publisher.publish(Event::from(transition)).await {
            tracing::warn!(error = %err, device = %transition.device, "failed to publish event");
        }
    }
}
