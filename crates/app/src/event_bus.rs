//! In-process event bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use friday_domain::error::FridayError;
use friday_domain::event::Event;

use crate::ports::EventPublisher;

/// Fan-out of device events to every live listener (SSE clients, tests).
///
/// A transition published while nobody listens is dropped, not an error. A
/// listener more than `capacity` events behind sees a `Lagged` error and
/// resumes from the oldest retained event.
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; configuration loading rejects that value.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events published *after* this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), FridayError>> + Send {
        let device = event.device.clone();
        match self.sender.send(event) {
            Ok(listeners) => tracing::trace!(%device, listeners, "device event published"),
            Err(_) => tracing::trace!(%device, "no listener, device event dropped"),
        }
        async { Ok(()) }
    }
}
