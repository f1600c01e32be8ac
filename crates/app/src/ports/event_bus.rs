//! Event bus port — publish device events to interested listeners.

use std::future::Future;

use friday_domain::error::FridayError;
use friday_domain::event::Event;

/// Publishes device events (state changes, ignored actions).
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), FridayError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), FridayError>> + Send {
        (**self).publish(event)
    }
}
