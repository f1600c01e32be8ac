//! Shared application state for axum handlers.

use std::sync::Arc;

use friday_app::event_bus::InProcessEventBus;
use friday_app::ports::EventPublisher;
use friday_app::services::control_service::ControlService;

/// Application state shared across all axum handlers.
///
/// Generic over the event publisher to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<EP> {
    /// Device control, status and command service.
    pub control_service: Arc<ControlService<EP>>,
    /// Event bus for SSE subscribers.
    pub event_bus: Arc<InProcessEventBus>,
}

impl<EP> Clone for AppState<EP> {
    fn clone(&self) -> Self {
        Self {
            control_service: Arc::clone(&self.control_service),
            event_bus: Arc::clone(&self.event_bus),
        }
    }
}

impl<EP> AppState<EP>
where
    EP: EventPublisher + Send + Sync + 'static,
{
    /// Create a new application state.
    ///
    /// `event_bus` should be the bus `control_service` publishes to, or SSE
    /// clients will never see an event.
    pub fn new(control_service: ControlService<EP>, event_bus: Arc<InProcessEventBus>) -> Self {
        Self {
            control_service: Arc::new(control_service),
            event_bus,
        }
    }
}
