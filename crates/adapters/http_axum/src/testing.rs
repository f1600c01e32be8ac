//! Shared fixtures for handler tests.

use std::sync::Arc;

use friday_app::event_bus::InProcessEventBus;
use friday_app::interpreter::CommandInterpreter;
use friday_app::registry::DeviceRegistry;
use friday_app::services::control_service::ControlService;
use friday_domain::command::Matcher;
use friday_domain::device::DeviceSpec;

use crate::state::AppState;

pub(crate) type TestState = AppState<Arc<InProcessEventBus>>;

pub(crate) fn test_state() -> (TestState, Arc<InProcessEventBus>) {
    let specs = vec![
        DeviceSpec::builder()
            .name("light")
            .state("on")
            .state("off")
            .action("on", "on")
            .action("off", "off")
            .initial("off")
            .build()
            .unwrap(),
        DeviceSpec::builder()
            .name("door")
            .state("open")
            .state("closed")
            .action("open", "open")
            .action("close", "closed")
            .initial("closed")
            .build()
            .unwrap(),
        DeviceSpec::builder()
            .name("thermostat")
            .continuous()
            .initial("22°C")
            .build()
            .unwrap(),
    ];
    let matchers = vec![
        Matcher::actions("light", ["light"], ["on", "off"]),
        Matcher::actions("door", ["door"], ["open", "close"]),
        Matcher::temperature("thermostat", ["thermostat", "temperature"]),
    ];

    let registry = Arc::new(DeviceRegistry::new(specs).unwrap());
    let interpreter = CommandInterpreter::new(Arc::clone(&registry), matchers).unwrap();
    let event_bus = Arc::new(InProcessEventBus::new(16));
    let service = ControlService::new(registry, interpreter, Arc::clone(&event_bus));

    (AppState::new(service, Arc::clone(&event_bus)), event_bus)
}
