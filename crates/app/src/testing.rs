//! Shared fixtures for unit tests: the six-device home and its matchers.

use friday_domain::command::Matcher;
use friday_domain::device::DeviceSpec;

use crate::registry::DeviceRegistry;

fn switch(name: &str) -> DeviceSpec {
    DeviceSpec::builder()
        .name(name)
        .state("on")
        .state("off")
        .action("on", "on")
        .action("off", "off")
        .initial("off")
        .build()
        .unwrap()
}

fn opening(name: &str) -> DeviceSpec {
    DeviceSpec::builder()
        .name(name)
        .state("open")
        .state("closed")
        .action("open", "open")
        .action("close", "closed")
        .initial("closed")
        .build()
        .unwrap()
}

pub(crate) fn home_specs() -> Vec<DeviceSpec> {
    vec![
        switch("light"),
        switch("fan"),
        opening("door"),
        DeviceSpec::builder()
            .name("thermostat")
            .continuous()
            .initial("22°C")
            .build()
            .unwrap(),
        opening("curtain"),
        switch("bathroom"),
    ]
}

pub(crate) fn home() -> DeviceRegistry {
    DeviceRegistry::new(home_specs()).unwrap()
}

pub(crate) fn home_matchers() -> Vec<Matcher> {
    vec![
        Matcher::actions("light", ["light"], ["on", "off"]),
        Matcher::actions("fan", ["fan"], ["on", "off"]),
        Matcher::actions("door", ["door"], ["open", "close"]),
        Matcher::actions("curtain", ["curtain"], ["open", "close"]),
        Matcher::temperature("thermostat", ["thermostat", "temperature"]),
    ]
}
