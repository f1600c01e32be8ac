//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `friday.toml` in the working directory (or the path in
//! `FRIDAY_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values, and
//! `FRIDAY_LOG` over `RUST_LOG`.

use std::collections::BTreeMap;

use serde::Deserialize;

use friday_domain::command::Matcher;
use friday_domain::device::{ActionTable, DeviceKind, DeviceSpec};

const DEFAULT_PATH: &str = "friday.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Event bus settings.
    pub events: EventsConfig,
    /// Devices held by the registry, in display order.
    pub devices: Vec<DeviceSpec>,
    /// Interpreter matchers, in priority order.
    pub matchers: Vec<Matcher>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Event bus configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Broadcast channel capacity; slow SSE clients lag past this many events.
    pub capacity: usize,
}

impl Config {
    /// Load configuration from `friday.toml` (or `FRIDAY_CONFIG`, if set)
    /// then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("FRIDAY_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FRIDAY_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("FRIDAY_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("FRIDAY_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(filter) = log_filter_override(
            std::env::var("FRIDAY_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        ) {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.events.capacity == 0 {
            return Err(ConfigError::Validation(
                "event capacity must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            events: EventsConfig::default(),
            devices: default_devices(),
            matchers: default_matchers(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "fridayd=info,friday=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

/// `FRIDAY_LOG` takes precedence over the generic `RUST_LOG`.
fn log_filter_override(friday_log: Option<String>, rust_log: Option<String>) -> Option<String> {
    friday_log.or(rust_log)
}

fn discrete(name: &str, initial: &str, actions: &[(&str, &str)]) -> DeviceSpec {
    let mut states: Vec<String> = Vec::new();
    for (_, state) in actions {
        if !states.iter().any(|s| s == state) {
            states.push((*state).to_string());
        }
    }
    DeviceSpec {
        name: name.to_string(),
        initial: initial.to_string(),
        kind: DeviceKind::Discrete(ActionTable {
            states,
            actions: actions
                .iter()
                .map(|(action, state)| ((*action).to_string(), (*state).to_string()))
                .collect::<BTreeMap<_, _>>(),
        }),
    }
}

/// The home the assistant ships with: four switches and openings, one
/// thermostat, and a bathroom light that is only reachable over HTTP.
fn default_devices() -> Vec<DeviceSpec> {
    let switch = [("on", "on"), ("off", "off")];
    let opening = [("open", "open"), ("close", "closed")];
    vec![
        discrete("light", "off", &switch),
        discrete("fan", "off", &switch),
        discrete("door", "closed", &opening),
        DeviceSpec {
            name: "thermostat".to_string(),
            initial: "22°C".to_string(),
            kind: DeviceKind::Continuous,
        },
        discrete("curtain", "closed", &opening),
        discrete("bathroom", "off", &switch),
    ]
}

fn default_matchers() -> Vec<Matcher> {
    vec![
        Matcher::actions("light", ["light"], ["on", "off"]),
        Matcher::actions("fan", ["fan"], ["on", "off"]),
        Matcher::actions("door", ["door"], ["open", "close"]),
        Matcher::actions("curtain", ["curtain"], ["open", "close"]),
        Matcher::temperature("thermostat", ["thermostat", "temperature"]),
    ]
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
