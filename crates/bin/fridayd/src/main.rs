//! # fridayd — friday daemon
//!
//! Composition root that wires the registry, the interpreter and the HTTP
//! adapter together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialise `tracing` from the configured filter
//! - Build the device registry and check interpreter matchers against it
//! - Construct the control service, injecting the event bus via its port trait
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use friday_adapter_http_axum::state::AppState;
use friday_app::event_bus::InProcessEventBus;
use friday_app::interpreter::CommandInterpreter;
use friday_app::registry::DeviceRegistry;
use friday_app::services::control_service::ControlService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let bind_addr = config.bind_addr();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Devices
    let registry = Arc::new(DeviceRegistry::new(config.devices)?);
    let interpreter = CommandInterpreter::new(Arc::clone(&registry), config.matchers)?;
    tracing::info!(
        devices = registry.len(),
        matchers = interpreter.matchers().len(),
        "registry ready"
    );

    // Event bus
    let event_bus = Arc::new(InProcessEventBus::new(config.events.capacity));

    // Services
    let control_service = ControlService::new(registry, interpreter, Arc::clone(&event_bus));

    // HTTP
    let state = AppState::new(control_service, event_bus);
    let app = friday_adapter_http_axum::router::build(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "fridayd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("fridayd stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
