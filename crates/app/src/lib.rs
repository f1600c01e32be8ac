//! # friday-app
//!
//! Application layer — the shared device registry, the command interpreter,
//! and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Own the canonical device state ([`registry::DeviceRegistry`]) and be the
//!   single place where actions are validated and applied
//! - Turn free-text utterances into registry calls
//!   ([`interpreter::CommandInterpreter`])
//! - Render user-facing feedback for command outcomes ([`feedback`])
//! - Expose the use-cases front ends call, publishing an event per transition
//!   ([`services::control_service::ControlService`])
//! - Define **port traits** that adapters implement (`EventPublisher`)
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `friday-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//! Nothing in here reads configuration files; callers hand over parsed specs.

pub mod event_bus;
pub mod feedback;
pub mod interpreter;
pub mod ports;
pub mod registry;
pub mod services;

#[cfg(test)]
mod testing;
