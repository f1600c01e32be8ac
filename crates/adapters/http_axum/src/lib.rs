//! # friday-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a small **JSON API** for programmatic access
//!   (`/api/status`, `/api/control`, `/api/command`)
//! - Stream device events to browsers over **Server-Sent Events**
//!   (`/api/events/stream`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `friday-app` (for port traits and services) and `friday-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod testing;
