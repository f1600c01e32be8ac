//! # friday-domain
//!
//! Pure domain model for the friday home control plane.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (named things with a discrete or continuous state space)
//! - Define **Action tables** (action token → resulting state) and their
//!   configuration-time consistency checks
//! - Define **Transitions** (the result of applying one action to one device)
//! - Define **Commands** and **Matchers** (deterministic keyword/number
//!   extraction from free-text utterances)
//! - Define **Events** (state-change records)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Shared mutable state and IO boundaries live in the `app` crate.

pub mod error;
pub mod id;
pub mod time;

pub mod command;
pub mod device;
pub mod event;
