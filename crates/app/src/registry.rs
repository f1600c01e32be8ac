//! Device registry — the canonical state of every device.
//!
//! The registry is built once from configuration and never grows or shrinks.
//! Each device sits behind its own [`Mutex`], so `apply` calls on different
//! devices do not contend, and a snapshot never sees a half-written state.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use friday_domain::device::{Device, DeviceSpec, Outcome, Transition};
use friday_domain::error::{FridayError, UnknownDeviceError, ValidationError};

struct Slot {
    name: String,
    device: Mutex<Device>,
}

impl Slot {
    fn lock(&self) -> MutexGuard<'_, Device> {
        self.device.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Ordered, fixed set of devices with validated transitions.
pub struct DeviceRegistry {
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
}

impl DeviceRegistry {
    /// Build the registry from device specs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`FridayError::Validation`] when a spec is inconsistent or a
    /// name is declared twice ([`ValidationError::DuplicateDevice`]).
    pub fn new(specs: impl IntoIterator<Item = DeviceSpec>) -> Result<Self, FridayError> {
        let mut slots = Vec::new();
        let mut index = HashMap::new();

        for spec in specs {
            let device = Device::from_spec(spec)?;
            let name = device.name().to_string();
            if index.insert(name.clone(), slots.len()).is_some() {
                return Err(ValidationError::DuplicateDevice(name).into());
            }
            slots.push(Slot {
                name,
                device: Mutex::new(device),
            });
        }

        Ok(Self { slots, index })
    }

    /// Apply `action` to the device called `device_name`.
    ///
    /// Unknown actions on a known device are not an error: the returned
    /// [`Transition`] carries [`Outcome::Ignored`] and the unchanged state.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDeviceError`] when no such device exists; nothing is
    /// mutated in that case.
    #[tracing::instrument(skip(self))]
    pub fn apply(&self, device_name: &str, action: &str) -> Result<Transition, UnknownDeviceError> {
        let Some(slot) = self.slot(device_name) else {
            tracing::warn!("unknown device");
            return Err(UnknownDeviceError::new(device_name));
        };

        let transition = slot.lock().apply(action);
        match transition.outcome {
            Outcome::Applied => {
                tracing::debug!(
                    from = %transition.previous,
                    to = %transition.state,
                    changed = transition.changed(),
                    "action applied"
                );
            }
            Outcome::Ignored => {
                tracing::warn!(state = %transition.state, "action not supported, ignoring");
            }
        }
        Ok(transition)
    }

    /// Point-in-time copy of every device state, in registry order.
    ///
    /// Each device is read under its own lock; there is no cross-device
    /// atomicity.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(
            self.slots
                .iter()
                .map(|slot| (slot.name.clone(), slot.lock().state().to_string()))
                .collect(),
        )
    }

    /// Current state of a single device.
    #[must_use]
    pub fn state(&self, device_name: &str) -> Option<String> {
        self.slot(device_name)
            .map(|slot| slot.lock().state().to_string())
    }

    /// A copy of the device, including its kind and action table.
    #[must_use]
    pub fn device(&self, device_name: &str) -> Option<Device> {
        self.slot(device_name).map(|slot| slot.lock().clone())
    }

    /// Device names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot(&self, device_name: &str) -> Option<&Slot> {
        self.index.get(device_name).map(|&i| &self.slots[i])
    }
}

/// Device name → state, in registry order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot(Vec<(String, String)>);

impl Snapshot {
    #[must_use]
    pub fn get(&self, device_name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == device_name)
            .map(|(_, state)| state.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, state)| (name.as_str(), state.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Snapshot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries())
    }
}
