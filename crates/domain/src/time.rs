//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp carried by events.
pub type Timestamp = DateTime<Utc>;

#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
