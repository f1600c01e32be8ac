//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod command;
#[allow(clippy::missing_errors_doc)]
pub mod control;
pub mod sse;
pub mod status;

use axum::Router;
use axum::body::Bytes;
use axum::routing::{get, post};
use serde::de::DeserializeOwned;

use friday_app::ports::EventPublisher;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<EP>() -> Router<AppState<EP>>
where
    EP: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/status", get(status::get::<EP>))
        .route("/control", post(control::apply::<EP>))
        .route("/command", post(command::execute::<EP>))
        .route("/events/stream", get(sse::stream::<EP>))
}

/// Decode a JSON object body whatever the request's `Content-Type`.
///
/// An empty body, anything that is not a non-empty object, or an object of
/// the wrong shape is reported as [`ApiError::NoData`].
fn json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(%err, "request body is not JSON");
        ApiError::NoData
    })?;
    if !value.as_object().is_some_and(|fields| !fields.is_empty()) {
        return Err(ApiError::NoData);
    }
    serde_json::from_value(value).map_err(|err| {
        tracing::debug!(%err, "request body has the wrong shape");
        ApiError::NoData
    })
}
