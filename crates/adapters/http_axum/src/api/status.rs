//! Device status handler.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use friday_app::ports::EventPublisher;
use friday_app::registry::Snapshot;

use crate::state::AppState;

/// Possible responses from the status endpoint.
pub enum StatusResponse {
    Ok(Json<Snapshot>),
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/status` — every device and its current state, in registry order.
pub async fn get<EP>(State(state): State<AppState<EP>>) -> StatusResponse
where
    EP: EventPublisher + Send + Sync + 'static,
{
    StatusResponse::Ok(Json(state.control_service.status()))
}
