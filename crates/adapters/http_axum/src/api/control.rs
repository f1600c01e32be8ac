//! Structured device control handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use friday_app::ports::EventPublisher;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for a control call.
///
/// A missing `device` is treated as an unknown device.
#[derive(Deserialize)]
pub struct ControlRequest {
    #[serde(default)]
    pub device: String,
    pub action: Option<String>,
}

/// Body of a successful control call: the device's state afterwards.
#[derive(Debug, Serialize)]
pub struct ControlBody {
    pub status: String,
}

/// Possible responses from the control endpoint.
pub enum ControlResponse {
    Ok(Json<ControlBody>),
}

impl IntoResponse for ControlResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/control`
///
/// The body is read as JSON whatever its `Content-Type`. An action the
/// device does not accept still answers `200` with the unchanged state.
pub async fn apply<EP>(
    State(state): State<AppState<EP>>,
    body: Bytes,
) -> Result<ControlResponse, ApiError>
where
    EP: EventPublisher + Send + Sync + 'static,
{
    let req: ControlRequest = super::json_body(&body)?;
    let action = req.action.ok_or(ApiError::NoAction)?;
    let transition = state.control_service.control(&req.device, &action).await?;
    Ok(ControlResponse::Ok(Json(ControlBody {
        status: transition.state,
    })))
}
