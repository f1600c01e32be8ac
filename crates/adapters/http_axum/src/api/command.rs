//! Free-text command handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use friday_app::feedback::Reply;
use friday_app::ports::EventPublisher;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for a text command.
#[derive(Deserialize)]
pub struct CommandRequest {
    pub utterance: String,
}

/// Possible responses from the command endpoint.
pub enum CommandResponse {
    Ok(Json<Reply>),
}

impl IntoResponse for CommandResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/command`
///
/// Interpretation failures are part of the conversation, not HTTP errors:
/// the reply sentence tells the user what went wrong. Only a body without an
/// `utterance` is rejected.
pub async fn execute<EP>(
    State(state): State<AppState<EP>>,
    body: Bytes,
) -> Result<CommandResponse, ApiError>
where
    EP: EventPublisher + Send + Sync + 'static,
{
    let req: CommandRequest = super::json_body(&body)?;
    let utterance = req.utterance.to_lowercase();
    let result = state.control_service.execute(&utterance).await;
    let reply = Reply::from(&result);
    tracing::debug!(reply = %reply.reply, "command answered");
    Ok(CommandResponse::Ok(Json(reply)))
}
