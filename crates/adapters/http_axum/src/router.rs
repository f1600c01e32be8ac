//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use friday_app::ports::EventPublisher;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` next to a plain `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<EP>(state: AppState<EP>) -> Router
where
    EP: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_state;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (state, _) = test_state();
        let app = build(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_status_in_registry_order() {
        let (state, _) = test_state();
        let response = build(state)
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"{"light":"off","door":"closed","thermostat":"22°C"}"#
        );
    }

    #[tokio::test]
    async fn should_apply_control_request() {
        let (state, _) = test_state();
        let response = build(state.clone())
            .oneshot(post_json(
                "/api/control",
                &json!({"device": "door", "action": "open"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "open"}));
        assert_eq!(
            state.control_service.status().get("door"),
            Some("open")
        );
    }

    #[tokio::test]
    async fn should_return_current_state_when_action_ignored() {
        let (state, _) = test_state();
        let response = build(state)
            .oneshot(post_json(
                "/api/control",
                &json!({"device": "light", "action": "open"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "off"}));
    }

    #[tokio::test]
    async fn should_return_bad_request_when_device_unknown() {
        let (state, _) = test_state();
        let response = build(state)
            .oneshot(post_json(
                "/api/control",
                &json!({"device": "garage", "action": "open"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Unknown device"}));
    }

    fn post_raw(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn should_accept_control_body_without_content_type() {
        let (state, _) = test_state();
        let response = build(state)
            .oneshot(post_raw(
                "/api/control",
                r#"{"device": "light", "action": "on"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "on"}));
    }

    #[tokio::test]
    async fn should_return_no_data_when_control_body_empty() {
        let (state, _) = test_state();
        let response = build(state)
            .oneshot(post_raw("/api/control", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "No data provided"}));
    }

    #[tokio::test]
    async fn should_return_no_data_when_control_body_is_empty_object() {
        let (state, _) = test_state();
        let response = build(state)
            .oneshot(post_json("/api/control", &json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "No data provided"}));
    }

    #[tokio::test]
    async fn should_return_json_error_when_action_missing() {
        let (state, _) = test_state();
        let before = state.control_service.status();
        let response = build(state.clone())
            .oneshot(post_json("/api/control", &json!({"device": "door"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "No action provided"})
        );
        assert_eq!(state.control_service.status(), before);
    }

    #[tokio::test]
    async fn should_treat_missing_device_as_unknown() {
        let (state, _) = test_state();
        let response = build(state)
            .oneshot(post_json("/api/control", &json!({"action": "on"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Unknown device"}));
    }

    #[tokio::test]
    async fn should_return_no_data_when_command_body_invalid() {
        let (state, _) = test_state();
        let response = build(state)
            .oneshot(post_raw("/api/command", "turn the light on"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "No data provided"}));
    }

    #[tokio::test]
    async fn should_lower_case_utterance_before_interpreting() {
        let (state, _) = test_state();
        let response = build(state)
            .oneshot(post_json(
                "/api/command",
                &json!({"utterance": "Turn the LIGHT On"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"reply": "Light on", "device": "light", "status": "on", "outcome": "applied"})
        );
    }

    #[tokio::test]
    async fn should_reply_without_device_when_command_unrecognized() {
        let (state, _) = test_state();
        let response = build(state)
            .oneshot(post_json("/api/command", &json!({"utterance": "hello"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"reply": "Command not recognized."})
        );
    }

    #[tokio::test]
    async fn should_ask_for_temperature_when_number_missing() {
        let (state, _) = test_state();
        let response = build(state)
            .oneshot(post_json(
                "/api/command",
                &json!({"utterance": "set the temperature"}),
            ))
            .await
            .unwrap();

        assert_eq!(
            body_json(response).await,
            json!({"reply": "Please specify the temperature."})
        );
    }

    #[tokio::test]
    async fn should_publish_event_for_control_request() {
        let (state, event_bus) = test_state();
        let mut rx = event_bus.subscribe();

        build(state)
            .oneshot(post_json(
                "/api/control",
                &json!({"device": "light", "action": "on"}),
            ))
            .await
            .unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.device, "light");
        assert_eq!(event.data["to"], "on");
    }

    #[tokio::test]
    async fn should_serve_event_stream() {
        let (state, _) = test_state();
        let response = build(state)
            .oneshot(
                Request::builder()
                    .uri("/api/events/stream")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/event-stream"
        );
    }
}
