pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route(
            "/api/v1/templates/:id/thumbnail",
            get(handlers::handle_thumbnail),
        )
        .route("/api/v1/accents", get(handlers::handle_list_accents))
        // Render
        .route("/api/v1/render/preview", post(handlers::handle_preview))
        .route("/api/v1/render/export", post(handlers::handle_export))
        .route(
            "/api/v1/render/export/:job_id",
            get(handlers::handle_export_download),
        )
        .route(
            "/api/v1/render/export/:job_id/status",
            get(handlers::handle_export_status),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::theme::{resolve, AccentId};

    fn app() -> Router {
        build_router(AppState::from_config(Config::default()))
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn wait_for_terminal(app: &Router, job_id: &str) -> Value {
        for _ in 0..200 {
            let status = json_body(
                send(app, get_req(&format!("/api/v1/render/export/{job_id}/status"))).await,
            )
            .await;
            if status["status"] != "pending" {
                return status;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("export job {job_id} never finished");
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(&app(), get_req("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_catalog_lists_templates_and_accents() {
        let app = app();
        let templates = json_body(send(&app, get_req("/api/v1/templates")).await).await;
        let templates = templates.as_array().unwrap();
        assert_eq!(templates.len(), 10);
        assert_eq!(templates[0]["id"], "classic");
        assert_eq!(templates[0]["number"], 1);

        let accents = json_body(send(&app, get_req("/api/v1/accents")).await).await;
        let accents = accents.as_array().unwrap();
        assert_eq!(accents.len(), 11);
        assert_eq!(accents[10]["id"], "neutral");
        assert!(accents[0]["theme"]["emphasis_color"]
            .as_str()
            .unwrap()
            .starts_with('#'));
    }

    #[tokio::test]
    async fn test_thumbnail_known_and_unknown_template() {
        let app = app();
        let response = send(&app, get_req("/api/v1/templates/modern/thumbnail?scale=0.5")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["template"], "modern");

        let response = send(&app, get_req("/api/v1/templates/glossy/thumbnail")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_preview_falls_back_for_unknown_names() {
        let body = json!({
            "profile": {"personal": {"name": "Ada Lovelace"}},
            "template": "nonexistent",
            "accent": "chartreuse"
        });
        let response = send(&app(), post_json("/api/v1/render/preview", body)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let doc = json_body(response).await;
        assert_eq!(doc["template"], "classic");
        assert_eq!(doc["viewport_width_px"], 816);
        assert_eq!(doc["tree"]["template"], "classic");
    }

    #[tokio::test]
    async fn test_export_lifecycle() {
        let app = app();
        let body = json!({
            "profile": {
                "personal": {"name": "Ada Lovelace"},
                "experience": [{"title": "Analyst", "description": "Line1\nLine2"}]
            },
            "template": "timeline",
            "accent": "green",
            "filename": "../ada.json"
        });
        let response = send(&app, post_json("/api/v1/render/export", body)).await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let accepted = json_body(response).await;
        assert_eq!(accepted["status"], "pending");
        assert_eq!(accepted["preview"]["template"], "timeline");
        assert_eq!(accepted["accent"], "green");
        let green = serde_json::to_value(resolve(AccentId::Green)).unwrap();
        assert_eq!(accepted["theme"], green);
        assert_eq!(accepted["sections"], json!(["experience"]));
        let job_id = accepted["job_id"].as_str().unwrap().to_string();

        let status = wait_for_terminal(&app, &job_id).await;
        assert_eq!(status["status"], "succeeded");
        assert_eq!(status["page_count"], 1);

        let response = send(&app, get_req(&format!("/api/v1/render/export/{job_id}"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"ada.json\""
        );
        let doc = json_body(response).await;
        assert_eq!(doc["page_count"], 1);
    }

    #[tokio::test]
    async fn test_duplicate_pending_export_conflicts() {
        let app = app();
        let body = json!({"profile": {"personal": {"name": "Ada"}}, "filename": "a"});

        let first = send(&app, post_json("/api/v1/render/export", body.clone())).await;
        assert_eq!(first.status(), StatusCode::ACCEPTED);
        let job_id = json_body(first).await["job_id"].as_str().unwrap().to_string();

        // The background job may or may not have finished by now.
        let second = send(&app, post_json("/api/v1/render/export", body.clone())).await;
        match second.status() {
            StatusCode::CONFLICT => {
                let err = json_body(second).await;
                assert!(err["error"]["message"].as_str().unwrap().contains(&job_id));
            }
            StatusCode::ACCEPTED => {
                let status = json_body(
                    send(&app, get_req(&format!("/api/v1/render/export/{job_id}/status"))).await,
                )
                .await;
                assert_ne!(status["status"], "pending");
            }
            other => panic!("unexpected status {other}"),
        }
    }

    #[tokio::test]
    async fn test_failed_export_is_unprocessable() {
        let app = build_router(AppState::from_config(Config {
            export_max_pages: 0,
            ..Config::default()
        }));
        let body = json!({"profile": {"personal": {"name": "Ada"}}});
        let accepted = json_body(send(&app, post_json("/api/v1/render/export", body)).await).await;
        let job_id = accepted["job_id"].as_str().unwrap().to_string();

        let status = wait_for_terminal(&app, &job_id).await;
        assert_eq!(status["status"], "failed");
        assert!(status["error_message"].as_str().unwrap().contains("more than 0 pages"));

        let response = send(&app, get_req(&format!("/api/v1/render/export/{job_id}"))).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_export_job_is_not_found() {
        let app = app();
        let id = uuid::Uuid::new_v4();
        let response = send(&app, get_req(&format!("/api/v1/render/export/{id}"))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = send(&app, get_req(&format!("/api/v1/render/export/{id}/status"))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_overlong_filename_is_rejected() {
        let body = json!({"filename": "x".repeat(500)});
        let response = send(&app(), post_json("/api/v1/render/export", body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }
}
