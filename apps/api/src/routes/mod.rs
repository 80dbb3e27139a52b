pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Plan API
        .route("/api/v1/plans", post(handlers::handle_generate))
        .route("/api/v1/plans/defaults", get(handlers::handle_defaults))
        .route("/api/v1/plans/markdown", post(handlers::handle_markdown))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn coaching_form() -> Value {
        json!({
            "niche": "Coaching",
            "idealCustomer": "Busy founders",
            "product": "Marketing strategy + content engine",
            "primaryGoal": "More qualified leads",
            "voice": "Clear & Actionable",
            "pricePoint": "Mid",
            "channels": ["LinkedIn", "Email"],
            "competitors": "",
            "differentiator": "Simple frameworks that ship weekly results"
        })
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "marketing-coach-api");
    }

    #[tokio::test]
    async fn test_generate_returns_bundle_and_markdown() {
        let response = app()
            .oneshot(post_json("/api/v1/plans", coaching_form()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["inputs"]["niche"], "Coaching");
        assert_eq!(body["contentPlan"].as_array().unwrap().len(), 30);
        assert_eq!(body["offerLadder"].as_array().unwrap().len(), 3);
        assert!(body["markdown"]
            .as_str()
            .unwrap()
            .starts_with("# Marketing Game Plan: Coaching"));
    }

    #[tokio::test]
    async fn test_unknown_channel_is_a_validation_error() {
        let mut form = coaching_form();
        form["channels"] = json!(["LinkedIn", "Myspace"]);
        let response = app()
            .oneshot(post_json("/api/v1/plans", form))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Myspace"));
    }

    #[tokio::test]
    async fn test_markdown_download_headers() {
        let response = app()
            .oneshot(post_json("/api/v1/plans/markdown", coaching_form()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/markdown; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"marketing-game-plan.md\""
        );
        let markdown = body_string(response).await;
        assert!(markdown.contains("## 30-Day Content Plan"));
    }

    #[tokio::test]
    async fn test_defaults_expose_original_form() {
        let response = app()
            .oneshot(
                Request::get("/api/v1/plans/defaults")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["form"]["idealCustomer"], "Busy founders");
        assert_eq!(
            body["form"]["channels"],
            json!(["LinkedIn", "Twitter", "Email"])
        );
        assert_eq!(body["channelOptions"].as_array().unwrap().len(), 6);
        assert_eq!(body["voiceOptions"][3], "Professional & Data-Driven");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
