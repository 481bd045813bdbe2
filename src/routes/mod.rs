//! Router assembly: HTTP endpoints, WebSocket upgrade, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod ws;

/// Build the application router with:
/// - WebSocket at `/ws`
/// - REST-ish API under `/api/v1/...`
/// - Static SPA from `./static` with index fallback
/// - CORS (allow any origin/method/headers); tighten for production
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    // Static files with SPA fallback
    let static_service = ServeDir::new("./static")
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new("./static/index.html"));

    Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // Catalog + generation
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/chapters", get(http::http_get_chapters))
        .route("/api/v1/topics", get(http::http_get_topics))
        .route("/api/v1/recommended", get(http::http_get_recommended))
        .route("/api/v1/mcq", post(http::http_post_mcq))
        .route("/api/v1/mcq/batch", post(http::http_post_batch))
        .route("/api/v1/mcq/stats", post(http::http_post_stats))
        // Practice sessions
        .route("/api/v1/session", post(http::http_post_session))
        .route("/api/v1/session/:id", get(http::http_get_session))
        .route("/api/v1/session/:id/answer", post(http::http_post_answer))
        .route("/api/v1/session/:id/next", post(http::http_post_next))
        .route("/api/v1/session/:id/finish", post(http::http_post_finish))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let mut cfg = AppConfig::default();
        cfg.generator.seed = Some(17);
        cfg.generator.max_batch = 50;
        build_router(Arc::new(AppState::from_config(cfg)))
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, value)
    }

    #[tokio::test]
    async fn health_and_catalog_endpoints() {
        let app = app();
        let (s, v) = call(&app, Method::GET, "/api/v1/health", None).await;
        assert_eq!(s, StatusCode::OK);
        assert_eq!(v["ok"], true);
        assert_eq!((v["sessions"].clone(), v["generated"].clone()), (json!(0), json!(0)));

        let (_, v) = call(&app, Method::GET, "/api/v1/chapters?subject=mathematics&grade=ssc2", None).await;
        let mut chapters: Vec<String> = serde_json::from_value(v["chapters"].clone()).unwrap();
        chapters.sort();
        assert_eq!(chapters, vec!["Arithmetic Progressions", "Quadratic Equations"]);

        let (_, v) = call(&app, Method::GET, "/api/v1/topics?subject=biology&grade=hsc1&chapter=Cell%20Biology", None).await;
        assert_eq!(v["topics"].as_array().unwrap().len(), 4);

        let (_, v) = call(&app, Method::GET, "/api/v1/recommended?difficulty=medium", None).await;
        assert_eq!(v["count"], 15);
    }

    #[tokio::test]
    async fn health_counts_sessions_and_questions() {
        let app = app();
        let (s, _) = call(
            &app,
            Method::POST,
            "/api/v1/session",
            Some(json!({"grade": "ssc1", "subject": "physics", "chapter": "Light", "difficulty": "hard"})),
        )
        .await;
        assert_eq!(s, StatusCode::OK);

        let (s, v) = call(&app, Method::GET, "/api/v1/health", None).await;
        assert_eq!(s, StatusCode::OK);
        assert_eq!(v["sessions"], 1);
        assert_eq!(v["generated"], 10);
    }

    #[tokio::test]
    async fn generate_one_and_batch() {
        let app = app();
        let (s, v) = call(
            &app,
            Method::POST,
            "/api/v1/mcq",
            Some(json!({"grade": "ssc1", "subject": "mathematics", "chapter": "Real Numbers", "difficulty": "easy", "syllabus": "2025"})),
        )
        .await;
        assert_eq!(s, StatusCode::OK);
        assert_eq!(v["marks"], 1);
        assert_eq!(v["timeLimit"], 30);
        assert_eq!(v["options"].as_array().unwrap().len(), 4);
        assert!(v["correct"].as_u64().unwrap() < 4);

        let (s, v) = call(
            &app,
            Method::POST,
            "/api/v1/mcq/batch",
            Some(json!({"grade": "ssc1", "subject": "physics", "chapter": "Light", "difficulty": "hard", "count": 7})),
        )
        .await;
        assert_eq!(s, StatusCode::OK);
        assert_eq!(v.as_array().unwrap().len(), 7);

        let (s, v) = call(
            &app,
            Method::POST,
            "/api/v1/mcq/batch",
            Some(json!({"grade": "ssc1", "subject": "physics", "chapter": "Light", "count": 51})),
        )
        .await;
        assert_eq!(s, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"]["code"], "batch_too_large");
    }

    #[tokio::test]
    async fn stats_endpoint_counts_posted_questions() {
        let app = app();
        let (_, batch) = call(
            &app,
            Method::POST,
            "/api/v1/mcq/batch",
            Some(json!({"grade": "hsc1", "subject": "physics", "chapter": "Waves", "difficulty": "medium", "count": 4})),
        )
        .await;
        let (s, v) = call(&app, Method::POST, "/api/v1/mcq/stats", Some(json!({"questions": batch}))).await;
        assert_eq!(s, StatusCode::OK);
        assert_eq!(v["stats"]["total"], 4);
        assert_eq!(v["stats"]["byDifficulty"]["medium"], 4);
        assert_eq!(v["stats"]["totalTime"], 180);
    }

    #[tokio::test]
    async fn session_flow_over_http() {
        let app = app();
        let (s, started) = call(
            &app,
            Method::POST,
            "/api/v1/session",
            Some(json!({"grade": "ssc1", "subject": "chemistry", "chapter": "Metals and Non-metals", "difficulty": "easy"})),
        )
        .await;
        assert_eq!(s, StatusCode::OK);
        let id = started["sessionId"].as_str().unwrap().to_string();
        assert_eq!(started["question"]["syllabus"], "2025");

        let (_, cur) = call(&app, Method::GET, &format!("/api/v1/session/{id}"), None).await;
        assert_eq!(cur["question"]["id"], started["question"]["id"]);

        let (s, ans) = call(&app, Method::POST, &format!("/api/v1/session/{id}/answer"), Some(json!({"option": 0}))).await;
        assert_eq!(s, StatusCode::OK);
        assert_eq!(ans["attempted"], 1);

        let (s, v) = call(&app, Method::POST, &format!("/api/v1/session/{id}/answer"), Some(json!({"option": 0}))).await;
        assert_eq!(s, StatusCode::CONFLICT);
        assert_eq!(v["error"]["code"], "already_answered");

        let (_, next) = call(&app, Method::POST, &format!("/api/v1/session/{id}/next"), None).await;
        assert_eq!(next["position"], 1);

        let (s, v) = call(&app, Method::POST, &format!("/api/v1/session/{id}/answer"), Some(json!({"option": 9}))).await;
        assert_eq!(s, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"]["code"], "option_out_of_range");

        let (s, summary) = call(&app, Method::POST, &format!("/api/v1/session/{id}/finish"), None).await;
        assert_eq!(s, StatusCode::OK);
        assert_eq!(summary["total"], 2);
        assert_eq!(summary["subject"], "chemistry");

        let (s, _) = call(&app, Method::GET, &format!("/api/v1/session/{id}"), None).await;
        assert_eq!(s, StatusCode::NOT_FOUND);
    }
}
