pub mod health;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::services::ServeDir;

use crate::assistant;
use crate::cv;
use crate::guidance;
use crate::jobs;
use crate::state::AppState;

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Route not found"})))
}

pub fn build_router(state: AppState) -> Router {
    let uploads_dir = state.config.uploads_dir.clone();

    Router::new()
        .route("/health", get(health::health_handler))
        // Guidance API
        .route("/api/career", post(guidance::handlers::handle_career_analysis))
        .route("/api/roadmap", post(guidance::handlers::handle_roadmap))
        .route("/api/resume", post(guidance::handlers::handle_resume_analysis))
        // Assistant chat
        .route("/api/assistant/chat", post(assistant::handlers::handle_chat))
        // CV builder
        .route("/api/cv/enhance", post(cv::handlers::handle_enhance))
        .route("/api/cv/generate", post(cv::handlers::handle_generate))
        .route("/api/cv/suggestions", post(cv::handlers::handle_suggestions))
        // Job listings
        .route("/api/jobs", get(jobs::handlers::handle_job_listings))
        // Generated CV downloads
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tokio::sync::RwLock;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::jobs::cache::JobCache;
    use crate::llm_client::mock::MockAi;

    fn test_router() -> Router {
        let config = Config {
            google_api_key: String::new(),
            port: 0,
            rust_log: "info".to_string(),
            public_url: "http://localhost:8080".to_string(),
            uploads_dir: std::env::temp_dir()
                .join("careerpilot-test-uploads")
                .to_string_lossy()
                .into_owned(),
        };
        build_router(AppState {
            ai: Arc::new(MockAi),
            job_cache: Arc::new(RwLock::new(JobCache::new())),
            config,
        })
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(body) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => Request::builder().method(method).uri(uri).body(Body::empty()).unwrap(),
        };

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = send(test_router(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let (status, body) = send(test_router(), "GET", "/api/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Route not found");
    }

    #[tokio::test]
    async fn test_career_missing_skills_is_400() {
        let body = json!({"interests": [], "education": "B.Tech"});
        let (status, body) = send(test_router(), "POST", "/api/career", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Skills array is required");
    }

    #[tokio::test(start_paused = true)]
    async fn test_career_happy_path_returns_three_matches() {
        let body = json!({
            "skills": ["JavaScript", "React"],
            "interests": ["Web Development"],
            "education": "B.Tech",
            "workType": "Remote",
            "salaryExpectation": "8 LPA",
            "location": "Bangalore"
        });
        let (status, body) = send(test_router(), "POST", "/api/career", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["career_matches"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_roadmap_empty_career_name_is_400() {
        let (status, _) = send(test_router(), "POST", "/api/roadmap", Some(json!({"careerName": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test(start_paused = true)]
    async fn test_roadmap_happy_path_has_all_sections() {
        let body = json!({"careerName": "Data Scientist"});
        let (status, body) = send(test_router(), "POST", "/api/roadmap", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        let roadmap = &body["roadmap"];
        for key in ["phase_1", "phase_2", "phase_3"] {
            assert!(roadmap[key].is_object(), "missing {key}");
        }
        assert!(roadmap["certifications"].is_array());
        assert_eq!(roadmap["project_ideas"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_assistant_chat_requires_message() {
        let (status, _) = send(test_router(), "POST", "/api/assistant/chat", Some(json!({"history": []}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test(start_paused = true)]
    async fn test_assistant_chat_success_envelope() {
        let body = json!({"message": "how do I prepare for an interview", "history": []});
        let (status, body) = send(test_router(), "POST", "/api/assistant/chat", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["response"].as_str().unwrap().contains("Interview preparation"));
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_jobs_endpoint_filters_and_reports_count() {
        let uri = "/api/jobs?search=developer&category=Technology&location=Bangalore";
        let (status, body) = send(test_router(), "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let jobs = body["jobs"].as_array().unwrap();
        assert_eq!(body["count"].as_u64().unwrap() as usize, jobs.len());
        for job in jobs {
            assert!(job["location"].as_str().unwrap().to_lowercase().contains("bangalore"));
        }
        assert!(body["lastUpdated"].is_string());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cv_suggestions_short_text_short_circuits() {
        let (status, body) = send(test_router(), "POST", "/api/cv/suggestions", Some(json!({"text": "ab"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_cv_enhance_requires_full_name() {
        let (status, body) = send(test_router(), "POST", "/api/cv/enhance", Some(json!({"summary": "x"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Personal information is required");
    }
}
