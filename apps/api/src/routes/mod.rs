pub mod health;
pub mod render;
pub mod session;

use axum::{
    extract::OriginalUri,
    routing::{get, post},
    Router,
};

use crate::assistant::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assistant API
        .route(
            "/api/v1/assist/objective",
            post(handlers::handle_enhance_objective),
        )
        .route(
            "/api/v1/assist/job-description",
            post(handlers::handle_enhance_job_description),
        )
        .route(
            "/api/v1/assist/project-description",
            post(handlers::handle_enhance_project_description),
        )
        .route(
            "/api/v1/assist/custom-section",
            post(handlers::handle_enhance_custom_section),
        )
        .route("/api/v1/assist/skills", post(handlers::handle_suggest_skills))
        .route(
            "/api/v1/assist/generate",
            post(handlers::handle_generate_resume),
        )
        .route("/api/v1/assist/upload", post(handlers::handle_upload_resume))
        .route(
            "/api/v1/assist/portfolio",
            post(handlers::handle_generate_portfolio),
        )
        .route("/api/v1/assist/chat", post(handlers::handle_chat))
        .route(
            "/api/v1/assist/comprehensive",
            post(handlers::handle_comprehensive),
        )
        // Session API
        .route(
            "/api/v1/session",
            get(session::handle_load_session)
                .put(session::handle_save_session)
                .delete(session::handle_clear_session),
        )
        // Render API
        .route("/api/v1/render/resume", post(render::handle_render_resume))
        .route(
            "/api/v1/render/portfolio",
            post(render::handle_render_portfolio),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::assistant::testing::ScriptedGenerator;

    fn app(generator: ScriptedGenerator) -> Router {
        build_router(AppState::for_tests(Arc::new(generator)))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builder must not fail")
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body must be collected");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    async fn body_json(response: Response) -> Value {
        let text = body_text(response).await;
        serde_json::from_str(&text).unwrap_or_else(|err| panic!("invalid json: {err}; body={text}"))
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app(ScriptedGenerator::default())
            .oneshot(request)
            .await
            .expect("handler should respond");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found_envelope() {
        let request = Request::builder()
            .uri("/api/v1/nope")
            .body(Body::empty())
            .unwrap();
        let response = app(ScriptedGenerator::default())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_session_round_trip_over_http() {
        let router = app(ScriptedGenerator::default());
        let session = json!({
            "resumeData": {
                "personalInfo": {"fullName": "Ada", "email": "", "phone": "", "location": ""},
                "skills": {"technical": ["Rust"], "soft": []}
            },
            "startMethod": "prompt",
            "currentStep": 2
        });

        let saved = router
            .clone()
            .oneshot(json_request("PUT", "/api/v1/session", session))
            .await
            .unwrap();
        assert_eq!(saved.status(), StatusCode::OK);
        let saved = body_json(saved).await;
        assert!(saved["lastSaved"].is_string());

        let loaded = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let loaded = body_json(loaded).await;
        assert_eq!(loaded, saved);
        assert_eq!(loaded["startMethod"], "prompt");

        let cleared = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(cleared.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_chat_failure_is_bad_gateway() {
        let response = app(ScriptedGenerator::failing())
            .oneshot(json_request(
                "POST",
                "/api/v1/assist/chat",
                json!({"message": "How long should my resume be?"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "An AI processing error occurred");
    }

    #[tokio::test]
    async fn test_skills_endpoint_swallows_malformed_reply() {
        let response = app(ScriptedGenerator::replying("Learn Kubernetes!"))
            .oneshot(json_request(
                "POST",
                "/api/v1/assist/skills",
                json!({"resume": {"skills": {"technical": ["Go"], "soft": []}}}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["suggestions"], json!({"technical": [], "soft": []}));
        assert_eq!(body["skills"]["technical"], json!(["Go"]));
    }

    #[tokio::test]
    async fn test_upload_falls_back_to_filename_mock() {
        let boundary = "folio-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"jane_doe_resume.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\n\
             Jane Doe, pastry chef with ten years of experience\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assist/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let generator = Arc::new(ScriptedGenerator::failing());
        let response = build_router(AppState::for_tests(generator.clone()))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["resume"]["personalInfo"]["fullName"], "Jane Doe");
        assert!(generator
            .last_prompt()
            .unwrap()
            .contains("pastry chef with ten years"));
    }

    #[tokio::test]
    async fn test_upload_with_no_recoverable_text_skips_model() {
        let boundary = "folio-test-boundary";
        let mut body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"cv.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(&[0x00, 0x01, 0xff, 0xfe, b'a', b'b', 0x02, 0x80, 0x90, 0x7f]);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assist/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let generator = Arc::new(ScriptedGenerator::replying(r#"{"careerObjective": "unused"}"#));
        let response = build_router(AppState::for_tests(generator.clone()))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["resume"]["personalInfo"]["fullName"], "John Doe");
        assert_eq!(
            body["resume"]["experience"][0]["duration"],
            "2020 - Present"
        );
        assert!(generator.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_without_file_is_rejected() {
        let boundary = "folio-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"resume\"\r\n\r\n\
             {{}}\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assist/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = app(ScriptedGenerator::default())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_render_resume_returns_html() {
        let response = app(ScriptedGenerator::default())
            .oneshot(json_request(
                "POST",
                "/api/v1/render/resume",
                json!({"resume": {"personalInfo": {"fullName": "Ada"}, "languages": ["English"]}}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let html = body_text(response).await;
        assert!(html.contains("<h1>Ada</h1>"));
        assert!(html.contains("Languages"));
    }
}
