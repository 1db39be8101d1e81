pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resumes", post(handlers::handle_generate_and_render))
        .route("/api/v1/resumes/generate", post(handlers::handle_generate))
        .route("/api/v1/resumes/render", post(handlers::handle_render))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{Cursor, Read};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::generation::generator::ResumeWriter;
    use crate::llm_client::LlmError;

    const RESUME_TEXT: &str = "### Professional Summary\nBuilder of things.\n\n### Skills\n- Rust\n- SQL";

    struct StubWriter;

    #[async_trait]
    impl ResumeWriter for StubWriter {
        async fn write(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok(RESUME_TEXT.to_string())
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }

    struct FailingWriter;

    #[async_trait]
    impl ResumeWriter for FailingWriter {
        async fn write(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 400,
                message: "API key not valid".to_string(),
            })
        }

        fn model(&self) -> &str {
            "failing-model"
        }
    }

    fn app(writer: Arc<dyn ResumeWriter>) -> Router {
        build_router(AppState { writer })
    }

    fn resume_request(format: &str) -> Value {
        json!({
            "name": "Jane Doe",
            "skills": "Rust, SQL",
            "job_type": "SoftwareEngineer",
            "tone": "Professional",
            "length": "Short",
            "format": format,
            "jobs": [{
                "company": "ABC Corp",
                "location": "New York, NY",
                "date_joined": "2022-01",
                "date_left": "Present",
                "position": "Software Developer",
                "problems_solved": "Optimized database queries",
                "salary": "80000"
            }],
            "educations": [{
                "subject": "Computer Science",
                "institution": "XYZ University",
                "date_joined": "2018-09",
                "completion_date": "2022-06",
                "grade": "3.8/4.0"
            }]
        })
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_model() {
        let response = app(Arc::new(StubWriter))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "stub-model");
    }

    #[tokio::test]
    async fn test_generate_returns_text_and_classified_lines() {
        let response = post_json(
            app(Arc::new(StubWriter)),
            "/api/v1/resumes/generate",
            resume_request("pdf"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["name"], "Jane Doe");
        assert_eq!(body["resume_text"], RESUME_TEXT);
        let lines = body["lines"].as_array().unwrap();
        assert_eq!(lines.len(), RESUME_TEXT.split('\n').count());
        assert_eq!(lines[0], json!({"kind": "Heading", "content": "Professional Summary"}));
        assert_eq!(lines[4], json!({"kind": "Bullet", "content": "Rust"}));
    }

    #[tokio::test]
    async fn test_generate_validation_error_is_400() {
        let mut request = resume_request("pdf");
        request["jobs"] = json!([]);
        let response =
            post_json(app(Arc::new(StubWriter)), "/api/v1/resumes/generate", request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("at least one job entry"));
    }

    #[tokio::test]
    async fn test_generate_llm_failure_is_502() {
        let response = post_json(
            app(Arc::new(FailingWriter)),
            "/api/v1/resumes/generate",
            resume_request("pdf"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_render_pdf_download() {
        let response = post_json(
            app(Arc::new(StubWriter)),
            "/api/v1/resumes/render",
            json!({"name": "Jane Doe", "resume_text": RESUME_TEXT, "format": "pdf"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jane Doe_resume.pdf\""
        );
        assert!(body_bytes(response).await.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_render_empty_text_defaults_to_pdf() {
        let response = post_json(
            app(Arc::new(StubWriter)),
            "/api/v1/resumes/render",
            json!({"name": "Jane Doe", "resume_text": ""}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
    }

    #[tokio::test]
    async fn test_render_requires_name() {
        let response = post_json(
            app(Arc::new(StubWriter)),
            "/api/v1/resumes/render",
            json!({"name": " ", "resume_text": RESUME_TEXT}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_and_render_docx() {
        let response = post_json(
            app(Arc::new(StubWriter)),
            "/api/v1/resumes",
            resume_request("docx"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jane Doe_resume.docx\""
        );

        let bytes = body_bytes(response).await;
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut document = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut document)
            .unwrap();
        assert!(document.contains("Jane Doe&apos;s Resume"));
        assert!(document.contains(">Professional Summary<"));
    }
}
