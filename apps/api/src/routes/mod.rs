pub mod extract;
pub mod health;
pub mod prefix;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::jobs::handlers as jobs;
use crate::profile::handlers as profile;
use crate::resume::handlers as resume;
use crate::routes::prefix::{strip_path_prefix, PathPrefix};
use crate::state::AppState;

/// Room for multipart boundaries, part headers and any text fields sent
/// alongside the resume file.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// axum's default request body limit.
const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Body limit for `/resume`, large enough that a file up to the configured
/// upload cap is never rejected before it is sampled.
fn upload_body_limit(max_upload_bytes: usize) -> usize {
    max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD)
        .max(DEFAULT_BODY_LIMIT)
}

pub fn build_router(state: AppState) -> Router {
    let prefix = PathPrefix::new(&state.config.path_prefix);
    let upload_limit = upload_body_limit(state.config.max_upload_bytes);

    let api = Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(health::root_handler))
        .route(
            "/profile",
            get(profile::handle_profile_form).post(profile::handle_save_profile),
        )
        .route(
            "/resume",
            get(resume::handle_resume_form)
                .post(resume::handle_upload_resume)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/jobs", get(jobs::handle_list_jobs))
        .route(
            "/interview",
            get(interview::handle_interview_form).post(interview::handle_interview_answer),
        )
        .route(
            "/interview/start",
            post(interview::handle_interview_start),
        )
        .route(
            "/interview/respond",
            post(interview::handle_interview_respond),
        )
        .with_state(state);

    // The prefix must come off before `api` matches, so the API router is mounted
    // as the fallback of an outer router that carries the rewrite middleware.
    Router::new()
        .fallback_service(api)
        .layer(middleware::from_fn_with_state(prefix, strip_path_prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const BOUNDARY: &str = "navigator-test-boundary";

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
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

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, filename, content) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            let disposition = match filename {
                Some(f) => format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n"),
                None => format!("Content-Disposition: form-data; name=\"{name}\"\r\n"),
            };
            body.extend_from_slice(disposition.as_bytes());
            body.extend_from_slice(b"Content-Type: text/plain\r\n\r\n");
            body.extend_from_slice(content.as_bytes());
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn post_multipart(uri: &str, parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_and_root() {
        let app = app();
        let (status, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));

        let (status, body) = send(&app, get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
        assert_eq!(body["message"], "Anushka Career Navigator API");
    }

    #[tokio::test]
    async fn test_prefixed_paths_are_routed() {
        let app = app();
        let (status, body) = send(&app, get("/pyapi/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = send(&app, get("/pyapi")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");

        let (status, _) = send(&app, get("/pyapix/health")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_placeholder_gets() {
        let app = app();
        let (_, body) = send(&app, get("/profile")).await;
        assert_eq!(body, json!({ "message": "Profile form endpoint", "saved": false }));

        let (_, body) = send(&app, get("/resume")).await;
        assert_eq!(body, json!({ "message": "Resume upload endpoint", "uploaded": false }));

        let (_, body) = send(&app, get("/interview")).await;
        assert_eq!(body, json!({ "message": "Interview endpoint", "answer": null }));
    }

    #[tokio::test]
    async fn test_save_profile_json() {
        let app = app();
        let (status, body) = send(
            &app,
            post_json(
                "/profile",
                json!({ "name": "Anushka", "role": "Data Analyst", "skills": "Python, SQL" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["saved"], true);
        assert_eq!(
            body["data"],
            json!({ "name": "Anushka", "role": "Data Analyst", "skills": ["python", "sql"] })
        );

        let gaps: Vec<&str> = body["analysis"]["gaps"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g.as_str().unwrap())
            .collect();
        assert!(gaps.contains(&"git") && gaps.contains(&"linux"));
        assert!(!gaps.contains(&"python") && !gaps.contains(&"sql"));
        assert_eq!(
            body["analysis"]["suggestions"],
            json!([
                "Strengthen Python, SQL, and Pandas.",
                "Add projects: EDA, dashboards, A/B tests."
            ])
        );
    }

    #[tokio::test]
    async fn test_save_profile_form_and_defaults() {
        let app = app();
        let (status, body) = send(
            &app,
            post_form("/profile", "name=Sam&role=Web+Developer&skills=HTML%2C+css"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["skills"], json!(["html", "css"]));
        assert_eq!(body["analysis"]["suggestions"][0], "Practice HTML/CSS/JS; build responsive UIs.");

        // No content type at all: every field defaults to empty.
        let request = Request::builder()
            .method("POST")
            .uri("/profile")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({ "name": "", "role": "", "skills": [] }));
        assert_eq!(body["analysis"]["gaps"], json!(["python", "sql", "git", "linux"]));
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/profile")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_jobs_ranked_against_saved_profile() {
        let app = app();
        send(
            &app,
            post_json("/profile", json!({ "name": "A", "role": "Analyst", "skills": "python,sql" })),
        )
        .await;

        let (status, body) = send(&app, get("/jobs")).await;
        assert_eq!(status, StatusCode::OK);

        let jobs = body["jobs"].as_array().unwrap();
        assert_eq!(jobs.len(), 3);
        let relevance = |title: &str| {
            jobs.iter()
                .find(|j| j["title"] == title)
                .and_then(|j| j["relevance"].as_u64())
                .unwrap()
        };
        assert!(relevance("Backend Developer") > 0);
        assert!(relevance("Data Analyst") > 0);
        assert_eq!(relevance("Frontend Developer"), 0);

        let scores: Vec<u64> = jobs.iter().map(|j| j["relevance"].as_u64().unwrap()).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));

        assert_eq!(jobs[0]["overlap"], json!(["python", "sql"]));
        assert_eq!(jobs[0]["company"], "Globex");
        assert_eq!(body["profile"]["skills"], json!(["python", "sql"]));
    }

    #[tokio::test]
    async fn test_jobs_without_profile() {
        let (_, body) = send(&app(), get("/jobs")).await;
        assert!(body["jobs"]
            .as_array()
            .unwrap()
            .iter()
            .all(|j| j["relevance"] == 0));
        assert_eq!(body["profile"], json!({ "name": "", "role": "", "skills": [] }));
    }

    #[tokio::test]
    async fn test_resume_without_file_is_400() {
        let app = app();
        let expected = json!({ "error": "No file uploaded", "uploaded": true });

        let (status, body) = send(&app, post_multipart("/resume", &[("other", None, "x")])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, expected);

        let request = Request::builder()
            .method("POST")
            .uri("/resume")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, expected);

        // A `file` part without a filename is not a file.
        let (status, _) = send(&app, post_multipart("/resume", &[("file", None, "rust")])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_resume_upload_scores_against_profile() {
        let app = app();
        send(
            &app,
            post_json("/profile", json!({ "skills": "python, sql, docker, linux" })),
        )
        .await;

        let resume = "Python developer. Python, SQL and Kafka pipelines; the skills section.";
        let (status, body) = send(
            &app,
            post_multipart("/resume", &[("file", Some("cv.txt"), resume)]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["uploaded"], true);
        assert_eq!(
            body["summary"],
            format!("Uploaded file 'cv.txt' with {} bytes (sampled).", resume.len())
        );
        assert_eq!(body["keywords"][0], "python");
        // python + sql out of four profile skills
        assert_eq!(body["score"], 50);
    }

    #[tokio::test]
    async fn test_resume_upload_is_capped() {
        let config = Config {
            max_upload_bytes: 16,
            ..Config::default()
        };
        let app = build_router(AppState::new(config));

        let content = "alpha beta gamma delta epsilon zeta eta theta";
        let (status, body) = send(
            &app,
            post_multipart("/resume", &[("file", Some("big.txt"), content)]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], "Uploaded file 'big.txt' with 16 bytes (sampled).");
        // First 16 bytes: "alpha beta gamma"
        assert_eq!(body["keywords"], json!(["alpha", "beta", "gamma"]));
        assert_eq!(body["score"], 0);
    }

    #[test]
    fn test_upload_body_limit_never_below_default() {
        assert_eq!(upload_body_limit(40_000), DEFAULT_BODY_LIMIT);
        assert_eq!(upload_body_limit(5_000_000), 5_000_000 + MULTIPART_OVERHEAD);
        assert_eq!(upload_body_limit(usize::MAX), usize::MAX);
    }

    #[tokio::test]
    async fn test_resume_upload_above_default_body_limit() {
        let config = Config {
            max_upload_bytes: 5_000_000,
            ..Config::default()
        };
        let app = build_router(AppState::new(config));

        let content = "rust ".repeat(600_000);
        let (status, body) = send(
            &app,
            post_multipart("/resume", &[("file", Some("long.txt"), &content)]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], "Uploaded file 'long.txt' with 3000000 bytes (sampled).");
        assert_eq!(body["keywords"], json!(["rust"]));
    }

    #[tokio::test]
    async fn test_save_profile_multipart() {
        let app = app();
        let (status, body) = send(
            &app,
            post_multipart(
                "/profile",
                &[
                    ("name", None, "Ann"),
                    ("role", None, "Data Analyst"),
                    ("skills", None, "python, sql"),
                ],
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            json!({ "name": "Ann", "role": "Data Analyst", "skills": ["python", "sql"] })
        );

        // The saved profile is the multipart one, not an empty default.
        let (_, body) = send(&app, get("/jobs")).await;
        assert_eq!(body["profile"]["skills"], json!(["python", "sql"]));
    }

    #[tokio::test]
    async fn test_save_profile_json_suffix_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/profile")
            .header(header::CONTENT_TYPE, "application/merge-patch+json; charset=utf-8")
            .body(Body::from(json!({ "name": "Lee", "skills": "Git" }).to_string()))
            .unwrap();
        let (status, body) = send(&app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({ "name": "Lee", "role": "", "skills": ["git"] }));
    }

    #[tokio::test]
    async fn test_interview_answer_multipart() {
        let (status, body) = send(
            &app(),
            post_multipart("/interview", &[("question", None, "Why data?")]),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"], "Why data?");
        assert_eq!(
            body["answer"],
            "Sample answer to: 'Why data?'. Prepare with STAR method and quantify impact."
        );
    }

    #[tokio::test]
    async fn test_interview_respond_form() {
        let app = app();
        let (status, body) = send(
            &app,
            post_form(
                "/interview/respond",
                "role=Web+Developer&answer=I+profiled+it&questionNumber=3",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isComplete"], false);
        assert_eq!(
            body["nextQuestion"],
            "A page feels slow. How do you find out why, and how do you fix it?"
        );

        let (_, body) = send(
            &app,
            post_form("/interview/respond", "role=Web+Developer&answer=Done&questionNumber=5"),
        )
        .await;
        assert_eq!(body["isComplete"], true);
        assert!(body["nextQuestion"].is_null());
        assert!(body["response"].as_str().unwrap().contains("answered 1 of 5"));
    }

    #[tokio::test]
    async fn test_interview_answer() {
        let app = app();
        let (status, body) = send(
            &app,
            post_json("/interview", json!({ "question": "Why data?" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"], "Why data?");
        assert_eq!(
            body["answer"],
            "Sample answer to: 'Why data?'. Prepare with STAR method and quantify impact."
        );

        let (_, body) = send(&app, post_form("/interview", "question=Tell+me")).await;
        assert_eq!(body["question"], "Tell me");
    }

    #[tokio::test]
    async fn test_mock_interview_flow() {
        let app = app();
        let (status, body) = send(
            &app,
            post_json("/interview/start", json!({ "role": "Frontend Developer" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["question"]
            .as_str()
            .unwrap()
            .contains("Frontend Developer"));

        let (_, body) = send(
            &app,
            post_json(
                "/interview/respond",
                json!({
                    "role": "Frontend Developer",
                    "answer": "I cut bundle size by 40%.",
                    "questionNumber": 1,
                    "conversationHistory": []
                }),
            ),
        )
        .await;
        assert_eq!(body["isComplete"], false);
        assert!(body["nextQuestion"].is_string());

        let (_, body) = send(
            &app,
            post_json(
                "/interview/respond",
                json!({ "role": "Frontend Developer", "answer": "Done.", "questionNumber": 5 }),
            ),
        )
        .await;
        assert_eq!(body["isComplete"], true);
        assert!(body["nextQuestion"].is_null());
    }
}
