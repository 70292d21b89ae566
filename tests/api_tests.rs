//! Integration tests for the HTTP endpoints
//!
//! Tests cover:
//! - Upload: success, missing file, wrong content type, parse failure
//! - Search: matching, empty results, missing query
//! - Dataset replacement across uploads
//! - Health and CORS

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

use csv_search::config::{ClientConfig, Config, ServerConfig};
use csv_search::parser::parse_csv;
use csv_search::{create_router, AppState, DatasetStore};

const BOUNDARY: &str = "csvsearchboundary";
const PEOPLE: &str = "name,age\nAna,30\nBob,25";

fn test_config() -> Config {
    Config {
        server: ServerConfig::default(),
        client: ClientConfig::default(),
    }
}

/// Test helper: router over a store the test keeps a handle to
fn setup_app(store: DatasetStore) -> Router {
    create_router(AppState::with_store(test_config(), store)).unwrap()
}

fn multipart_body(parts: &[(&str, Option<&str>, &str, &str)]) -> String {
    let mut body = String::new();
    for (name, file_name, content_type, content) in parts {
        body.push_str(&format!("--{}\r\n", BOUNDARY));
        match file_name {
            Some(file_name) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                name, file_name
            )),
            None => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"\r\n",
                name
            )),
        }
        body.push_str(&format!("Content-Type: {}\r\n\r\n", content_type));
        body.push_str(content);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));
    body
}

fn upload_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/files")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn csv_upload(content_type: &str, content: &str) -> Request<Body> {
    upload_request(multipart_body(&[("file", Some("people.csv"), content_type, content)]))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(body: Body) -> Vec<u8> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body")
        .to_vec()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body_bytes(response.into_body()).await;
    let body = serde_json::from_slice(&bytes).expect("Should parse JSON");
    (status, body)
}

// =============================================================================
// Upload
// =============================================================================

#[tokio::test]
async fn test_upload_parses_rows_in_order() {
    let store = DatasetStore::default();
    let app = setup_app(store.clone());

    let (status, body) = send(&app, csv_upload("text/csv", PEOPLE)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "file was loaded");
    assert_eq!(
        body["data"],
        json!([{"name": "Ana", "age": "30"}, {"name": "Bob", "age": "25"}])
    );
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_upload_keeps_header_order_in_json() {
    let app = setup_app(DatasetStore::default());

    let response = app
        .clone()
        .oneshot(csv_upload("text/csv", "zeta,alpha\n1,2\n"))
        .await
        .unwrap();
    let raw = String::from_utf8(body_bytes(response.into_body()).await).unwrap();

    assert!(raw.contains(r#"{"zeta":"1","alpha":"2"}"#), "{}", raw);
}

#[tokio::test]
async fn test_upload_accepts_charset_parameter() {
    let app = setup_app(DatasetStore::default());

    let (status, body) = send(&app, csv_upload("text/csv; charset=utf-8", PEOPLE)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_upload_wrong_type_leaves_store_untouched() {
    let store = DatasetStore::new(parse_csv(b"name\nkept\n").unwrap());
    let app = setup_app(store.clone());

    let (status, body) = send(&app, csv_upload("text/plain", PEOPLE)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "file must be a csv"}));
    let current = store.snapshot().await;
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].get("name"), Some("kept"));
}

#[tokio::test]
async fn test_upload_without_file_part() {
    let app = setup_app(DatasetStore::default());

    let body = multipart_body(&[("other", Some("people.csv"), "text/csv", PEOPLE)]);
    let (status, body) = send(&app, upload_request(body)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "file is required");
}

#[tokio::test]
async fn test_upload_plain_field_is_not_a_file() {
    let app = setup_app(DatasetStore::default());

    let body = multipart_body(&[("file", None, "text/csv", PEOPLE)]);
    let (status, body) = send(&app, upload_request(body)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "file is required");
}

#[tokio::test]
async fn test_upload_non_multipart_body() {
    let app = setup_app(DatasetStore::default());

    let request = Request::builder()
        .method("POST")
        .uri("/api/files")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "file is required");
}

#[tokio::test]
async fn test_upload_parse_error_leaves_store_untouched() {
    let store = DatasetStore::new(parse_csv(PEOPLE.as_bytes()).unwrap());
    let app = setup_app(store.clone());

    let (status, body) = send(&app, csv_upload("text/csv", "name,age\nAna,30,extra\n")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error parsing file: "), "{}", message);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_upload_over_body_limit_leaves_store_untouched() {
    let store = DatasetStore::new(parse_csv(b"name\nkept\n").unwrap());
    let config = Config {
        server: ServerConfig {
            max_upload_bytes: 64,
            ..ServerConfig::default()
        },
        client: ClientConfig::default(),
    };
    let app = create_router(AppState::with_store(config, store.clone())).unwrap();

    let big = format!("name\n{}\n", "x".repeat(1024));
    let (status, body) = send(&app, csv_upload("text/csv", &big)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error reading upload: "), "{}", message);
    assert_eq!(store.snapshot().await[0].get("name"), Some("kept"));
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_matches_case_insensitively() {
    let app = setup_app(DatasetStore::new(parse_csv(PEOPLE.as_bytes()).unwrap()));

    let (status, body) = send(&app, get("/api/users?q=an")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": [{"name": "Ana", "age": "30"}]}));
}

#[tokio::test]
async fn test_search_without_match_is_empty() {
    let app = setup_app(DatasetStore::new(parse_csv(PEOPLE.as_bytes()).unwrap()));

    let (status, body) = send(&app, get("/api/users?q=9")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn test_search_decodes_query() {
    let data = parse_csv(b"city\nLa Paz\nLima\n").unwrap();
    let app = setup_app(DatasetStore::new(data));

    let (_, body) = send(&app, get("/api/users?q=la%20p")).await;

    assert_eq!(body, json!({"data": [{"city": "La Paz"}]}));
}

#[tokio::test]
async fn test_search_requires_query() {
    let app = setup_app(DatasetStore::default());

    for uri in ["/api/users", "/api/users?q=", "/api/users?other=1"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body["message"], "query param is required", "{}", uri);
    }
}

#[tokio::test]
async fn test_search_before_upload_is_empty() {
    let app = setup_app(DatasetStore::default());

    let (status, body) = send(&app, get("/api/users?q=a")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn test_second_upload_replaces_dataset() {
    let app = setup_app(DatasetStore::default());

    send(&app, csv_upload("text/csv", PEOPLE)).await;
    let (status, _) = send(&app, csv_upload("text/csv", "fruit\nbanana\napple\n")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get("/api/users?q=an")).await;
    assert_eq!(body, json!({"data": [{"fruit": "banana"}]}));

    let (_, body) = send(&app, get("/api/users?q=bob")).await;
    assert_eq!(body, json!({"data": []}));
}

// =============================================================================
// Health and CORS
// =============================================================================

#[tokio::test]
async fn test_health_reports_record_count() {
    let app = setup_app(DatasetStore::new(parse_csv(PEOPLE.as_bytes()).unwrap()));

    let (status, body) = send(&app, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["records"], 2);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_cors_allows_configured_origin_only() {
    let app = setup_app(DatasetStore::default());

    let allowed = Request::builder()
        .method("GET")
        .uri("/api/health")
        .header("origin", "http://localhost:4000")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(allowed).await.unwrap();
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:4000"
    );

    let other = Request::builder()
        .method("GET")
        .uri("/api/health")
        .header("origin", "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(other).await.unwrap();
    assert!(response.headers().get("access-control-allow-origin").is_none());
}
