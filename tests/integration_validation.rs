mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{response_json, setup_test_app};
use serde_json::json;
use tower::ServiceExt;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn rejects_course_with_missing_title() {
    let (app, _uploads) = setup_test_app().await;

    let request = json_request("POST", "/api/courses", json!({ "subject": "physics" }));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e.as_str().unwrap() == "title is required"));
}

#[tokio::test]
async fn aggregates_all_field_errors() {
    let (app, _uploads) = setup_test_app().await;

    let request = json_request(
        "POST",
        "/api/students/get",
        json!({
            "name": "",
            "email": "not-an-email",
            "phone": "080",
            "class_level": ""
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);

    let errors: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap())
        .collect();
    assert!(errors.contains(&"name is required"));
    assert!(errors.contains(&"email is invalid"));
    assert!(errors.contains(&"phone must be 5 to 20 characters"));
    assert!(errors.contains(&"class_level is required"));
}

#[tokio::test]
async fn rejects_json_body_without_content_type() {
    let (app, _uploads) = setup_test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/contact/add")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Jane",
                "email": "jane@example.com",
                "message": "Hello"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Content-Type: application/json")
    );
}

#[tokio::test]
async fn rejects_malformed_identifiers() {
    let (app, _uploads) = setup_test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/teachers/get/not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_routes_return_404() {
    let (app, _uploads) = setup_test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/nonexistent")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rejects_comment_with_empty_content() {
    let (app, _uploads) = setup_test_app().await;

    let request = json_request(
        "POST",
        "/api/comments",
        json!({
            "blog_id": "1f2e3d4c-5b6a-4789-8abc-def012345678",
            "author": "Jane",
            "content": ""
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e.as_str().unwrap() == "content is required"));
}
