mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    Part, multipart_body, multipart_content_type, response_json, setup_test_app, teacher_fields,
};
use tower::ServiceExt;

fn teacher_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/teachers")
        .header("content-type", multipart_content_type())
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

#[tokio::test]
async fn rejects_image_with_unsupported_extension() {
    let (app, _uploads) = setup_test_app().await;

    let mut parts = teacher_fields();
    parts.push(Part::File {
        name: "image",
        filename: "photo.bmp",
        content_type: "image/png",
        bytes: b"fake image data",
    });

    let response = app.oneshot(teacher_request(&parts)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Only jpeg, jpg, png, gif and webp images are allowed")
    );
}

#[tokio::test]
async fn rejects_image_with_mismatched_content_type() {
    let (app, _uploads) = setup_test_app().await;

    let mut parts = teacher_fields();
    parts.push(Part::File {
        name: "image",
        filename: "photo.png",
        content_type: "application/octet-stream",
        bytes: b"fake image data",
    });

    let response = app.oneshot(teacher_request(&parts)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn rejects_resume_extension_spoofing() {
    let (app, _uploads) = setup_test_app().await;

    // A .pdf filename with a non-PDF declared content type must not pass.
    let mut parts = teacher_fields();
    parts.push(Part::File {
        name: "resume",
        filename: "cv.pdf",
        content_type: "application/zip",
        bytes: b"PK\x03\x04",
    });

    let response = app.oneshot(teacher_request(&parts)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Only pdf, doc and docx resumes are allowed")
    );
}

#[tokio::test]
async fn rejects_unexpected_file_field() {
    let (app, _uploads) = setup_test_app().await;

    let mut parts = teacher_fields();
    parts.push(Part::File {
        name: "avatar",
        filename: "photo.png",
        content_type: "image/png",
        bytes: b"fake image data",
    });

    let response = app.oneshot(teacher_request(&parts)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Unexpected file field 'avatar'")
    );
}

#[tokio::test]
async fn rejects_oversized_standalone_image() {
    let (app, _uploads) = setup_test_app().await;

    // One byte over the 5 MiB standalone image cap.
    let oversized = vec![0u8; 5 * 1024 * 1024 + 1];
    let parts = [
        Part::Text {
            name: "title",
            value: "Exam tips",
        },
        Part::Text {
            name: "content",
            value: "Read the questions twice.",
        },
        Part::Text {
            name: "author",
            value: "Jane Doe",
        },
        Part::File {
            name: "image",
            filename: "cover.png",
            content_type: "image/png",
            bytes: &oversized,
        },
    ];

    let request = Request::builder()
        .method("POST")
        .uri("/api/blogs")
        .header("content-type", multipart_content_type())
        .body(Body::from(multipart_body(&parts)))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("exceeds the maximum size")
    );
}

#[tokio::test]
async fn rejects_teacher_files_over_combined_budget() {
    let (app, _uploads) = setup_test_app().await;

    // Each file is under its own cap, together they cross 10 MiB.
    let image = vec![0u8; 5 * 1000 * 1000];
    let resume = vec![0u8; 6 * 1000 * 1000];

    let mut parts = teacher_fields();
    parts.push(Part::File {
        name: "image",
        filename: "photo.png",
        content_type: "image/png",
        bytes: &image,
    });
    parts.push(Part::File {
        name: "resume",
        filename: "cv.pdf",
        content_type: "application/pdf",
        bytes: &resume,
    });

    let response = app.oneshot(teacher_request(&parts)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("combined maximum size")
    );
}

// A failing request must leave the upload directories empty.
#[tokio::test]
async fn rejected_upload_writes_no_files() {
    let (app, uploads) = setup_test_app().await;

    let mut parts = teacher_fields();
    parts.push(Part::File {
        name: "image",
        filename: "photo.txt",
        content_type: "text/plain",
        bytes: b"not an image",
    });

    let response = app.oneshot(teacher_request(&parts)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let images: Vec<_> = std::fs::read_dir(uploads.path().join("images"))
        .unwrap()
        .collect();
    let resumes: Vec<_> = std::fs::read_dir(uploads.path().join("resumes"))
        .unwrap()
        .collect();
    assert!(images.is_empty());
    assert!(resumes.is_empty());
}

#[tokio::test]
async fn rejects_teacher_form_with_missing_fields_before_storing_files() {
    let (app, uploads) = setup_test_app().await;

    // Valid files, but the form is missing every required field.
    let parts = [Part::File {
        name: "image",
        filename: "photo.png",
        content_type: "image/png",
        bytes: b"fake image data",
    }];

    let response = app.oneshot(teacher_request(&parts)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["errors"].is_array());

    let images: Vec<_> = std::fs::read_dir(uploads.path().join("images"))
        .unwrap()
        .collect();
    assert!(images.is_empty());
}

#[tokio::test]
async fn rejects_teacher_form_with_unknown_subject() {
    let (app, _uploads) = setup_test_app().await;

    let parts = [
        Part::Text {
            name: "name",
            value: "Jane Doe",
        },
        Part::Text {
            name: "email",
            value: "jane.doe@example.com",
        },
        Part::Text {
            name: "phone",
            value: "08012345678",
        },
        Part::Text {
            name: "applied_for",
            value: "astrology",
        },
    ];

    let response = app.oneshot(teacher_request(&parts)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    let errors = body["errors"].as_array().unwrap();
    assert!(
        errors
            .iter()
            .any(|e| e.as_str().unwrap().contains("applied_for"))
    );
}
