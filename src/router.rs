use crate::config::uploads::UploadConfig;
use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::blogs::router::init_blogs_router;
use crate::modules::clubs::router::init_clubs_router;
use crate::modules::comments::router::init_comments_router;
use crate::modules::contact::router::init_contact_router;
use crate::modules::courses::router::init_courses_router;
use crate::modules::notes::router::init_notes_router;
use crate::modules::quizzes::router::init_quizzes_router;
use crate::modules::students::router::init_students_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/teachers", init_teachers_router())
                .nest("/students", init_students_router())
                .nest("/courses", init_courses_router())
                .nest("/clubs", init_clubs_router())
                .nest("/blogs", init_blogs_router())
                .nest("/comments", init_comments_router())
                .nest("/notes", init_notes_router())
                .nest("/quizzes", init_quizzes_router())
                .nest("/contact", init_contact_router()),
        )
        // Uploaded images and resumes are public, served straight off disk
        .nest_service(
            UploadConfig::PUBLIC_PATH,
            ServeDir::new(state.storage.base_dir()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
