use crate::modules::teachers::controller::{
    create_teacher, delete_teacher, get_all_teachers, get_teacher, get_teachers_by_subject,
    search_teachers, update_teacher,
};
use crate::state::AppState;
use crate::uploads::MULTIPART_BODY_LIMIT;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_teacher).layer(DefaultBodyLimit::max(MULTIPART_BODY_LIMIT)),
        )
        .route("/getall", get(get_all_teachers))
        .route("/get/{id}", get(get_teacher))
        .route("/update/{id}", put(update_teacher))
        .route("/{id}", delete(delete_teacher))
        .route("/subject/{applied_for}", get(get_teachers_by_subject))
        .route("/search", get(search_teachers))
}
