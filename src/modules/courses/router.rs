use crate::modules::courses::controller::{
    create_course, delete_course, get_all_courses, get_course, update_course,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course))
        .route("/getall", get(get_all_courses))
        .route("/get/{id}", get(get_course))
        .route("/update/{id}", put(update_course))
        .route("/delete/{id}", delete(delete_course))
}
