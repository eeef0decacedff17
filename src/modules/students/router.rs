use crate::modules::students::controller::{
    create_student, delete_student, get_all_students, get_student, update_student,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        // The dashboard client creates students via POST /get
        .route("/get", post(create_student))
        .route("/getAll", get(get_all_students))
        .route("/get/{id}", get(get_student))
        .route("/update/{id}", put(update_student))
        .route("/delete/{id}", delete(delete_student))
}
