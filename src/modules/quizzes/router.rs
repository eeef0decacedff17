use crate::modules::quizzes::controller::{
    create_quiz, delete_quiz, get_all_quizzes, get_quiz, update_quiz,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn init_quizzes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_quiz))
        .route("/getall", get(get_all_quizzes))
        .route("/get/{id}", get(get_quiz))
        .route("/update/{id}", put(update_quiz))
        .route("/delete/{id}", delete(delete_quiz))
}
