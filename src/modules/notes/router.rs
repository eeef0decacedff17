use crate::modules::notes::controller::{
    create_note, delete_note, get_all_notes, get_note, update_note,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn init_notes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_note))
        .route("/getall", get(get_all_notes))
        .route("/get/{id}", get(get_note))
        .route("/update/{id}", put(update_note))
        .route("/delete/{id}", delete(delete_note))
}
