use crate::modules::contact::controller::{
    create_message, delete_message, get_all_messages, get_message,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn init_contact_router() -> Router<AppState> {
    Router::new()
        .route("/add", post(create_message))
        .route("/get", get(get_all_messages))
        .route("/get/{id}", get(get_message))
        .route("/delete/{id}", delete(delete_message))
}
