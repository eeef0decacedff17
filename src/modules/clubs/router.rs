use crate::modules::clubs::controller::{
    create_club, delete_club, get_all_clubs, get_club, update_club,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn init_clubs_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_club))
        .route("/getall", get(get_all_clubs))
        .route("/get/{id}", get(get_club))
        .route("/update/{id}", put(update_club))
        .route("/delete/{id}", delete(delete_club))
}
