use crate::modules::comments::controller::{
    create_comment, delete_comment, get_all_comments, get_comments_by_blog, update_comment,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn init_comments_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_comment))
        .route("/getall", get(get_all_comments))
        .route("/blog/{blog_id}", get(get_comments_by_blog))
        .route("/update/{id}", put(update_comment))
        .route("/delete/{id}", delete(delete_comment))
}
