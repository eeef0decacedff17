use crate::modules::blogs::controller::{
    create_blog, delete_blog, get_all_blogs, get_blog, update_blog,
};
use crate::state::AppState;
use crate::uploads::MULTIPART_BODY_LIMIT;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};

pub fn init_blogs_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_blog).layer(DefaultBodyLimit::max(MULTIPART_BODY_LIMIT)),
        )
        .route("/getall", get(get_all_blogs))
        .route("/get/{id}", get(get_blog))
        .route("/update/{id}", put(update_blog))
        .route("/delete/{id}", delete(delete_blog))
}
