use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use ripple_core::health::{healthz, readyz};
use ripple_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{current_user, login, register, send_verification, verify_user},
    post::{create_post, delete_post, edit_post, get_post, list_posts, toggle_like},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(current_user))
        .route("/verify", post(send_verification))
        .route("/verify/{code}", get(verify_user))
        // Posts
        .route("/posts", get(list_posts))
        .route("/posts", post(create_post))
        .route("/posts/{post_id}", get(get_post))
        .route("/posts/{post_id}", put(edit_post))
        .route("/posts/{post_id}", delete(delete_post))
        .route("/posts/{post_id}/like", post(toggle_like))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
