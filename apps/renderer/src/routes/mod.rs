pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/render", post(handlers::handle_render))
        .route("/api/v1/render/tex", post(handlers::handle_render_tex))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
