use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_url_handler, health_handler, not_found_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", post(create_url_handler).get(not_found_handler))
            .route("/health", get(health_handler))
            .route("/api/shorten", post(shorten_handler))
            .route("/{key}", get(redirect_handler))
            .fallback(not_found_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
