pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use axum::{
    routing::{delete, get, post},
    Router,
};
use config::Config;
use state::AppState;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Builds the full router: JSON API, admin page and static assets.
pub fn app(app_state: AppState, config: &Config) -> Router {
    let views_dir = config.views_dir.clone();

    Router::new()
        .route("/api/submit", post(handlers::submit_response))
        .route(
            "/api/responses",
            get(handlers::list_responses).delete(handlers::delete_without_id),
        )
        .route("/api/responses/", delete(handlers::delete_without_id))
        .route("/api/responses/{id}", delete(handlers::delete_response))
        .route(
            "/view-responses",
            get(move || handlers::view_responses_page(views_dir.clone())),
        )
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
