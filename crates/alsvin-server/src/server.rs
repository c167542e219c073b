//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config.allowed_origin.clone())
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::welcome))
        .route("/simulate", post(api::simulate))
        .route("/clear", post(api::clear))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
