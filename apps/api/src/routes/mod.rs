pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::outreach::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-script",
            post(handlers::handle_generate_script).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}
