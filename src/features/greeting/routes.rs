use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::greeting::handlers::{self, GreetingState};

/// Create routes for the greeting service
pub fn routes(state: Arc<GreetingState>) -> Router {
    Router::new()
        .route("/", get(handlers::greet))
        .route("/health", get(handlers::health))
        .with_state(state)
}
