//! Item store and greeting HTTP services.
//!
//! The library holds everything; `src/main.rs` and `src/bin/greeting_service.rs`
//! only wire configuration to routers.

pub mod core;
pub mod features;
pub mod shared;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use sqlx::SqlitePool;

use crate::core::config::{Config, GreetingConfig};
use crate::core::{openapi, server};
use crate::features::greeting::{routes as greeting_routes, GreetingState};
use crate::features::items::{routes as items_routes, ItemService, SqliteItemRepository};

/// Liveness check for the item store, empty 200
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Full router for the item store: item routes, `/health`, Swagger UI
pub fn item_store_app(config: &Config, pool: SqlitePool) -> Router {
    let repository = Arc::new(SqliteItemRepository::new(pool));
    let item_service = Arc::new(ItemService::new(repository));
    tracing::info!("Item service initialized");

    let app = Router::new()
        .merge(openapi::swagger_router(&config.swagger))
        .merge(items_routes::routes(item_service))
        .route("/health", get(health_check))
        .fallback(shared::fallback::not_found)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size));

    server::with_http_layers(app, &config.app)
}

/// Full router for the greeting service
pub fn greeting_app(config: &GreetingConfig) -> Router {
    let state = Arc::new(GreetingState::new(&config.name));

    let app = greeting_routes::routes(state)
        .fallback(shared::fallback::not_found)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size));

    server::with_http_layers(app, &config.app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::core::database::create_test_pool;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[tokio::test]
    async fn test_item_store_app_serves_items_and_health() {
        let config = Config::from_source(&no_env).unwrap();
        let server = TestServer::new(item_store_app(&config, create_test_pool().await)).unwrap();

        server.get("/health").await.assert_status_ok();

        let response = server
            .post("/items")
            .json(&json!({ "name": "chair", "description": "wooden" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert!(response.maybe_header("x-request-id").is_some());

        let items = server.get("/items").await.json::<Vec<Value>>();
        assert_eq!(items.len(), 1);

        server.get("/api-docs/openapi.json").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_not_found() {
        let config = Config::from_source(&no_env).unwrap();
        let server = TestServer::new(item_store_app(&config, create_test_pool().await)).unwrap();

        let response = server.get("/does-not-exist").await;
        response.assert_status_not_found();
        response.assert_json(&json!({ "error": "not found" }));
    }

    #[tokio::test]
    async fn test_swagger_requires_credentials_when_configured() {
        let source = |key: &str| match key {
            "SWAGGER_USERNAME" => Some("admin".to_string()),
            "SWAGGER_PASSWORD" => Some("secret".to_string()),
            _ => None,
        };
        let config = Config::from_source(&source).unwrap();
        let server = TestServer::new(item_store_app(&config, create_test_pool().await)).unwrap();

        server
            .get("/api-docs/openapi.json")
            .await
            .assert_status_unauthorized();
        server.get("/items").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_greeting_app_does_not_serve_items() {
        let config = GreetingConfig::from_source(&no_env).unwrap();
        let server = TestServer::new(greeting_app(&config)).unwrap();

        server.get("/").await.assert_status_ok();
        server.get("/health").await.assert_json(&json!({ "status": "ok" }));
        server.get("/items").await.assert_status_not_found();
    }
}
