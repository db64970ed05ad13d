use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::items::handlers;
use crate::features::items::services::ItemService;

/// Create routes for the items feature
pub fn routes(service: Arc<ItemService>) -> Router {
    Router::new()
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/items/{id}",
            get(handlers::get_item)
                .put(handlers::update_item)
                .patch(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::core::database::create_test_pool;
    use crate::features::items::repositories::SqliteItemRepository;
    use crate::shared::fallback;

    async fn server() -> TestServer {
        let pool = create_test_pool().await;
        let service = Arc::new(ItemService::new(Arc::new(SqliteItemRepository::new(pool))));
        let app = routes(service).fallback(fallback::not_found);
        TestServer::new(app).unwrap()
    }

    async fn create(server: &TestServer, body: Value) -> Value {
        let response = server.post("/items").json(&body).await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()
    }

    #[tokio::test]
    async fn test_create_and_get_item() {
        let server = server().await;

        let created = create(&server, json!({ "name": "chair", "description": "wooden" })).await;
        assert_eq!(created["name"], "chair");
        let id = created["id"].as_i64().expect("numeric id");

        let response = server.get(&format!("/items/{}", id)).await;
        response.assert_status_ok();
        response.assert_json(&json!({ "id": id, "name": "chair", "description": "wooden" }));
    }

    #[tokio::test]
    async fn test_create_without_description_stores_empty_string() {
        let server = server().await;

        let created = create(&server, json!({ "name": "stool" })).await;
        assert_eq!(created["description"], "");
    }

    #[tokio::test]
    async fn test_list_items() {
        let server = server().await;
        create(&server, json!({ "name": "a", "description": "one" })).await;
        create(&server, json!({ "name": "b", "description": "two" })).await;

        let response = server.get("/items").await;
        response.assert_status_ok();
        let items = response.json::<Vec<Value>>();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "a");
        assert_eq!(items[1]["name"], "b");
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected() {
        let server = server().await;
        create(&server, json!({ "name": "lamp" })).await;

        let response = server
            .post("/items")
            .json(&json!({ "name": "lamp", "description": "again" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "item with that name already exists" }));

        let items = server.get("/items").await.json::<Vec<Value>>();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_create_without_name_is_rejected() {
        let server = server().await;

        for body in [json!({}), json!({ "name": "" }), json!({ "name": null })] {
            let response = server.post("/items").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({ "error": "name is required" }));
        }

        let items = server.get("/items").await.json::<Vec<Value>>();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_create_with_malformed_body_is_rejected() {
        let server = server().await;

        let response = server.post("/items").json(&json!({ "name": 5 })).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<Value>()["error"].is_string());

        let response = server.post("/items").text("{not json").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_overlong_name_is_rejected() {
        let server = server().await;

        let response = server
            .post("/items")
            .json(&json!({ "name": "n".repeat(121) }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_description_keeps_name() {
        let server = server().await;
        let created = create(&server, json!({ "name": "x", "description": "old" })).await;
        let path = format!("/items/{}", created["id"]);

        let response = server.put(&path).json(&json!({ "description": "new" })).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["description"], "new");

        let stored = server.get(&path).await.json::<Value>();
        assert_eq!(stored["description"], "new");
        assert_eq!(stored["name"], "x");
    }

    #[tokio::test]
    async fn test_update_ignores_empty_name() {
        let server = server().await;
        let created = create(&server, json!({ "name": "x", "description": "old" })).await;
        let path = format!("/items/{}", created["id"]);

        let response = server.put(&path).json(&json!({ "name": "" })).await;
        response.assert_status_ok();

        let stored = server.get(&path).await.json::<Value>();
        assert_eq!(stored["name"], "x");
        assert_eq!(stored["description"], "old");
    }

    #[tokio::test]
    async fn test_update_null_description_is_ignored() {
        let server = server().await;
        let created = create(&server, json!({ "name": "x", "description": "old" })).await;
        let path = format!("/items/{}", created["id"]);

        let response = server
            .patch(&path)
            .json(&json!({ "name": "y", "description": null }))
            .await;
        response.assert_status_ok();
        response.assert_json(&json!({ "id": created["id"], "name": "y", "description": "old" }));
    }

    #[tokio::test]
    async fn test_update_to_taken_name_is_rejected() {
        let server = server().await;
        create(&server, json!({ "name": "first" })).await;
        let second = create(&server, json!({ "name": "second", "description": "d" })).await;
        let path = format!("/items/{}", second["id"]);

        let response = server
            .put(&path)
            .json(&json!({ "name": "first", "description": "changed" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "item with that name already exists" }));

        let stored = server.get(&path).await.json::<Value>();
        assert_eq!(stored, second);
    }

    #[tokio::test]
    async fn test_update_unknown_item_is_not_found() {
        let server = server().await;

        let response = server
            .put("/items/999")
            .json(&json!({ "name": "ghost" }))
            .await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_update_unknown_item_with_bad_body_is_not_found() {
        let server = server().await;

        let response = server
            .put("/items/999")
            .json(&json!({ "name": "n".repeat(121) }))
            .await;
        response.assert_status_not_found();

        server
            .put("/items/999")
            .json(&json!({ "description": 5 }))
            .await
            .assert_status_not_found();

        server
            .patch("/items/999")
            .bytes("{bad".into())
            .content_type("application/json")
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_update_existing_item_with_bad_body_is_rejected() {
        let server = server().await;
        let created = create(&server, json!({ "name": "x" })).await;
        let path = format!("/items/{}", created["id"]);

        server
            .put(&path)
            .json(&json!({ "name": "n".repeat(121) }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        server
            .put(&path)
            .json(&json!({ "description": 5 }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let stored = server.get(&path).await.json::<Value>();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn test_delete_item() {
        let server = server().await;
        let created = create(&server, json!({ "name": "to-delete", "description": "" })).await;
        let path = format!("/items/{}", created["id"]);

        let response = server.delete(&path).await;
        response.assert_status_ok();
        response.assert_json(&json!({ "message": "deleted" }));

        server.get(&path).await.assert_status_not_found();
        server.delete(&path).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let server = server().await;

        server.get("/items/abc").await.assert_status_not_found();
        server.get("/nowhere").await.assert_status_not_found();
    }
}
