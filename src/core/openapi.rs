use std::sync::Arc;

use axum::{middleware::from_fn, Router};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::SwaggerConfig;
use crate::core::middleware;
use crate::features::items::{dtos as items_dtos, handlers as items_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        items_handlers::create_item,
        items_handlers::list_items,
        items_handlers::get_item,
        items_handlers::update_item,
        items_handlers::delete_item,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            items_dtos::CreateItemDto,
            items_dtos::UpdateItemDto,
            items_dtos::ItemResponseDto,
        )
    ),
    tags(
        (name = "items", description = "Item CRUD endpoints")
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl From<&SwaggerConfig> for SwaggerInfoModifier {
    fn from(config: &SwaggerConfig) -> Self {
        Self {
            title: config.title.clone(),
            version: config.version.clone(),
            description: config.description.clone(),
        }
    }
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

/// Swagger UI at `/swagger-ui`, OpenAPI document at `/api-docs/openapi.json`.
/// Guarded by basic auth when credentials are configured.
pub fn swagger_router(config: &SwaggerConfig) -> Router {
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier::from(config).modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    if let Some(credentials) = config.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
            credentials,
        ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        swagger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_item_routes() {
        let openapi = ApiDoc::openapi();
        assert!(openapi.paths.paths.contains_key("/items"));
        assert!(openapi.paths.paths.contains_key("/items/{id}"));
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut openapi = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut openapi);

        assert_eq!(openapi.info.title, "Custom");
        assert_eq!(openapi.info.version, "9.9.9");
    }
}
