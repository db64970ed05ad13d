use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppJsonRejection, AppPath};
use crate::features::items::dtos::{CreateItemDto, ItemResponseDto, UpdateItemDto};
use crate::features::items::services::ItemService;
use crate::shared::types::{ErrorResponse, MessageResponse};

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created successfully", body = ItemResponseDto),
        (status = 400, description = "Missing name, invalid body or duplicate name", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_item(
    State(service): State<Arc<ItemService>>,
    AppJson(dto): AppJson<CreateItemDto>,
) -> Result<(StatusCode, Json<ItemResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// List all items
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All items in insertion order", body = Vec<ItemResponseDto>),
    ),
    tag = "items"
)]
pub async fn list_items(
    State(service): State<Arc<ItemService>>,
) -> Result<Json<Vec<ItemResponseDto>>> {
    let items = service.list().await?;
    Ok(Json(items))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponseDto),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_item(
    State(service): State<Arc<ItemService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ItemResponseDto>> {
    let item = service.get_by_id(id).await?;
    Ok(Json(item))
}

/// Update an item (PUT and PATCH behave the same)
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Item updated successfully", body = ItemResponseDto),
        (status = 400, description = "Invalid body or duplicate name", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_item(
    State(service): State<Arc<ItemService>>,
    AppPath(id): AppPath<i64>,
    body: std::result::Result<AppJson<UpdateItemDto>, AppJsonRejection>,
) -> Result<Json<ItemResponseDto>> {
    // Unknown id wins over a bad body
    service.get_by_id(id).await?;

    let AppJson(dto) = body?;
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = service.update(id, dto).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted successfully", body = MessageResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_item(
    State(service): State<Arc<ItemService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("deleted")))
}
