use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::items::dtos::{CreateItemDto, ItemResponseDto, UpdateItemDto};
use crate::features::items::models::{ItemChanges, NewItem};
use crate::features::items::repositories::ItemRepository;

pub const NAME_REQUIRED_MESSAGE: &str = "name is required";

/// Service for item operations
pub struct ItemService {
    repository: Arc<dyn ItemRepository>,
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Item with id {} not found", id))
}

impl ItemService {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    /// Create a new item. A missing, null or empty name is rejected.
    pub async fn create(&self, dto: CreateItemDto) -> Result<ItemResponseDto> {
        let name = dto
            .name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::Validation(NAME_REQUIRED_MESSAGE.to_string()))?;

        let item = self
            .repository
            .insert(NewItem {
                name,
                description: dto.description,
            })
            .await?;

        tracing::info!("Item created: id={}", item.id);
        Ok(item.into())
    }

    /// List all items in insertion order
    pub async fn list(&self) -> Result<Vec<ItemResponseDto>> {
        let items = self.repository.list().await?;
        Ok(items.into_iter().map(ItemResponseDto::from).collect())
    }

    /// Get item by ID
    pub async fn get_by_id(&self, id: i64) -> Result<ItemResponseDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ItemResponseDto::from)
            .ok_or_else(|| not_found(id))
    }

    /// Update an item.
    ///
    /// An empty `name` counts as not provided and is ignored, while any
    /// non-null `description` (empty string included) replaces the stored one.
    pub async fn update(&self, id: i64, dto: UpdateItemDto) -> Result<ItemResponseDto> {
        let changes = ItemChanges {
            name: dto.name.filter(|name| !name.is_empty()),
            description: dto.description,
        };

        let item = self
            .repository
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Item updated: id={}", item.id);
        Ok(item.into())
    }

    /// Delete an item permanently
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Item deleted: id={}", id);
        Ok(())
    }
}
