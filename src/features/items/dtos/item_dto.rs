use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::items::models::Item;

pub const NAME_MAX_LENGTH: u64 = 120;
pub const DESCRIPTION_MAX_LENGTH: u64 = 255;

/// Absent description on create is stored as an empty string; explicit null stays null.
fn default_description() -> Option<String> {
    Some(String::new())
}

/// Create request
///
/// `name` is optional at the parsing level so a missing name reports
/// "name is required" instead of a deserialization error.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateItemDto {
    #[validate(length(max = NAME_MAX_LENGTH, message = "name must be at most 120 characters"))]
    pub name: Option<String>,

    #[serde(default = "default_description")]
    #[validate(length(max = DESCRIPTION_MAX_LENGTH, message = "description must be at most 255 characters"))]
    pub description: Option<String>,
}

/// Update request (PUT and PATCH)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateItemDto {
    /// Ignored when absent, null or empty
    #[validate(length(max = NAME_MAX_LENGTH, message = "name must be at most 120 characters"))]
    pub name: Option<String>,

    /// Ignored when absent or null; an empty string clears the text
    #[validate(length(max = DESCRIPTION_MAX_LENGTH, message = "description must be at most 255 characters"))]
    pub description: Option<String>,
}

/// Response DTO for item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemResponseDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Item> for ItemResponseDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}
