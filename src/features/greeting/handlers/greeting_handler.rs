use axum::{extract::State, Json};
use std::sync::Arc;

use crate::features::greeting::dtos::{GreetingResponseDto, HealthResponseDto};

/// State shared by the greeting handlers
#[derive(Debug, Clone)]
pub struct GreetingState {
    pub message: String,
}

impl GreetingState {
    pub fn new(name: &str) -> Self {
        Self {
            message: format!("Hello, {}!", name),
        }
    }
}

/// Static greeting
pub async fn greet(State(state): State<Arc<GreetingState>>) -> Json<GreetingResponseDto> {
    Json(GreetingResponseDto {
        message: state.message.clone(),
    })
}

/// Liveness check
pub async fn health() -> Json<HealthResponseDto> {
    Json(HealthResponseDto::ok())
}
