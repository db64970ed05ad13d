use serde::{Deserialize, Serialize};

/// Greeting payload for `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingResponseDto {
    pub message: String,
}

/// Liveness payload for `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponseDto {
    pub status: String,
}

impl HealthResponseDto {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
