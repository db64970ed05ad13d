pub mod greeting_dto;

pub use greeting_dto::{GreetingResponseDto, HealthResponseDto};
