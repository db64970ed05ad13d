pub mod fallback;
pub mod types;
