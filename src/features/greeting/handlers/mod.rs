pub mod greeting_handler;

pub use greeting_handler::*;
