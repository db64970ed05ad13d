//! Core layer - configuration, persistence setup, errors and HTTP plumbing
//! shared by both binaries.

pub mod config;
pub mod database;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod openapi;
pub mod server;
pub mod telemetry;
