//! Shared building blocks for the diagnostics service.
//!
//! Contains configuration loading, the error taxonomy, the JSON response
//! envelope, data models, and HTTP middleware.

pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod response;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
pub use response::ApiResponse;
