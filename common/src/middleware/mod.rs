//! HTTP middleware.

pub mod request_log;

// Re-export commonly used types
pub use request_log::{request_log_middleware, RequestId, REQUEST_ID_HEADER};
