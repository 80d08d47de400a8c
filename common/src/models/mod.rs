//! Shared data models.

pub mod credentials;

// Re-export commonly used types
pub use credentials::{CredentialSource, MysqlCredentials, MysqlOverrideRequest, REQUIRED_VARS};
