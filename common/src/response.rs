//! API response envelope.
//!
//! Every wrapped endpoint answers with the same three-field envelope:
//! `success`, `message`, and `data` (null when there is nothing to carry).

use serde::Serialize;
use utoipa::ToSchema;

/// Standard API response envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was handled successfully.
    pub success: bool,

    /// Human-readable outcome description.
    pub message: String,

    /// Response payload; serialized as `null` when absent.
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response carrying data.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<EmptyData> {
    /// Creates a successful response with a message only.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Creates a failed response with a message only.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Placeholder payload for responses that carry no data.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmptyData;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_data_serializes_as_null_when_absent() {
        let response = ApiResponse::message("Response after timeout");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Response after timeout");
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_ok_carries_data() {
        let mut map = BTreeMap::new();
        map.insert("PORT".to_string(), "3000".to_string());
        let response = ApiResponse::ok("Environment variables fetched successfully", map);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"]["PORT"], "3000");
    }
}
